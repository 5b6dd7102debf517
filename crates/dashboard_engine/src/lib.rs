//! # Dashboard Engine
//!
//! Pure derivations behind every figure the dashboard shows: year-to-date and
//! yearly savings, loan amortization, net real-estate proceeds, household
//! income, and the current and projected wealth built from them.
//!
//! No function reads the clock. The current month is always passed in, so the
//! current-balance and year-end figures agree on which month "today" is.

pub mod format;
pub mod income;
pub mod loan;
pub mod real_estate;
pub mod savings;
pub mod wealth;

pub use format::{format_currency, format_european, format_percent, parse_formatted_number, round2};
pub use income::{
    calculate_average_monthly, calculate_extra_income, calculate_meal_vouchers,
    calculate_total_income, income_for_month, income_summary, IncomeSummary,
};
pub use loan::{
    calculate_total_repaid, get_current_month_balance, get_year_end_balance, loan_summary,
    LoanSummary,
};
pub use real_estate::{calculate_broker_fees, calculate_net_value, BROKER_FEE_TAX_MULTIPLIER};
pub use savings::{
    calculate_remaining, calculate_savings_progress, calculate_savings_ytd,
    calculate_total_savings, savings_summary, SavingsSummary,
};
pub use wealth::{
    calculate_current_wealth, calculate_projected_wealth, calculate_wealth_summary, summarize,
    DashboardSummary, WealthSummary,
};
