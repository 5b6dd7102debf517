use models::{sanitize_amount, AppState, LoanData, Month, MonthlyAmounts, RealEstate, Settings};
use serde::Serialize;

use crate::format::round2;
use crate::income::{income_summary, IncomeSummary};
use crate::loan::{get_current_month_balance, get_year_end_balance, loan_summary, LoanSummary};
use crate::real_estate::calculate_net_value;
use crate::savings::{
    calculate_savings_progress, calculate_savings_ytd, calculate_total_savings, savings_summary,
    SavingsSummary,
};

/// Wealth today: starting savings, what was saved so far this year, and the
/// net proceeds of selling the property at the current loan balance.
pub fn calculate_current_wealth(
    settings: &Settings,
    savings: &MonthlyAmounts,
    real_estate: Option<&RealEstate>,
    loan: &LoanData,
    current_month: Month,
) -> f64 {
    let savings_ytd = calculate_savings_ytd(savings, current_month);
    let loan_balance = get_current_month_balance(loan, settings, current_month);
    sanitize_amount(settings.current_savings_amount)
        + savings_ytd
        + calculate_net_value(real_estate, loan_balance)
}

/// Wealth expected on December 31st.
pub fn calculate_projected_wealth(
    settings: &Settings,
    savings: &MonthlyAmounts,
    real_estate: Option<&RealEstate>,
    loan: &LoanData,
    current_month: Month,
) -> f64 {
    let loan_balance = get_year_end_balance(loan, settings, current_month);
    sanitize_amount(settings.current_savings_amount)
        + calculate_total_savings(savings)
        + calculate_net_value(real_estate, loan_balance)
        + sanitize_amount(settings.expected_dividends)
        + sanitize_amount(settings.expected_debt_collection)
}

/// Everything shown on the home page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WealthSummary {
    pub current_wealth: f64,
    pub projected_wealth: f64,
    pub wealth_goal: f64,
    /// Share of the wealth goal already reached by the current wealth, in percent.
    pub goal_progress: f64,
    pub initial_savings: f64,
    pub savings_ytd: f64,
    pub total_savings: f64,
    pub current_loan_balance: f64,
    pub year_end_loan_balance: f64,
    pub current_net_real_estate: f64,
    pub projected_net_real_estate: f64,
    pub projected_business_income: f64,
}

pub fn calculate_wealth_summary(state: &AppState) -> WealthSummary {
    let settings = &state.settings;
    let current_month = state.ui.current_month;
    let real_estate = state.real_estate.as_ref();

    let current_wealth =
        calculate_current_wealth(settings, &state.savings, real_estate, &state.loan, current_month);
    let current_loan_balance = get_current_month_balance(&state.loan, settings, current_month);
    let year_end_loan_balance = get_year_end_balance(&state.loan, settings, current_month);
    let wealth_goal = sanitize_amount(settings.total_wealth_goal);

    WealthSummary {
        current_wealth,
        projected_wealth: calculate_projected_wealth(
            settings,
            &state.savings,
            real_estate,
            &state.loan,
            current_month,
        ),
        wealth_goal,
        goal_progress: calculate_savings_progress(current_wealth, wealth_goal),
        initial_savings: sanitize_amount(settings.current_savings_amount),
        savings_ytd: calculate_savings_ytd(&state.savings, current_month),
        total_savings: calculate_total_savings(&state.savings),
        current_loan_balance,
        year_end_loan_balance,
        current_net_real_estate: calculate_net_value(real_estate, current_loan_balance),
        projected_net_real_estate: calculate_net_value(real_estate, year_end_loan_balance),
        projected_business_income: sanitize_amount(settings.expected_dividends)
            + sanitize_amount(settings.expected_debt_collection),
    }
}

/// All pages at once, used by the terminal front end.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSummary {
    pub current_month: Month,
    pub wealth: WealthSummary,
    pub savings: SavingsSummary,
    pub loan: LoanSummary,
    pub income: IncomeSummary,
}

pub fn summarize(state: &AppState) -> DashboardSummary {
    DashboardSummary {
        current_month: state.ui.current_month,
        wealth: calculate_wealth_summary(state),
        savings: savings_summary(&state.settings, &state.savings),
        loan: loan_summary(&state.loan, &state.settings, state.ui.current_month),
        income: income_summary(&state.income, &state.settings),
    }
}

impl DashboardSummary {
    /// Rounds every amount to cents for display.
    pub fn rounded(mut self) -> Self {
        let w = &mut self.wealth;
        for v in [
            &mut w.current_wealth,
            &mut w.projected_wealth,
            &mut w.wealth_goal,
            &mut w.goal_progress,
            &mut w.initial_savings,
            &mut w.savings_ytd,
            &mut w.total_savings,
            &mut w.current_loan_balance,
            &mut w.year_end_loan_balance,
            &mut w.current_net_real_estate,
            &mut w.projected_net_real_estate,
            &mut w.projected_business_income,
        ] {
            *v = round2(*v);
        }
        let s = &mut self.savings;
        for v in [&mut s.goal, &mut s.saved, &mut s.remaining, &mut s.progress] {
            *v = round2(*v);
        }
        let l = &mut self.loan;
        for v in [
            &mut l.total_loaned,
            &mut l.current_balance,
            &mut l.year_end_balance,
            &mut l.total_repaid,
        ] {
            *v = round2(*v);
        }
        let i = &mut self.income;
        for v in [
            &mut i.total,
            &mut i.average_monthly,
            &mut i.meal_vouchers,
            &mut i.extra_income,
        ] {
            *v = round2(*v);
        }
        self
    }
}
