//! Loan balance amortization.
//!
//! A positive `current_open_capital` in the settings is an authoritative
//! balance entered by hand. It already reflects the installment of the current
//! month, so the year-end projection only subtracts the months that follow.

use models::{sanitize_amount, LoanData, Month, Settings};
use serde::Serialize;

fn open_capital(settings: &Settings) -> Option<f64> {
    let capital = sanitize_amount(settings.current_open_capital);
    (capital > 0.0).then_some(capital)
}

fn principal_over(loan: &LoanData, months: &[Month]) -> f64 {
    months.iter().map(|&month| loan.principal(month)).sum()
}

/// Outstanding balance after the installment of `current_month`.
pub fn get_current_month_balance(loan: &LoanData, settings: &Settings, current_month: Month) -> f64 {
    if let Some(capital) = open_capital(settings) {
        return capital;
    }
    let balance = sanitize_amount(loan.total_loaned) - principal_over(loan, current_month.year_to_date());
    balance.max(0.0)
}

/// Outstanding balance after the December installment.
pub fn get_year_end_balance(loan: &LoanData, settings: &Settings, current_month: Month) -> f64 {
    let balance = match open_capital(settings) {
        Some(capital) => capital - principal_over(loan, current_month.remaining_after()),
        None => sanitize_amount(loan.total_loaned) - principal_over(loan, &Month::ALL),
    };
    balance.max(0.0)
}

pub fn calculate_total_repaid(total_loan: f64, current_balance: f64) -> f64 {
    (sanitize_amount(total_loan) - sanitize_amount(current_balance)).max(0.0)
}

/// Figures of the loan page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoanSummary {
    pub total_loaned: f64,
    pub current_balance: f64,
    pub year_end_balance: f64,
    pub total_repaid: f64,
}

pub fn loan_summary(loan: &LoanData, settings: &Settings, current_month: Month) -> LoanSummary {
    let total_loaned = sanitize_amount(loan.total_loaned);
    let current_balance = get_current_month_balance(loan, settings, current_month);
    LoanSummary {
        total_loaned,
        current_balance,
        year_end_balance: get_year_end_balance(loan, settings, current_month),
        total_repaid: calculate_total_repaid(total_loaned, current_balance),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::LoanPayment;

    fn flat_schedule(total_loaned: f64, principal: f64) -> LoanData {
        LoanData {
            total_loaned,
            monthly_payments: Month::ALL
                .iter()
                .map(|&m| {
                    (
                        m,
                        LoanPayment {
                            interest: 250.0,
                            principal,
                        },
                    )
                })
                .collect(),
        }
    }

    fn with_open_capital(capital: f64) -> Settings {
        Settings {
            current_open_capital: capital,
            ..Settings::default()
        }
    }

    #[test]
    fn test_current_balance_from_schedule() {
        let loan = flat_schedule(200_000.0, 1000.0);
        let balance = get_current_month_balance(&loan, &Settings::default(), Month::June);
        assert_eq!(balance, 194_000.0);
    }

    #[test]
    fn test_current_balance_open_capital_is_verbatim() {
        let loan = flat_schedule(200_000.0, 1000.0);
        let balance = get_current_month_balance(&loan, &with_open_capital(150_000.0), Month::June);
        assert_eq!(balance, 150_000.0);
    }

    #[test]
    fn test_year_end_balance_from_schedule() {
        let loan = flat_schedule(200_000.0, 1000.0);
        let balance = get_year_end_balance(&loan, &Settings::default(), Month::March);
        assert_eq!(balance, 188_000.0);
    }

    #[test]
    fn test_year_end_balance_with_open_capital_starts_after_current_month() {
        let loan = flat_schedule(200_000.0, 1000.0);
        let settings = with_open_capital(50_000.0);

        // October's installment is already part of the open capital.
        assert_eq!(get_year_end_balance(&loan, &settings, Month::October), 48_000.0);
        assert_eq!(get_year_end_balance(&loan, &settings, Month::December), 50_000.0);
        assert_eq!(get_year_end_balance(&loan, &settings, Month::January), 39_000.0);
    }

    #[test]
    fn test_balances_clamped_at_zero() {
        let loan = flat_schedule(5_000.0, 1000.0);
        assert_eq!(get_current_month_balance(&loan, &Settings::default(), Month::December), 0.0);
        assert_eq!(get_year_end_balance(&loan, &Settings::default(), Month::January), 0.0);
        assert_eq!(get_year_end_balance(&loan, &with_open_capital(500.0), Month::January), 0.0);
    }

    #[test]
    fn test_missing_months_count_as_zero() {
        let mut loan = LoanData {
            total_loaned: 10_000.0,
            ..LoanData::default()
        };
        loan.monthly_payments.insert(
            Month::February,
            LoanPayment {
                interest: 0.0,
                principal: 400.0,
            },
        );
        assert_eq!(get_current_month_balance(&loan, &Settings::default(), Month::January), 10_000.0);
        assert_eq!(get_current_month_balance(&loan, &Settings::default(), Month::March), 9_600.0);
    }

    #[test]
    fn test_total_repaid() {
        assert_eq!(calculate_total_repaid(200_000.0, 194_000.0), 6_000.0);
        assert_eq!(calculate_total_repaid(100.0, 150.0), 0.0);
    }

    #[test]
    fn test_summary() {
        let loan = flat_schedule(120_000.0, 500.0);
        let summary = loan_summary(&loan, &Settings::default(), Month::February);
        assert_eq!(summary.total_loaned, 120_000.0);
        assert_eq!(summary.current_balance, 119_000.0);
        assert_eq!(summary.year_end_balance, 114_000.0);
        assert_eq!(summary.total_repaid, 1_000.0);
    }
}
