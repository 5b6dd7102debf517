use dashboard_engine::{
    calculate_net_value, calculate_remaining, calculate_savings_progress, calculate_savings_ytd,
    calculate_total_savings, get_current_month_balance, get_year_end_balance,
};
use models::{LoanData, LoanPayment, Month, MonthlyAmounts, Settings};
use proptest::prelude::*;

fn month() -> impl Strategy<Value = Month> {
    (0usize..12).prop_map(|i| Month::from_index(i).unwrap())
}

fn monthly_amounts() -> impl Strategy<Value = MonthlyAmounts> {
    prop::collection::btree_map(month(), 0.0f64..50_000.0, 0..12)
}

fn loan() -> impl Strategy<Value = LoanData> {
    (
        0.0f64..1_000_000.0,
        prop::collection::btree_map(
            month(),
            (0.0f64..5_000.0, 0.0f64..500_000.0)
                .prop_map(|(interest, principal)| LoanPayment { interest, principal }),
            0..12,
        ),
    )
        .prop_map(|(total_loaned, monthly_payments)| LoanData {
            total_loaned,
            monthly_payments,
        })
}

proptest! {
    #[test]
    fn ytd_never_exceeds_total(savings in monthly_amounts(), current in month()) {
        let ytd = calculate_savings_ytd(&savings, current);
        let total = calculate_total_savings(&savings);
        prop_assert!(ytd <= total + 1e-6);
    }

    #[test]
    fn ytd_in_december_equals_total(savings in monthly_amounts()) {
        let ytd = calculate_savings_ytd(&savings, Month::December);
        let total = calculate_total_savings(&savings);
        prop_assert!((ytd - total).abs() < 1e-6);
    }

    #[test]
    fn remaining_is_never_negative(saved in -1e7f64..1e7, goal in -1e7f64..1e7) {
        prop_assert!(calculate_remaining(saved, goal) >= 0.0);
    }

    #[test]
    fn progress_without_goal_is_zero(saved in -1e7f64..1e7) {
        prop_assert_eq!(calculate_savings_progress(saved, 0.0), 0.0);
    }

    #[test]
    fn net_value_without_property_is_zero(balance in -1e7f64..1e7) {
        prop_assert_eq!(calculate_net_value(None, balance), 0.0);
    }

    #[test]
    fn loan_balances_never_negative(
        loan in loan(),
        open_capital in prop_oneof![Just(0.0f64), 0.0f64..300_000.0],
        current in month(),
    ) {
        let settings = Settings {
            current_open_capital: open_capital,
            ..Settings::default()
        };
        prop_assert!(get_current_month_balance(&loan, &settings, current) >= 0.0);
        prop_assert!(get_year_end_balance(&loan, &settings, current) >= 0.0);
    }
}
