//! Plain-text pages, one per dashboard tab.

use std::fmt::Write;

use dashboard_engine::{
    calculate_broker_fees, calculate_net_value, calculate_wealth_summary, format_currency,
    format_percent, get_current_month_balance, income_for_month, income_summary, loan_summary,
    savings_summary,
};
use models::{amount_for, AppState, Month, Person, Tab};

const LABEL_WIDTH: usize = 28;

fn line(out: &mut String, label: &str, value: impl std::fmt::Display) {
    let _ = writeln!(out, "{label:<LABEL_WIDTH$}{value}");
}

fn title(out: &mut String, text: &str, state: &AppState) {
    let _ = writeln!(out, "{text} ({})", state.ui.current_month);
    let _ = writeln!(out, "{}", "-".repeat(LABEL_WIDTH + 16));
}

pub fn page(state: &AppState, tab: Tab) -> String {
    match tab {
        Tab::Home => home(state),
        Tab::Savings => savings(state),
        Tab::RealEstate => real_estate(state),
        Tab::Loan => loan(state),
        Tab::Income => income(state),
        Tab::Settings => settings(state),
    }
}

pub fn home(state: &AppState) -> String {
    let wealth = calculate_wealth_summary(state);
    let mut out = String::new();
    title(&mut out, "Home", state);
    line(&mut out, "Current wealth", format_currency(wealth.current_wealth));
    line(&mut out, "Projected wealth (year end)", format_currency(wealth.projected_wealth));
    line(
        &mut out,
        "Wealth goal",
        format!(
            "{} ({})",
            format_currency(wealth.wealth_goal),
            format_percent(wealth.goal_progress)
        ),
    );
    line(&mut out, "Initial savings", format_currency(wealth.initial_savings));
    line(&mut out, "Saved this year to date", format_currency(wealth.savings_ytd));
    line(&mut out, "Saved this year (planned)", format_currency(wealth.total_savings));
    line(&mut out, "Loan balance", format_currency(wealth.current_loan_balance));
    line(&mut out, "Loan balance at year end", format_currency(wealth.year_end_loan_balance));
    line(&mut out, "Net real estate", format_currency(wealth.current_net_real_estate));
    line(
        &mut out,
        "Net real estate at year end",
        format_currency(wealth.projected_net_real_estate),
    );
    line(
        &mut out,
        "Expected business income",
        format_currency(wealth.projected_business_income),
    );
    out
}

pub fn savings(state: &AppState) -> String {
    let summary = savings_summary(&state.settings, &state.savings);
    let mut out = String::new();
    title(&mut out, "Savings", state);
    line(&mut out, "Yearly goal", format_currency(summary.goal));
    line(&mut out, "Saved", format_currency(summary.saved));
    line(&mut out, "Remaining", format_currency(summary.remaining));
    line(&mut out, "Progress", format_percent(summary.progress));
    out.push('\n');
    for month in Month::ALL {
        let marker = if month == state.ui.current_month { " <" } else { "" };
        let _ = writeln!(
            out,
            "{:<12}{:>16}{marker}",
            month.name(),
            format_currency(amount_for(&state.savings, month))
        );
    }
    out
}

pub fn income(state: &AppState) -> String {
    let settings = &state.settings;
    let summary = income_summary(&state.income, settings);
    let mut out = String::new();
    title(&mut out, "Income", state);
    let _ = writeln!(
        out,
        "{:<12}{:>16}{:>16}",
        "",
        settings.person_name(Person::Person1),
        settings.person_name(Person::Person2)
    );
    for month in Month::ALL {
        let _ = writeln!(
            out,
            "{:<12}{:>16}{:>16}",
            month.name(),
            format_currency(income_for_month(&state.income, settings, Person::Person1, month)),
            format_currency(income_for_month(&state.income, settings, Person::Person2, month)),
        );
    }
    out.push('\n');
    line(&mut out, "Meal vouchers", format_currency(summary.meal_vouchers));
    line(&mut out, "Rent and utilities", format_currency(summary.extra_income));
    line(&mut out, "Total income", format_currency(summary.total));
    line(&mut out, "Monthly average", format_currency(summary.average_monthly));
    out
}

pub fn loan(state: &AppState) -> String {
    let summary = loan_summary(&state.loan, &state.settings, state.ui.current_month);
    let mut out = String::new();
    title(&mut out, "Loan", state);
    line(&mut out, "Total loaned", format_currency(summary.total_loaned));
    line(&mut out, "Current balance", format_currency(summary.current_balance));
    line(&mut out, "Balance at year end", format_currency(summary.year_end_balance));
    line(&mut out, "Repaid", format_currency(summary.total_repaid));
    out.push('\n');
    let _ = writeln!(out, "{:<12}{:>16}{:>16}", "", "Interest", "Principal");
    for month in Month::ALL {
        let payment = state.loan.payment(month);
        let _ = writeln!(
            out,
            "{:<12}{:>16}{:>16}",
            month.name(),
            format_currency(payment.interest),
            format_currency(payment.principal)
        );
    }
    out
}

pub fn real_estate(state: &AppState) -> String {
    let mut out = String::new();
    title(&mut out, "Real estate", state);
    let Some(property) = state.real_estate.as_ref() else {
        out.push_str("No property registered.\n");
        return out;
    };
    let balance = get_current_month_balance(&state.loan, &state.settings, state.ui.current_month);
    line(&mut out, "Name", &property.name);
    line(&mut out, "Selling price", format_currency(property.selling_price));
    line(
        &mut out,
        "Broker fees (incl. VAT)",
        format!(
            "{} ({})",
            format_currency(calculate_broker_fees(
                property.selling_price,
                property.broker_fee_percentage
            )),
            format_percent(property.broker_fee_percentage)
        ),
    );
    line(&mut out, "Early repayment fine", format_currency(property.early_repayment_fine));
    line(&mut out, "Loan balance", format_currency(balance));
    line(
        &mut out,
        "Net value",
        format_currency(calculate_net_value(Some(property), balance)),
    );
    out
}

pub fn settings(state: &AppState) -> String {
    let s = &state.settings;
    let mut out = String::new();
    title(&mut out, "Settings", state);
    line(&mut out, "Total wealth goal", format_currency(s.total_wealth_goal));
    line(&mut out, "Savings goal this year", format_currency(s.savings_goal_year));
    line(&mut out, "Current savings", format_currency(s.current_savings_amount));
    line(&mut out, "Total loan amount", format_currency(s.total_loan_amount));
    line(&mut out, "Current open capital", format_currency(s.current_open_capital));
    line(&mut out, "Expected dividends", format_currency(s.expected_dividends));
    line(&mut out, "Expected debt collection", format_currency(s.expected_debt_collection));
    line(&mut out, "Working days per year", s.working_days_per_year);
    line(&mut out, "Holidays", s.holidays);
    for person in [Person::Person1, Person::Person2] {
        let name = s.person_name(person);
        let voucher = match person {
            Person::Person1 => s.person1_meal_voucher,
            Person::Person2 => s.person2_meal_voucher,
        };
        line(&mut out, &format!("{name}: meal voucher"), format_currency(voucher));
        line(
            &mut out,
            &format!("{name}: default income"),
            format_currency(s.default_income(person)),
        );
    }
    line(&mut out, "Rent income", format_currency(s.rent_income));
    line(&mut out, "Utilities income", format_currency(s.utilities_income));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::{LoanPayment, RealEstate};

    #[test]
    fn test_home_shows_current_wealth() {
        let mut state = AppState::new(Month::March);
        state.settings.current_savings_amount = 1000.0;
        state.savings.insert(Month::January, 200.0);
        state.savings.insert(Month::March, 300.0);
        state.savings.insert(Month::April, 5000.0);

        let page = home(&state);
        assert!(page.starts_with("Home (March)"));
        assert!(page.contains("€1,500.00"));
        assert!(page.contains("€6,500.00"));
    }

    #[test]
    fn test_real_estate_page_without_property() {
        let state = AppState::new(Month::May);
        assert!(real_estate(&state).contains("No property registered."));
    }

    #[test]
    fn test_real_estate_page_net_value() {
        let mut state = AppState::new(Month::June);
        state.settings.total_loan_amount = 10_000.0;
        state.loan.total_loaned = 10_000.0;
        state.real_estate = Some(RealEstate {
            name: "Flat".to_string(),
            selling_price: 150_000.0,
            broker_fee_percentage: 3.0,
            early_repayment_fine: 1_500.0,
        });

        let page = real_estate(&state);
        assert!(page.contains("€5,445.00"));
        assert!(page.contains("€133,055.00"));
    }

    #[test]
    fn test_loan_page_lists_payments() {
        let mut state = AppState::new(Month::February);
        state.loan.total_loaned = 1000.0;
        state.loan.monthly_payments.insert(
            Month::February,
            LoanPayment {
                interest: 12.5,
                principal: 100.0,
            },
        );
        let page = loan(&state);
        assert!(page.contains("€12.50"));
        assert!(page.contains("€900.00"));
    }

    #[test]
    fn test_income_page_uses_person_names() {
        let mut state = AppState::new(Month::January);
        state.settings.person1_name = "Ada".to_string();
        state.settings.person2_default_income = 2000.0;
        let page = income(&state);
        assert!(page.contains("Ada"));
        assert!(page.contains("Person 2"));
        assert!(page.contains("€2,000.00"));
    }

    #[test]
    fn test_every_tab_renders() {
        let state = AppState::new(Month::December);
        for tab in [
            Tab::Home,
            Tab::Savings,
            Tab::RealEstate,
            Tab::Loan,
            Tab::Income,
            Tab::Settings,
        ] {
            assert!(!page(&state, tab).is_empty());
        }
    }
}
