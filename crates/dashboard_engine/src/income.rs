use models::{amount_for, sanitize_amount, IncomeData, Month, MonthlyAmounts, Person, Settings};
use serde::Serialize;

/// Meal vouchers earned over the year by both persons.
pub fn calculate_meal_vouchers(settings: &Settings) -> f64 {
    let working_days =
        sanitize_amount(settings.working_days_per_year) - sanitize_amount(settings.holidays);
    working_days
        * (sanitize_amount(settings.person1_meal_voucher)
            + sanitize_amount(settings.person2_meal_voucher))
}

/// Yearly rent plus utilities income.
pub fn calculate_extra_income(settings: &Settings) -> f64 {
    sanitize_amount(settings.rent_income) * 12.0 + sanitize_amount(settings.utilities_income) * 12.0
}

fn yearly_total(income: &MonthlyAmounts) -> f64 {
    Month::ALL.iter().map(|&month| amount_for(income, month)).sum()
}

pub fn calculate_total_income(
    person1: &MonthlyAmounts,
    person2: &MonthlyAmounts,
    settings: &Settings,
) -> f64 {
    yearly_total(person1)
        + yearly_total(person2)
        + calculate_extra_income(settings)
        + calculate_meal_vouchers(settings)
}

pub fn calculate_average_monthly(total: f64) -> f64 {
    sanitize_amount(total) / 12.0
}

/// Income shown for a month in the grid: the entered value, or the person's
/// default monthly income when nothing was entered yet.
pub fn income_for_month(income: &IncomeData, settings: &Settings, person: Person, month: Month) -> f64 {
    income
        .get(person)
        .get(&month)
        .copied()
        .map(sanitize_amount)
        .unwrap_or_else(|| sanitize_amount(settings.default_income(person)))
}

/// Figures of the income page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IncomeSummary {
    pub total: f64,
    pub average_monthly: f64,
    pub meal_vouchers: f64,
    pub extra_income: f64,
}

pub fn income_summary(income: &IncomeData, settings: &Settings) -> IncomeSummary {
    let total = calculate_total_income(&income.person1, &income.person2, settings);
    IncomeSummary {
        total,
        average_monthly: calculate_average_monthly(total),
        meal_vouchers: calculate_meal_vouchers(settings),
        extra_income: calculate_extra_income(settings),
    }
}
