use models::{amount_for, sanitize_amount, MonthlyAmounts, Month, Settings};
use serde::Serialize;

/// Saved from January through `current_month`, inclusive.
pub fn calculate_savings_ytd(savings: &MonthlyAmounts, current_month: Month) -> f64 {
    current_month
        .year_to_date()
        .iter()
        .map(|&month| amount_for(savings, month))
        .sum()
}

/// Saved over the whole calendar year.
pub fn calculate_total_savings(savings: &MonthlyAmounts) -> f64 {
    Month::ALL.iter().map(|&month| amount_for(savings, month)).sum()
}

/// Percentage of `goal` reached; 0 when there is no goal.
pub fn calculate_savings_progress(saved: f64, goal: f64) -> f64 {
    let (saved, goal) = (sanitize_amount(saved), sanitize_amount(goal));
    if goal > 0.0 {
        saved / goal * 100.0
    } else {
        0.0
    }
}

/// Amount still missing to reach `goal`, never negative.
pub fn calculate_remaining(saved: f64, goal: f64) -> f64 {
    (sanitize_amount(goal) - sanitize_amount(saved)).max(0.0)
}

/// Figures of the savings page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SavingsSummary {
    pub goal: f64,
    pub saved: f64,
    pub remaining: f64,
    pub progress: f64,
}

pub fn savings_summary(settings: &Settings, savings: &MonthlyAmounts) -> SavingsSummary {
    let goal = sanitize_amount(settings.savings_goal_year);
    let saved = calculate_total_savings(savings);
    SavingsSummary {
        goal,
        saved,
        remaining: calculate_remaining(saved, goal),
        progress: calculate_savings_progress(saved, goal),
    }
}
