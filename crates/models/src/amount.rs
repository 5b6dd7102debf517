//! Numeric policy shared by every slice: amounts are plain `f64`, and anything
//! that is not a finite number counts as zero.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer};

use crate::month::Month;

/// Month-keyed amounts (savings, income). Missing months count as zero.
pub type MonthlyAmounts = BTreeMap<Month, f64>;

/// Maps `NaN` and infinities to `0.0`, leaves every other value untouched.
pub fn sanitize_amount(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}

/// Amount stored for `month`, zero when the month was never entered.
pub fn amount_for(amounts: &MonthlyAmounts, month: Month) -> f64 {
    amounts
        .get(&month)
        .copied()
        .map(sanitize_amount)
        .unwrap_or(0.0)
}

/// Reads a number that may be `null` in the JSON (browsers serialise `NaN` that way).
pub fn lenient_amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<f64> = Option::deserialize(deserializer)?;
    Ok(value.map(sanitize_amount).unwrap_or(0.0))
}

pub fn lenient_monthly_amounts<'de, D>(deserializer: D) -> Result<MonthlyAmounts, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: BTreeMap<Month, Option<f64>> = BTreeMap::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .map(|(month, value)| (month, value.map(sanitize_amount).unwrap_or(0.0)))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_amount() {
        assert_eq!(sanitize_amount(12.5), 12.5);
        assert_eq!(sanitize_amount(-3.0), -3.0);
        assert_eq!(sanitize_amount(f64::NAN), 0.0);
        assert_eq!(sanitize_amount(f64::INFINITY), 0.0);
    }

    #[test]
    fn test_amount_for_missing_month_is_zero() {
        let mut amounts = MonthlyAmounts::new();
        amounts.insert(Month::March, 250.0);
        amounts.insert(Month::April, f64::NAN);

        assert_eq!(amount_for(&amounts, Month::March), 250.0);
        assert_eq!(amount_for(&amounts, Month::January), 0.0);
        assert_eq!(amount_for(&amounts, Month::April), 0.0);
    }
}
