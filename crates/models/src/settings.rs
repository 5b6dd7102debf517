use serde::{Deserialize, Serialize};

use crate::amount::lenient_amount;
use crate::month::Person;

pub const DEFAULT_WORKING_DAYS_PER_YEAR: f64 = 260.0;
pub const DEFAULT_HOLIDAYS: f64 = 20.0;

/// Household settings entered on the settings page.
///
/// Missing fields in an imported file take their default value and numeric
/// `null`s read as zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    #[serde(deserialize_with = "lenient_amount")]
    pub total_wealth_goal: f64,
    #[serde(deserialize_with = "lenient_amount")]
    pub savings_goal_year: f64,
    #[serde(deserialize_with = "lenient_amount")]
    pub current_savings_amount: f64,
    #[serde(deserialize_with = "lenient_amount")]
    pub total_loan_amount: f64,
    /// Outstanding loan balance entered by hand; overrides the amortization
    /// schedule when positive.
    #[serde(deserialize_with = "lenient_amount")]
    pub current_open_capital: f64,
    #[serde(deserialize_with = "lenient_amount")]
    pub expected_dividends: f64,
    #[serde(deserialize_with = "lenient_amount")]
    pub expected_debt_collection: f64,
    #[serde(deserialize_with = "lenient_amount")]
    pub working_days_per_year: f64,
    #[serde(deserialize_with = "lenient_amount")]
    pub holidays: f64,
    pub person1_name: String,
    pub person2_name: String,
    #[serde(deserialize_with = "lenient_amount")]
    pub person1_meal_voucher: f64,
    #[serde(deserialize_with = "lenient_amount")]
    pub person2_meal_voucher: f64,
    #[serde(deserialize_with = "lenient_amount")]
    pub person1_default_income: f64,
    #[serde(deserialize_with = "lenient_amount")]
    pub person2_default_income: f64,
    #[serde(deserialize_with = "lenient_amount")]
    pub rent_income: f64,
    #[serde(deserialize_with = "lenient_amount")]
    pub utilities_income: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            total_wealth_goal: 0.0,
            savings_goal_year: 0.0,
            current_savings_amount: 0.0,
            total_loan_amount: 0.0,
            current_open_capital: 0.0,
            expected_dividends: 0.0,
            expected_debt_collection: 0.0,
            working_days_per_year: DEFAULT_WORKING_DAYS_PER_YEAR,
            holidays: DEFAULT_HOLIDAYS,
            person1_name: "Person 1".to_string(),
            person2_name: "Person 2".to_string(),
            person1_meal_voucher: 0.0,
            person2_meal_voucher: 0.0,
            person1_default_income: 0.0,
            person2_default_income: 0.0,
            rent_income: 0.0,
            utilities_income: 0.0,
        }
    }
}

impl Settings {
    pub fn person_name(&self, person: Person) -> &str {
        match person {
            Person::Person1 => &self.person1_name,
            Person::Person2 => &self.person2_name,
        }
    }

    pub fn default_income(&self, person: Person) -> f64 {
        match person {
            Person::Person1 => self.person1_default_income,
            Person::Person2 => self.person2_default_income,
        }
    }
}

/// Fields of [`Settings`] that an edit may change. `None` keeps the old value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SettingsPatch {
    pub total_wealth_goal: Option<f64>,
    pub savings_goal_year: Option<f64>,
    pub current_savings_amount: Option<f64>,
    pub total_loan_amount: Option<f64>,
    pub current_open_capital: Option<f64>,
    pub expected_dividends: Option<f64>,
    pub expected_debt_collection: Option<f64>,
    pub working_days_per_year: Option<f64>,
    pub holidays: Option<f64>,
    pub person1_name: Option<String>,
    pub person2_name: Option<String>,
    pub person1_meal_voucher: Option<f64>,
    pub person2_meal_voucher: Option<f64>,
    pub person1_default_income: Option<f64>,
    pub person2_default_income: Option<f64>,
    pub rent_income: Option<f64>,
    pub utilities_income: Option<f64>,
}

impl SettingsPatch {
    pub fn is_empty(&self) -> bool {
        *self == SettingsPatch::default()
    }

    pub fn default_income(person: Person, amount: f64) -> Self {
        match person {
            Person::Person1 => Self {
                person1_default_income: Some(amount),
                ..Self::default()
            },
            Person::Person2 => Self {
                person2_default_income: Some(amount),
                ..Self::default()
            },
        }
    }

    /// Returns `settings` with every `Some` field of the patch written over it.
    pub fn apply(&self, settings: &Settings) -> Settings {
        let pick = |new: Option<f64>, old: f64| new.unwrap_or(old);
        let pick_name = |new: &Option<String>, old: &String| new.clone().unwrap_or_else(|| old.clone());

        Settings {
            total_wealth_goal: pick(self.total_wealth_goal, settings.total_wealth_goal),
            savings_goal_year: pick(self.savings_goal_year, settings.savings_goal_year),
            current_savings_amount: pick(self.current_savings_amount, settings.current_savings_amount),
            total_loan_amount: pick(self.total_loan_amount, settings.total_loan_amount),
            current_open_capital: pick(self.current_open_capital, settings.current_open_capital),
            expected_dividends: pick(self.expected_dividends, settings.expected_dividends),
            expected_debt_collection: pick(
                self.expected_debt_collection,
                settings.expected_debt_collection,
            ),
            working_days_per_year: pick(self.working_days_per_year, settings.working_days_per_year),
            holidays: pick(self.holidays, settings.holidays),
            person1_name: pick_name(&self.person1_name, &settings.person1_name),
            person2_name: pick_name(&self.person2_name, &settings.person2_name),
            person1_meal_voucher: pick(self.person1_meal_voucher, settings.person1_meal_voucher),
            person2_meal_voucher: pick(self.person2_meal_voucher, settings.person2_meal_voucher),
            person1_default_income: pick(
                self.person1_default_income,
                settings.person1_default_income,
            ),
            person2_default_income: pick(
                self.person2_default_income,
                settings.person2_default_income,
            ),
            rent_income: pick(self.rent_income, settings.rent_income),
            utilities_income: pick(self.utilities_income, settings.utilities_income),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.working_days_per_year, 260.0);
        assert_eq!(settings.holidays, 20.0);
        assert_eq!(settings.person_name(Person::Person2), "Person 2");
    }

    #[test]
    fn test_patch_only_touches_given_fields() {
        let before = Settings {
            rent_income: 500.0,
            ..Settings::default()
        };
        let patch = SettingsPatch {
            current_savings_amount: Some(1000.0),
            person1_name: Some("Ada".to_string()),
            ..SettingsPatch::default()
        };

        let after = patch.apply(&before);
        assert_eq!(after.current_savings_amount, 1000.0);
        assert_eq!(after.person1_name, "Ada");
        assert_eq!(after.rent_income, 500.0);
        assert_eq!(after.person2_name, before.person2_name);
    }

    #[test]
    fn test_empty_patch_is_identity() {
        let settings = Settings::default();
        assert!(SettingsPatch::default().is_empty());
        assert_eq!(SettingsPatch::default().apply(&settings), settings);
    }

    #[test]
    fn test_deserialize_partial_and_null_fields() {
        let json = r#"{"currentSavingsAmount": 1500.5, "holidays": null, "person1Name": "Ada"}"#;
        let settings: Settings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.current_savings_amount, 1500.5);
        assert_eq!(settings.holidays, 0.0);
        assert_eq!(settings.person1_name, "Ada");
        assert_eq!(settings.working_days_per_year, DEFAULT_WORKING_DAYS_PER_YEAR);
    }
}
