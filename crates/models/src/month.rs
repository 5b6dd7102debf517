use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

static CALENDAR: [Month; 12] = Month::ALL;

/// Calendar month. Ordering follows the calendar, so month-keyed `BTreeMap`s
/// iterate January first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl Month {
    pub const ALL: [Month; 12] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
        Month::July,
        Month::August,
        Month::September,
        Month::October,
        Month::November,
        Month::December,
    ];

    /// 0-based position in the calendar year.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Month> {
        Self::ALL.get(index).copied()
    }

    /// Months from January up to and including `self`.
    pub fn year_to_date(self) -> &'static [Month] {
        &CALENDAR[..=self.index()]
    }

    /// Months strictly after `self`, up to December.
    pub fn remaining_after(self) -> &'static [Month] {
        &CALENDAR[self.index() + 1..]
    }

    pub fn name(self) -> &'static str {
        match self {
            Month::January => "January",
            Month::February => "February",
            Month::March => "March",
            Month::April => "April",
            Month::May => "May",
            Month::June => "June",
            Month::July => "July",
            Month::August => "August",
            Month::September => "September",
            Month::October => "October",
            Month::November => "November",
            Month::December => "December",
        }
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown month: {0}")]
pub struct ParseMonthError(pub String);

impl FromStr for Month {
    type Err = ParseMonthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Month::ALL
            .iter()
            .copied()
            .find(|m| m.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParseMonthError(s.to_string()))
    }
}

/// One of the two household members tracked by the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Person {
    Person1,
    Person2,
}

impl Person {
    pub fn key(self) -> &'static str {
        match self {
            Person::Person1 => "person1",
            Person::Person2 => "person2",
        }
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown person: {0} (expected person1 or person2)")]
pub struct ParsePersonError(pub String);

impl FromStr for Person {
    type Err = ParsePersonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "person1" | "1" => Ok(Person::Person1),
            "person2" | "2" => Ok(Person::Person2),
            _ => Err(ParsePersonError(s.to_string())),
        }
    }
}

/// Dashboard page currently shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Tab {
    #[default]
    Home,
    Savings,
    RealEstate,
    Loan,
    Income,
    Settings,
}

impl Tab {
    pub const ALL: [Tab; 6] = [
        Tab::Home,
        Tab::Savings,
        Tab::RealEstate,
        Tab::Loan,
        Tab::Income,
        Tab::Settings,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Tab::Home => "home",
            Tab::Savings => "savings",
            Tab::RealEstate => "realEstate",
            Tab::Loan => "loan",
            Tab::Income => "income",
            Tab::Settings => "settings",
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown tab: {0}")]
pub struct ParseTabError(pub String);

impl FromStr for Tab {
    type Err = ParseTabError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().replace(['-', '_'], "");
        Tab::ALL
            .iter()
            .copied()
            .find(|t| t.key().eq_ignore_ascii_case(&wanted))
            .ok_or_else(|| ParseTabError(s.to_string()))
    }
}
