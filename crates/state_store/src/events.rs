use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

use dashboard_engine::WealthSummary;
use models::{AppState, LoanData, Month, Person, RealEstate, Settings, UiState};
use thiserror::Error;

/// Every notification the dashboard can emit. The wire names returned by
/// [`EventName::as_str`] are stable and shared with persisted event logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventName {
    SettingsUpdated,
    SavingsUpdated,
    RealEstateUpdated,
    LoanUpdated,
    IncomeUpdated,
    TabChanged,
    DataExported,
    DataImported,
    DataReset,
    WealthCalculated,
    ShowMessage,
}

impl EventName {
    pub const ALL: [EventName; 11] = [
        EventName::SettingsUpdated,
        EventName::SavingsUpdated,
        EventName::RealEstateUpdated,
        EventName::LoanUpdated,
        EventName::IncomeUpdated,
        EventName::TabChanged,
        EventName::DataExported,
        EventName::DataImported,
        EventName::DataReset,
        EventName::WealthCalculated,
        EventName::ShowMessage,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            EventName::SettingsUpdated => "settings:updated",
            EventName::SavingsUpdated => "savings:updated",
            EventName::RealEstateUpdated => "realEstate:updated",
            EventName::LoanUpdated => "loan:updated",
            EventName::IncomeUpdated => "income:updated",
            EventName::TabChanged => "tab:changed",
            EventName::DataExported => "data:exported",
            EventName::DataImported => "data:imported",
            EventName::DataReset => "data:reset",
            EventName::WealthCalculated => "wealth:calculated",
            EventName::ShowMessage => "message:show",
        }
    }
}

impl fmt::Display for EventName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown event name: {0}")]
pub struct ParseEventNameError(pub String);

impl FromStr for EventName {
    type Err = ParseEventNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EventName::ALL
            .iter()
            .copied()
            .find(|e| e.as_str() == s)
            .ok_or_else(|| ParseEventNameError(s.to_string()))
    }
}

/// Data delivered with an event.
#[derive(Debug, Clone, PartialEq)]
pub enum EventPayload {
    None,
    /// Whole state after a replacement (reset, import, `set_state`).
    State(Rc<AppState>),
    Settings(Settings),
    Savings { month: Month, amount: f64 },
    RealEstate(Option<RealEstate>),
    Loan(LoanData),
    Income { person: Person, month: Month, amount: f64 },
    Ui(UiState),
    Wealth(WealthSummary),
    Message(String),
}

impl EventPayload {
    pub fn message(&self) -> Option<&str> {
        match self {
            EventPayload::Message(text) => Some(text),
            _ => None,
        }
    }

    pub fn state(&self) -> Option<&AppState> {
        match self {
            EventPayload::State(state) => Some(state),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names_are_stable() {
        let names: Vec<&str> = EventName::ALL.iter().map(|e| e.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "settings:updated",
                "savings:updated",
                "realEstate:updated",
                "loan:updated",
                "income:updated",
                "tab:changed",
                "data:exported",
                "data:imported",
                "data:reset",
                "wealth:calculated",
                "message:show",
            ]
        );
    }

    #[test]
    fn test_parse_event_name() {
        for event in EventName::ALL {
            assert_eq!(event.as_str().parse::<EventName>(), Ok(event));
        }
        assert!("savings:changed".parse::<EventName>().is_err());
    }
}
