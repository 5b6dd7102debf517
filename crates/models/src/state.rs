use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::amount::MonthlyAmounts;
use crate::financial::{IncomeData, LoanData, RealEstate};
use crate::month::{Month, Tab};
use crate::settings::Settings;

/// Transient view state. `current_month` is frozen when the session starts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UiState {
    pub current_tab: Tab,
    pub current_month: Month,
}

impl UiState {
    pub fn new(current_month: Month) -> Self {
        Self {
            current_tab: Tab::default(),
            current_month,
        }
    }
}

/// Fields of [`UiState`] that may change during a session.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct UiPatch {
    pub current_tab: Option<Tab>,
}

impl UiPatch {
    pub fn apply(&self, ui: &UiState) -> UiState {
        UiState {
            current_tab: self.current_tab.unwrap_or(ui.current_tab),
            current_month: ui.current_month,
        }
    }
}

/// Aggregate root: everything the dashboard knows.
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    pub settings: Settings,
    pub savings: MonthlyAmounts,
    pub real_estate: Option<RealEstate>,
    pub loan: LoanData,
    pub income: IncomeData,
    pub ui: UiState,
}

impl AppState {
    /// Fresh state with default settings and no entries.
    pub fn new(current_month: Month) -> Self {
        Self {
            settings: Settings::default(),
            savings: MonthlyAmounts::new(),
            real_estate: None,
            loan: LoanData::default(),
            income: IncomeData::default(),
            ui: UiState::new(current_month),
        }
    }
}

/// Top-level slices that can be replaced at once. `None` keeps the current slice.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StateChanges {
    pub settings: Option<Settings>,
    pub savings: Option<MonthlyAmounts>,
    pub real_estate: Option<Option<RealEstate>>,
    pub loan: Option<LoanData>,
    pub income: Option<IncomeData>,
    pub ui: Option<UiState>,
}

impl StateChanges {
    /// Replaces every slice, used for reset and import.
    pub fn replace_all(state: AppState) -> Self {
        Self {
            settings: Some(state.settings),
            savings: Some(state.savings),
            real_estate: Some(state.real_estate),
            loan: Some(state.loan),
            income: Some(state.income),
            ui: Some(state.ui),
        }
    }

    /// Shallow merge over `state`.
    pub fn apply(self, state: &AppState) -> AppState {
        AppState {
            settings: self.settings.unwrap_or_else(|| state.settings.clone()),
            savings: self.savings.unwrap_or_else(|| state.savings.clone()),
            real_estate: match self.real_estate {
                Some(real_estate) => RealEstate::normalized(real_estate),
                None => state.real_estate.clone(),
            },
            loan: self.loan.unwrap_or_else(|| state.loan.clone()),
            income: self.income.unwrap_or_else(|| state.income.clone()),
            ui: self.ui.unwrap_or(state.ui),
        }
    }
}

/// On-disk snapshot written by export.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportData {
    pub settings: Settings,
    pub savings: MonthlyAmounts,
    pub real_estate: Option<RealEstate>,
    pub loan: LoanData,
    pub person1_income: MonthlyAmounts,
    pub person2_income: MonthlyAmounts,
    pub export_date: DateTime<Utc>,
}

impl ExportData {
    pub fn from_state(state: &AppState, export_date: DateTime<Utc>) -> Self {
        Self {
            settings: state.settings.clone(),
            savings: state.savings.clone(),
            real_estate: state.real_estate.clone(),
            loan: state.loan.clone(),
            person1_income: state.income.person1.clone(),
            person2_income: state.income.person2.clone(),
            export_date,
        }
    }
}
