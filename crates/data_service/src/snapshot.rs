//! JSON snapshot format: export, import parsing and merge.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, NaiveDate, Utc};
use models::{
    lenient_monthly_amounts, AppState, ExportData, IncomeData, LoanData, MonthlyAmounts,
    RealEstate, Settings, StateChanges,
};
use serde::{Deserialize, Deserializer};

use crate::error::{DataError, Result};

/// Snapshot of the persistent slices of `state`, stamped with `now`.
pub fn export_data(state: &AppState, now: DateTime<Utc>) -> ExportData {
    ExportData::from_state(state, now)
}

/// `financial-dashboard-2024-05-31.json`
pub fn export_filename(date: NaiveDate) -> String {
    format!("financial-dashboard-{}.json", date.format("%Y-%m-%d"))
}

pub fn to_json(data: &ExportData) -> Result<String> {
    Ok(serde_json::to_string_pretty(data)?)
}

/// Writes `data` as pretty JSON, creating parent directories as needed.
pub fn write_snapshot(path: &Path, data: &ExportData) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(|source| DataError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }
    }
    let json = to_json(data)?;
    fs::write(path, json).map_err(|source| DataError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Exports `state` into `dir` under the dated file name and returns the path.
pub fn write_export(dir: &Path, state: &AppState, now: DateTime<Utc>) -> Result<PathBuf> {
    let path = dir.join(export_filename(now.date_naive()));
    write_snapshot(&path, &export_data(state, now))?;
    Ok(path)
}

/// Parsed import file. Every top-level key is optional; an absent key keeps
/// the current slice.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportData {
    #[serde(default)]
    pub settings: Option<Settings>,
    #[serde(default, deserialize_with = "optional_amounts")]
    pub savings: Option<MonthlyAmounts>,
    /// `Some(None)` when the file explicitly says `"realEstate": null`.
    #[serde(default, deserialize_with = "present")]
    pub real_estate: Option<Option<RealEstate>>,
    #[serde(default)]
    pub loan: Option<LoanData>,
    #[serde(default, deserialize_with = "optional_amounts")]
    pub person1_income: Option<MonthlyAmounts>,
    #[serde(default, deserialize_with = "optional_amounts")]
    pub person2_income: Option<MonthlyAmounts>,
    #[serde(default)]
    pub export_date: Option<String>,
}

impl ImportData {
    fn is_empty(&self) -> bool {
        self.settings.is_none()
            && self.savings.is_none()
            && self.real_estate.is_none()
            && self.loan.is_none()
            && self.person1_income.is_none()
            && self.person2_income.is_none()
    }
}

fn present<'de, D, T>(deserializer: D) -> std::result::Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

fn optional_amounts<'de, D>(deserializer: D) -> std::result::Result<Option<MonthlyAmounts>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    struct Amounts(#[serde(deserialize_with = "lenient_monthly_amounts")] MonthlyAmounts);

    Ok(Option::<Amounts>::deserialize(deserializer)?.map(|amounts| amounts.0))
}

/// Parses an import file. Malformed JSON, a wrong shape, or a file without any
/// dashboard key is rejected as a whole.
pub fn parse_import(text: &str) -> Result<ImportData> {
    let data: ImportData = serde_json::from_str(text)?;
    if data.is_empty() {
        return Err(DataError::NoDashboardData);
    }
    Ok(data)
}

pub fn read_import(path: &Path) -> Result<ImportData> {
    let text = fs::read_to_string(path).map_err(|source| DataError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_import(&text)
}

/// New state where every slice present in `imported` replaces the current
/// one. UI state is always kept.
pub fn merge_import(imported: ImportData, current: &AppState) -> AppState {
    let income = match (imported.person1_income, imported.person2_income) {
        (None, None) => None,
        (person1, person2) => Some(IncomeData {
            person1: person1.unwrap_or_else(|| current.income.person1.clone()),
            person2: person2.unwrap_or_else(|| current.income.person2.clone()),
        }),
    };

    StateChanges {
        settings: imported.settings,
        savings: imported.savings,
        real_estate: imported.real_estate,
        loan: imported.loan,
        income,
        ui: None,
    }
    .apply(current)
}
