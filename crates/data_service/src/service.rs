use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use models::AppState;
use state_store::{EventName, EventPayload, StateManager};
use tracing::{info, warn};

use crate::error::Result;
use crate::snapshot::{export_data, merge_import, parse_import, read_import, to_json, write_export, ImportData};

pub const EXPORT_SUCCESS_MESSAGE: &str = "Data exported successfully!";
pub const IMPORT_SUCCESS_MESSAGE: &str = "Data imported successfully!";
pub const IMPORT_FAILURE_MESSAGE: &str = "Error importing data. Please check the file format.";
pub const RESET_MESSAGE: &str = "All data has been reset!";

/// Export, import and reset on top of a [`StateManager`]. Each operation
/// reports its outcome to the user through `message:show`.
#[derive(Debug, Clone, Copy)]
pub struct DataService<'a> {
    manager: &'a StateManager,
}

impl<'a> DataService<'a> {
    pub fn new(manager: &'a StateManager) -> Self {
        Self { manager }
    }

    /// Serialises the current state without touching the filesystem.
    pub fn export_to_string(&self, now: DateTime<Utc>) -> Result<String> {
        let json = to_json(&export_data(&self.manager.get_full_state(), now))?;
        self.exported();
        Ok(json)
    }

    /// Writes `financial-dashboard-<date>.json` into `dir`.
    pub fn export(&self, dir: &Path, now: DateTime<Utc>) -> Result<PathBuf> {
        let path = write_export(dir, &self.manager.get_full_state(), now)?;
        info!(path = %path.display(), "exported dashboard data");
        self.exported();
        Ok(path)
    }

    fn exported(&self) {
        self.manager.show_message(EXPORT_SUCCESS_MESSAGE);
        self.manager.publish(EventName::DataExported, EventPayload::None);
    }

    /// All-or-nothing import from JSON text. On failure the state is left
    /// exactly as it was and a single failure message is shown.
    pub fn import_str(&self, text: &str) -> Result<()> {
        let imported = parse_import(text);
        self.apply_import(imported)
    }

    pub fn import_file(&self, path: &Path) -> Result<()> {
        let imported = read_import(path);
        self.apply_import(imported)
    }

    fn apply_import(&self, imported: Result<ImportData>) -> Result<()> {
        let imported = match imported {
            Ok(imported) => imported,
            Err(err) => {
                warn!(error = %err, "import rejected");
                self.manager.show_message(IMPORT_FAILURE_MESSAGE);
                return Err(err);
            }
        };

        let next = merge_import(imported, &self.manager.get_full_state());
        self.manager.reset_state(next);
        info!("imported dashboard data");
        self.manager.show_message(IMPORT_SUCCESS_MESSAGE);
        self.manager.publish(EventName::DataImported, EventPayload::None);
        Ok(())
    }

    /// Back to defaults. The session's current month is kept.
    pub fn reset(&self) {
        let current_month = self.manager.get_current_month();
        self.manager.reset_state(AppState::new(current_month));
        info!("reset dashboard data");
        self.manager.show_message(RESET_MESSAGE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::{Month, SettingsPatch, Tab};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn watch(manager: &StateManager) -> Rc<RefCell<Vec<String>>> {
        let log = Rc::new(RefCell::new(Vec::new()));
        for event in [
            EventName::DataReset,
            EventName::DataImported,
            EventName::DataExported,
            EventName::ShowMessage,
        ] {
            let log = Rc::clone(&log);
            manager.bus().on(event, move |payload| {
                let entry = match payload.message() {
                    Some(text) => format!("{event}: {text}"),
                    None => event.to_string(),
                };
                log.borrow_mut().push(entry);
            });
        }
        log
    }

    #[test]
    fn test_failed_import_leaves_state_untouched() {
        let manager = StateManager::create(AppState::new(Month::July));
        manager.update_savings(Month::March, 100.0);
        let before = manager.get_full_state();
        let log = watch(&manager);

        let result = DataService::new(&manager).import_str("{ definitely not json");
        assert!(result.is_err());
        assert_eq!(*manager.get_full_state(), *before);
        assert_eq!(
            *log.borrow(),
            vec![format!("message:show: {IMPORT_FAILURE_MESSAGE}")]
        );
    }

    #[test]
    fn test_successful_import_event_sequence() {
        let manager = StateManager::create(AppState::new(Month::July));
        let log = watch(&manager);

        DataService::new(&manager)
            .import_str(r#"{"savings": {"July": 80}}"#)
            .unwrap();

        assert_eq!(manager.get_savings_data().get(&Month::July), Some(&80.0));
        assert_eq!(
            *log.borrow(),
            vec![
                "data:reset".to_string(),
                format!("message:show: {IMPORT_SUCCESS_MESSAGE}"),
                "data:imported".to_string(),
            ]
        );
    }

    #[test]
    fn test_import_without_loan_keeps_loan() {
        let manager = StateManager::create(AppState::new(Month::July));
        manager.set_total_loan_amount(90_000.0);
        let loan_before = manager.get_loan_data();

        DataService::new(&manager)
            .import_str(r#"{"settings": {"currentSavingsAmount": 5}, "savings": {"May": 1}}"#)
            .unwrap();

        assert_eq!(manager.get_loan_data(), loan_before);
        assert_eq!(manager.get_settings().current_savings_amount, 5.0);
        assert_eq!(manager.get_savings_data().len(), 1);
    }

    #[test]
    fn test_reset_keeps_current_month() {
        let manager = StateManager::create(AppState::new(Month::October));
        manager.update_settings(&SettingsPatch {
            total_wealth_goal: Some(1e6),
            ..SettingsPatch::default()
        });
        manager.set_current_tab(Tab::Settings);
        let log = watch(&manager);

        DataService::new(&manager).reset();

        assert_eq!(*manager.get_full_state(), AppState::new(Month::October));
        assert_eq!(
            *log.borrow(),
            vec!["data:reset".to_string(), format!("message:show: {RESET_MESSAGE}")]
        );
    }

    #[test]
    fn test_export_to_string_announces_export() {
        let manager = StateManager::create(AppState::new(Month::January));
        let log = watch(&manager);

        let json = DataService::new(&manager).export_to_string(Utc::now()).unwrap();
        assert!(json.contains("\"person1Income\""));
        assert_eq!(
            *log.borrow(),
            vec![
                format!("message:show: {EXPORT_SUCCESS_MESSAGE}"),
                "data:exported".to_string(),
            ]
        );
    }
}
