//! # Data Service
//!
//! Local export and import of the dashboard as a JSON snapshot, plus reset.
//!
//! ```rust,no_run
//! use chrono::Utc;
//! use data_service::DataService;
//! use models::{AppState, Month};
//! use state_store::StateManager;
//! use std::path::Path;
//!
//! let manager = StateManager::create(AppState::new(Month::May));
//! let service = DataService::new(&manager);
//! let path = service.export(Path::new("backups"), Utc::now())?;
//! service.import_file(&path)?;
//! # Ok::<(), data_service::DataError>(())
//! ```

pub mod error;
pub mod persistence;
pub mod service;
pub mod snapshot;

pub use error::{DataError, Result};
pub use persistence::{load_state, save_state};
pub use service::{
    DataService, EXPORT_SUCCESS_MESSAGE, IMPORT_FAILURE_MESSAGE, IMPORT_SUCCESS_MESSAGE,
    RESET_MESSAGE,
};
pub use snapshot::{
    export_data, export_filename, merge_import, parse_import, read_import, to_json, write_export,
    write_snapshot, ImportData,
};
