//! Session persistence for the command line front end. The state file uses
//! the same layout as an export, so any export can be used as a data file.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use models::{AppState, Month};
use tracing::debug;

use crate::snapshot::{export_data, merge_import, parse_import, write_snapshot};

/// Loads the dashboard from `path`, or defaults when the file does not exist yet.
pub fn load_state<P: AsRef<Path>>(path: P, current_month: Month) -> Result<AppState> {
    let path = path.as_ref();
    let defaults = AppState::new(current_month);
    if !path.exists() {
        debug!(path = %path.display(), "no data file, starting from defaults");
        return Ok(defaults);
    }

    let raw = fs::read_to_string(path)
        .with_context(|| format!("Reading data file: {}", path.display()))?;
    let imported = parse_import(&raw)
        .with_context(|| format!("Parsing dashboard JSON in {}", path.display()))?;
    Ok(merge_import(imported, &defaults))
}

/// Writes the persistent slices of `state` to `path`.
pub fn save_state<P: AsRef<Path>>(path: P, state: &AppState, now: DateTime<Utc>) -> Result<()> {
    let path = path.as_ref();
    write_snapshot(path, &export_data(state, now))
        .with_context(|| format!("Saving data file: {}", path.display()))
}
