//! `basedir paths` handler.
//!
//! Displays every category's resolution for diagnostics and debugging.

use basedir_core::BaseDirs;

use crate::error::CliError;

/// Resolve all categories and render them as `key = value` lines or JSON.
pub fn execute(dirs: &BaseDirs<'_>, json: bool) -> Result<String, CliError> {
    let snapshot = dirs.snapshot();
    if json {
        serde_json::to_string_pretty(&snapshot).map_err(|e| CliError::Output(e.to_string()))
    } else {
        Ok(snapshot.to_string())
    }
}
