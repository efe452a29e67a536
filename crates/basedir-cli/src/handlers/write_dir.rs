//! `basedir write-dir` handler.

use basedir_core::BaseDirs;
use tracing::debug;

use crate::error::CliError;

/// Resolve the write directory for `category`.
pub fn execute(dirs: &BaseDirs<'_>, category: &str) -> Result<String, CliError> {
    debug!(category, "resolving write dir");
    dirs.write_dir(category)?
        .map(|dir| dir.to_string_lossy().into_owned())
        .ok_or_else(|| CliError::unresolved("write directory", category))
}
