//! `basedir read-dirs` handler.

use basedir_core::{BaseDir, BaseDirs};
use tracing::debug;

use crate::error::CliError;

/// Resolve the read directory list for `category`, one directory per line.
pub fn execute(dirs: &BaseDirs<'_>, category: &str) -> Result<String, CliError> {
    debug!(category, "resolving read dirs");
    let list = dirs
        .read_dirs(category)?
        .ok_or_else(|| CliError::unresolved("read directories", category))?;

    Ok(list
        .iter()
        .map(BaseDir::to_string_lossy)
        .collect::<Vec<_>>()
        .join("\n"))
}
