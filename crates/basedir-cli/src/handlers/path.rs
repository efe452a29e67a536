//! `basedir path` handler.

use basedir_core::{Action, BaseDirs};
use tracing::debug;

use crate::error::CliError;

/// How the caller expressed its intent on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent<'a> {
    /// `--action read|write`, validated by the library.
    Action(&'a str),
    /// `--mode <open mode>`, mapped with [`Action::from_mode`].
    Mode(&'a str),
    /// Neither flag given.
    Default,
}

impl<'a> Intent<'a> {
    pub fn from_flags(action: Option<&'a str>, mode: Option<&'a str>) -> Self {
        match (action, mode) {
            (Some(action), _) => Self::Action(action),
            (None, Some(mode)) => Self::Mode(mode),
            (None, None) => Self::Default,
        }
    }
}

/// Resolve `relative` within `category` for the given intent.
///
/// Without `--action` or `--mode` the path is resolved for reading.
pub fn execute(
    dirs: &BaseDirs<'_>,
    category: &str,
    relative: &str,
    intent: Intent<'_>,
) -> Result<String, CliError> {
    debug!(category, relative, ?intent, "resolving path");
    let resolved = match intent {
        Intent::Action(action) => dirs.resolve_path(relative, category, action)?,
        Intent::Mode(mode) => dirs.resolve_path_for_mode(relative, category, mode)?,
        Intent::Default => dirs.resolve_path(relative, category, Action::Read)?,
    };

    resolved
        .map(|path| path.display().to_string())
        .ok_or_else(|| CliError::unresolved("base directory", category))
}
