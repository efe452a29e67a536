//! CLI-specific error types and their exit codes.

use basedir_core::BaseDirError;
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Unknown category or action name.
    #[error("Invalid arguments: {0}")]
    Arguments(#[from] BaseDirError),

    /// The request was valid but the environment determines no directory.
    #[error("{0}")]
    Unresolved(String),

    /// Failed to render output.
    #[error("Output error: {0}")]
    Output(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow Unix conventions:
    /// - 0: Success
    /// - 1: Nothing resolved
    /// - 2: Misuse of shell command (invalid arguments)
    /// - 74: Output failure (`EX_IOERR`)
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Unresolved(_) => 1,
            Self::Arguments(_) => 2,
            Self::Output(_) => 74,
        }
    }

    pub(crate) fn unresolved(what: &str, category: &str) -> Self {
        Self::Unresolved(format!("No {what} for category '{category}' in this environment"))
    }
}
