//! Base directory error types.
//!
//! Only malformed requests are errors. A directory that cannot be determined
//! from the current environment is reported as `Ok(None)` by the resolver,
//! never through this type.

use std::convert::Infallible;
use thiserror::Error;

/// Errors raised when a caller asks for something outside the closed sets
/// of categories and actions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BaseDirError {
    /// The category name is not one of `data`, `config`, `cache`, `runtime`.
    #[error("Unknown directory category '{0}' (expected one of: data, config, cache, runtime)")]
    UnknownCategory(String),

    /// The action name is not `read` or `write`.
    #[error("Unknown path action '{0}' (expected read or write)")]
    UnknownAction(String),
}

/// Typed inputs convert infallibly, which lets the resolver accept both
/// enums and text through the same `TryInto` bound.
impl From<Infallible> for BaseDirError {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}

/// Result type for base directory operations.
pub type BaseDirResult<T> = Result<T, BaseDirError>;
