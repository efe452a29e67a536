//! Read/write intent for path resolution.

use std::fmt;
use std::str::FromStr;

use crate::error::BaseDirError;

/// What the caller intends to do with the resolved path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Search the read directory list for an existing file.
    Read,
    /// Place the file in the write directory.
    Write,
}

impl Action {
    /// Map a file-open mode string (`"r"`, `"rb"`, `"w+"`, ...) to an action.
    ///
    /// Only modes that start with `r` and never mention `+` are read-only.
    /// Everything else, including `"r+"` and the empty string, may write.
    pub fn from_mode(mode: &str) -> Self {
        if mode.starts_with('r') && !mode.contains('+') {
            Self::Read
        } else {
            Self::Write
        }
    }

    /// Lowercase name, as accepted by [`FromStr`].
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Read => "read",
            Self::Write => "write",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Action {
    type Err = BaseDirError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "read" => Ok(Self::Read),
            "write" => Ok(Self::Write),
            other => Err(BaseDirError::UnknownAction(other.to_string())),
        }
    }
}

impl<'a> TryFrom<&'a str> for Action {
    type Error = BaseDirError;

    fn try_from(value: &'a str) -> Result<Self, Self::Error> {
        value.parse()
    }
}
