//! Environment access for base directory resolution.
//!
//! The resolver never touches `std::env` directly; it goes through
//! [`EnvProvider`] so tests can describe an environment without mutating
//! the real process state.

use std::ffi::OsString;

/// Read-only view of the environment variables the resolver consults.
pub trait EnvProvider {
    /// Raw value of `key`, if set.
    fn get(&self, key: &str) -> Option<OsString>;

    /// Value of `key`, treating an empty value as unset.
    ///
    /// The value is returned as raw OS bytes; it need not be valid UTF-8.
    fn get_non_empty(&self, key: &str) -> Option<OsString> {
        self.get(key).filter(|value| !value.is_empty())
    }
}

/// Reads the live process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnv;

impl EnvProvider for SystemEnv {
    fn get(&self, key: &str) -> Option<OsString> {
        std::env::var_os(key)
    }
}

/// Fixed environment for unit tests.
#[cfg(test)]
#[derive(Default)]
pub struct MockEnv {
    vars: std::collections::HashMap<String, OsString>,
}

#[cfg(test)]
impl MockEnv {
    pub fn new() -> Self {
        Self::default()
    }

    /// Environment with only `HOME` set.
    pub fn home(home: impl Into<OsString>) -> Self {
        Self::new().with_var("HOME", home)
    }

    #[must_use]
    pub fn with_var(mut self, key: impl Into<String>, value: impl Into<OsString>) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }
}

#[cfg(test)]
impl EnvProvider for MockEnv {
    fn get(&self, key: &str) -> Option<OsString> {
        self.vars.get(key).cloned()
    }
}
