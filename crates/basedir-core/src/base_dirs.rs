//! The resolver handle shared by all base directory operations.

use crate::env::{EnvProvider, SystemEnv};
use crate::fs::{FsProvider, SystemFs};

/// Resolves base directories against an environment and a filesystem.
///
/// Holds no state of its own: every call re-reads the environment and
/// re-probes the filesystem, so two calls may disagree if either changed
/// in between.
///
/// The operations live in sibling modules:
/// - `write_dir`: the single canonical directory for writing
/// - `read_dirs`: the ordered list of directories to search when reading
/// - `resolve`: a full file path for a read or write intent
#[derive(Clone, Copy)]
pub struct BaseDirs<'a> {
    pub(crate) env: &'a dyn EnvProvider,
    pub(crate) fs: &'a dyn FsProvider,
}

impl<'a> BaseDirs<'a> {
    /// Resolve with injected dependencies (for testing).
    pub fn new(env: &'a dyn EnvProvider, fs: &'a dyn FsProvider) -> Self {
        Self { env, fs }
    }
}

impl BaseDirs<'static> {
    /// Resolver over the live process environment and filesystem.
    pub fn system() -> Self {
        Self::new(&SystemEnv, &SystemFs)
    }
}

impl Default for BaseDirs<'static> {
    fn default() -> Self {
        Self::system()
    }
}

impl std::fmt::Debug for BaseDirs<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BaseDirs").finish_non_exhaustive()
    }
}
