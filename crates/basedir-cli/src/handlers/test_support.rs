//! Fixed environment and empty filesystem for handler tests.

use std::ffi::OsString;
use std::path::Path;

use basedir_core::{DirProbe, EnvProvider, FsProvider};

/// Environment made of a static list of variables.
pub struct StaticEnv(pub &'static [(&'static str, &'static str)]);

impl EnvProvider for StaticEnv {
    fn get(&self, key: &str) -> Option<OsString> {
        self.0
            .iter()
            .find(|(name, _)| *name == key)
            .map(|(_, value)| OsString::from(*value))
    }
}

/// Filesystem where nothing exists.
pub struct NoFs;

impl FsProvider for NoFs {
    fn exists(&self, _path: &Path) -> bool {
        false
    }

    fn probe_dir(&self, _path: &Path) -> DirProbe {
        DirProbe::Missing
    }
}
