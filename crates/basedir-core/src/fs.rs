//! Filesystem probes used during resolution.
//!
//! Only two questions are ever asked of the filesystem: does a candidate file
//! exist, and what is a directory's permission mode. Both go through
//! [`FsProvider`] so resolution can be tested without touching disk.

use std::fmt;
use std::path::Path;

/// Owner-only `rwx`, the only mode accepted for the runtime directory.
pub const RUNTIME_DIR_MODE: u32 = 0o700;

/// Permission bits compared against [`RUNTIME_DIR_MODE`], including the
/// setuid, setgid and sticky bits.
const MODE_MASK: u32 = 0o7777;

/// What was found when probing a directory path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirProbe {
    /// Nothing exists at the path (or it could not be inspected).
    Missing,
    /// Something exists but it is not a directory.
    NotADirectory,
    /// A directory with the given permission bits.
    ///
    /// `mode` is `None` on platforms without unix permissions.
    Directory { mode: Option<u32> },
}

impl DirProbe {
    /// True for a directory whose mode is exactly `0700`.
    pub fn is_private_dir(self) -> bool {
        matches!(self, Self::Directory { mode: Some(mode) } if mode & MODE_MASK == RUNTIME_DIR_MODE)
    }
}

impl fmt::Display for DirProbe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing => write!(f, "missing"),
            Self::NotADirectory => write!(f, "not a directory"),
            Self::Directory { mode: Some(mode) } => write!(f, "directory (mode {:o})", mode & MODE_MASK),
            Self::Directory { mode: None } => write!(f, "directory (mode unknown)"),
        }
    }
}

/// Trait for filesystem queries (injectable for testing).
#[cfg_attr(test, mockall::automock)]
pub trait FsProvider {
    /// Whether anything exists at `path`.
    fn exists(&self, path: &Path) -> bool;

    /// Inspect `path` as a directory, following symlinks.
    fn probe_dir(&self, path: &Path) -> DirProbe;
}

/// Production filesystem provider backed by `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemFs;

impl FsProvider for SystemFs {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn probe_dir(&self, path: &Path) -> DirProbe {
        let Ok(metadata) = std::fs::metadata(path) else {
            return DirProbe::Missing;
        };

        if !metadata.is_dir() {
            return DirProbe::NotADirectory;
        }

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            DirProbe::Directory {
                mode: Some(metadata.permissions().mode()),
            }
        }

        #[cfg(not(unix))]
        {
            DirProbe::Directory { mode: None }
        }
    }
}
