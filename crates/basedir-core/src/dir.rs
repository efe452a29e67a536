//! Normalized directory values.

use std::borrow::Cow;
use std::ffi::{OsStr, OsString};
use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Serialize, Serializer};

/// Directory separator used in every base directory value.
pub const SEPARATOR: char = '/';

const SEPARATOR_BYTE: u8 = b'/';

/// A directory path as returned by the resolver.
///
/// Always contains no run of consecutive separators and ends with exactly
/// one trailing separator, so a relative file name can be appended directly.
/// The value is kept as raw OS bytes: a directory that is not valid UTF-8 is
/// still the directory the environment named.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BaseDir(OsString);

impl BaseDir {
    /// Normalize a raw directory value taken from the environment or a fallback.
    pub fn new(raw: impl AsRef<OsStr>) -> Self {
        let raw = bytes_of(raw.as_ref());
        let mut normalized = Vec::with_capacity(raw.len() + 1);
        for &byte in raw.iter() {
            if byte == SEPARATOR_BYTE && normalized.last() == Some(&SEPARATOR_BYTE) {
                continue;
            }
            normalized.push(byte);
        }
        if normalized.last() != Some(&SEPARATOR_BYTE) {
            normalized.push(SEPARATOR_BYTE);
        }
        Self(os_string_from(normalized))
    }

    /// Split a `separator`-delimited list into directories, skipping empty entries.
    ///
    /// Splitting happens on bytes, so an entry that is not valid UTF-8 does
    /// not affect its neighbours.
    pub(crate) fn split_list(raw: &OsStr, separator: char) -> Vec<Self> {
        bytes_of(raw)
            .split(|&byte| char::from(byte) == separator)
            .filter(|entry| !entry.is_empty())
            .map(|entry| Self::new(os_string_from(entry.to_vec())))
            .collect()
    }

    /// The directory as an OS string, trailing separator included.
    pub fn as_os_str(&self) -> &OsStr {
        &self.0
    }

    /// The directory as a path, trailing separator included.
    pub fn as_path(&self) -> &Path {
        Path::new(&self.0)
    }

    /// The directory as UTF-8, if it is valid UTF-8.
    pub fn to_str(&self) -> Option<&str> {
        self.0.to_str()
    }

    /// The directory as UTF-8, with invalid sequences replaced.
    pub fn to_string_lossy(&self) -> Cow<'_, str> {
        self.0.to_string_lossy()
    }

    /// Append `relative` to this directory by plain concatenation.
    ///
    /// No separator is inserted or removed, so `relative` is expected not to
    /// start with one.
    pub fn join(&self, relative: impl AsRef<Path>) -> PathBuf {
        let mut full = self.0.clone();
        full.push(relative.as_ref());
        PathBuf::from(full)
    }

    /// Consume the directory, returning the underlying OS string.
    pub fn into_os_string(self) -> OsString {
        self.0
    }
}

#[cfg(unix)]
fn bytes_of(raw: &OsStr) -> Cow<'_, [u8]> {
    use std::os::unix::ffi::OsStrExt;

    Cow::Borrowed(raw.as_bytes())
}

#[cfg(unix)]
fn os_string_from(bytes: Vec<u8>) -> OsString {
    use std::os::unix::ffi::OsStringExt;

    OsString::from_vec(bytes)
}

// No raw byte access off unix: work on the lossy UTF-8 form. Only ASCII
// separators are touched, so the result stays valid UTF-8.
#[cfg(not(unix))]
fn bytes_of(raw: &OsStr) -> Cow<'_, [u8]> {
    match raw.to_string_lossy() {
        Cow::Borrowed(s) => Cow::Borrowed(s.as_bytes()),
        Cow::Owned(s) => Cow::Owned(s.into_bytes()),
    }
}

#[cfg(not(unix))]
fn os_string_from(bytes: Vec<u8>) -> OsString {
    OsString::from(String::from_utf8_lossy(&bytes).into_owned())
}

impl fmt::Display for BaseDir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.as_path().display(), f)
    }
}

impl Serialize for BaseDir {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string_lossy())
    }
}

impl AsRef<Path> for BaseDir {
    fn as_ref(&self) -> &Path {
        self.as_path()
    }
}

impl AsRef<OsStr> for BaseDir {
    fn as_ref(&self) -> &OsStr {
        &self.0
    }
}

impl From<BaseDir> for PathBuf {
    fn from(dir: BaseDir) -> Self {
        Self::from(dir.0)
    }
}

impl From<BaseDir> for OsString {
    fn from(dir: BaseDir) -> Self {
        dir.0
    }
}
