//! Directory categories and the environment each one is resolved from.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::BaseDirError;

/// The four kinds of per-user base directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// User-specific data files (`XDG_DATA_HOME`).
    Data,
    /// User-specific configuration files (`XDG_CONFIG_HOME`).
    Config,
    /// Non-essential cached data (`XDG_CACHE_HOME`).
    Cache,
    /// Sockets, pipes and other runtime files (`XDG_RUNTIME_DIR`).
    Runtime,
}

impl Category {
    /// Every category, in the order they are reported.
    pub const ALL: [Self; 4] = [Self::Data, Self::Config, Self::Cache, Self::Runtime];

    /// Lowercase name accepted by [`Category::from_str`].
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Data => "data",
            Self::Config => "config",
            Self::Cache => "cache",
            Self::Runtime => "runtime",
        }
    }

    /// Environment variable naming the write directory.
    pub const fn home_var(self) -> &'static str {
        match self {
            Self::Data => "XDG_DATA_HOME",
            Self::Config => "XDG_CONFIG_HOME",
            Self::Cache => "XDG_CACHE_HOME",
            Self::Runtime => "XDG_RUNTIME_DIR",
        }
    }

    /// Colon-separated search path variable, for categories that have one.
    pub const fn dirs_var(self) -> Option<&'static str> {
        match self {
            Self::Data => Some("XDG_DATA_DIRS"),
            Self::Config => Some("XDG_CONFIG_DIRS"),
            Self::Cache | Self::Runtime => None,
        }
    }

    /// Default location relative to `$HOME` when [`Category::home_var`] is unset.
    ///
    /// The runtime directory has no default.
    pub const fn home_fallback(self) -> Option<&'static str> {
        match self {
            Self::Data => Some(".local/share/"),
            Self::Config => Some(".config/"),
            Self::Cache => Some(".cache/"),
            Self::Runtime => None,
        }
    }

    /// System-wide directories searched when [`Category::dirs_var`] is unset
    /// or holds no usable entries.
    pub const fn system_fallbacks(self) -> &'static [&'static str] {
        match self {
            Self::Data => &["/usr/local/share/", "/usr/share/"],
            Self::Config => &["/etc/xdg/"],
            Self::Cache | Self::Runtime => &[],
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = BaseDirError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "data" => Ok(Self::Data),
            "config" => Ok(Self::Config),
            "cache" => Ok(Self::Cache),
            "runtime" => Ok(Self::Runtime),
            other => Err(BaseDirError::UnknownCategory(other.to_string())),
        }
    }
}

impl<'a> TryFrom<&'a str> for Category {
    type Error = BaseDirError;

    fn try_from(value: &'a str) -> Result<Self, Self::Error> {
        value.parse()
    }
}
