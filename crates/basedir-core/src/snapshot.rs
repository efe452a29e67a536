//! Snapshot of every category's resolution, for diagnostics.
//!
//! Captures the write directory and read list of all four categories in one
//! call so they can be printed by `basedir paths` or compared in tests.

use std::borrow::Cow;
use std::fmt;

use serde::Serialize;

use crate::base_dirs::BaseDirs;
use crate::category::Category;
use crate::dir::BaseDir;
use crate::read_dirs::PATH_LIST_SEPARATOR;

/// Placeholder printed for an absent directory.
const UNSET: &str = "<unset>";

/// Resolution results for a single category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryDirs {
    pub category: Category,
    pub write_dir: Option<BaseDir>,
    pub read_dirs: Option<Vec<BaseDir>>,
}

/// Resolution results for every category, in [`Category::ALL`] order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedBaseDirs {
    pub categories: Vec<CategoryDirs>,
}

impl ResolvedBaseDirs {
    pub fn get(&self, category: Category) -> Option<&CategoryDirs> {
        self.categories.iter().find(|dirs| dirs.category == category)
    }
}

impl BaseDirs<'_> {
    /// Resolve every category once.
    pub fn snapshot(&self) -> ResolvedBaseDirs {
        let categories = Category::ALL
            .into_iter()
            .map(|category| CategoryDirs {
                category,
                write_dir: self.write_dir_for(category),
                read_dirs: self.read_dirs_for(category),
            })
            .collect();

        ResolvedBaseDirs { categories }
    }
}

impl fmt::Display for ResolvedBaseDirs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let separator = PATH_LIST_SEPARATOR.to_string();
        for (i, dirs) in self.categories.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let write_dir = dirs
                .write_dir
                .as_ref()
                .map_or(Cow::Borrowed(UNSET), BaseDir::to_string_lossy);
            writeln!(f, "{}.write_dir = {write_dir}", dirs.category)?;

            let read_dirs = dirs.read_dirs.as_ref().map_or_else(
                || UNSET.to_string(),
                |list| {
                    list.iter()
                        .map(BaseDir::to_string_lossy)
                        .collect::<Vec<_>>()
                        .join(separator.as_str())
                },
            );
            write!(f, "{}.read_dirs = {read_dirs}", dirs.category)?;
        }
        Ok(())
    }
}
