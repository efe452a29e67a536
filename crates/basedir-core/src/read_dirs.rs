//! Read directory list resolution.
//!
//! Data and config directories are searched in precedence order: the write
//! directory first, then each entry of `XDG_DATA_DIRS` / `XDG_CONFIG_DIRS`,
//! or the fixed system directories when that variable has no usable entry.
//! Cache and runtime have no system-wide locations, so their list is just the
//! write directory.

use tracing::debug;

use crate::base_dirs::BaseDirs;
use crate::category::Category;
use crate::dir::BaseDir;
use crate::error::{BaseDirError, BaseDirResult};

/// Separator between entries of `XDG_DATA_DIRS` and `XDG_CONFIG_DIRS`.
pub const PATH_LIST_SEPARATOR: char = ':';

impl BaseDirs<'_> {
    /// The directories to search, in order, when reading a file of `category`.
    ///
    /// Data and config always yield a non-empty list. Cache and runtime yield
    /// `Ok(None)` under the same conditions as [`BaseDirs::write_dir`].
    pub fn read_dirs<C>(&self, category: C) -> BaseDirResult<Option<Vec<BaseDir>>>
    where
        C: TryInto<Category>,
        BaseDirError: From<C::Error>,
    {
        let category = category.try_into()?;
        Ok(self.read_dirs_for(category))
    }

    pub(crate) fn read_dirs_for(&self, category: Category) -> Option<Vec<BaseDir>> {
        match category {
            Category::Data | Category::Config => Some(self.search_list(category)),
            Category::Cache | Category::Runtime => {
                self.write_dir_for(category).map(|dir| vec![dir])
            }
        }
    }

    fn search_list(&self, category: Category) -> Vec<BaseDir> {
        let mut dirs: Vec<BaseDir> = self.write_dir_for(category).into_iter().collect();

        let listed = self.listed_dirs(category);
        if listed.is_empty() {
            let fallbacks = category.system_fallbacks();
            debug!(%category, ?fallbacks, "no search path entries, using system dirs");
            dirs.extend(fallbacks.iter().copied().map(BaseDir::new));
        } else {
            dirs.extend(listed);
        }

        dirs
    }

    /// Non-empty entries of the category's colon-separated search path.
    fn listed_dirs(&self, category: Category) -> Vec<BaseDir> {
        let Some(var) = category.dirs_var() else {
            return Vec::new();
        };
        let Some(value) = self.env.get_non_empty(var) else {
            return Vec::new();
        };

        BaseDir::split_list(&value, PATH_LIST_SEPARATOR)
    }
}

/// Resolve the read directory list for `category` using the current environment.
pub fn read_dirs<C>(category: C) -> BaseDirResult<Option<Vec<BaseDir>>>
where
    C: TryInto<Category>,
    BaseDirError: From<C::Error>,
{
    BaseDirs::system().read_dirs(category)
}
