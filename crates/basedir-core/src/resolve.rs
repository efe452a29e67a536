//! Full file path resolution for a read or write intent.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::action::Action;
use crate::base_dirs::BaseDirs;
use crate::category::Category;
use crate::error::{BaseDirError, BaseDirResult};

impl BaseDirs<'_> {
    /// Resolve `relative` within the base directories of `category`.
    ///
    /// - `Write`: the write directory joined with `relative`, or `Ok(None)`
    ///   if there is no write directory. The read list is never consulted.
    /// - `Read`: the first read directory under which `relative` exists.
    ///   If none match, the path under the first read directory is returned
    ///   anyway so the caller can attempt the read (or create the file).
    ///   `Ok(None)` only when the read list itself is absent.
    pub fn resolve_path<P, C, A>(
        &self,
        relative: P,
        category: C,
        action: A,
    ) -> BaseDirResult<Option<PathBuf>>
    where
        P: AsRef<Path>,
        C: TryInto<Category>,
        A: TryInto<Action>,
        BaseDirError: From<C::Error> + From<A::Error>,
    {
        let category = category.try_into()?;
        let action = action.try_into()?;
        Ok(self.resolve_path_for(relative.as_ref(), category, action))
    }

    /// Like [`BaseDirs::resolve_path`], with the action derived from a
    /// file-open mode string (see [`Action::from_mode`]).
    pub fn resolve_path_for_mode<P, C>(
        &self,
        relative: P,
        category: C,
        mode: &str,
    ) -> BaseDirResult<Option<PathBuf>>
    where
        P: AsRef<Path>,
        C: TryInto<Category>,
        BaseDirError: From<C::Error>,
    {
        let category = category.try_into()?;
        Ok(self.resolve_path_for(relative.as_ref(), category, Action::from_mode(mode)))
    }

    fn resolve_path_for(
        &self,
        relative: &Path,
        category: Category,
        action: Action,
    ) -> Option<PathBuf> {
        match action {
            Action::Write => self.write_dir_for(category).map(|dir| dir.join(relative)),
            Action::Read => self.find_readable(relative, category),
        }
    }

    fn find_readable(&self, relative: &Path, category: Category) -> Option<PathBuf> {
        let dirs = self.read_dirs_for(category)?;

        if let Some(found) = dirs
            .iter()
            .map(|dir| dir.join(relative))
            .find(|candidate| self.fs.exists(candidate))
        {
            debug!(%category, path = %found.display(), "found existing file");
            return Some(found);
        }

        let fallback = dirs.first()?.join(relative);
        debug!(
            %category,
            path = %fallback.display(),
            searched = dirs.len(),
            "file not found in any read dir, defaulting to first"
        );
        Some(fallback)
    }
}

/// Resolve `relative` for `action` using the current environment.
pub fn resolve_path<P, C, A>(relative: P, category: C, action: A) -> BaseDirResult<Option<PathBuf>>
where
    P: AsRef<Path>,
    C: TryInto<Category>,
    A: TryInto<Action>,
    BaseDirError: From<C::Error> + From<A::Error>,
{
    BaseDirs::system().resolve_path(relative, category, action)
}

/// Resolve `relative` for a file-open `mode` using the current environment.
pub fn resolve_path_for_mode<P, C>(
    relative: P,
    category: C,
    mode: &str,
) -> BaseDirResult<Option<PathBuf>>
where
    P: AsRef<Path>,
    C: TryInto<Category>,
    BaseDirError: From<C::Error>,
{
    BaseDirs::system().resolve_path_for_mode(relative, category, mode)
}
