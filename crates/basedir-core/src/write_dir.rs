//! Write directory resolution.
//!
//! Resolution order per category:
//! 1. `XDG_<CATEGORY>_HOME` (`XDG_RUNTIME_DIR` for runtime), if non-empty
//! 2. `$HOME` joined with the category default (`.local/share/`, `.config/`,
//!    `.cache/`); runtime has no default
//! 3. Absent
//!
//! A runtime directory is additionally required to exist with mode `0700`.

use std::ffi::OsString;
use std::path::Path;

use tracing::{debug, warn};

use crate::base_dirs::BaseDirs;
use crate::category::Category;
use crate::dir::BaseDir;
use crate::error::{BaseDirError, BaseDirResult};
use crate::fs::DirProbe;

impl BaseDirs<'_> {
    /// The directory new files of `category` should be written to.
    ///
    /// Returns `Ok(None)` when the environment does not determine one, and
    /// an error only when `category` is not a known category name.
    pub fn write_dir<C>(&self, category: C) -> BaseDirResult<Option<BaseDir>>
    where
        C: TryInto<Category>,
        BaseDirError: From<C::Error>,
    {
        let category = category.try_into()?;
        Ok(self.write_dir_for(category))
    }

    pub(crate) fn write_dir_for(&self, category: Category) -> Option<BaseDir> {
        let dir = BaseDir::new(self.home_source(category)?);

        if category == Category::Runtime && !self.is_valid_runtime_dir(&dir) {
            return None;
        }

        Some(dir)
    }

    /// Raw, unnormalized write directory: the env var or the `$HOME` default.
    fn home_source(&self, category: Category) -> Option<OsString> {
        let var = category.home_var();
        if let Some(value) = self.env.get_non_empty(var) {
            debug!(
                %category,
                var,
                value = %Path::new(&value).display(),
                "write dir from environment"
            );
            return Some(value);
        }

        let Some(relative) = category.home_fallback() else {
            debug!(%category, var, "write dir unset and has no default");
            return None;
        };

        let Some(mut home) = self.env.get_non_empty("HOME") else {
            debug!(%category, var, "neither write dir variable nor HOME is set");
            return None;
        };

        debug!(
            %category,
            home = %Path::new(&home).display(),
            relative,
            "write dir from HOME default"
        );
        home.push("/");
        home.push(relative);
        Some(home)
    }

    fn is_valid_runtime_dir(&self, dir: &BaseDir) -> bool {
        let probe = self.fs.probe_dir(dir.as_path());
        if probe.is_private_dir() {
            return true;
        }

        match probe {
            DirProbe::Directory { .. } => {
                warn!(dir = %dir, %probe, "runtime dir must have mode 0700, ignoring it");
            }
            DirProbe::Missing | DirProbe::NotADirectory => {
                debug!(dir = %dir, %probe, "runtime dir is not usable");
            }
        }
        false
    }
}

/// Resolve the write directory for `category` using the current environment.
pub fn write_dir<C>(category: C) -> BaseDirResult<Option<BaseDir>>
where
    C: TryInto<Category>,
    BaseDirError: From<C::Error>,
{
    BaseDirs::system().write_dir(category)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::MockEnv;
    use crate::fs::MockFsProvider;

    fn no_fs() -> MockFsProvider {
        let mut fs = MockFsProvider::new();
        fs.expect_probe_dir().never();
        fs.expect_exists().never();
        fs
    }

    fn runtime_fs(probe: DirProbe) -> MockFsProvider {
        let mut fs = MockFsProvider::new();
        fs.expect_probe_dir()
            .withf(|path: &Path| path == Path::new("/run/user/1000/"))
            .times(1)
            .return_const(probe);
        fs
    }

    #[test]
    fn env_var_wins_and_is_normalized() {
        let env = MockEnv::home("/home/u").with_var("XDG_DATA_HOME", "/srv//data");
        let fs = no_fs();
        let dirs = BaseDirs::new(&env, &fs);

        let dir = dirs.write_dir(Category::Data).unwrap().unwrap();
        assert_eq!(dir.to_str(), Some("/srv/data/"));
    }

    #[test]
    fn falls_back_to_home_defaults() {
        let env = MockEnv::home("/home/u/");
        let fs = no_fs();
        let dirs = BaseDirs::new(&env, &fs);

        let expected = [
            (Category::Data, "/home/u/.local/share/"),
            (Category::Config, "/home/u/.config/"),
            (Category::Cache, "/home/u/.cache/"),
        ];
        for (category, path) in expected {
            let dir = dirs.write_dir(category).unwrap();
            assert_eq!(dir.as_ref().and_then(BaseDir::to_str), Some(path), "{category}");
        }
    }

    #[test]
    fn empty_env_var_uses_home_default() {
        let env = MockEnv::home("/home/u").with_var("XDG_CONFIG_HOME", "");
        let fs = no_fs();
        let dirs = BaseDirs::new(&env, &fs);

        let dir = dirs.write_dir("config").unwrap().unwrap();
        assert_eq!(dir.to_str(), Some("/home/u/.config/"));
    }

    #[test]
    fn absent_without_env_var_or_home() {
        let env = MockEnv::new();
        let fs = no_fs();
        let dirs = BaseDirs::new(&env, &fs);

        for category in [Category::Data, Category::Config, Category::Cache] {
            assert_eq!(dirs.write_dir(category), Ok(None), "{category}");
        }

        let env = MockEnv::new().with_var("HOME", "");
        let dirs = BaseDirs::new(&env, &fs);
        assert_eq!(dirs.write_dir(Category::Cache), Ok(None));
    }

    #[test]
    fn runtime_has_no_home_default() {
        let env = MockEnv::home("/home/u");
        let fs = no_fs();
        let dirs = BaseDirs::new(&env, &fs);

        assert_eq!(dirs.write_dir(Category::Runtime), Ok(None));
    }

    #[test]
    fn runtime_accepts_private_directory() {
        let env = MockEnv::new().with_var("XDG_RUNTIME_DIR", "/run/user//1000");
        let fs = runtime_fs(DirProbe::Directory {
            mode: Some(0o40700),
        });
        let dirs = BaseDirs::new(&env, &fs);

        let dir = dirs.write_dir(Category::Runtime).unwrap().unwrap();
        assert_eq!(dir.to_str(), Some("/run/user/1000/"));
    }

    #[test]
    fn runtime_rejects_wrong_mode() {
        let env = MockEnv::new().with_var("XDG_RUNTIME_DIR", "/run/user/1000");
        let fs = runtime_fs(DirProbe::Directory {
            mode: Some(0o40755),
        });
        let dirs = BaseDirs::new(&env, &fs);

        assert_eq!(dirs.write_dir(Category::Runtime), Ok(None));
    }

    #[test]
    fn runtime_rejects_missing_or_file() {
        for probe in [DirProbe::Missing, DirProbe::NotADirectory] {
            let env = MockEnv::new().with_var("XDG_RUNTIME_DIR", "/run/user/1000/");
            let fs = runtime_fs(probe);
            let dirs = BaseDirs::new(&env, &fs);

            assert_eq!(dirs.write_dir(Category::Runtime), Ok(None), "{probe}");
        }
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_values_are_used_verbatim() {
        use std::os::unix::ffi::{OsStrExt, OsStringExt};

        let env = MockEnv::home("/home/u")
            .with_var("XDG_CONFIG_HOME", OsString::from_vec(b"/home/u/conf\xff".to_vec()));
        let fs = no_fs();
        let dirs = BaseDirs::new(&env, &fs);

        let dir = dirs.write_dir(Category::Config).unwrap().unwrap();
        assert_eq!(dir.as_os_str().as_bytes(), b"/home/u/conf\xff/");

        let env = MockEnv::home(OsString::from_vec(b"/home/\xffu".to_vec()));
        let dirs = BaseDirs::new(&env, &fs);
        let dir = dirs.write_dir(Category::Cache).unwrap().unwrap();
        assert_eq!(dir.as_os_str().as_bytes(), b"/home/\xffu/.cache/");
    }

    #[test]
    fn unknown_category_is_an_error() {
        let env = MockEnv::home("/home/u");
        let fs = no_fs();
        let dirs = BaseDirs::new(&env, &fs);

        assert_eq!(
            dirs.write_dir("state"),
            Err(BaseDirError::UnknownCategory("state".to_string()))
        );
    }
}
