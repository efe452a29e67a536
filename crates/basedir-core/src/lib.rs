//! XDG base directory resolution.
//!
//! Answers "where should a file of category X be read from or written to"
//! for the four base directory categories: data, config, cache and runtime.
//!
//! - [`BaseDirs::write_dir`]: the single directory new files go to
//! - [`BaseDirs::read_dirs`]: the ordered directories searched when reading
//! - [`BaseDirs::resolve_path`]: a full path for a read or write intent
//!
//! # Design
//!
//! - Requests outside the closed sets of categories and actions are errors
//!   ([`BaseDirError`]); a directory the environment does not determine is
//!   `Ok(None)`. The two are never merged.
//! - Environment and filesystem access go through [`EnvProvider`] and
//!   [`FsProvider`], so resolution is testable without touching process state.
//! - Nothing is cached; each call reflects the environment at that moment.
//! - Directories are never created here.
//!
//! ```no_run
//! use basedir_core::{Action, Category, resolve_path};
//!
//! if let Some(path) = resolve_path("myapp/settings.toml", Category::Config, Action::Read)? {
//!     println!("reading {}", path.display());
//! }
//! # Ok::<(), basedir_core::BaseDirError>(())
//! ```

#![deny(unused_crate_dependencies)]

mod action;
mod base_dirs;
mod category;
mod dir;
mod env;
mod error;
mod fs;
mod read_dirs;
mod resolve;
mod snapshot;
mod write_dir;

#[cfg(test)]
mod test_utils;

// Error type
pub use error::{BaseDirError, BaseDirResult};

// Request vocabulary
pub use action::Action;
pub use category::Category;

// Normalized directory values
pub use dir::{BaseDir, SEPARATOR};

// Injectable environment and filesystem access
pub use env::{EnvProvider, SystemEnv};
pub use fs::{DirProbe, FsProvider, RUNTIME_DIR_MODE, SystemFs};

// Resolver and process-environment shortcuts
pub use base_dirs::BaseDirs;
pub use read_dirs::{PATH_LIST_SEPARATOR, read_dirs};
pub use resolve::{resolve_path, resolve_path_for_mode};
pub use snapshot::{CategoryDirs, ResolvedBaseDirs};
pub use write_dir::write_dir;
