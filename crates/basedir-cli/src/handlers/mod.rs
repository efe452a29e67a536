//! Command handlers.
//!
//! Handlers follow one pattern:
//! - Signature: `pub fn execute(dirs: &BaseDirs, ...) -> Result<String, CliError>`
//! - Convert text arguments through the library's parsers
//! - Return the text to print; `main` owns stdout
//!
//! An absent directory becomes `CliError::Unresolved` so the exit status
//! tells it apart from an invalid request.

pub mod path;
pub mod paths;
pub mod read_dirs;
pub mod write_dir;

#[cfg(test)]
mod test_support;
