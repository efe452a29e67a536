//! Subcommands of the `basedir` tool.
//!
//! Categories and actions are accepted as plain text and converted by the
//! handlers, so an unknown name reaches the user as the library's own error.

use clap::Subcommand;

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Print the directory new files of a category are written to
    WriteDir {
        /// One of: data, config, cache, runtime
        category: String,
    },

    /// Print the directories searched when reading, one per line, in order
    ReadDirs {
        /// One of: data, config, cache, runtime
        category: String,
    },

    /// Resolve a relative file path within a category
    Path {
        /// One of: data, config, cache, runtime
        category: String,
        /// File path relative to the base directory (e.g. "myapp/settings.toml")
        relative: String,
        /// Intended action: read or write
        #[arg(short, long, conflicts_with = "mode")]
        action: Option<String>,
        /// File-open mode ("r", "w", "r+", ...); read only for modes starting with "r" without "+"
        #[arg(short, long)]
        mode: Option<String>,
    },

    /// Show every category's write directory and read list
    Paths {
        /// Emit JSON instead of key = value lines
        #[arg(long)]
        json: bool,
    },
}
