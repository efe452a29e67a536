//! Main CLI parser and top-level argument handling.

use clap::Parser;

use crate::commands::Commands;

/// Inspect where XDG base directory files are read from and written to.
#[derive(Parser)]
#[command(name = "basedir")]
#[command(about = "Resolve XDG base directories for data, config, cache and runtime files")]
#[command(version)]
pub struct Cli {
    /// Log each resolution step to stderr
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Default log filter when `RUST_LOG` is not set.
    pub const fn default_log_filter(&self) -> &'static str {
        if self.verbose { "debug" } else { "warn" }
    }
}
