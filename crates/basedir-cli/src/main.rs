//! CLI entry point - the composition root.
//!
//! Installs logging, wires the handlers to the process environment and maps
//! handler errors to exit codes.

use std::io::Write;
use std::process::ExitCode;

use anyhow::Context;
use basedir_cli::handlers::{self, path::Intent};
use basedir_cli::{Cli, CliError, Commands};
use basedir_core::BaseDirs;
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Log to stderr so stdout carries only resolved paths.
///
/// Level comes from `RUST_LOG`, else `debug` with `--verbose`, else `warn`.
fn init_tracing(cli: &Cli) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.default_log_filter()));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .compact()
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))
        .context("failed to install tracing subscriber")
}

fn dispatch(dirs: &BaseDirs<'_>, command: &Commands) -> Result<String, CliError> {
    match command {
        Commands::WriteDir { category } => handlers::write_dir::execute(dirs, category),
        Commands::ReadDirs { category } => handlers::read_dirs::execute(dirs, category),
        Commands::Path {
            category,
            relative,
            action,
            mode,
        } => {
            let intent = Intent::from_flags(action.as_deref(), mode.as_deref());
            handlers::path::execute(dirs, category, relative, intent)
        }
        Commands::Paths { json } => handlers::paths::execute(dirs, *json),
    }
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(&cli)?;

    let dirs = BaseDirs::system();
    match dispatch(&dirs, &cli.command) {
        Ok(output) => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{output}").context("failed to write to stdout")?;
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            eprintln!("basedir: {err}");
            Ok(ExitCode::from(err.exit_code()))
        }
    }
}
