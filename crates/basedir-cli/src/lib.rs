//! Command-line adapter over `basedir-core`.
//!
//! Parses arguments, converts text categories and actions at the boundary,
//! and renders resolver answers for the terminal. No resolution logic lives
//! here.

#![deny(unused_crate_dependencies)]

// Used by the binary only
use anyhow as _;
use tracing_subscriber as _;

pub mod commands;
pub mod error;
pub mod handlers;
pub mod parser;

// Re-export primary types for convenient access
pub use commands::Commands;
pub use error::CliError;
pub use parser::Cli;
