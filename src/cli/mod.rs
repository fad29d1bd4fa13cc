//! # CLI
//!
//! Command-line interface for shelfdb:
//! - init: create the backing document and config on disk
//! - serve: start the HTTP server
//! - list: print the full catalog
//! - add: append one book and persist
//! - search: keyword search over title/author

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{run, run_command, Config};
pub use errors::{CliError, CliResult};
