//! CLI argument definitions using clap
//!
//! Commands:
//! - shelfdb init --config <path>
//! - shelfdb serve --config <path>
//! - shelfdb list --config <path> [--lang <code>]
//! - shelfdb add --config <path> <title> <author> <year>
//! - shelfdb search --config <path> <keyword>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// shelfdb - A small, self-hostable book catalog service
#[derive(Parser, Debug)]
#[command(name = "shelfdb")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create the backing document (empty collection) if absent
    Init {
        /// Path to configuration file
        #[arg(long, default_value = "./shelfdb.json")]
        config: PathBuf,
    },

    /// Start the HTTP server
    Serve {
        /// Path to configuration file
        #[arg(long, default_value = "./shelfdb.json")]
        config: PathBuf,
    },

    /// Print the full catalog
    List {
        /// Path to configuration file
        #[arg(long, default_value = "./shelfdb.json")]
        config: PathBuf,

        /// Language for localized headings
        #[arg(long)]
        lang: Option<String>,
    },

    /// Add a book and persist the collection
    Add {
        /// Path to configuration file
        #[arg(long, default_value = "./shelfdb.json")]
        config: PathBuf,

        title: String,
        author: String,
        /// Publication year (negative for BCE)
        #[arg(allow_negative_numbers = true)]
        year: i32,
    },

    /// Search books by keyword over title and author
    Search {
        /// Path to configuration file
        #[arg(long, default_value = "./shelfdb.json")]
        config: PathBuf,

        keyword: String,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_parses_positional_fields() {
        let cli = Cli::parse_from(["shelfdb", "add", "Dune", "Frank Herbert", "1965"]);
        match cli.command {
            Command::Add {
                title,
                author,
                year,
                ..
            } => {
                assert_eq!(title, "Dune");
                assert_eq!(author, "Frank Herbert");
                assert_eq!(year, 1965);
            }
            other => panic!("expected add, got {:?}", other),
        }
    }

    #[test]
    fn test_config_defaults_to_local_file() {
        let cli = Cli::parse_from(["shelfdb", "list"]);
        match cli.command {
            Command::List { config, lang } => {
                assert_eq!(config, PathBuf::from("./shelfdb.json"));
                assert!(lang.is_none());
            }
            other => panic!("expected list, got {:?}", other),
        }
    }

    #[test]
    fn test_negative_year_parses() {
        let cli = Cli::parse_from(["shelfdb", "add", "The Odyssey", "Homer", "-700"]);
        match cli.command {
            Command::Add { year, .. } => assert_eq!(year, -700),
            other => panic!("expected add, got {:?}", other),
        }
    }
}
