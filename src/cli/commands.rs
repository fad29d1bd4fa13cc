//! CLI command implementations
//!
//! Every command loads the configuration first (falling back to
//! defaults when the config file is absent, so the tool runs out of
//! the box), then operates on the catalog through the same store API
//! the HTTP layer uses.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::catalog::CatalogStore;
use crate::http_server::{CatalogState, HttpServer, HttpServerConfig};
use crate::i18n::{TranslationLoader, DEFAULT_LANGUAGE};
use crate::search;

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};

/// Configuration file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Backing document holding the book collection
    #[serde(default = "default_library_file")]
    pub library_file: String,

    /// Directory of per-language translation files
    #[serde(default = "default_languages_dir")]
    pub languages_dir: String,

    /// Language used when a request specifies none
    #[serde(default = "default_language")]
    pub default_language: String,

    /// HTTP server settings
    #[serde(default)]
    pub http: HttpServerConfig,
}

fn default_library_file() -> String {
    "./library.json".to_string()
}

fn default_languages_dir() -> String {
    "./languages".to_string()
}

fn default_language() -> String {
    DEFAULT_LANGUAGE.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            library_file: default_library_file(),
            languages_dir: default_languages_dir(),
            default_language: default_language(),
            http: HttpServerConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from file. A missing file yields defaults.
    pub fn load(path: &Path) -> CliResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        let config: Config = serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration
    fn validate(&self) -> CliResult<()> {
        if self.library_file.trim().is_empty() {
            return Err(CliError::config_error("library_file must not be empty"));
        }

        if self.default_language.trim().is_empty() {
            return Err(CliError::config_error("default_language must not be empty"));
        }

        if self.http.port == 0 {
            return Err(CliError::config_error("http.port must be > 0"));
        }

        Ok(())
    }

    /// Open the catalog store for this configuration
    pub fn open_store(&self) -> CatalogStore {
        CatalogStore::open(&self.library_file)
    }

    /// Build the shared HTTP state for this configuration
    pub fn catalog_state(&self) -> CatalogState {
        CatalogState::new(
            Arc::new(self.open_store()),
            Arc::new(TranslationLoader::new(&self.languages_dir)),
            self.default_language.clone(),
        )
    }
}

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Init { config } => init(&config),
        Command::Serve { config } => serve(&config),
        Command::List { config, lang } => list(&config, lang.as_deref()),
        Command::Add {
            config,
            title,
            author,
            year,
        } => add(&config, &title, &author, year),
        Command::Search { config, keyword } => search_cmd(&config, &keyword),
    }
}

/// Create the backing document as an empty collection if absent
pub fn init(config_path: &Path) -> CliResult<()> {
    let config = Config::load(config_path)?;
    let store = config.open_store();

    store.create_if_missing()?;
    println!("Catalog ready at {}", store.path().display());

    Ok(())
}

/// Start the HTTP server
pub fn serve(config_path: &Path) -> CliResult<()> {
    let config = Config::load(config_path)?;

    let store = config.open_store();
    store.create_if_missing()?;

    let state = Arc::new(config.catalog_state());
    let server = HttpServer::new(config.http.clone(), state);

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(server.start())?;

    Ok(())
}

/// Print the full catalog
pub fn list(config_path: &Path, lang: Option<&str>) -> CliResult<()> {
    let config = Config::load(config_path)?;
    let store = config.open_store();

    let translations = TranslationLoader::new(&config.languages_dir)
        .load(lang.unwrap_or(&config.default_language));

    let books = store.load()?;
    if books.is_empty() {
        println!("{}", translations.get("no_books"));
        return Ok(());
    }

    for book in &books {
        println!(
            "{:>4}  {} - {} ({}) [{}]",
            book.id, book.title, book.author, book.year, book.status
        );
    }

    Ok(())
}

/// Add a book and persist the collection
pub fn add(config_path: &Path, title: &str, author: &str, year: i32) -> CliResult<()> {
    if title.trim().is_empty() || author.trim().is_empty() {
        return Err(CliError::config_error("title and author must not be empty"));
    }

    let config = Config::load(config_path)?;
    let store = config.open_store();

    let book = store.insert(title.trim(), author.trim(), year)?;
    println!("Added #{}: {} - {}", book.id, book.title, book.author);

    Ok(())
}

/// Search books by keyword
pub fn search_cmd(config_path: &Path, keyword: &str) -> CliResult<()> {
    let config = Config::load(config_path)?;
    let store = config.open_store();

    let books = store.load()?;
    let results = search::search(&books, keyword);

    for book in &results {
        println!(
            "{:>4}  {} - {} ({}) [{}]",
            book.id, book.title, book.author, book.year, book.status
        );
    }
    println!("{} result(s)", results.len());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, content: &str) -> std::path::PathBuf {
        let path = dir.path().join("shelfdb.json");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_missing_config_file_yields_defaults() {
        let config = Config::load(Path::new("/definitely/not/here/shelfdb.json")).unwrap();
        assert_eq!(config.library_file, "./library.json");
        assert_eq!(config.default_language, "en");
        assert_eq!(config.http.port, 8686);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, r#"{"library_file": "/tmp/books.json"}"#);

        let config = Config::load(&path).unwrap();
        assert_eq!(config.library_file, "/tmp/books.json");
        assert_eq!(config.languages_dir, "./languages");
    }

    #[test]
    fn test_invalid_json_is_config_error() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "{ nope");

        let err = Config::load(&path).unwrap_err();
        assert!(matches!(err, CliError::Config(_)));
    }

    #[test]
    fn test_zero_port_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, r#"{"http": {"port": 0}}"#);

        assert!(Config::load(&path).is_err());
    }

    #[test]
    fn test_empty_library_file_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, r#"{"library_file": "  "}"#);

        assert!(Config::load(&path).is_err());
    }

    #[test]
    fn test_init_then_add_then_list() {
        let dir = TempDir::new().unwrap();
        let library = dir.path().join("library.json");
        let path = write_config(
            &dir,
            &serde_json::json!({ "library_file": library.to_str().unwrap() }).to_string(),
        );

        init(&path).unwrap();
        assert!(library.exists());

        add(&path, "Dune", "Frank Herbert", 1965).unwrap();
        list(&path, None).unwrap();
        search_cmd(&path, "dune").unwrap();
    }

    #[test]
    fn test_add_rejects_blank_title() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "{}");

        assert!(add(&path, "  ", "Someone", 2000).is_err());
    }
}
