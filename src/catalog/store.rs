//! Persistent catalog store
//!
//! Owns the backing document and assigns record identities. Loads go
//! through the decoder so legacy-encoded documents still read; saves
//! rewrite the whole collection as indented UTF-8 JSON (no BOM) behind
//! a temp-file-and-rename so readers never see a partial document.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::decoder::decode_file;
use crate::observability::{Logger, Severity};

use super::book::Book;
use super::errors::{CatalogError, CatalogResult};

/// The persistent book collection.
pub struct CatalogStore {
    /// Backing document path
    path: PathBuf,
    /// Serializes the read-modify-write span of [`CatalogStore::insert`]
    write_lock: Mutex<()>,
}

impl CatalogStore {
    /// Opens a store over the given backing document path.
    ///
    /// The document is not touched; a missing file reads as an empty
    /// collection. Use [`CatalogStore::create_if_missing`] at startup
    /// to materialize an empty document.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Returns the backing document path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Creates the backing document as an empty collection if absent.
    pub fn create_if_missing(&self) -> CatalogResult<()> {
        if self.path.exists() {
            return Ok(());
        }
        self.save(&[])
    }

    /// Loads the full collection in insertion order.
    ///
    /// A missing or empty document is `Ok(vec![])`. Undecodable bytes
    /// and malformed JSON are distinct errors; see
    /// [`CatalogStore::load_or_empty`] for the availability-preserving
    /// variant the serving layer uses.
    pub fn load(&self) -> CatalogResult<Vec<Book>> {
        let text = match decode_file(&self.path) {
            Ok(text) => text,
            Err(e) if e.is_not_found() => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        // Tolerate a BOM left behind by other tooling
        let content = text.trim_start_matches('\u{feff}').trim();
        if content.is_empty() {
            return Ok(Vec::new());
        }

        serde_json::from_str(content).map_err(|e| CatalogError::Corrupt {
            path: self.path.display().to_string(),
            reason: e.to_string(),
        })
    }

    /// Loads the collection, degrading any failure to an empty one.
    ///
    /// The failure class stays visible in the log line; the caller only
    /// sees an empty catalog instead of a hard fault.
    pub fn load_or_empty(&self) -> Vec<Book> {
        match self.load() {
            Ok(books) => books,
            Err(e) => {
                Logger::log_stderr(
                    Severity::Error,
                    "catalog_degraded_to_empty",
                    &[
                        ("error", &e.to_string()),
                        ("kind", e.kind()),
                        ("path", &self.path.display().to_string()),
                    ],
                );
                Vec::new()
            }
        }
    }

    /// Persists the full collection, replacing the backing document.
    ///
    /// The new content is written to a temporary sibling and renamed
    /// into place, so the update appears atomic to concurrent readers.
    pub fn save(&self, books: &[Book]) -> CatalogResult<()> {
        let json = serde_json::to_string_pretty(books).map_err(|e| CatalogError::Io {
            path: self.path.display().to_string(),
            source: std::io::Error::new(std::io::ErrorKind::InvalidData, e),
        })?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| CatalogError::Io {
                    path: parent.display().to_string(),
                    source: e,
                })?;
            }
        }

        let tmp = self.tmp_path();
        fs::write(&tmp, json.as_bytes()).map_err(|e| CatalogError::Io {
            path: tmp.display().to_string(),
            source: e,
        })?;
        fs::rename(&tmp, &self.path).map_err(|e| CatalogError::Io {
            path: self.path.display().to_string(),
            source: e,
        })
    }

    /// Temporary sibling used for the atomic replace. Kept next to the
    /// backing document so the rename stays on one filesystem.
    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    /// Next record identity: one past the highest id ever observed.
    ///
    /// Counting records instead would reuse an id after a deletion or
    /// reordering, so identity derives from the ids themselves.
    pub fn next_id(books: &[Book]) -> u64 {
        books.iter().map(|b| b.id).max().unwrap_or(0) + 1
    }

    /// Builds and appends a new record, returning it together with the
    /// extended collection. Pure; persisting the result is the
    /// caller's decision.
    pub fn append(
        mut books: Vec<Book>,
        title: impl Into<String>,
        author: impl Into<String>,
        year: i32,
    ) -> (Book, Vec<Book>) {
        let book = Book::new(Self::next_id(&books), title, author, year);
        books.push(book.clone());
        (book, books)
    }

    /// Adds one record and persists the collection, all under the
    /// single-writer lock.
    ///
    /// A store that fails to load propagates the error rather than
    /// being overwritten with a one-record collection; recovering a
    /// corrupt document to empty is a read-path policy, and applying it
    /// here would silently drop every previously admitted record.
    pub fn insert(&self, title: &str, author: &str, year: i32) -> CatalogResult<Book> {
        let _guard = self.write_lock.lock().map_err(|_| CatalogError::Lock)?;

        let books = self.load()?;
        let (book, books) = Self::append(books, title, author, year);
        self.save(&books)?;

        Ok(book)
    }
}
