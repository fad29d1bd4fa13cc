//! Decoder Fallback Integration Tests
//!
//! A backing document that fails strict UTF-8 must still load when a
//! statistical detector can name its real encoding; the store sees the
//! correctly decoded text, not a failure.

use std::fs;
use std::io::Write;

use shelfdb::catalog::CatalogStore;
use shelfdb::decoder::decode_file;
use tempfile::TempDir;

// =============================================================================
// Test Utilities
// =============================================================================

/// A one-book collection with Windows-1252 bytes for "Émile Zola" and
/// "Thérèse Raquin" (0xC9, 0xE9, 0xE8 are invalid as UTF-8 here).
const LEGACY_DOCUMENT: &[u8] = b"[
    {
        \"id\": 1,
        \"title\": \"Th\xE9r\xE8se Raquin\",
        \"author\": \"\xC9mile Zola\",
        \"year\": 1867,
        \"status\": \"in stock\"
    }
]";

fn write_legacy_document(dir: &TempDir) -> std::path::PathBuf {
    let path = dir.path().join("library.json");
    let mut file = fs::File::create(&path).unwrap();
    file.write_all(LEGACY_DOCUMENT).unwrap();
    path
}

// =============================================================================
// Decoder level
// =============================================================================

#[test]
fn test_legacy_bytes_decode_to_correct_text() {
    let dir = TempDir::new().unwrap();
    let path = write_legacy_document(&dir);

    let text = decode_file(&path).unwrap();
    assert!(text.contains("Thérèse Raquin"));
    assert!(text.contains("Émile Zola"));
}

// =============================================================================
// Store level
// =============================================================================

#[test]
fn test_store_loads_legacy_encoded_document() {
    let dir = TempDir::new().unwrap();
    let path = write_legacy_document(&dir);

    let store = CatalogStore::open(&path);
    let books = store.load().unwrap();

    assert_eq!(books.len(), 1);
    assert_eq!(books[0].title, "Thérèse Raquin");
    assert_eq!(books[0].author, "Émile Zola");
    assert_eq!(books[0].year, 1867);
}

/// After one save the document is canonical UTF-8 and loads without
/// the fallback.
#[test]
fn test_save_normalizes_document_to_utf8() {
    let dir = TempDir::new().unwrap();
    let path = write_legacy_document(&dir);

    let store = CatalogStore::open(&path);
    let books = store.load().unwrap();
    store.save(&books).unwrap();

    let bytes = fs::read(&path).unwrap();
    let text = String::from_utf8(bytes).expect("document is valid UTF-8 after save");
    assert!(text.contains("Thérèse Raquin"));

    assert_eq!(store.load().unwrap(), books);
}

/// Inserting through a legacy-encoded document keeps the existing
/// records intact rather than re-admitting mangled text.
#[test]
fn test_insert_after_fallback_preserves_existing_records() {
    let dir = TempDir::new().unwrap();
    let path = write_legacy_document(&dir);

    let store = CatalogStore::open(&path);
    let book = store.insert("Germinal", "Émile Zola", 1885).unwrap();
    assert_eq!(book.id, 2);

    let books = store.load().unwrap();
    assert_eq!(books[0].author, "Émile Zola");
    assert_eq!(books[1].title, "Germinal");
}

/// A UTF-8 document with a BOM still loads.
#[test]
fn test_bom_prefixed_document_loads() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("library.json");

    let mut content = vec![0xEF, 0xBB, 0xBF];
    content.extend_from_slice(b"[{\"id\":1,\"title\":\"Dune\",\"author\":\"Frank Herbert\",\"year\":1965,\"status\":\"in stock\"}]");
    fs::write(&path, content).unwrap();

    let store = CatalogStore::open(&path);
    let books = store.load().unwrap();
    assert_eq!(books[0].title, "Dune");
}
