//! # Search
//!
//! Keyword filtering over an in-memory snapshot of the collection.
//! Pure substring containment, case-insensitive, against title or
//! author. No tokenization, no ranking, no fuzzy matching; results
//! keep the collection's insertion order.

mod filter;

pub use filter::{search, KeywordFilter};
