//! # Catalog
//!
//! The persistent book collection. A single flat JSON document holds
//! the whole collection as an ordered array; every load reads it fully
//! and every save rewrites it fully through an atomic rename, so a
//! concurrent reader never observes a partial document.
//!
//! Record identity (the integer `id`) is unique and stable once
//! assigned. All in-process writers go through [`CatalogStore::insert`],
//! which serializes the read-modify-write span behind a single writer
//! lock; two concurrent inserts can therefore never compute the same id
//! or overwrite each other's addition.

mod book;
mod errors;
mod store;

pub use book::{Book, STATUS_IN_STOCK};
pub use errors::{CatalogError, CatalogResult};
pub use store::CatalogStore;
