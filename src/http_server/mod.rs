//! # HTTP Server
//!
//! The presentation adapter: a thin Axum server over the catalog. It
//! lists, adds, and searches books as JSON, resolves a per-request
//! language for localized messages, and keeps the write boundary
//! explicit by routing every add through the store's serialized
//! insert path.
//!
//! # Endpoints
//!
//! - `/health` - Health check
//! - `/books` - List (GET) and add (POST)
//! - `/books/search` - Keyword search

pub mod catalog_routes;
pub mod config;
pub mod server;

pub use catalog_routes::{catalog_routes, CatalogState};
pub use config::HttpServerConfig;
pub use server::HttpServer;
