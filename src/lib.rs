//! shelfdb - A small, self-hostable book catalog service
//!
//! One flat JSON document holds the whole collection; reads recover
//! from legacy encodings, writes are atomic, and search is a plain
//! keyword filter.

pub mod catalog;
pub mod cli;
pub mod decoder;
pub mod http_server;
pub mod i18n;
pub mod observability;
pub mod search;
