//! # Observability
//!
//! Structured logging for shelfdb. Recovered failures (decode fallback,
//! corrupt store, missing translation files) are degraded to an empty
//! result at the serving layer, so the log line is the only place the
//! failure class remains visible. Every such recovery must log.

mod logger;

pub use logger::{Logger, Severity};
