//! Book record type

use serde::{Deserialize, Serialize};

/// Availability status assigned to newly admitted records.
pub const STATUS_IN_STOCK: &str = "in stock";

fn default_status() -> String {
    STATUS_IN_STOCK.to_string()
}

/// A single catalog record.
///
/// `status` is carried as free text: the store must round-trip any
/// status value it admitted without alteration, so the persistence
/// boundary cannot impose a closed enum on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: u64,
    pub title: String,
    pub author: String,
    pub year: i32,
    #[serde(default = "default_status")]
    pub status: String,
}

impl Book {
    /// Builds a new record with the default availability status.
    pub fn new(id: u64, title: impl Into<String>, author: impl Into<String>, year: i32) -> Self {
        Self {
            id,
            title: title.into(),
            author: author.into(),
            year,
            status: default_status(),
        }
    }
}
