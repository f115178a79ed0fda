//! Row types shared across the data layer and the API

use serde::Serialize;

/// One stored file's metadata record
///
/// Immutable once created: the vault never updates an item, and
/// deletion is an out-of-band administrative operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item {
    /// Database-assigned identifier, strictly increasing, never reused
    pub id: i64,
    /// File suffix as supplied at upload, leading dot included (may be empty)
    pub extension: String,
    /// Top-level content-type class; names the storage subdirectory
    pub category: String,
    /// Full detected MIME type, authoritative for serving
    pub media_type: String,
    /// Free-form tags in upload order, duplicates and casing preserved
    pub tags: Vec<String>,
    /// Unix timestamp of the upload
    pub created_at: i64,
}
