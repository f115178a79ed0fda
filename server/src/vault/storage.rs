//! Vault trait definition
//!
//! The interface the request layer programs against. The plain
//! filesystem implementation lives in `plain`; a remote-backed variant
//! would implement the same trait.

use async_trait::async_trait;

use super::error::VaultError;
use crate::data::types::Item;

/// Fetched file content with its stored MIME type
#[derive(Debug)]
pub struct FetchedItem {
    /// Raw file bytes, exactly as uploaded
    pub data: Vec<u8>,
    /// MIME type recorded at upload time (authoritative, never re-detected)
    pub media_type: String,
}

/// Trait for vault backends
///
/// All implementations must be thread-safe (Send + Sync); operations
/// are invoked concurrently from independent requests.
#[async_trait]
pub trait Vault: Send + Sync {
    /// Store a payload with its tags
    ///
    /// # Arguments
    /// * `extension` - file suffix as supplied by the uploader,
    ///   leading dot included (may be empty)
    /// * `tags` - free-form tags, preserved verbatim
    /// * `data` - complete file content
    ///
    /// # Returns
    /// The index-assigned id. On failure no id is reported, and a
    /// metadata record left behind by a failed byte write is removed
    /// on a best-effort basis.
    async fn upload_item(
        &self,
        extension: &str,
        tags: Vec<String>,
        data: &[u8],
    ) -> Result<i64, VaultError>;

    /// Retrieve an item's bytes and stored MIME type
    ///
    /// # Errors
    /// `NotFound` if no metadata record exists for the id;
    /// `Inconsistency` if the record exists but the backing file is
    /// missing or unreadable.
    async fn fetch_item(&self, id: i64) -> Result<FetchedItem, VaultError>;

    /// List every stored item with its tags
    async fn list_items(&self) -> Result<Vec<Item>, VaultError>;

    /// Release persistence resources; idempotent
    async fn close(&self);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetched_item_debug() {
        let fetched = FetchedItem {
            data: vec![1, 2, 3],
            media_type: "image/png".to_string(),
        };
        let debug = format!("{:?}", fetched);
        assert!(debug.contains("FetchedItem"));
        assert!(debug.contains("image/png"));
    }
}
