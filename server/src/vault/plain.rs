//! Plain filesystem-backed vault implementation
//!
//! Stores item bytes on the local filesystem under a category
//! subdirectory derived from the detected MIME type:
//! `{vault_root}/{category}/{id}{extension}`

use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::fs;
use tokio::io::AsyncWriteExt;

use super::classify::{Classifier, category_of};
use super::error::VaultError;
use super::storage::{FetchedItem, Vault};
use crate::data::sqlite::repositories::item as item_repo;
use crate::data::sqlite::SqliteService;
use crate::data::types::Item;

/// Compute the storage path for an item
///
/// Pure and deterministic: upload and retrieval derive the identical
/// path from the same inputs, which is why the path is never stored in
/// the metadata index. The id, not the original filename, is the
/// durable filename - distinct uploads can share a filename without
/// colliding.
pub fn item_path(root: &Path, category: &str, id: i64, extension: &str) -> PathBuf {
    root.join(category).join(format!("{id}{extension}"))
}

/// Filesystem-backed vault
pub struct PlainVault {
    /// Base directory for all category subdirectories
    root: PathBuf,
    /// Metadata index
    db: Arc<SqliteService>,
    /// Content-type detection collaborator
    classifier: Arc<dyn Classifier>,
}

impl PlainVault {
    pub fn new(root: PathBuf, db: Arc<SqliteService>, classifier: Arc<dyn Classifier>) -> Self {
        Self {
            root,
            db,
            classifier,
        }
    }

    /// Write with exclusive creation: ids are unique, so the computed
    /// path must not already exist.
    ///
    /// A file that exists before the create is never touched; a file
    /// this call created but could not fill is removed best-effort, so
    /// a failed write leaves no partial content behind.
    async fn write_exclusive(path: &Path, data: &[u8]) -> std::io::Result<()> {
        let mut file = fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(path)
            .await?;

        let write_result = async {
            file.write_all(data).await?;
            file.flush().await
        }
        .await;

        if let Err(e) = write_result {
            drop(file);
            if let Err(rm_err) = fs::remove_file(path).await {
                tracing::warn!(path = %path.display(), error = %rm_err,
                    "Failed to remove partially written file");
            }
            return Err(e);
        }

        Ok(())
    }
}

#[async_trait]
impl Vault for PlainVault {
    async fn upload_item(
        &self,
        extension: &str,
        tags: Vec<String>,
        data: &[u8],
    ) -> Result<i64, VaultError> {
        // Classification happens before anything is persisted; it only
        // inspects the payload, so the complete original content is
        // what gets written below.
        let media_type = self.classifier.classify(data)?;
        let category = category_of(&media_type).to_string();

        // Idempotent and safe under concurrent uploads of the same category
        let category_dir = self.root.join(&category);
        fs::create_dir_all(&category_dir).await?;

        let id = item_repo::insert_item(
            self.db.pool(),
            extension,
            &category,
            &media_type,
            &tags,
        )
        .await?;

        let path = item_path(&self.root, &category, id, extension);
        if let Err(e) = Self::write_exclusive(&path, data).await {
            // The metadata row now has no backing file. Remove it on a
            // best-effort basis and surface the write failure either way.
            match item_repo::delete_item(self.db.pool(), id).await {
                Ok(_) => {
                    tracing::warn!(id, path = %path.display(), error = %e,
                        "File write failed, rolled back metadata record");
                }
                Err(db_err) => {
                    tracing::error!(id, path = %path.display(), error = %e, rollback_error = %db_err,
                        "File write failed and metadata rollback failed, orphan record left behind");
                }
            }
            return Err(VaultError::Io(e));
        }

        tracing::debug!(
            id,
            media_type,
            size = data.len(),
            path = %path.display(),
            "Item stored"
        );

        Ok(id)
    }

    async fn fetch_item(&self, id: i64) -> Result<FetchedItem, VaultError> {
        let item = item_repo::get_item(self.db.pool(), id)
            .await?
            .ok_or(VaultError::NotFound { id })?;

        let path = item_path(&self.root, &item.category, id, &item.extension);

        // Read directly; map ENOENT to Inconsistency rather than doing a
        // separate exists() check, which would be a TOCTOU race. A missing
        // file here is never a plain "not found": the metadata record
        // exists, so the invariant is violated.
        let data = fs::read(&path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                tracing::error!(id, path = %path.display(),
                    "Metadata record exists but backing file is missing");
                VaultError::Inconsistency { id, path }
            } else {
                VaultError::Io(e)
            }
        })?;

        Ok(FetchedItem {
            data,
            media_type: item.media_type,
        })
    }

    async fn list_items(&self) -> Result<Vec<Item>, VaultError> {
        Ok(item_repo::list_items(self.db.pool()).await?)
    }

    async fn close(&self) {
        self.db.close().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vault::classify::MagicClassifier;
    use tempfile::TempDir;

    const PNG_HEADER: &[u8] = &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0, 0];

    async fn setup_vault() -> (TempDir, PlainVault) {
        let temp_dir = TempDir::new().unwrap();
        let db = SqliteService::init_at(&temp_dir.path().join("test.db"))
            .await
            .unwrap();
        let vault = PlainVault::new(
            temp_dir.path().join("vault"),
            Arc::new(db),
            Arc::new(MagicClassifier),
        );
        (temp_dir, vault)
    }

    fn tags(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_item_path_derivation() {
        let path = item_path(Path::new("/vault"), "image", 7, ".png");
        assert_eq!(path, PathBuf::from("/vault/image/7.png"));

        // Empty extension: the id alone is the filename
        let path = item_path(Path::new("/vault"), "text", 3, "");
        assert_eq!(path, PathBuf::from("/vault/text/3"));
    }

    #[test]
    fn test_item_path_deterministic() {
        let a = item_path(Path::new("/base"), "audio", 12, ".mp3");
        let b = item_path(Path::new("/base"), "audio", 12, ".mp3");
        assert_eq!(a, b);
    }

    #[tokio::test]
    async fn test_upload_and_fetch_roundtrip() {
        let (temp_dir, vault) = setup_vault().await;

        let id = vault
            .upload_item(".png", tags(&["sky", "architecture"]), PNG_HEADER)
            .await
            .unwrap();
        assert_eq!(id, 1);

        let fetched = vault.fetch_item(id).await.unwrap();
        assert_eq!(fetched.data, PNG_HEADER);
        assert_eq!(fetched.media_type, "image/png");

        // Backing file sits at <root>/image/1.png
        assert!(temp_dir.path().join("vault/image/1.png").is_file());
    }

    #[tokio::test]
    async fn test_upload_empty_extension() {
        let (temp_dir, vault) = setup_vault().await;

        let id = vault
            .upload_item("", Vec::new(), b"some plain text")
            .await
            .unwrap();

        let fetched = vault.fetch_item(id).await.unwrap();
        assert_eq!(fetched.data, b"some plain text");
        assert_eq!(fetched.media_type, "text/plain");
        assert!(temp_dir.path().join(format!("vault/text/{id}")).is_file());
    }

    #[tokio::test]
    async fn test_fetch_never_assigned_id_is_not_found() {
        let (_temp_dir, vault) = setup_vault().await;

        let err = vault.fetch_item(99).await.unwrap_err();
        assert!(matches!(err, VaultError::NotFound { id: 99 }));
    }

    #[tokio::test]
    async fn test_externally_deleted_file_is_inconsistency() {
        let (temp_dir, vault) = setup_vault().await;

        let id = vault.upload_item(".png", Vec::new(), PNG_HEADER).await.unwrap();

        // Simulate an orphan record: metadata stays, bytes vanish
        std::fs::remove_file(temp_dir.path().join(format!("vault/image/{id}.png"))).unwrap();

        let err = vault.fetch_item(id).await.unwrap_err();
        assert!(matches!(err, VaultError::Inconsistency { .. }));
        assert!(err.is_storage_fault());
    }

    #[tokio::test]
    async fn test_upload_empty_payload_is_classification_fault() {
        let (_temp_dir, vault) = setup_vault().await;

        let err = vault.upload_item(".bin", Vec::new(), b"").await.unwrap_err();
        assert!(matches!(err, VaultError::Classification(_)));

        // Nothing was persisted
        assert!(vault.list_items().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_failed_write_rolls_back_metadata() {
        let (temp_dir, vault) = setup_vault().await;

        let first = vault
            .upload_item("", Vec::new(), b"first text item")
            .await
            .unwrap();

        // Occupy the path the next insert will compute, so the
        // exclusive create fails after the metadata insert succeeded.
        let next_path = temp_dir.path().join(format!("vault/text/{}", first + 1));
        std::fs::write(&next_path, b"squatter").unwrap();

        let err = vault
            .upload_item("", Vec::new(), b"second text item")
            .await
            .unwrap_err();
        assert!(matches!(err, VaultError::Io(_)));

        // The failed upload reported no id and its record was rolled back
        let items = vault.list_items().await.unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, first);

        // The file that caused the collision was not created by the
        // vault and must survive the failure untouched
        assert_eq!(std::fs::read(&next_path).unwrap(), b"squatter");
    }

    #[tokio::test]
    async fn test_listing_completeness() {
        let (_temp_dir, vault) = setup_vault().await;

        let mut uploaded = Vec::new();
        for i in 0..4 {
            let id = vault
                .upload_item(".png", tags(&[&format!("tag{i}")]), PNG_HEADER)
                .await
                .unwrap();
            uploaded.push(id);
        }

        let mut listed: Vec<i64> = vault
            .list_items()
            .await
            .unwrap()
            .iter()
            .map(|i| i.id)
            .collect();
        listed.sort_unstable();
        assert_eq!(listed, uploaded);
    }

    #[tokio::test]
    async fn test_tags_preserved_through_listing() {
        let (_temp_dir, vault) = setup_vault().await;

        let supplied = tags(&["Sky", "sky", "Sky"]);
        vault
            .upload_item(".png", supplied.clone(), PNG_HEADER)
            .await
            .unwrap();

        let items = vault.list_items().await.unwrap();
        assert_eq!(items[0].tags, supplied);
    }

    #[tokio::test]
    async fn test_concurrent_uploads_get_distinct_ids() {
        let (_temp_dir, vault) = setup_vault().await;
        let vault = Arc::new(vault);

        let mut handles = Vec::new();
        for i in 0..8 {
            let vault = Arc::clone(&vault);
            handles.push(tokio::spawn(async move {
                vault
                    .upload_item(".png", vec![format!("upload-{i}")], PNG_HEADER)
                    .await
                    .unwrap()
            }));
        }

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap());
        }

        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 8);

        // Every id has its backing file and listing matches
        assert_eq!(vault.list_items().await.unwrap().len(), 8);
    }

    #[tokio::test]
    async fn test_category_from_detected_type() {
        let (temp_dir, vault) = setup_vault().await;

        let id = vault
            .upload_item(".pdf", Vec::new(), b"%PDF-1.7 minimal")
            .await
            .unwrap();

        let items = vault.list_items().await.unwrap();
        let item = items.iter().find(|i| i.id == id).unwrap();
        assert_eq!(item.category, "application");
        assert_eq!(item.media_type, "application/pdf");
        assert!(
            temp_dir
                .path()
                .join(format!("vault/application/{id}.pdf"))
                .is_file()
        );
    }
}
