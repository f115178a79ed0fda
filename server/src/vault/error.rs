//! Vault error types

use std::path::PathBuf;

use thiserror::Error;

use crate::data::sqlite::SqliteError;
use super::classify::ClassifyError;

/// Errors from vault operations
///
/// The variants keep the failing stage distinguishable: a missing
/// metadata record (`NotFound`) is a normal caller-facing condition,
/// while `Inconsistency` means metadata and filesystem disagree and an
/// operator should look at the vault.
#[derive(Error, Debug)]
pub enum VaultError {
    #[error("Item not found: {id}")]
    NotFound { id: i64 },

    #[error("Classification failed: {0}")]
    Classification(#[from] ClassifyError),

    #[error("Metadata index error: {0}")]
    Metadata(#[from] SqliteError),

    #[error("Vault IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Vault inconsistency: metadata for item {id} exists but {path} is unreadable")]
    Inconsistency { id: i64, path: PathBuf },
}

impl VaultError {
    /// True for persistence and filesystem failures (including the
    /// inconsistency case), false for NotFound and classification
    /// rejections.
    pub fn is_storage_fault(&self) -> bool {
        matches!(
            self,
            Self::Metadata(_) | Self::Io(_) | Self::Inconsistency { .. }
        )
    }
}
