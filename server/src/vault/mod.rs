//! Vault storage core
//!
//! Orchestrates classification, placement, and the coupled write of
//! bytes + metadata; provides lookup for retrieval.
//!
//! ## Architecture
//!
//! - `storage` - `Vault` trait definition (the seam for alternative backends)
//! - `plain` - filesystem-backed implementation
//! - `classify` - content-type detection collaborator
//! - `error` - error taxonomy
//!
//! ## Storage Layout
//!
//! One file per item, placed by detected content category:
//! ```text
//! {vault_root}/
//! ├── image/
//! │   ├── 1.png
//! │   └── 4.jpg
//! └── text/
//!     └── 2.txt
//! ```
//!
//! The path is fully determined by `(vault_root, category, id,
//! extension)` and never stored; the metadata index and the path
//! derivation must therefore never disagree. A detected disagreement
//! surfaces as [`VaultError::Inconsistency`].

pub mod classify;
pub mod error;
pub mod plain;
pub mod storage;

pub use classify::{Classifier, ClassifyError, MagicClassifier};
pub use error::VaultError;
pub use plain::{PlainVault, item_path};
pub use storage::{FetchedItem, Vault};
