//! TagVault server
//!
//! A small media vault: clients upload files with free-form tags, the
//! server classifies each file by content, stores the bytes on disk
//! under a type-derived path, and records metadata in SQLite.
//!
//! Layering:
//! - `core` - bootstrap, CLI, config, data directories, shutdown
//! - `data` - SQLite metadata index (pool, schema, repositories)
//! - `vault` - the storage core: classification, placement, coupled
//!   metadata + byte writes, retrieval
//! - `api` - thin axum translation layer over the vault

pub mod api;
mod app;
pub mod core;
pub mod data;
pub mod vault;
