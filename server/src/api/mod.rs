//! HTTP translation layer
//!
//! Routes, error mapping, and server startup. All vault invariants
//! live below this layer; handlers only parse requests and translate
//! [`crate::vault::VaultError`] into HTTP statuses.

pub mod routes;
pub mod server;
pub mod types;

pub use server::{ApiServer, build_router};
pub use types::ApiError;
