//! Data layer: the SQLite metadata index and its row types

pub mod sqlite;
pub mod types;

pub use sqlite::{SqliteError, SqliteService};
pub use types::Item;
