//! SQLite repositories
//!
//! Row types (Item) should be imported from `crate::data::types`.

pub mod item;

pub use item::{delete_item, get_item, insert_item, list_items};
