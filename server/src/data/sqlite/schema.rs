//! SQLite schema definitions
//!
//! Initial schema with all tables. Future changes go through the
//! migration runner in `migrations`.

/// Current schema version
pub const SCHEMA_VERSION: i32 = 1;

/// Complete schema SQL
///
/// `AUTOINCREMENT` on `items.id` makes id allocation strictly
/// monotonic for the life of the index: rowids are never reused, even
/// after an administrative delete.
pub const SCHEMA: &str = r#"
-- =============================================================================
-- Infrastructure: Schema version tracking
-- =============================================================================
CREATE TABLE IF NOT EXISTS schema_version (
    id INTEGER PRIMARY KEY CHECK (id = 1),
    version INTEGER NOT NULL,
    applied_at INTEGER NOT NULL,
    description TEXT
);

-- =============================================================================
-- Items: one row per stored file
-- =============================================================================
CREATE TABLE IF NOT EXISTS items (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    extension TEXT NOT NULL DEFAULT '',
    category TEXT NOT NULL,
    media_type TEXT NOT NULL,
    tags TEXT NOT NULL DEFAULT '[]',
    created_at INTEGER NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_items_category ON items(category);
"#;
