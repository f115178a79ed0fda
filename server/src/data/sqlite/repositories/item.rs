//! Item repository for SQLite operations
//!
//! The metadata index: maps an item id to its placement (extension,
//! category, MIME type) and its tag list. Tags are stored as a JSON
//! array and round-trip exactly - no reordering, no deduplication, no
//! case normalization.

use sqlx::SqlitePool;

use crate::data::sqlite::SqliteError;
use crate::data::types::Item;

type ItemTuple = (i64, String, String, String, String, i64);

fn decode_row(
    (id, extension, category, media_type, tags_json, created_at): ItemTuple,
) -> Result<Item, SqliteError> {
    let tags: Vec<String> = serde_json::from_str(&tags_json)?;
    Ok(Item {
        id,
        extension,
        category,
        media_type,
        tags,
        created_at,
    })
}

/// Insert a new item record and return the database-assigned id
///
/// Uses `INSERT ... RETURNING` so id allocation is atomic: concurrent
/// inserts always receive distinct, strictly increasing ids.
pub async fn insert_item(
    pool: &SqlitePool,
    extension: &str,
    category: &str,
    media_type: &str,
    tags: &[String],
) -> Result<i64, SqliteError> {
    let tags_json = serde_json::to_string(tags)?;
    let now = chrono::Utc::now().timestamp();

    let result: (i64,) = sqlx::query_as(
        r#"
        INSERT INTO items (extension, category, media_type, tags, created_at)
        VALUES (?, ?, ?, ?, ?)
        RETURNING id
        "#,
    )
    .bind(extension)
    .bind(category)
    .bind(media_type)
    .bind(&tags_json)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(result.0)
}

/// Get an item by id
///
/// Returns a single-row read: every field of the result comes from the
/// same underlying row, so a record can never be observed torn.
pub async fn get_item(pool: &SqlitePool, id: i64) -> Result<Option<Item>, SqliteError> {
    let row: Option<ItemTuple> = sqlx::query_as(
        r#"
        SELECT id, extension, category, media_type, tags, created_at
        FROM items
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    row.map(decode_row).transpose()
}

/// List every item with its tags fully decoded
///
/// Order is unspecified but stable within a single call.
pub async fn list_items(pool: &SqlitePool) -> Result<Vec<Item>, SqliteError> {
    let rows: Vec<ItemTuple> = sqlx::query_as(
        r#"
        SELECT id, extension, category, media_type, tags, created_at
        FROM items
        "#,
    )
    .fetch_all(pool)
    .await?;

    rows.into_iter().map(decode_row).collect()
}

/// Delete an item record
///
/// Only used as compensating rollback when the byte write failed after
/// a successful insert. Returns whether a row was removed.
pub async fn delete_item(pool: &SqlitePool, id: i64) -> Result<bool, SqliteError> {
    let result = sqlx::query("DELETE FROM items WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
