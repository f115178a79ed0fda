//! Item endpoints
//!
//! Listing, multipart upload, and raw content retrieval. This layer
//! only translates between HTTP and the vault; all invariants live in
//! the vault itself.

use std::sync::Arc;

use axum::body::Body;
use axum::extract::{Multipart, Path, State};
use axum::http::{HeaderMap, header};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::api::types::ApiError;
use crate::data::types::Item;
use crate::vault::Vault;

/// Shared state for item routes
#[derive(Clone)]
pub struct ItemsApiState {
    pub vault: Arc<dyn Vault>,
}

#[derive(Serialize)]
pub struct UploadResponse {
    pub id: i64,
}

/// File suffix of an uploaded filename, leading dot included
///
/// Mirrors the derivation used for the stored path: the last
/// dot-separated suffix, or empty when the name has none. Separator
/// characters disqualify the suffix so a hostile filename can never
/// influence the directory part of the storage path.
fn extension_of(filename: &str) -> &str {
    match filename.rfind('.') {
        Some(idx) => {
            let ext = &filename[idx..];
            if ext[1..].contains(['.', '/', '\\']) || ext.len() == 1 {
                ""
            } else {
                ext
            }
        }
        None => "",
    }
}

/// List all stored items with their tags
pub async fn list_items(
    State(state): State<ItemsApiState>,
) -> Result<Json<Vec<Item>>, ApiError> {
    let items = state.vault.list_items().await?;
    Ok(Json(items))
}

/// Upload one file with its tags
///
/// Expects a multipart form with a `tags` field (JSON array of
/// strings) and a `file` field. Responds with the assigned id.
pub async fn upload_item(
    State(state): State<ItemsApiState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, ApiError> {
    let mut tags: Vec<String> = Vec::new();
    let mut upload: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        ApiError::bad_request("INVALID_MULTIPART", format!("Malformed multipart body: {}", e))
    })? {
        let name = field.name().map(|s| s.to_string());
        match name.as_deref() {
            Some("tags") => {
                let raw = field.text().await.map_err(|e| {
                    ApiError::bad_request("INVALID_MULTIPART", e.to_string())
                })?;
                tags = serde_json::from_str(&raw).map_err(|_| {
                    ApiError::bad_request(
                        "INVALID_TAGS",
                        "tags must be a JSON array of strings",
                    )
                })?;
            }
            Some("file") => {
                let filename = field.file_name().unwrap_or_default().to_string();
                let data = field.bytes().await.map_err(|e| {
                    ApiError::bad_request("INVALID_MULTIPART", e.to_string())
                })?;
                upload = Some((filename, data.to_vec()));
            }
            _ => {}
        }
    }

    let Some((filename, data)) = upload else {
        return Err(ApiError::bad_request("MISSING_FILE", "No file to upload"));
    };

    let extension = extension_of(&filename);
    let id = state.vault.upload_item(extension, tags, &data).await?;

    Ok(Json(UploadResponse { id }))
}

/// Serve an item's raw bytes with its stored content type
pub async fn get_item_content(
    State(state): State<ItemsApiState>,
    Path(id): Path<i64>,
) -> Result<Response, ApiError> {
    let fetched = state.vault.fetch_item(id).await?;

    let mut headers = HeaderMap::new();
    let content_type = header::HeaderValue::from_str(&fetched.media_type)
        .unwrap_or_else(|_| header::HeaderValue::from_static("application/octet-stream"));
    headers.insert(header::CONTENT_TYPE, content_type);
    headers.insert(
        header::CONTENT_LENGTH,
        header::HeaderValue::from(fetched.data.len()),
    );

    Ok((headers, Body::from(fetched.data)).into_response())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_of_simple() {
        assert_eq!(extension_of("photo.png"), ".png");
        assert_eq!(extension_of("archive.tar.gz"), ".gz");
    }

    #[test]
    fn test_extension_of_none() {
        assert_eq!(extension_of("README"), "");
        assert_eq!(extension_of(""), "");
    }

    #[test]
    fn test_extension_of_trailing_dot() {
        assert_eq!(extension_of("weird."), "");
    }

    #[test]
    fn test_extension_of_rejects_separators() {
        assert_eq!(extension_of("evil.ext/../../x"), "");
        assert_eq!(extension_of("evil.a\\b"), "");
    }
}
