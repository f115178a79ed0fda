//! Shared API types
//!
//! Error responses and the translation from vault errors to HTTP
//! statuses. Storage faults are logged with full detail but surfaced
//! to clients with a generic message.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::vault::VaultError;

/// Standard API error response
#[derive(Debug)]
pub enum ApiError {
    BadRequest { code: String, message: String },
    NotFound { code: String, message: String },
    UnsupportedContent { code: String, message: String },
    Internal { message: String },
}

impl ApiError {
    pub fn bad_request(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::BadRequest {
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn not_found(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::NotFound {
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

impl From<VaultError> for ApiError {
    fn from(e: VaultError) -> Self {
        match e {
            VaultError::NotFound { id } => Self::NotFound {
                code: "ITEM_NOT_FOUND".to_string(),
                message: format!("Item not found: {}", id),
            },
            VaultError::Classification(err) => Self::UnsupportedContent {
                code: "UNCLASSIFIABLE".to_string(),
                message: err.to_string(),
            },
            e => {
                // Metadata, IO, or inconsistency faults: operator detail
                // goes to the log, not the client
                tracing::error!(error = %e, "Vault storage fault");
                Self::Internal {
                    message: "Vault operation failed".to_string(),
                }
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, code, message) = match self {
            Self::BadRequest { code, message } => {
                (StatusCode::BAD_REQUEST, "bad_request", code, message)
            }
            Self::NotFound { code, message } => (StatusCode::NOT_FOUND, "not_found", code, message),
            Self::UnsupportedContent { code, message } => (
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
                "unsupported_content",
                code,
                message,
            ),
            Self::Internal { message } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                "INTERNAL".to_string(),
                message,
            ),
        };
        (
            status,
            Json(serde_json::json!({
                "error": error_type,
                "code": code,
                "message": message
            })),
        )
            .into_response()
    }
}
