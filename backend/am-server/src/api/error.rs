//! REST API error types
//!
//! Every failure leaves the server as a JSON body with a machine-readable
//! code and the matching HTTP status.

use am_db::DbError;

use std::panic::Location;

use axum::{
    Json,
    extract::{OriginalUri, multipart::MultipartError},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

/// Inner error body with code and message
#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    /// Machine-readable error code (e.g., "NOT_FOUND", "CORRUPT_RECORD")
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Resource not found (404)
    #[error("Resource not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// Bad request (400)
    #[error("Bad request: {message} {location}")]
    BadRequest {
        message: String,
        location: ErrorLocation,
    },

    /// Upload body over the configured cap (413)
    #[error("Payload too large: {message} {location}")]
    PayloadTooLarge {
        message: String,
        location: ErrorLocation,
    },

    /// No profile record has been stored yet (500)
    #[error("Store uninitialized: {message} {location}")]
    StoreUninitialized {
        message: String,
        location: ErrorLocation,
    },

    /// Stored profile record cannot be parsed (500)
    #[error("Corrupt record: {message} {location}")]
    CorruptRecord {
        message: String,
        location: ErrorLocation,
    },

    /// Internal server error (500)
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            ApiError::PayloadTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::StoreUninitialized { .. }
            | ApiError::CorruptRecord { .. }
            | ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            ApiError::NotFound { .. } => "NOT_FOUND",
            ApiError::BadRequest { .. } => "BAD_REQUEST",
            ApiError::PayloadTooLarge { .. } => "PAYLOAD_TOO_LARGE",
            ApiError::StoreUninitialized { .. } => "STORE_UNINITIALIZED",
            ApiError::CorruptRecord { .. } => "CORRUPT_RECORD",
            ApiError::Internal { .. } => "INTERNAL_ERROR",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Log the error with location for debugging
        log::error!("{}", self);

        let status = self.status();
        let code = self.code().to_string();

        let message = match self {
            ApiError::NotFound { message, .. }
            | ApiError::BadRequest { message, .. }
            | ApiError::PayloadTooLarge { message, .. }
            | ApiError::StoreUninitialized { message, .. }
            | ApiError::CorruptRecord { message, .. }
            | ApiError::Internal { message, .. } => message,
        };

        (
            status,
            Json(ApiErrorResponse {
                error: ApiErrorBody { code, message },
            }),
        )
            .into_response()
    }
}

/// Convert database errors to API errors
impl From<DbError> for ApiError {
    #[track_caller]
    fn from(e: DbError) -> Self {
        let location = ErrorLocation::from(Location::caller());

        match e {
            DbError::Uninitialized { message, .. } => ApiError::StoreUninitialized {
                message: format!("Profile store is not initialized: {}", message),
                location,
            },
            DbError::CorruptRecord { message, .. } => ApiError::CorruptRecord {
                message: format!("Stored profile record is corrupt: {}", message),
                location,
            },
            other => {
                // Don't expose storage internals to clients
                log::error!("Storage error: {}", other);
                ApiError::Internal {
                    message: "Storage operation failed".to_string(),
                    location,
                }
            }
        }
    }
}

/// Oversize bodies become 413; anything else in a broken multipart stream is a 400.
impl From<MultipartError> for ApiError {
    #[track_caller]
    fn from(e: MultipartError) -> Self {
        let location = ErrorLocation::from(Location::caller());

        if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
            ApiError::PayloadTooLarge {
                message: e.body_text(),
                location,
            }
        } else {
            ApiError::BadRequest {
                message: e.body_text(),
                location,
            }
        }
    }
}

/// Fallback for unknown routes and missing uploaded files
pub async fn not_found(OriginalUri(uri): OriginalUri) -> ApiError {
    ApiError::NotFound {
        message: format!("{} not found", uri.path()),
        location: ErrorLocation::from(Location::caller()),
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
