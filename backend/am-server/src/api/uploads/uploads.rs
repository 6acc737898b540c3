//! Upload handlers
//!
//! A refused or missing file writes nothing and redirects to the profile
//! page exactly like a successful slot upload does.

use crate::{ApiError, ApiResult, AppState, UploadedFile};

use am_core::UploadSlot;

use axum::{
    extract::{Multipart, State, multipart::MultipartRejection},
    http::StatusCode,
    response::Redirect,
};
use log::warn;

const PROFILE_PAGE: &str = "/";

/// Rejected bodies (wrong content type, bad boundary) still reach the handler.
type MultipartResult = Result<Multipart, MultipartRejection>;

/// POST /_upload_photos
///
/// Store under the sanitized client filename, then redirect to its URL
pub async fn upload_photos(
    State(state): State<AppState>,
    multipart: MultipartResult,
) -> ApiResult<Redirect> {
    let Some(file) = read_upload(multipart).await? else {
        return Ok(Redirect::to(PROFILE_PAGE));
    };

    match state.uploads.store_named(&file.file_name, &file.bytes).await? {
        Some(name) => Ok(Redirect::to(&format!("/uploads/{}", name))),
        None => Ok(Redirect::to(PROFILE_PAGE)),
    }
}

/// POST /upload_001
pub async fn upload_001(state: State<AppState>, multipart: MultipartResult) -> ApiResult<Redirect> {
    upload_to_slot(state, UploadSlot::One, multipart).await
}

/// POST /upload_002
pub async fn upload_002(state: State<AppState>, multipart: MultipartResult) -> ApiResult<Redirect> {
    upload_to_slot(state, UploadSlot::Two, multipart).await
}

/// POST /upload_003
pub async fn upload_003(state: State<AppState>, multipart: MultipartResult) -> ApiResult<Redirect> {
    upload_to_slot(state, UploadSlot::Three, multipart).await
}

async fn upload_to_slot(
    State(state): State<AppState>,
    slot: UploadSlot,
    multipart: MultipartResult,
) -> ApiResult<Redirect> {
    if let Some(file) = read_upload(multipart).await? {
        state
            .uploads
            .store_in_slot(slot, &file.file_name, &file.bytes)
            .await?;
    }

    Ok(Redirect::to(PROFILE_PAGE))
}

/// Malformed multipart bodies count as "no file"; an oversize body does not.
async fn read_upload(multipart: MultipartResult) -> ApiResult<Option<UploadedFile>> {
    let multipart = match multipart {
        Ok(multipart) => multipart,
        Err(rejection) => {
            warn!("Ignoring non-multipart upload: {}", rejection.body_text());
            return Ok(None);
        }
    };

    match UploadedFile::from_multipart(multipart).await {
        Ok(file) => Ok(file),
        Err(e) if e.status() == StatusCode::PAYLOAD_TOO_LARGE => Err(ApiError::from(e)),
        Err(e) => {
            warn!("Ignoring malformed upload: {}", e.body_text());
            Ok(None)
        }
    }
}
