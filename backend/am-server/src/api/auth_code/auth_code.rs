//! Auth code handlers. Both answer in plain text.

use crate::{ApiResult, AppState};

use axum::extract::State;

/// GET /request_code
pub async fn request_code(State(state): State<AppState>) -> ApiResult<String> {
    let code = state.profiles.request_code().await?;
    Ok(code.to_string())
}

/// GET /clear_code
pub async fn clear_code(State(state): State<AppState>) -> ApiResult<&'static str> {
    state.profiles.clear_code().await?;
    Ok("cleared")
}
