//! Profile REST handlers

use crate::{ApiResult, AppState, DemoValuesResponse, ProfileQuery, UpdateResultResponse};

use am_core::Profile;

use axum::{Json, extract::State};

/// GET /vals
///
/// Fixed demo payload, unrelated to the stored profile
pub async fn demo_values() -> Json<DemoValuesResponse> {
    Json(DemoValuesResponse::default())
}

/// GET /patient_info
///
/// The stored profile record
pub async fn patient_info(State(state): State<AppState>) -> ApiResult<Json<Profile>> {
    let profile = state.profiles.read().await?;
    Ok(Json(profile))
}

/// GET /_update_server?name=..&aboutme_001=..&goals_001=..
///
/// Replace every editable field; missing parameters become empty strings and
/// the stored auth code is kept. Success is reported only after the write.
/// An undecodable query gets a JSON 400.
pub async fn update_server(
    State(state): State<AppState>,
    ProfileQuery(fields): ProfileQuery,
) -> ApiResult<Json<UpdateResultResponse>> {
    state.profiles.update_fields(fields).await?;
    Ok(Json(UpdateResultResponse::success()))
}
