use crate::{
    AppState, clear_code, demo_values, health, not_found, pages, patient_info, request_code,
    update_server, upload_001, upload_002, upload_003, upload_photos,
};

use axum::{
    Router,
    extract::DefaultBodyLimit,
    handler::HandlerWithoutStateExt,
    middleware,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    // Pages always carry the no-cache header set
    let pages = Router::new()
        .route("/", get(pages::index))
        .route("/room", get(pages::room))
        .route_layer(middleware::from_fn(pages::no_cache));

    Router::new()
        .merge(pages)
        // Profile endpoints
        .route("/vals", get(demo_values))
        .route("/patient_info", get(patient_info))
        .route("/_update_server", get(update_server))
        // Auth code endpoints
        .route("/request_code", get(request_code))
        .route("/clear_code", get(clear_code))
        // Upload endpoints
        .route("/_upload_photos", post(upload_photos))
        .route("/upload_001", post(upload_001))
        .route("/upload_002", post(upload_002))
        .route("/upload_003", post(upload_003))
        // Health check endpoints
        .route("/health", get(health::health))
        .route("/live", get(health::liveness))
        .route("/ready", get(health::readiness))
        // Uploaded files, served verbatim; misses get the JSON 404
        .nest_service(
            "/uploads",
            ServeDir::new(state.uploads.dir()).not_found_service(not_found.into_service()),
        )
        .fallback(not_found)
        .layer(DefaultBodyLimit::max(state.max_upload_bytes))
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
