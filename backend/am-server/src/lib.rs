pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod pages;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    auth_code::auth_code::{clear_code, request_code},
    error::{ApiError, not_found},
    error::Result as ApiResult,
    extractors::profile_query::ProfileQuery,
    profile::{
        demo_values_response::DemoValuesResponse,
        profile::{demo_values, patient_info, update_server},
        update_result_response::UpdateResultResponse,
    },
    uploads::{
        uploaded_file::UploadedFile,
        uploads::{upload_001, upload_002, upload_003, upload_photos},
    },
};
pub use app_state::AppState;
pub use error::{Result as ServerResult, ServerError};

pub use crate::routes::build_router;
