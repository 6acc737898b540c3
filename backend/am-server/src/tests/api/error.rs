use crate::{ApiError, not_found};

use am_db::DbError;

use std::panic::Location;

use axum::{extract::OriginalUri, response::IntoResponse};
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;

async fn error_json(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_not_found_returns_404_with_json_body() {
    let error = ApiError::NotFound {
        message: "File not found".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = error_json(error).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"]["code"], "NOT_FOUND");
    assert_eq!(json["error"]["message"], "File not found");
}

#[tokio::test]
async fn test_bad_request_returns_400() {
    let error = ApiError::BadRequest {
        message: "Malformed query".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = error_json(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_payload_too_large_returns_413() {
    let error = ApiError::PayloadTooLarge {
        message: "length limit exceeded".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = error_json(error).await;

    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(json["error"]["code"], "PAYLOAD_TOO_LARGE");
}

#[tokio::test]
async fn test_uninitialized_store_maps_to_500_with_distinct_code() {
    let db_error = DbError::Uninitialized {
        message: "no profile row".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = error_json(ApiError::from(db_error)).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"]["code"], "STORE_UNINITIALIZED");
}

#[tokio::test]
async fn test_corrupt_record_maps_to_500_with_distinct_code() {
    let db_error = DbError::CorruptRecord {
        message: "expected value at line 1".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = error_json(ApiError::from(db_error)).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"]["code"], "CORRUPT_RECORD");
}

#[tokio::test]
async fn test_not_found_handler_names_the_path() {
    let error = not_found(OriginalUri("/uploads/missing.png".parse().unwrap())).await;

    let (status, json) = error_json(error).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"]["code"], "NOT_FOUND");
    assert_eq!(json["error"]["message"], "/uploads/missing.png not found");
}

#[tokio::test]
async fn test_io_error_hides_details_from_client() {
    let db_error = DbError::io("/var/lib/aboutme.json", std::io::Error::other("disk full"));

    let (status, json) = error_json(ApiError::from(db_error)).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
    let message = json["error"]["message"].as_str().unwrap();
    assert!(!message.contains("disk full"));
    assert!(!message.contains("/var/lib"));
}
