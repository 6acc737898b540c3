#![allow(dead_code)]

//! Test infrastructure for am-server router tests

use am_core::Profile;
use am_db::{DbError, ProfileRepository, ProfileStore, SqliteProfileStore, UploadStore};
use am_server::AppState;

use std::panic::Location;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, Response},
};
use error_location::ErrorLocation;
use http_body_util::BodyExt;
use tempfile::TempDir;

pub const BOUNDARY: &str = "----aboutme-test-boundary";

/// Minimal PNG signature plus IHDR chunk start
pub const PNG_BYTES: &[u8] = &[
    0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44, 0x52,
];

pub const TEST_MAX_UPLOAD_BYTES: usize = 64 * 1024;

/// App state over a temp SQLite file and a temp upload dir.
/// Keep the TempDir alive for the duration of the test.
pub struct TestApp {
    pub temp: TempDir,
    pub state: AppState,
}

impl TestApp {
    pub fn upload_dir(&self) -> PathBuf {
        self.state.uploads.dir().to_path_buf()
    }
}

pub async fn create_test_app() -> TestApp {
    let temp = TempDir::new().expect("Failed to create temp dir");

    let store = SqliteProfileStore::connect(&temp.path().join("aboutme.db"))
        .await
        .expect("Failed to open test database");
    let profiles = ProfileRepository::new(Arc::new(store));
    profiles
        .initialize()
        .await
        .expect("Failed to initialize store");

    let uploads = create_upload_store(temp.path());
    uploads
        .initialize()
        .await
        .expect("Failed to create upload dir");

    let state = AppState::new(profiles, uploads, TEST_MAX_UPLOAD_BYTES);
    TestApp { temp, state }
}

/// App state whose store fails the way the test asks it to
pub async fn create_broken_app(failure: StoreFailure) -> TestApp {
    let temp = TempDir::new().expect("Failed to create temp dir");

    let profiles = ProfileRepository::new(Arc::new(BrokenStore { failure }));
    let uploads = create_upload_store(temp.path());
    uploads
        .initialize()
        .await
        .expect("Failed to create upload dir");

    let state = AppState::new(profiles, uploads, TEST_MAX_UPLOAD_BYTES);
    TestApp { temp, state }
}

fn create_upload_store(root: &Path) -> UploadStore {
    UploadStore::new(root.join("static"), vec!["png".to_string()])
}

#[derive(Debug, Clone, Copy)]
pub enum StoreFailure {
    /// Reads work, every write fails
    ReadOnly,
    /// Nothing has been stored yet
    Uninitialized,
    /// Stored document cannot be parsed
    Corrupt,
}

struct BrokenStore {
    failure: StoreFailure,
}

#[async_trait]
impl ProfileStore for BrokenStore {
    async fn initialize(&self) -> am_db::Result<()> {
        Ok(())
    }

    async fn read(&self) -> am_db::Result<Profile> {
        match self.failure {
            StoreFailure::ReadOnly => Ok(Profile::default()),
            StoreFailure::Uninitialized => Err(DbError::Uninitialized {
                message: "no profile record".to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
            StoreFailure::Corrupt => Err(DbError::CorruptRecord {
                message: "expected value at line 1 column 1".to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }

    async fn write(&self, _profile: &Profile) -> am_db::Result<()> {
        Err(DbError::io(
            "aboutme.json",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
        ))
    }

    async fn ping(&self) -> am_db::Result<()> {
        Err(DbError::io(
            "aboutme.json",
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        ))
    }

    fn backend_name(&self) -> &'static str {
        "broken"
    }
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// POST a single `file` field. `None` sends the field without a filename.
pub fn multipart_upload(uri: &str, file_name: Option<&str>, bytes: &[u8]) -> Request<Body> {
    let disposition = match file_name {
        Some(name) => format!(
            "Content-Disposition: form-data; name=\"file\"; filename=\"{}\"\r\n",
            name
        ),
        None => "Content-Disposition: form-data; name=\"file\"\r\n".to_string(),
    };

    let mut body = Vec::new();
    body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
    body.extend_from_slice(disposition.as_bytes());
    body.extend_from_slice(b"Content-Type: application/octet-stream\r\n\r\n");
    body.extend_from_slice(bytes);
    body.extend_from_slice(format!("\r\n--{}--\r\n", BOUNDARY).as_bytes());

    Request::builder()
        .method("POST")
        .uri(uri)
        .header(
            "content-type",
            format!("multipart/form-data; boundary={}", BOUNDARY),
        )
        .body(Body::from(body))
        .unwrap()
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_text(response: Response<Body>) -> String {
    String::from_utf8(body_bytes(response).await).unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

pub fn location(response: &Response<Body>) -> &str {
    response.headers()["location"].to_str().unwrap()
}
