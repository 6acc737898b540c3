//! Flat JSON file profile store.

use crate::fs::write_atomic;
use crate::{DbError, ProfileStore, Result as DbErrorResult};

use am_core::Profile;

use std::io::ErrorKind;
use std::panic::Location;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use error_location::ErrorLocation;

#[derive(Debug, Clone)]
pub struct JsonFileProfileStore {
    path: PathBuf,
}

impl JsonFileProfileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn write_document(&self, profile: &Profile) -> DbErrorResult<()> {
        let document = serde_json::to_vec_pretty(profile)?;
        write_atomic(&self.path, &document).await
    }
}

#[async_trait]
impl ProfileStore for JsonFileProfileStore {
    async fn initialize(&self) -> DbErrorResult<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| DbError::io(parent, e))?;
        }

        match tokio::fs::try_exists(&self.path).await {
            Ok(true) => Ok(()),
            Ok(false) => {
                self.write_document(&Profile::default()).await?;
                log::info!("Seeded empty profile record at {}", self.path.display());
                Ok(())
            }
            Err(e) => Err(DbError::io(&self.path, e)),
        }
    }

    async fn read(&self) -> DbErrorResult<Profile> {
        let contents = match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(DbError::Uninitialized {
                    message: format!("{} does not exist", self.path.display()),
                    location: ErrorLocation::from(Location::caller()),
                });
            }
            Err(e) => return Err(DbError::io(&self.path, e)),
        };

        if contents.trim().is_empty() {
            return Err(DbError::Uninitialized {
                message: format!("{} is empty", self.path.display()),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        serde_json::from_str(&contents).map_err(|e| DbError::CorruptRecord {
            message: format!("{}: {}", self.path.display(), e),
            location: ErrorLocation::from(Location::caller()),
        })
    }

    async fn write(&self, profile: &Profile) -> DbErrorResult<()> {
        self.write_document(profile).await
    }

    async fn ping(&self) -> DbErrorResult<()> {
        tokio::fs::metadata(&self.path)
            .await
            .map(|_| ())
            .map_err(|e| DbError::io(&self.path, e))
    }

    fn backend_name(&self) -> &'static str {
        "json_file"
    }
}
