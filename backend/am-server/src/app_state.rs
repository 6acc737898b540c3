//! Shared handler state.

use crate::ServerResult;

use am_config::{Config, DatabaseBackend};
use am_db::{JsonFileProfileStore, ProfileRepository, ProfileStore, SqliteProfileStore, UploadStore};

use std::sync::Arc;

use log::info;

#[derive(Clone)]
pub struct AppState {
    pub profiles: ProfileRepository,
    pub uploads: UploadStore,
    /// Body limit applied to every route
    pub max_upload_bytes: usize,
}

impl AppState {
    pub fn new(profiles: ProfileRepository, uploads: UploadStore, max_upload_bytes: usize) -> Self {
        Self {
            profiles,
            uploads,
            max_upload_bytes,
        }
    }

    /// Open the configured record store, seed it, and prepare the upload directory.
    pub async fn from_config(config: &Config) -> ServerResult<Self> {
        let path = config.database_path()?;

        let store: Arc<dyn ProfileStore> = match config.database.backend {
            DatabaseBackend::Sqlite => {
                info!("Opening SQLite profile store: {}", path.display());
                Arc::new(SqliteProfileStore::connect(&path).await?)
            }
            DatabaseBackend::JsonFile => {
                info!("Opening JSON profile store: {}", path.display());
                Arc::new(JsonFileProfileStore::new(path))
            }
        };

        let profiles = ProfileRepository::new(store);
        profiles.initialize().await?;
        info!("Profile store ready ({})", profiles.backend_name());

        let uploads = UploadStore::new(
            config.upload_dir(),
            config.uploads.allowed_extensions.clone(),
        );
        uploads.initialize().await?;
        info!("Upload directory ready: {}", uploads.dir().display());

        Ok(Self::new(
            profiles,
            uploads,
            config.uploads.max_file_size_bytes,
        ))
    }
}
