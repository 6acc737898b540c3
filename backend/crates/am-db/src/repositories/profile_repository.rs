//! Profile repository - record operations and the auth code gate.
//!
//! ## Lost updates
//!
//! Every read-modify-write sequence (profile update, code request, code clear)
//! runs under one async mutex shared by all clones of the repository. Two
//! requests in this process can no longer interleave and drop each other's
//! change. Writers in other processes are not coordinated.

use crate::{ProfileStore, Result as DbErrorResult};

use am_core::{AuthCode, Profile, ProfileFields};

use std::sync::Arc;

use log::info;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct ProfileRepository {
    store: Arc<dyn ProfileStore>,
    write_lock: Arc<Mutex<()>>,
}

impl ProfileRepository {
    pub fn new(store: Arc<dyn ProfileStore>) -> Self {
        Self {
            store,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn backend_name(&self) -> &'static str {
        self.store.backend_name()
    }

    /// One-time startup step; safe to repeat.
    pub async fn initialize(&self) -> DbErrorResult<()> {
        self.store.initialize().await
    }

    pub async fn read(&self) -> DbErrorResult<Profile> {
        self.store.read().await
    }

    pub async fn write(&self, profile: &Profile) -> DbErrorResult<()> {
        let _guard = self.write_lock.lock().await;
        self.store.write(profile).await
    }

    pub async fn ping(&self) -> DbErrorResult<()> {
        self.store.ping().await
    }

    /// Replace every editable field while keeping the stored auth code.
    pub async fn update_fields(&self, fields: ProfileFields) -> DbErrorResult<Profile> {
        let _guard = self.write_lock.lock().await;

        let auth_code = self.store.read().await?.auth_code;
        let profile = Profile::from_fields(fields, auth_code);
        self.store.write(&profile).await?;

        info!("Profile updated for '{}'", profile.name);
        Ok(profile)
    }

    /// Issue a fresh code and store it.
    pub async fn request_code(&self) -> DbErrorResult<AuthCode> {
        let code = AuthCode::generate();
        self.set_code(Some(code.clone())).await?;

        info!("Issued new auth code");
        Ok(code)
    }

    pub async fn clear_code(&self) -> DbErrorResult<()> {
        self.set_code(None).await?;

        info!("Auth code cleared");
        Ok(())
    }

    pub async fn read_code(&self) -> DbErrorResult<Option<AuthCode>> {
        Ok(self.store.read().await?.auth_code)
    }

    async fn set_code(&self, code: Option<AuthCode>) -> DbErrorResult<()> {
        let _guard = self.write_lock.lock().await;

        let mut profile = self.store.read().await?;
        profile.auth_code = code;
        self.store.write(&profile).await
    }
}
