//! Upload directory with three fixed image slots.
//!
//! Files are only ever written under names that passed `secure_filename`,
//! so nothing can land outside the directory.

use crate::fs::write_atomic;
use crate::{DbError, Result as DbErrorResult};

use am_core::{UploadSlot, has_allowed_extension, secure_filename};

use std::path::{Path, PathBuf};

use log::{info, warn};

#[derive(Debug, Clone)]
pub struct UploadStore {
    dir: PathBuf,
    allowed_extensions: Vec<String>,
}

impl UploadStore {
    pub fn new(dir: impl Into<PathBuf>, allowed_extensions: Vec<String>) -> Self {
        Self {
            dir: dir.into(),
            allowed_extensions,
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Create the upload directory if it is missing.
    pub async fn initialize(&self) -> DbErrorResult<()> {
        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| DbError::io(&self.dir, e))
    }

    /// The safe on-disk name for `original`, or None if the upload must be refused.
    pub fn accepted_name(&self, original: &str) -> Option<String> {
        if !has_allowed_extension(original, &self.allowed_extensions) {
            return None;
        }

        secure_filename(original)
    }

    /// Store `bytes` in `slot` if `original` passes validation.
    ///
    /// Returns the written path, or None when the upload was refused and the
    /// slot was left untouched.
    pub async fn store_in_slot(
        &self,
        slot: UploadSlot,
        original: &str,
        bytes: &[u8],
    ) -> DbErrorResult<Option<PathBuf>> {
        if self.accepted_name(original).is_none() {
            warn!("Rejected upload '{}' for slot {}", original, slot);
            return Ok(None);
        }

        let path = self.dir.join(slot.file_name());
        write_atomic(&path, bytes).await?;

        info!("Stored {} bytes in slot {}", bytes.len(), slot);
        Ok(Some(path))
    }

    /// Store `bytes` under the sanitized form of `original`.
    ///
    /// Returns the stored file name, or None when the upload was refused.
    pub async fn store_named(&self, original: &str, bytes: &[u8]) -> DbErrorResult<Option<String>> {
        let Some(name) = self.accepted_name(original) else {
            warn!("Rejected upload '{}'", original);
            return Ok(None);
        };

        write_atomic(&self.dir.join(&name), bytes).await?;

        info!("Stored {} bytes as {}", bytes.len(), name);
        Ok(Some(name))
    }
}
