use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_MAX_FILE_SIZE_BYTES, DEFAULT_UPLOAD_DIRECTORY,
    MAX_MAX_FILE_SIZE_BYTES, MIN_MAX_FILE_SIZE_BYTES,
};

use am_core::DEFAULT_ALLOWED_EXTENSIONS;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UploadConfig {
    /// Public upload directory, relative to the working directory
    pub dir: String,
    /// Request body cap for upload endpoints
    pub max_file_size_bytes: usize,
    /// Case-sensitive extension allow-list
    pub allowed_extensions: Vec<String>,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            dir: String::from(DEFAULT_UPLOAD_DIRECTORY),
            max_file_size_bytes: DEFAULT_MAX_FILE_SIZE_BYTES,
            allowed_extensions: DEFAULT_ALLOWED_EXTENSIONS
                .iter()
                .map(|e| e.to_string())
                .collect(),
        }
    }
}

impl UploadConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let dir = std::path::Path::new(&self.dir);
        if self.dir.trim().is_empty() || dir.is_absolute() || self.dir.contains("..") {
            return Err(ConfigError::uploads(
                "uploads.dir must be a non-empty relative path and cannot contain '..'",
            ));
        }

        if !(MIN_MAX_FILE_SIZE_BYTES..=MAX_MAX_FILE_SIZE_BYTES).contains(&self.max_file_size_bytes)
        {
            return Err(ConfigError::uploads(format!(
                "uploads.max_file_size_bytes must be {}-{}, got {}",
                MIN_MAX_FILE_SIZE_BYTES, MAX_MAX_FILE_SIZE_BYTES, self.max_file_size_bytes
            )));
        }

        if self.allowed_extensions.is_empty() {
            return Err(ConfigError::uploads(
                "uploads.allowed_extensions must list at least one extension",
            ));
        }

        if let Some(bad) = self.allowed_extensions.iter().find(|e| {
            e.is_empty()
                || !e
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        }) {
            return Err(ConfigError::uploads(format!(
                "uploads.allowed_extensions entry '{}' must be lowercase ASCII letters or digits",
                bad
            )));
        }

        Ok(())
    }
}
