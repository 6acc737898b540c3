pub mod error;
pub mod models;
pub mod uploads;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result};
pub use models::auth_code::AuthCode;
pub use models::profile::Profile;
pub use models::profile_fields::ProfileFields;
pub use models::upload_slot::UploadSlot;
pub use uploads::filename::{has_allowed_extension, secure_filename};

/// Extensions accepted when no explicit allow-list is configured.
pub const DEFAULT_ALLOWED_EXTENSIONS: &[&str] = &["png"];
