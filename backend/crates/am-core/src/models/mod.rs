pub mod auth_code;
pub mod profile;
pub mod profile_fields;
pub mod upload_slot;
