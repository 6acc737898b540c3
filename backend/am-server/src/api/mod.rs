pub mod auth_code;
pub mod error;
pub mod extractors;
pub mod profile;
pub mod uploads;
