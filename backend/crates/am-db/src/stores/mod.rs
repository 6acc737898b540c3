pub mod json_file_profile_store;
pub mod profile_store;
pub mod sqlite_profile_store;
