pub mod error;
pub mod fs;
pub mod repositories;
pub mod stores;
pub mod uploads;

pub use error::{DbError, Result};
pub use repositories::profile_repository::ProfileRepository;
pub use stores::json_file_profile_store::JsonFileProfileStore;
pub use stores::profile_store::ProfileStore;
pub use stores::sqlite_profile_store::SqliteProfileStore;
pub use uploads::upload_store::UploadStore;
