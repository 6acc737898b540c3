mod config;
mod database_config;
mod error;
mod log_level;
mod logging_config;
mod server_config;
mod upload_config;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use database_config::{DatabaseBackend, DatabaseConfig};
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;
pub use upload_config::UploadConfig;

const CONFIG_DIR_ENV: &str = "AM_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".aboutme";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 5000;
const MIN_PORT: u16 = 1024;

const DEFAULT_DATABASE_FILENAME: &str = "aboutme.db";
const DEFAULT_JSON_FILENAME: &str = "aboutme.json";

const DEFAULT_UPLOAD_DIRECTORY: &str = "static";
const DEFAULT_MAX_FILE_SIZE_BYTES: usize = 16 * 1024 * 1024;
const MIN_MAX_FILE_SIZE_BYTES: usize = 1;
const MAX_MAX_FILE_SIZE_BYTES: usize = 256 * 1024 * 1024;

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;
