//! SQLite-backed profile store.
//!
//! The record is a JSON document in the single row of the `profile` table.
//! Every operation borrows one pooled connection and hands it back when the
//! guard drops, on success and error paths alike.

use crate::{DbError, ProfileStore, Result as DbErrorResult};

use am_core::Profile;

use std::panic::Location;
use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use error_location::ErrorLocation;
use sqlx::SqlitePool;
use sqlx::migrate::Migrator;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};

/// Embedded schema migrations.
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// The only row id the CHECK constraint allows.
const PROFILE_ROW_ID: i64 = 1;

const MAX_CONNECTIONS: u32 = 5;
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Clone)]
pub struct SqliteProfileStore {
    pool: SqlitePool,
}

impl SqliteProfileStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open (creating if missing) the database file at `path`.
    pub async fn connect(path: &Path) -> DbErrorResult<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .connect_with(
                SqliteConnectOptions::new()
                    .filename(path)
                    .create_if_missing(true)
                    .journal_mode(SqliteJournalMode::Wal)
                    .synchronous(SqliteSynchronous::Normal)
                    .busy_timeout(BUSY_TIMEOUT),
            )
            .await?;

        Ok(Self::new(pool))
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl ProfileStore for SqliteProfileStore {
    async fn initialize(&self) -> DbErrorResult<()> {
        MIGRATOR.run(&self.pool).await?;

        let seed = serde_json::to_string(&Profile::default())?;
        let result = sqlx::query("INSERT OR IGNORE INTO profile (id, data) VALUES (?, ?)")
            .bind(PROFILE_ROW_ID)
            .bind(seed)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() > 0 {
            log::info!("Seeded empty profile record");
        }

        Ok(())
    }

    async fn read(&self) -> DbErrorResult<Profile> {
        let mut conn = self.pool.acquire().await?;

        let data: Option<String> = sqlx::query_scalar("SELECT data FROM profile WHERE id = ?")
            .bind(PROFILE_ROW_ID)
            .fetch_optional(&mut *conn)
            .await
            .map_err(map_missing_table)?;

        let data = data.ok_or_else(|| DbError::Uninitialized {
            message: "profile row does not exist".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

        serde_json::from_str(&data).map_err(|e| DbError::CorruptRecord {
            message: format!("profile.data is not a valid profile document: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })
    }

    async fn write(&self, profile: &Profile) -> DbErrorResult<()> {
        let data = serde_json::to_string(profile)?;
        let mut conn = self.pool.acquire().await?;

        sqlx::query(
            r#"
                INSERT INTO profile (id, data) VALUES (?, ?)
                ON CONFLICT(id) DO UPDATE SET data = excluded.data
            "#,
        )
        .bind(PROFILE_ROW_ID)
        .bind(data)
        .execute(&mut *conn)
        .await
        .map_err(map_missing_table)?;

        Ok(())
    }

    async fn ping(&self) -> DbErrorResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "sqlite"
    }
}

/// A missing `profile` table means initialize() never ran.
#[track_caller]
fn map_missing_table(e: sqlx::Error) -> DbError {
    match &e {
        sqlx::Error::Database(db) if db.message().contains("no such table") => {
            DbError::Uninitialized {
                message: db.message().to_string(),
                location: ErrorLocation::from(Location::caller()),
            }
        }
        _ => DbError::from(e),
    }
}
