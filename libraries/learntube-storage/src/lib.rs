//! LearnTube Storage
//!
//! Multi-user `SQLite` database layer for LearnTube.
//!
//! # Architecture
//!
//! - **Document Playlists**: each playlist row embeds its roadmaps and videos
//!   as JSON, so a mutation is one single-row write
//! - **Owner Scoping**: every playlist query is filtered by the owning user
//! - **Vertical Slicing**: each feature owns its own queries and logic
//!
//! # Example
//!
//! ```rust,no_run
//! use learntube_storage::Database;
//! use learntube_core::{StorageContext, UserId};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let db = Database::new("sqlite://learntube.db").await?;
//!
//! // Storage context for one authenticated user
//! let ctx = db.context(UserId::new("user-1"));
//! let playlists = ctx.get_user_playlists().await?;
//! # Ok(())
//! # }
//! ```

mod context;
mod error;
mod time;

// Vertical slices
pub mod playlists;
pub mod users;

pub use context::LocalStorageContext;
pub use error::{Result, StorageError};

use learntube_core::UserId;
use sqlx::migrate::Migrator;
use sqlx::sqlite::SqlitePool;

// Embed migrations into binary
static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Run database migrations
///
/// This should be called once when the application starts to ensure
/// the database schema is up to date.
pub async fn run_migrations(pool: &SqlitePool) -> Result<()> {
    MIGRATOR.run(pool).await?;
    Ok(())
}

/// Create a new `SQLite` pool
///
/// # Arguments
///
/// * `database_url` - `SQLite` connection string (e.g., `<sqlite://learntube.db>`)
pub async fn create_pool(database_url: &str) -> Result<SqlitePool> {
    use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
    use std::str::FromStr;

    tracing::debug!(database_url, "Creating SQLite pool");

    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(std::time::Duration::from_secs(30));

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    tracing::info!("SQLite pool ready");

    Ok(pool)
}

/// Shared database handle; hands out per-user storage contexts
#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Connect and apply migrations
    pub async fn new(database_url: &str) -> Result<Self> {
        let pool = create_pool(database_url).await?;
        run_migrations(&pool).await?;
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Storage context scoped to `user_id`
    pub fn context(&self, user_id: UserId) -> LocalStorageContext {
        LocalStorageContext::new(self.pool.clone(), user_id)
    }
}
