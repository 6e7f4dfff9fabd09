//! Durable, append-only mood log.
//!
//! This module provides the [`MoodStore`] storage interface and its single
//! backend, [`Database`]: an embedded SQLite file accessed through an r2d2
//! connection pool. Writes run in immediate transactions, so concurrent
//! check-ins from different users are serialized by SQLite and never
//! interleave.
//!
//! # Module Structure
//!
//! - `schema`: Table definitions and schema initialization
//! - `moods`: Insert and read queries for mood entries
//!
//! # Example
//!
//! ```no_run
//! use aiva::db::{Database, MoodStore};
//! use aiva::session::UserId;
//! use std::path::Path;
//!
//! let db = Database::open(Path::new("/tmp/mood_logs.db"))?;
//! db.initialize_schema()?;
//!
//! let user = UserId::new("ana@example.com")?;
//! db.record(&user, "calm", Some("long walk"))?;
//! let entries = db.list_for_user(&user)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod moods;
pub mod schema;

use crate::constants::{DB_BUSY_TIMEOUT_MS, DB_CONNECTION_TIMEOUT_MS, DB_POOL_MAX_SIZE};
use crate::errors::{AppResult, StorageUnavailableError};
use crate::mood::{EntryId, Mood, MoodEntry};
use crate::session::UserId;
use chrono::Utc;
use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::Connection;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info};

/// Type alias for a pooled SQLite connection.
pub type PooledConnection = r2d2::PooledConnection<SqliteConnectionManager>;

/// Storage interface for the mood log.
///
/// Entries can be appended and read back per user. There is no way to change
/// or remove an entry once written.
pub trait MoodStore {
    /// Validates `mood`, then appends one entry stamped with the current time.
    ///
    /// # Errors
    ///
    /// - `AppError::InvalidMood` if `mood` is not one of the six recognized
    ///   values; nothing is written in that case.
    /// - `AppError::Storage` if the log cannot be written.
    fn record(&self, user_id: &UserId, mood: &str, note: Option<&str>) -> AppResult<EntryId>;

    /// Returns every entry for `user_id`, most recent first.
    ///
    /// A user without entries yields an empty vector, never an error.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Storage` if the log cannot be read.
    fn list_for_user(&self, user_id: &UserId) -> AppResult<Vec<MoodEntry>>;

    /// Number of entries stored for `user_id`.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Storage` if the log cannot be read.
    fn count_for_user(&self, user_id: &UserId) -> AppResult<usize>;
}

/// Database handle with connection pooling.
///
/// `Database` is `Send + Sync`; share it between threads behind an `Arc`.
pub struct Database {
    pool: Pool<SqliteConnectionManager>,
}

impl Database {
    /// Opens or creates the mood log database.
    ///
    /// If the database file doesn't exist, it will be created on first use.
    ///
    /// # Arguments
    ///
    /// * `db_path` - Path to the database file
    ///
    /// # Errors
    ///
    /// Returns `AppError::Storage` if the connection pool cannot be initialized,
    /// for example when the parent directory does not exist. This is reported
    /// after at most `DB_CONNECTION_TIMEOUT_MS`.
    pub fn open(db_path: &Path) -> AppResult<Self> {
        debug!("Opening database at: {:?}", db_path);

        let manager = SqliteConnectionManager::file(db_path);
        let pool = Pool::builder()
            .max_size(DB_POOL_MAX_SIZE)
            .connection_timeout(Duration::from_millis(DB_CONNECTION_TIMEOUT_MS))
            .connection_customizer(Box::new(ConnectionConfig {
                busy_timeout: Duration::from_millis(DB_BUSY_TIMEOUT_MS),
            }))
            .build(manager)
            .map_err(StorageUnavailableError::Pool)?;

        info!("Database opened successfully");
        Ok(Database { pool })
    }

    /// Gets a connection from the pool.
    ///
    /// # Errors
    ///
    /// Returns an error if no connection is available or the pool is exhausted.
    pub fn get_conn(&self) -> AppResult<PooledConnection> {
        self.pool
            .get()
            .map_err(|e| StorageUnavailableError::Pool(e).into())
    }

    /// Initializes the database schema.
    ///
    /// Creates all necessary tables, indexes and triggers if they don't exist
    /// and switches the file to WAL journaling. This is idempotent and safe to
    /// call multiple times.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Storage` if the file is not a usable SQLite database
    /// or schema creation fails.
    pub fn initialize_schema(&self) -> AppResult<()> {
        let conn = self.get_conn()?;
        let mode: String = conn
            .pragma_update_and_check(None, "journal_mode", "WAL", |row| row.get(0))
            .map_err(StorageUnavailableError::Sqlite)?;
        debug!("Journal mode: {}", mode);
        schema::create_tables(&conn)?;
        info!("Database schema initialized");
        Ok(())
    }
}

impl MoodStore for Database {
    fn record(&self, user_id: &UserId, mood: &str, note: Option<&str>) -> AppResult<EntryId> {
        let mood: Mood = mood.parse()?;
        let mut conn = self.get_conn()?;
        let id = moods::insert_mood(&mut conn, user_id.as_str(), mood, note, Utc::now())?;
        info!(entry_id = %id, mood = %mood, "Mood recorded");
        Ok(id)
    }

    fn list_for_user(&self, user_id: &UserId) -> AppResult<Vec<MoodEntry>> {
        let conn = self.get_conn()?;
        moods::list_moods_for_user(&conn, user_id.as_str())
    }

    fn count_for_user(&self, user_id: &UserId) -> AppResult<usize> {
        let conn = self.get_conn()?;
        moods::count_moods_for_user(&conn, user_id.as_str())
    }
}

/// Connection customizer applied to every pooled connection.
#[derive(Debug)]
struct ConnectionConfig {
    busy_timeout: Duration,
}

impl r2d2::CustomizeConnection<Connection, rusqlite::Error> for ConnectionConfig {
    fn on_acquire(&self, conn: &mut Connection) -> Result<(), rusqlite::Error> {
        // Wait for a competing writer instead of failing with SQLITE_BUSY
        conn.busy_timeout(self.busy_timeout)?;
        Ok(())
    }

    fn on_release(&self, _conn: Connection) {}
}
