//! Database schema definitions and initialization.
//!
//! This module defines the SQLite schema for the mood log. The `moods` table
//! is append-only: triggers abort any UPDATE or DELETE against it.

use crate::errors::{AppResult, StorageUnavailableError};
use rusqlite::Connection;
use tracing::{debug, info};

/// Current schema version.
///
/// Increment this whenever schema changes are made to support future migrations.
pub const SCHEMA_VERSION: i32 = 1;

/// Creates all database tables, indexes and triggers.
///
/// This function is idempotent - it uses `IF NOT EXISTS` throughout
/// so it's safe to call multiple times.
///
/// # Tables
///
/// - `moods`: one row per mood check-in
/// - `schema_version`: applied schema versions
///
/// # Errors
///
/// Returns an error if any DDL statement fails.
pub fn create_tables(conn: &Connection) -> AppResult<()> {
    debug!("Creating database tables");

    // Moods table: one immutable row per check-in
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS moods (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id TEXT NOT NULL,
            mood TEXT NOT NULL
                CHECK(mood IN ('happy', 'calm', 'neutral', 'worried', 'sad', 'angry')),
            note TEXT,
            created_at TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_moods_user_created
            ON moods(user_id, created_at DESC, id DESC);

        CREATE TRIGGER IF NOT EXISTS moods_no_update
        BEFORE UPDATE ON moods
        BEGIN
            SELECT RAISE(ABORT, 'mood entries are append-only');
        END;

        CREATE TRIGGER IF NOT EXISTS moods_no_delete
        BEFORE DELETE ON moods
        BEGIN
            SELECT RAISE(ABORT, 'mood entries are append-only');
        END;
        "#,
    )
    .map_err(StorageUnavailableError::Sqlite)?;

    // Schema version tracking table
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS schema_version (
            version INTEGER NOT NULL,
            applied_at DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP
        );
        "#,
    )
    .map_err(StorageUnavailableError::Sqlite)?;

    // Record schema version if not already recorded
    let current_version = get_schema_version(conn)?;
    if current_version.is_none() {
        conn.execute(
            "INSERT INTO schema_version (version) VALUES (?)",
            [SCHEMA_VERSION],
        )
        .map_err(StorageUnavailableError::Sqlite)?;
        info!("Initialized database schema version {}", SCHEMA_VERSION);
    } else {
        debug!("Schema version already recorded: {:?}", current_version);
    }

    debug!("Database tables created successfully");
    Ok(())
}

/// Gets the current schema version from the database.
///
/// Returns `None` if the schema_version table is empty.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn get_schema_version(conn: &Connection) -> AppResult<Option<i32>> {
    let result = conn.query_row(
        "SELECT version FROM schema_version ORDER BY version DESC LIMIT 1",
        [],
        |row| row.get(0),
    );

    match result {
        Ok(version) => Ok(Some(version)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(StorageUnavailableError::Sqlite(e).into()),
    }
}
