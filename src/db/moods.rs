//! Mood log queries.
//!
//! Insert and read functions for the `moods` table. There are no
//! update or delete functions: entries are immutable once written.

use crate::errors::{AppResult, StorageUnavailableError};
use crate::mood::{EntryId, Mood, MoodEntry};
use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::{params, Connection, Row, TransactionBehavior};
use tracing::debug;

/// Renders a timestamp in the fixed-width form stored in `created_at`.
///
/// Microsecond precision and a `Z` suffix keep lexical and chronological
/// order identical.
pub fn format_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Micros, true)
}

fn parse_timestamp(raw: &str, context: &str) -> Result<DateTime<Utc>, StorageUnavailableError> {
    DateTime::parse_from_rfc3339(raw)
        .map(|ts| ts.with_timezone(&Utc))
        .map_err(|e| {
            StorageUnavailableError::Corrupted(format!(
                "invalid timestamp '{}' in {}: {}",
                raw, context, e
            ))
        })
}

/// Appends a mood entry and returns its id.
///
/// Runs in an immediate transaction so concurrent writers are serialized by
/// SQLite. The stored timestamp is `now`, unless the user's latest entry is
/// already later (clock stepped backwards), in which case that later
/// timestamp is reused so per-user order never goes backwards.
///
/// # Arguments
///
/// * `conn` - Database connection
/// * `user_id` - Identity the entry belongs to
/// * `mood` - Already-validated mood
/// * `note` - Optional free-text note, stored as given
/// * `now` - Wall-clock time captured by the caller
///
/// # Errors
///
/// Returns an error if the database operation fails.
pub fn insert_mood(
    conn: &mut Connection,
    user_id: &str,
    mood: Mood,
    note: Option<&str>,
    now: DateTime<Utc>,
) -> AppResult<EntryId> {
    debug!("Inserting {} mood entry", mood);

    let tx = conn
        .transaction_with_behavior(TransactionBehavior::Immediate)
        .map_err(StorageUnavailableError::Sqlite)?;

    let latest: Option<String> = tx
        .query_row(
            "SELECT MAX(created_at) FROM moods WHERE user_id = ?1",
            params![user_id],
            |row| row.get(0),
        )
        .map_err(StorageUnavailableError::Sqlite)?;

    let mut timestamp = now;
    if let Some(raw) = latest {
        let latest = parse_timestamp(&raw, "latest entry")?;
        if latest > timestamp {
            debug!("Clock is behind latest entry, reusing {}", raw);
            timestamp = latest;
        }
    }
    let created_at = format_timestamp(timestamp);

    tx.execute(
        r#"
        INSERT INTO moods (user_id, mood, note, created_at)
        VALUES (?1, ?2, ?3, ?4)
        "#,
        params![user_id, mood.as_str(), note, created_at],
    )
    .map_err(StorageUnavailableError::Sqlite)?;

    let id = tx.last_insert_rowid();
    tx.commit().map_err(StorageUnavailableError::Sqlite)?;

    debug!("Mood entry inserted with id {}", id);
    Ok(EntryId(id))
}

/// Decodes one `moods` row. Unknown mood text or a malformed timestamp means
/// the file was tampered with or damaged, which is reported as corruption.
fn entry_from_row(row: &Row<'_>) -> rusqlite::Result<Result<MoodEntry, StorageUnavailableError>> {
    let id: i64 = row.get(0)?;
    let user_id: String = row.get(1)?;
    let mood_raw: String = row.get(2)?;
    let note: Option<String> = row.get(3)?;
    let created_at: String = row.get(4)?;

    let mood = match mood_raw.parse::<Mood>() {
        Ok(mood) => mood,
        Err(_) => {
            return Ok(Err(StorageUnavailableError::Corrupted(format!(
                "unknown mood '{}' in entry {}",
                mood_raw, id
            ))))
        }
    };

    Ok(parse_timestamp(&created_at, &format!("entry {}", id)).map(|timestamp| MoodEntry {
        id: EntryId(id),
        user_id,
        mood,
        note,
        timestamp,
    }))
}

/// Lists all entries for a user, most recent first.
///
/// Ties on timestamp are broken by id, newest first.
///
/// # Errors
///
/// Returns an error if the database operation fails or a row cannot be decoded.
/// A user without entries yields an empty vector.
pub fn list_moods_for_user(conn: &Connection, user_id: &str) -> AppResult<Vec<MoodEntry>> {
    debug!("Listing mood entries");

    let mut stmt = conn
        .prepare(
            r#"
            SELECT id, user_id, mood, note, created_at
            FROM moods
            WHERE user_id = ?1
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .map_err(StorageUnavailableError::Sqlite)?;

    let rows = stmt
        .query_map(params![user_id], entry_from_row)
        .map_err(StorageUnavailableError::Sqlite)?;

    let mut entries = Vec::new();
    for row in rows {
        let entry = row.map_err(StorageUnavailableError::Sqlite)??;
        entries.push(entry);
    }

    debug!("Found {} mood entries", entries.len());
    Ok(entries)
}

/// Counts the entries stored for a user.
///
/// # Errors
///
/// Returns an error if the database operation fails.
pub fn count_moods_for_user(conn: &Connection, user_id: &str) -> AppResult<usize> {
    let count: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM moods WHERE user_id = ?1",
            params![user_id],
            |row| row.get(0),
        )
        .map_err(StorageUnavailableError::Sqlite)?;

    usize::try_from(count)
        .map_err(|_| StorageUnavailableError::Corrupted(format!("negative count {}", count)).into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AppError;
    use chrono::{Duration, TimeZone};
    use rusqlite::OptionalExtension;

    fn setup_test_db() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        crate::db::schema::create_tables(&conn).unwrap();
        conn
    }

    fn get_mood(conn: &Connection, id: EntryId) -> AppResult<Option<MoodEntry>> {
        let result = conn
            .query_row(
                "SELECT id, user_id, mood, note, created_at FROM moods WHERE id = ?1",
                params![id.0],
                entry_from_row,
            )
            .optional()
            .map_err(StorageUnavailableError::Sqlite)?;
        Ok(result.transpose()?)
    }

    fn at(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 15, hour, 0, 0).unwrap()
    }

    #[test]
    fn test_insert_and_get() {
        let mut conn = setup_test_db();

        let id = insert_mood(&mut conn, "a@example.com", Mood::Calm, Some("tea"), at(9)).unwrap();
        let entry = get_mood(&conn, id).unwrap().unwrap();

        assert_eq!(entry.id, id);
        assert_eq!(entry.user_id, "a@example.com");
        assert_eq!(entry.mood, Mood::Calm);
        assert_eq!(entry.note.as_deref(), Some("tea"));
        assert_eq!(entry.timestamp, at(9));
    }

    #[test]
    fn test_get_not_found() {
        let conn = setup_test_db();
        assert!(get_mood(&conn, EntryId(999)).unwrap().is_none());
    }

    #[test]
    fn test_ids_increase() {
        let mut conn = setup_test_db();
        let first = insert_mood(&mut conn, "a@example.com", Mood::Happy, None, at(9)).unwrap();
        let second = insert_mood(&mut conn, "b@example.com", Mood::Sad, None, at(8)).unwrap();
        let third = insert_mood(&mut conn, "a@example.com", Mood::Sad, None, at(10)).unwrap();
        assert!(first < second);
        assert!(second < third);
    }

    #[test]
    fn test_note_none_and_empty_are_distinct() {
        let mut conn = setup_test_db();
        let none = insert_mood(&mut conn, "a@example.com", Mood::Happy, None, at(9)).unwrap();
        let empty = insert_mood(&mut conn, "a@example.com", Mood::Happy, Some(""), at(10)).unwrap();

        assert_eq!(get_mood(&conn, none).unwrap().unwrap().note, None);
        assert_eq!(
            get_mood(&conn, empty).unwrap().unwrap().note,
            Some(String::new())
        );
    }

    #[test]
    fn test_list_orders_most_recent_first() {
        let mut conn = setup_test_db();
        insert_mood(&mut conn, "a@example.com", Mood::Happy, None, at(9)).unwrap();
        insert_mood(&mut conn, "a@example.com", Mood::Sad, None, at(10)).unwrap();
        insert_mood(&mut conn, "a@example.com", Mood::Calm, None, at(11)).unwrap();

        let moods: Vec<Mood> = list_moods_for_user(&conn, "a@example.com")
            .unwrap()
            .into_iter()
            .map(|e| e.mood)
            .collect();
        assert_eq!(moods, vec![Mood::Calm, Mood::Sad, Mood::Happy]);
    }

    #[test]
    fn test_equal_timestamps_fall_back_to_id_order() {
        let mut conn = setup_test_db();
        insert_mood(&mut conn, "a@example.com", Mood::Happy, None, at(9)).unwrap();
        insert_mood(&mut conn, "a@example.com", Mood::Worried, None, at(9)).unwrap();

        let entries = list_moods_for_user(&conn, "a@example.com").unwrap();
        assert_eq!(entries[0].mood, Mood::Worried);
        assert_eq!(entries[1].mood, Mood::Happy);
    }

    #[test]
    fn test_clock_going_backwards_keeps_order() {
        let mut conn = setup_test_db();
        insert_mood(&mut conn, "a@example.com", Mood::Happy, None, at(12)).unwrap();
        let id = insert_mood(
            &mut conn,
            "a@example.com",
            Mood::Angry,
            None,
            at(12) - Duration::hours(3),
        )
        .unwrap();

        let entry = get_mood(&conn, id).unwrap().unwrap();
        assert_eq!(entry.timestamp, at(12));

        let entries = list_moods_for_user(&conn, "a@example.com").unwrap();
        assert_eq!(entries[0].mood, Mood::Angry);
    }

    #[test]
    fn test_clock_of_other_users_is_ignored() {
        let mut conn = setup_test_db();
        insert_mood(&mut conn, "a@example.com", Mood::Happy, None, at(12)).unwrap();
        let id = insert_mood(&mut conn, "b@example.com", Mood::Sad, None, at(8)).unwrap();

        assert_eq!(get_mood(&conn, id).unwrap().unwrap().timestamp, at(8));
    }

    #[test]
    fn test_list_unknown_user_is_empty() {
        let mut conn = setup_test_db();
        insert_mood(&mut conn, "a@example.com", Mood::Happy, None, at(9)).unwrap();

        assert!(list_moods_for_user(&conn, "nobody@example.com")
            .unwrap()
            .is_empty());
        assert_eq!(count_moods_for_user(&conn, "nobody@example.com").unwrap(), 0);
        assert_eq!(count_moods_for_user(&conn, "a@example.com").unwrap(), 1);
    }

    #[test]
    fn test_unknown_mood_in_storage_is_corruption() {
        let conn = setup_test_db();
        conn.execute_batch("PRAGMA ignore_check_constraints = ON;")
            .unwrap();
        conn.execute(
            "INSERT INTO moods (user_id, mood, note, created_at) VALUES (?1, ?2, NULL, ?3)",
            ["a@example.com", "ecstatic", "2024-01-15T09:00:00.000000Z"],
        )
        .unwrap();

        let err = list_moods_for_user(&conn, "a@example.com").unwrap_err();
        match err {
            AppError::Storage(StorageUnavailableError::Corrupted(message)) => {
                assert!(message.contains("ecstatic"));
            }
            other => panic!("Expected corruption error, got {:?}", other),
        }
    }

    #[test]
    fn test_bad_timestamp_in_storage_is_corruption() {
        let conn = setup_test_db();
        conn.execute(
            "INSERT INTO moods (user_id, mood, note, created_at) VALUES (?1, ?2, NULL, ?3)",
            ["a@example.com", "happy", "yesterday-ish"],
        )
        .unwrap();

        let err = list_moods_for_user(&conn, "a@example.com").unwrap_err();
        assert!(matches!(
            err,
            AppError::Storage(StorageUnavailableError::Corrupted(_))
        ));
    }

    #[test]
    fn test_timestamp_format_is_fixed_width() {
        let early = format_timestamp(at(9));
        let later = format_timestamp(at(9) + Duration::microseconds(1));
        assert_eq!(early, "2024-01-15T09:00:00.000000Z");
        assert_eq!(early.len(), later.len());
        assert!(early < later);
    }
}
