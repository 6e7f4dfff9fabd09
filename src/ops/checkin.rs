//! Mood check-in operations for a logged-in user.
//!
//! These wrap the [`MoodStore`] with the session's identity, so a caller can
//! only ever write and read the entries of the user who logged in.

use crate::db::MoodStore;
use crate::errors::AppResult;
use crate::mood::{EntryId, MoodEntry};
use crate::session::Session;
use crate::trend::{aggregate, MoodTrend};
use tracing::{debug, info, info_span};

/// Records a mood check-in for the session's user.
///
/// # Arguments
///
/// * `store` - Mood log to append to
/// * `session` - Current session; its identity owns the new entry
/// * `mood` - Raw mood as chosen by the user
/// * `note` - Optional free-text note
///
/// # Errors
///
/// Returns `AppError::InvalidMood` if `mood` is not recognized (nothing is
/// written), or `AppError::Storage` if the log cannot be written.
pub fn check_in<S: MoodStore + ?Sized>(
    store: &S,
    session: &Session,
    mood: &str,
    note: Option<&str>,
) -> AppResult<EntryId> {
    let span = info_span!("check_in", session_id = %session.id());
    let _guard = span.enter();

    let id = store.record(session.user_id(), mood, note)?;
    info!(entry_id = %id, "Check-in saved");
    Ok(id)
}

/// Past entries of the session's user, most recent first.
///
/// # Errors
///
/// Returns `AppError::Storage` if the log cannot be read.
pub fn mood_history<S: MoodStore + ?Sized>(store: &S, session: &Session) -> AppResult<Vec<MoodEntry>> {
    let span = info_span!("mood_history", session_id = %session.id());
    let _guard = span.enter();

    let entries = store.list_for_user(session.user_id())?;
    debug!("Loaded {} past entries", entries.len());
    Ok(entries)
}

/// Frequency of each mood across all of the session user's entries.
///
/// # Errors
///
/// Returns `AppError::Storage` if the log cannot be read.
pub fn mood_trend<S: MoodStore + ?Sized>(store: &S, session: &Session) -> AppResult<MoodTrend> {
    let entries = mood_history(store, session)?;
    Ok(aggregate(&entries))
}
