//! Per-login session context.
//!
//! A [`Session`] holds everything that belongs to one logged-in user: the
//! identity handed over by the login provider and the running chat history.
//! It is created on login, passed explicitly into every operation, and
//! consumed on logout. Nothing here is global.

use crate::ai::{Message, SYSTEM_PROMPT};
use crate::errors::{AppResult, SessionError};
use chrono::{DateTime, Duration, Utc};
use std::fmt;
use tracing::{debug, info};
use uuid::Uuid;

/// Identity of an authenticated user, usually a verified email address.
///
/// The value is trusted as given; the only check is that it is not blank.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserId(String);

impl UserId {
    /// Wraps an identity supplied by the login provider.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::EmptyIdentity` if the value is empty or only whitespace.
    ///
    /// # Examples
    ///
    /// ```
    /// use aiva::session::UserId;
    ///
    /// let user = UserId::new(" ana@example.com ").unwrap();
    /// assert_eq!(user.as_str(), "ana@example.com");
    /// assert!(UserId::new("   ").is_err());
    /// ```
    pub fn new(raw: impl AsRef<str>) -> AppResult<Self> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(SessionError::EmptyIdentity.into());
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Context for one logged-in user.
///
/// # Example
///
/// ```
/// use aiva::session::{Session, UserId};
///
/// let session = Session::login(UserId::new("ana@example.com")?);
/// assert_eq!(session.user_id().as_str(), "ana@example.com");
/// assert_eq!(session.chat_history().len(), 1); // system prompt
/// session.logout();
/// # Ok::<(), aiva::AppError>(())
/// ```
#[derive(Debug)]
pub struct Session {
    id: Uuid,
    user_id: UserId,
    started_at: DateTime<Utc>,
    chat_history: Vec<Message>,
}

impl Session {
    /// Starts a session for an identity returned by the login provider.
    pub fn login(user_id: UserId) -> Self {
        let id = Uuid::new_v4();
        info!(session_id = %id, "Session started");
        Self {
            id,
            user_id,
            started_at: Utc::now(),
            chat_history: vec![Message::system(SYSTEM_PROMPT)],
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    /// Full conversation so far, starting with the system prompt.
    pub fn chat_history(&self) -> &[Message] {
        &self.chat_history
    }

    /// Appends one completed user/assistant turn to the chat history.
    pub fn push_exchange(&mut self, user: impl Into<String>, assistant: impl Into<String>) {
        self.chat_history.push(Message::user(user));
        self.chat_history.push(Message::assistant(assistant));
        debug!(
            session_id = %self.id,
            messages = self.chat_history.len(),
            "Chat history extended"
        );
    }

    /// Ends the session and returns how long it lasted. The identity and
    /// chat history are dropped with it.
    pub fn logout(self) -> Duration {
        let duration = Utc::now() - self.started_at;
        info!(
            session_id = %self.id,
            duration_ms = duration.num_milliseconds(),
            exchanges = self.chat_history.len().saturating_sub(1) / 2,
            "Session ended"
        );
        duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_id_rejects_blank_identity() {
        let err = UserId::new("").unwrap_err();
        assert!(matches!(
            err,
            crate::errors::AppError::Session(SessionError::EmptyIdentity)
        ));
        assert!(UserId::new(" \t").is_err());
    }

    #[test]
    fn test_login_seeds_history_with_system_prompt() {
        let session = Session::login(UserId::new("a@example.com").unwrap());
        let history = session.chat_history();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].role, "system");
        assert_eq!(history[0].content, SYSTEM_PROMPT);
    }

    #[test]
    fn test_sessions_get_distinct_ids() {
        let first = Session::login(UserId::new("a@example.com").unwrap());
        let second = Session::login(UserId::new("a@example.com").unwrap());
        assert_ne!(first.id(), second.id());
    }

    #[test]
    fn test_push_exchange_appends_in_order() {
        let mut session = Session::login(UserId::new("a@example.com").unwrap());
        session.push_exchange("hello", "hi there");

        let history = session.chat_history();
        assert_eq!(history.len(), 3);
        assert_eq!(history[1].role, "user");
        assert_eq!(history[1].content, "hello");
        assert_eq!(history[2].role, "assistant");
        assert_eq!(history[2].content, "hi there");
    }

    #[test]
    fn test_logout_reports_session_duration() {
        let before = Utc::now();
        let mut session = Session::login(UserId::new("a@example.com").unwrap());
        session.push_exchange("hello", "hi there");
        let duration = session.logout();

        assert!(duration >= Duration::zero());
        assert!(duration <= Utc::now() - before);
    }
}
