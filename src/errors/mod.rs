//! Error handling utilities for the aiva application.
//!
//! This module provides the central error type `AppError` which represents all
//! possible error conditions that might occur in the application, as well as the
//! convenience type alias `AppResult` for functions that can return these errors.

use thiserror::Error;

/// Raised when a mood value is outside the closed set of recognized moods.
///
/// The value is rejected before any write takes place, so the caller can
/// re-prompt without worrying about a partial check-in.
///
/// # Examples
///
/// ```
/// use aiva::errors::InvalidMoodError;
///
/// let error = InvalidMoodError::new("ecstatic");
/// assert_eq!(error.value(), "ecstatic");
/// assert!(format!("{}", error).contains("happy, calm, neutral, worried, sad, angry"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unrecognized mood '{value}'. Expected one of: happy, calm, neutral, worried, sad, angry")]
pub struct InvalidMoodError {
    value: String,
}

impl InvalidMoodError {
    /// Creates an error for the rejected input.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    /// The rejected input, exactly as it was supplied.
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// Represents the ways the mood log can become unreachable or unreadable.
///
/// None of these are retried automatically: a failed `record` may or may not
/// have reached the disk, and only the caller can decide whether to try again.
///
/// # Examples
///
/// ```
/// use aiva::errors::StorageUnavailableError;
///
/// let error = StorageUnavailableError::Corrupted("unknown mood 'x' in row 7".to_string());
/// assert!(format!("{}", error).contains("row 7"));
/// ```
#[derive(Debug, Error)]
pub enum StorageUnavailableError {
    /// SQLite database error.
    #[error("Mood log database error: {0}\n\nIf you're seeing 'file is not a database', the mood log file may be corrupted or was not created by aiva.")]
    Sqlite(#[from] rusqlite::Error),

    /// Connection pool error.
    #[error("Failed to get connection from pool: {0}\n\nThis may indicate database connection issues. Try closing other aiva instances.")]
    Pool(#[from] r2d2::Error),

    /// A stored row could not be decoded into a mood entry.
    #[error("Mood log contains unreadable data: {0}")]
    Corrupted(String),
}

/// Errors around the per-login session context.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// The identity provider handed over an empty identity.
    #[error("User identity is empty. Log in again to obtain a valid identity.")]
    EmptyIdentity,

    /// An operation that needs a logged-in user ran without one.
    #[error("Not logged in. Pass --user <EMAIL> or set AIVA_USER.")]
    NotLoggedIn,
}

/// Represents specific error cases that can occur while talking to the chat
/// completions provider.
///
/// # Examples
///
/// ```
/// use aiva::errors::ChatError;
///
/// let error = ChatError::Unavailable { status: 503 };
/// assert!(format!("{}", error).contains("503"));
/// ```
#[derive(Debug, Error)]
pub enum ChatError {
    /// No API key was configured.
    #[error("No chat API key configured. Set AIVA_API_KEY or TOGETHER_API_KEY.")]
    MissingApiKey,

    /// The provider could not be reached at all.
    #[error("Chat API unreachable: {0}")]
    Offline(#[source] reqwest::Error),

    /// The provider answered with a non-success status.
    #[error("Chat API returned HTTP {status}")]
    Unavailable {
        /// HTTP status code returned by the provider
        status: u16,
    },

    /// The provider answered with a body we could not interpret.
    #[error("Invalid response from chat API: {0}")]
    InvalidResponse(String),
}

/// Errors raised while scoring a PHQ-9 questionnaire.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssessmentError {
    /// Not exactly one answer per question.
    #[error("Expected {expected} answers, got {actual}")]
    WrongAnswerCount {
        /// Number of questions in the questionnaire
        expected: usize,
        /// Number of answers supplied
        actual: usize,
    },

    /// An answer outside the 0-3 scale.
    #[error("Answer to question {question} must be between 0 and {max}, got {value}")]
    AnswerOutOfRange {
        /// One-based question number
        question: usize,
        /// Supplied value
        value: u8,
        /// Highest allowed value
        max: u8,
    },
}

/// Represents all possible errors that can occur in the aiva application.
///
/// This enum is the central error type used across the application, with variants
/// for different error categories. It uses `thiserror` for deriving the `Error` trait
/// implementation and formatted error messages.
///
/// # Examples
///
/// Creating a configuration error:
/// ```
/// use aiva::errors::AppError;
///
/// let error = AppError::Config("Missing data directory".to_string());
/// assert_eq!(format!("{}", error), "Configuration error: Missing data directory");
/// ```
///
/// Converting from an invalid mood:
/// ```
/// use aiva::errors::{AppError, InvalidMoodError};
///
/// let app_error: AppError = InvalidMoodError::new("meh").into();
/// assert!(matches!(app_error, AppError::InvalidMood(_)));
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// Errors related to configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input/output errors from filesystem or terminal operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A mood outside the closed set was submitted.
    #[error("Invalid mood: {0}")]
    InvalidMood(#[from] InvalidMoodError),

    /// The mood log could not be read or written.
    #[error("Storage unavailable: {0}")]
    Storage(#[from] StorageUnavailableError),

    /// Missing or invalid session context.
    #[error("Session error: {0}")]
    Session(#[from] SessionError),

    /// Errors talking to the chat completions provider.
    #[error("Chat error: {0}")]
    Chat(#[from] ChatError),

    /// Invalid questionnaire answers.
    #[error("Assessment error: {0}")]
    Assessment(#[from] AssessmentError),
}

/// A type alias for `Result<T, AppError>` to simplify function signatures.
///
/// # Examples
///
/// ```
/// use aiva::errors::{AppResult, AppError};
///
/// fn might_fail() -> AppResult<String> {
///     if false {
///         return Err(AppError::Config("Something went wrong".to_string()));
///     }
///     Ok("Operation succeeded".to_string())
/// }
/// ```
pub type AppResult<T> = Result<T, AppError>;

impl From<rusqlite::Error> for AppError {
    fn from(err: rusqlite::Error) -> Self {
        AppError::Storage(StorageUnavailableError::Sqlite(err))
    }
}

impl From<r2d2::Error> for AppError {
    fn from(err: r2d2::Error) -> Self {
        AppError::Storage(StorageUnavailableError::Pool(err))
    }
}
