//! Mood values and mood log entries.
//!
//! A mood is one of a closed set of six values. Anything else is rejected with
//! [`InvalidMoodError`] before it can reach storage.

use crate::errors::InvalidMoodError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A self-reported emotional state.
///
/// The declaration order is the display order used by trend views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Happy,
    Calm,
    Neutral,
    Worried,
    Sad,
    Angry,
}

impl Mood {
    /// Every mood, in display order.
    pub const ALL: [Mood; 6] = [
        Mood::Happy,
        Mood::Calm,
        Mood::Neutral,
        Mood::Worried,
        Mood::Sad,
        Mood::Angry,
    ];

    /// Convert to database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Happy => "happy",
            Mood::Calm => "calm",
            Mood::Neutral => "neutral",
            Mood::Worried => "worried",
            Mood::Sad => "sad",
            Mood::Angry => "angry",
        }
    }

    /// Capitalized name for display.
    pub fn label(&self) -> &'static str {
        match self {
            Mood::Happy => "Happy",
            Mood::Calm => "Calm",
            Mood::Neutral => "Neutral",
            Mood::Worried => "Worried",
            Mood::Sad => "Sad",
            Mood::Angry => "Angry",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Mood::Happy => "😊",
            Mood::Calm => "😌",
            Mood::Neutral => "😐",
            Mood::Worried => "😟",
            Mood::Sad => "😢",
            Mood::Angry => "😠",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mood {
    type Err = InvalidMoodError;

    /// Parses a mood, ignoring surrounding whitespace and ASCII case.
    ///
    /// # Examples
    ///
    /// ```
    /// use aiva::mood::Mood;
    ///
    /// assert_eq!(" Calm ".parse::<Mood>().unwrap(), Mood::Calm);
    /// assert!("ecstatic".parse::<Mood>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Mood::ALL
            .into_iter()
            .find(|mood| mood.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| InvalidMoodError::new(s))
    }
}

/// Identifier of a stored mood entry.
///
/// Identifiers are assigned by the store, never reused, and increase with
/// every successful `record`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(pub i64);

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One immutable record of a user's self-reported mood.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodEntry {
    pub id: EntryId,
    pub user_id: String,
    pub mood: Mood,
    pub note: Option<String>,
    pub timestamp: DateTime<Utc>,
}
