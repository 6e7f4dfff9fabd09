//! PHQ-9 depression screening questionnaire.
//!
//! Nine questions, each answered on a 0-3 scale ("not at all" to "nearly
//! every day"). The answers are summed and the total is mapped to a
//! severity band with fixed thresholds.

use crate::errors::{AppResult, AssessmentError};
use std::fmt;

/// The nine PHQ-9 items, in order.
pub const PHQ9_QUESTIONS: [&str; 9] = [
    "Little interest or pleasure in doing things",
    "Feeling down, depressed, or hopeless",
    "Trouble sleeping",
    "Feeling tired or low energy",
    "Poor appetite or overeating",
    "Feeling bad about yourself",
    "Trouble concentrating",
    "Restlessness or slowness",
    "Thoughts of self-harm",
];

/// Highest value a single answer may take.
pub const MAX_ANSWER: u8 = 3;

/// Meaning of each answer value, indexed by value.
pub const ANSWER_SCALE: [&str; 4] = [
    "Not at all",
    "Several days",
    "More than half the days",
    "Nearly every day",
];

/// Index of the self-harm item.
const SELF_HARM_QUESTION: usize = 8;

/// Severity band for a PHQ-9 total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Minimal,
    Mild,
    Moderate,
    ModeratelySevere,
    Severe,
}

impl Severity {
    /// Maps a total score (0-27) to its band.
    pub fn from_total(total: u8) -> Self {
        match total {
            0..=4 => Severity::Minimal,
            5..=9 => Severity::Mild,
            10..=14 => Severity::Moderate,
            15..=19 => Severity::ModeratelySevere,
            _ => Severity::Severe,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Severity::Minimal => "Minimal",
            Severity::Mild => "Mild",
            Severity::Moderate => "Moderate",
            Severity::ModeratelySevere => "Moderately severe",
            Severity::Severe => "Severe",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Scored questionnaire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssessmentResult {
    pub answers: [u8; 9],
    pub total: u8,
    pub severity: Severity,
}

impl AssessmentResult {
    /// True when the self-harm item was answered with anything but "not at all".
    ///
    /// This holds regardless of the total score.
    pub fn needs_urgent_attention(&self) -> bool {
        self.answers[SELF_HARM_QUESTION] > 0
    }
}

/// Scores a completed questionnaire.
///
/// # Errors
///
/// - `AssessmentError::WrongAnswerCount` unless exactly nine answers are given.
/// - `AssessmentError::AnswerOutOfRange` for any answer above 3.
///
/// # Examples
///
/// ```
/// use aiva::assessment::{score, Severity};
///
/// let result = score(&[1, 1, 1, 1, 1, 1, 1, 1, 0])?;
/// assert_eq!(result.total, 8);
/// assert_eq!(result.severity, Severity::Mild);
/// # Ok::<(), aiva::AppError>(())
/// ```
pub fn score(answers: &[u8]) -> AppResult<AssessmentResult> {
    let answers: [u8; 9] = answers
        .try_into()
        .map_err(|_| AssessmentError::WrongAnswerCount {
            expected: PHQ9_QUESTIONS.len(),
            actual: answers.len(),
        })?;

    if let Some((index, value)) = answers
        .iter()
        .enumerate()
        .find(|(_, value)| **value > MAX_ANSWER)
    {
        return Err(AssessmentError::AnswerOutOfRange {
            question: index + 1,
            value: *value,
            max: MAX_ANSWER,
        }
        .into());
    }

    let total: u8 = answers.iter().sum();
    Ok(AssessmentResult {
        answers,
        total,
        severity: Severity::from_total(total),
    })
}
