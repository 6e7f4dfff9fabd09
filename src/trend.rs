//! Mood trend aggregation.
//!
//! Turns a sequence of mood entries into a frequency table for display.
//! Every mood is always present in the table, with a zero count when it
//! never occurs, so chart rendering never has to deal with missing keys.

use crate::mood::{Mood, MoodEntry};
use serde::Serialize;
use std::collections::BTreeMap;

/// Number of entries per mood.
///
/// Iteration follows the mood declaration order (happy, calm, neutral,
/// worried, sad, angry).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoodTrend {
    counts: BTreeMap<Mood, usize>,
}

impl Default for MoodTrend {
    fn default() -> Self {
        Self {
            counts: Mood::ALL.into_iter().map(|mood| (mood, 0)).collect(),
        }
    }
}

impl MoodTrend {
    /// Count for one mood; zero if it never occurred.
    pub fn count(&self, mood: Mood) -> usize {
        self.counts.get(&mood).copied().unwrap_or(0)
    }

    /// Total number of entries counted.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// All six moods with their counts, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (Mood, usize)> + '_ {
        self.counts.iter().map(|(mood, count)| (*mood, *count))
    }

    /// The most frequent mood, or `None` when nothing was counted.
    ///
    /// Ties go to the mood declared first.
    pub fn most_frequent(&self) -> Option<Mood> {
        let mut best: Option<(Mood, usize)> = None;
        for (mood, count) in self.iter() {
            if count > best.map_or(0, |(_, c)| c) {
                best = Some((mood, count));
            }
        }
        best.map(|(mood, _)| mood)
    }
}

/// Counts how often each mood occurs in `entries`.
///
/// Pure: the result depends only on the multiset of moods, not on their
/// order, and repeated calls return identical tables.
///
/// # Examples
///
/// ```
/// use aiva::mood::Mood;
/// use aiva::trend::aggregate_moods;
///
/// let trend = aggregate_moods([Mood::Happy, Mood::Happy, Mood::Sad]);
/// assert_eq!(trend.count(Mood::Happy), 2);
/// assert_eq!(trend.count(Mood::Sad), 1);
/// assert_eq!(trend.count(Mood::Calm), 0);
/// ```
pub fn aggregate_moods(moods: impl IntoIterator<Item = Mood>) -> MoodTrend {
    let mut trend = MoodTrend::default();
    for mood in moods {
        *trend.counts.entry(mood).or_insert(0) += 1;
    }
    trend
}

/// Counts how often each mood occurs across `entries`.
pub fn aggregate(entries: &[MoodEntry]) -> MoodTrend {
    aggregate_moods(entries.iter().map(|entry| entry.mood))
}
