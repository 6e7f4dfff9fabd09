//! Plain-text rendering of mood history, trends and assessment results for
//! the terminal.

use crate::assessment::{AssessmentResult, ANSWER_SCALE, PHQ9_QUESTIONS};
use crate::constants::ENTRY_TIMESTAMP_FORMAT;
use crate::mood::MoodEntry;
use crate::trend::MoodTrend;
use chrono::{DateTime, Local, TimeZone, Utc};

/// Longest bar drawn for the most frequent mood.
const MAX_BAR_WIDTH: usize = 30;

/// Formats a timestamp like "5 March 2024, 9:07 PM" in the given time zone.
pub fn format_entry_time<Tz: TimeZone>(timestamp: DateTime<Utc>, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    timestamp
        .with_timezone(tz)
        .format(ENTRY_TIMESTAMP_FORMAT)
        .to_string()
}

/// Renders one entry: a headline, plus the note quoted below it when present.
pub fn render_entry_in<Tz: TimeZone>(entry: &MoodEntry, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    let mut out = format!(
        "{} - {} {}",
        format_entry_time(entry.timestamp, tz),
        entry.mood.emoji(),
        entry.mood.label()
    );
    if let Some(note) = entry.note.as_deref().filter(|n| !n.trim().is_empty()) {
        for line in note.lines() {
            out.push_str("\n  > ");
            out.push_str(line);
        }
    }
    out
}

/// Renders the history list in local time.
pub fn render_history(entries: &[MoodEntry]) -> String {
    if entries.is_empty() {
        return "No mood entries yet.".to_string();
    }
    entries
        .iter()
        .map(|entry| render_entry_in(entry, &Local))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Renders the trend as one horizontal bar per mood.
///
/// Bars are scaled so the most frequent mood spans the full width.
pub fn render_trend(trend: &MoodTrend) -> String {
    let max = trend.iter().map(|(_, count)| count).max().unwrap_or(0);
    let mut lines = Vec::with_capacity(6);
    for (mood, count) in trend.iter() {
        let width = if max == 0 {
            0
        } else {
            (count * MAX_BAR_WIDTH).div_ceil(max)
        };
        lines.push(format!(
            "{} {:<8} {:>3} {}",
            mood.emoji(),
            mood.as_str(),
            count,
            "█".repeat(width)
        ));
    }
    lines.join("\n")
}

/// Renders a scored questionnaire: the total and band, then each answer in words.
pub fn render_assessment(result: &AssessmentResult) -> String {
    let mut out = format!(
        "PHQ-9 score: {}/27 ({})",
        result.total,
        result.severity.label()
    );
    for (question, answer) in PHQ9_QUESTIONS.iter().zip(result.answers) {
        let meaning = ANSWER_SCALE.get(usize::from(answer)).copied().unwrap_or("?");
        out.push_str(&format!("\n  {}: {}", question, meaning));
    }
    if result.needs_urgent_attention() {
        out.push_str(
            "\nYou reported thoughts of self-harm. Please reach out to one of the services below right away.",
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::score;
    use crate::mood::{EntryId, Mood};
    use crate::trend::aggregate_moods;

    fn entry(mood: Mood, note: Option<&str>) -> MoodEntry {
        MoodEntry {
            id: EntryId(1),
            user_id: "a@example.com".to_string(),
            mood,
            note: note.map(str::to_string),
            timestamp: Utc.with_ymd_and_hms(2024, 3, 5, 21, 7, 0).unwrap(),
        }
    }

    #[test]
    fn test_entry_time_has_no_leading_zeros() {
        let ts = Utc.with_ymd_and_hms(2024, 3, 5, 9, 7, 0).unwrap();
        assert_eq!(format_entry_time(ts, &Utc), "5 March 2024, 9:07 AM");
    }

    #[test]
    fn test_render_entry_with_note() {
        let rendered = render_entry_in(&entry(Mood::Calm, Some("long walk\nslept well")), &Utc);
        assert_eq!(
            rendered,
            "5 March 2024, 9:07 PM - 😌 Calm\n  > long walk\n  > slept well"
        );
    }

    #[test]
    fn test_render_entry_skips_empty_note() {
        let rendered = render_entry_in(&entry(Mood::Sad, Some("")), &Utc);
        assert_eq!(rendered, "5 March 2024, 9:07 PM - 😢 Sad");
    }

    #[test]
    fn test_render_empty_history() {
        assert_eq!(render_history(&[]), "No mood entries yet.");
    }

    #[test]
    fn test_render_trend_lists_every_mood() {
        let trend = aggregate_moods([Mood::Happy, Mood::Happy, Mood::Sad]);
        let rendered = render_trend(&trend);
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), 6);
        assert!(lines[0].contains("happy"));
        assert!(lines[0].ends_with(&"█".repeat(MAX_BAR_WIDTH)));
        assert!(lines[4].contains("sad"));
        assert!(lines[4].ends_with(&"█".repeat(MAX_BAR_WIDTH / 2)));
        assert!(!lines[1].contains('█'));
    }

    #[test]
    fn test_render_assessment_warns_on_self_harm_item() {
        let result = score(&[0, 0, 0, 0, 0, 0, 0, 0, 2]).unwrap();
        let rendered = render_assessment(&result);
        assert!(rendered.starts_with("PHQ-9 score: 2/27 (Minimal)"));
        assert!(rendered.contains("You reported thoughts of self-harm"));
    }

    #[test]
    fn test_render_assessment_spells_out_answers() {
        let result = score(&[0, 1, 2, 3, 0, 0, 0, 0, 0]).unwrap();
        let rendered = render_assessment(&result);
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), 10);
        assert_eq!(lines[1], "  Little interest or pleasure in doing things: Not at all");
        assert_eq!(lines[2], "  Feeling down, depressed, or hopeless: Several days");
        assert_eq!(lines[3], "  Trouble sleeping: More than half the days");
        assert_eq!(lines[4], "  Feeling tired or low energy: Nearly every day");
    }
}
