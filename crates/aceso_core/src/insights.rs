//! crates/aceso_core/src/insights.rs
//!
//! The mood-insight aggregator: pure functions over the full entry
//! collection. Recomputed on every read, never stored.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use std::collections::HashMap;

use crate::domain::{JournalEntry, MoodInsight, Trend};

/// Computes the aggregated `MoodInsight` for the given entries.
///
/// `now` anchors the 7-day windows and the streak walk; callers pass
/// `Utc::now()`. Total over its inputs: an empty collection yields the
/// zeroed insight, never an error.
pub fn mood_insight(entries: &[JournalEntry], now: DateTime<Utc>) -> MoodInsight {
    if entries.is_empty() {
        return MoodInsight {
            weekly_average: 0.0,
            trend: Trend::Stable,
            emotion_distribution: HashMap::new(),
            total_entries: 0,
            streak_days: 0,
        };
    }

    let seven_days_ago = now - Duration::days(7);
    let fourteen_days_ago = now - Duration::days(14);

    let weekly_average = window_average(entries, |e| e.timestamp >= seven_days_ago);
    let previous_average = window_average(entries, |e| {
        e.timestamp >= fourteen_days_ago && e.timestamp < seven_days_ago
    });

    // A window with no entries averages to 0, so a populated current week
    // after an empty prior week always classifies as improving. Kept for
    // compatibility with the established insight semantics.
    let trend = if weekly_average > previous_average + 0.3 {
        Trend::Improving
    } else if weekly_average < previous_average - 0.3 {
        Trend::Declining
    } else {
        Trend::Stable
    };

    MoodInsight {
        weekly_average: round_to_tenth(weekly_average),
        trend,
        emotion_distribution: emotion_distribution(entries),
        total_entries: entries.len(),
        streak_days: streak_days(entries, now.date_naive()),
    }
}

/// Mean mood rating over the entries selected by `in_window`, with a missing
/// rating counted as 0. Returns 0 when no entries qualify.
fn window_average<F>(entries: &[JournalEntry], in_window: F) -> f64
where
    F: Fn(&JournalEntry) -> bool,
{
    let mut sum = 0.0;
    let mut count = 0u32;
    for entry in entries.iter().filter(|e| in_window(e)) {
        sum += entry.mood_rating.unwrap_or(0.0);
        count += 1;
    }
    if count > 0 {
        sum / f64::from(count)
    } else {
        0.0
    }
}

/// Occurrence counts over primary and secondary emotions, sharing one
/// counter namespace across all analyzed entries.
fn emotion_distribution(entries: &[JournalEntry]) -> HashMap<String, u32> {
    let mut distribution = HashMap::new();
    for entry in entries {
        if let Some(emotions) = &entry.emotions {
            *distribution
                .entry(emotions.primary_emotion.clone())
                .or_insert(0) += 1;
            for emotion in &emotions.secondary_emotions {
                *distribution.entry(emotion.clone()).or_insert(0) += 1;
            }
        }
    }
    distribution
}

/// Counts consecutive calendar days with at least one entry, walking
/// backward from `today` and stopping at the first gap. Multiple entries on
/// the same day collapse to a single day of activity.
fn streak_days(entries: &[JournalEntry], today: NaiveDate) -> u32 {
    let mut dates: Vec<NaiveDate> = entries.iter().map(|e| e.timestamp.date_naive()).collect();
    dates.sort_unstable_by(|a, b| b.cmp(a));
    dates.dedup();

    let mut streak = 0;
    for (i, date) in dates.iter().enumerate() {
        let expected = today - Duration::days(i as i64);
        if *date == expected {
            streak += 1;
        } else {
            break;
        }
    }
    streak
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{EmotionAnalysis, InputMode, Sentiment};
    use chrono::TimeZone;
    use uuid::Uuid;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 15, 12, 0, 0).unwrap()
    }

    fn entry(timestamp: DateTime<Utc>, mood_rating: Option<f64>) -> JournalEntry {
        JournalEntry {
            id: Uuid::new_v4(),
            content: "entry".to_string(),
            input_mode: InputMode::Text,
            timestamp,
            emotions: None,
            mood_rating,
        }
    }

    fn analyzed(
        timestamp: DateTime<Utc>,
        primary: &str,
        secondary: &[&str],
    ) -> JournalEntry {
        let mut e = entry(timestamp, Some(3.0));
        e.emotions = Some(EmotionAnalysis {
            primary_emotion: primary.to_string(),
            secondary_emotions: secondary.iter().map(|s| s.to_string()).collect(),
            sentiment: Sentiment::Neutral,
            sentiment_score: 0.0,
            confidence: 0.8,
            intensity: 0.5,
            themes: vec![],
            summary: "summary".to_string(),
        });
        e
    }

    #[test]
    fn empty_collection_yields_zeroed_insight() {
        let insight = mood_insight(&[], now());
        assert_eq!(insight.weekly_average, 0.0);
        assert_eq!(insight.trend, Trend::Stable);
        assert!(insight.emotion_distribution.is_empty());
        assert_eq!(insight.total_entries, 0);
        assert_eq!(insight.streak_days, 0);
    }

    #[test]
    fn weekly_average_is_mean_over_last_seven_days() {
        let entries = vec![
            entry(now() - Duration::hours(1), Some(5.0)),
            entry(now() - Duration::hours(2), Some(3.0)),
        ];
        assert_eq!(mood_insight(&entries, now()).weekly_average, 4.0);
    }

    #[test]
    fn weekly_average_counts_missing_ratings_as_zero() {
        let entries = vec![
            entry(now() - Duration::hours(1), Some(4.0)),
            entry(now() - Duration::hours(2), None),
        ];
        assert_eq!(mood_insight(&entries, now()).weekly_average, 2.0);
    }

    #[test]
    fn weekly_average_excludes_entries_older_than_seven_days() {
        let entries = vec![
            entry(now() - Duration::hours(1), Some(4.0)),
            entry(now() - Duration::days(8), Some(1.0)),
        ];
        assert_eq!(mood_insight(&entries, now()).weekly_average, 4.0);
    }

    #[test]
    fn weekly_average_is_rounded_to_one_decimal() {
        let entries = vec![
            entry(now() - Duration::hours(1), Some(4.0)),
            entry(now() - Duration::hours(2), Some(4.0)),
            entry(now() - Duration::hours(3), Some(3.0)),
        ];
        // 11 / 3 = 3.666...
        assert_eq!(mood_insight(&entries, now()).weekly_average, 3.7);
    }

    #[test]
    fn trend_improves_when_delta_exceeds_threshold() {
        let entries = vec![
            entry(now() - Duration::hours(1), Some(4.5)),
            entry(now() - Duration::days(10), Some(4.0)),
        ];
        assert_eq!(mood_insight(&entries, now()).trend, Trend::Improving);
    }

    #[test]
    fn trend_declines_when_delta_falls_below_threshold() {
        let entries = vec![
            entry(now() - Duration::hours(1), Some(3.6)),
            entry(now() - Duration::days(10), Some(4.0)),
        ];
        assert_eq!(mood_insight(&entries, now()).trend, Trend::Declining);
    }

    #[test]
    fn trend_is_stable_at_exactly_the_threshold() {
        // Not strictly greater / smaller, so both boundary directions stay stable.
        let up = vec![
            entry(now() - Duration::hours(1), Some(4.3)),
            entry(now() - Duration::days(10), Some(4.0)),
        ];
        assert_eq!(mood_insight(&up, now()).trend, Trend::Stable);

        let down = vec![
            entry(now() - Duration::hours(1), Some(3.7)),
            entry(now() - Duration::days(10), Some(4.0)),
        ];
        assert_eq!(mood_insight(&down, now()).trend, Trend::Stable);
    }

    #[test]
    fn empty_previous_window_reads_as_improving() {
        // The empty window averages to 0, so any positive current week
        // classifies as improving. Established behavior, kept as-is.
        let entries = vec![entry(now() - Duration::hours(1), Some(1.0))];
        assert_eq!(mood_insight(&entries, now()).trend, Trend::Improving);
    }

    #[test]
    fn distribution_counts_primary_and_secondary_in_one_namespace() {
        let entries = vec![
            analyzed(now() - Duration::hours(1), "anxious", &["tired", "hopeful"]),
            analyzed(now() - Duration::hours(2), "tired", &["anxious"]),
            entry(now() - Duration::hours(3), Some(3.0)),
        ];
        let insight = mood_insight(&entries, now());
        assert_eq!(insight.emotion_distribution["anxious"], 2);
        assert_eq!(insight.emotion_distribution["tired"], 2);
        assert_eq!(insight.emotion_distribution["hopeful"], 1);

        // Sum of counts equals total primary + secondary occurrences.
        let total: u32 = insight.emotion_distribution.values().sum();
        assert_eq!(total, 5);
    }

    #[test]
    fn streak_counts_consecutive_days_back_from_today() {
        let entries = vec![
            entry(now() - Duration::hours(1), Some(3.0)),
            entry(now() - Duration::days(1), Some(3.0)),
            // Gap at two days ago; this older entry must not extend the streak.
            entry(now() - Duration::days(3), Some(3.0)),
        ];
        assert_eq!(mood_insight(&entries, now()).streak_days, 2);
    }

    #[test]
    fn streak_is_zero_without_an_entry_today() {
        let entries = vec![
            entry(now() - Duration::days(1), Some(3.0)),
            entry(now() - Duration::days(2), Some(3.0)),
        ];
        assert_eq!(mood_insight(&entries, now()).streak_days, 0);
    }

    #[test]
    fn same_day_entries_collapse_to_one_streak_day() {
        let entries = vec![
            entry(now() - Duration::hours(1), Some(3.0)),
            entry(now() - Duration::hours(5), Some(3.0)),
            entry(now() - Duration::days(1), Some(3.0)),
        ];
        assert_eq!(mood_insight(&entries, now()).streak_days, 2);
    }

    #[test]
    fn aggregation_is_idempotent() {
        let entries = vec![
            analyzed(now() - Duration::hours(1), "calm", &["hopeful"]),
            entry(now() - Duration::days(9), Some(2.0)),
        ];
        let first = mood_insight(&entries, now());
        let second = mood_insight(&entries, now());
        assert_eq!(first, second);
    }
}
