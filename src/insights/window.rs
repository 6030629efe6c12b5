//! Trailing-window trend summaries.
//!
//! A window of `N` days covers `today - (N - 1)` through `today`. Every day in
//! range gets a bucket, empty or not. Entries outside the window are ignored
//! for both the buckets and the per-mood totals.

use super::date_key::DateKey;
use super::frequency::EncounterTally;
use crate::mood::{newest_first, Mood, MoodEntry};
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

/// Per-mood counts over the full mood set, in legend order.
pub type MoodTotals = BTreeMap<Mood, usize>;

/// One calendar day of a window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayBucket {
    pub date_key: DateKey,
    /// Most frequent mood of the day, `None` when nothing was logged.
    pub dominant_mood: Option<Mood>,
    pub entry_count: usize,
}

impl DayBucket {
    fn empty(date_key: DateKey) -> Self {
        Self {
            date_key,
            dominant_mood: None,
            entry_count: 0,
        }
    }
}

/// Buckets ordered oldest to newest, plus the totals across the window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WindowSummary {
    pub window_days: u32,
    pub buckets: Vec<DayBucket>,
    pub mood_totals: MoodTotals,
}

impl WindowSummary {
    /// Number of days with at least one entry.
    pub fn active_days(&self) -> usize {
        self.buckets.iter().filter(|b| b.entry_count > 0).count()
    }

    pub fn total_entries(&self) -> usize {
        self.mood_totals.values().sum()
    }
}

/// A zeroed tally containing every mood.
pub fn empty_mood_totals() -> MoodTotals {
    Mood::ALL.iter().map(|&mood| (mood, 0)).collect()
}

/// The days of a `window_days` window ending at `today`, oldest first.
pub fn window_keys(window_days: u32, today: DateKey) -> Vec<DateKey> {
    (0..window_days)
        .rev()
        .filter_map(|back| today.days_before(back))
        .collect()
}

/// Bins entries into one bucket per day of the trailing window.
pub fn summarize_window(entries: &[MoodEntry], window_days: u32, today: DateKey) -> WindowSummary {
    let keys = window_keys(window_days, today);
    let mut mood_totals = empty_mood_totals();

    let Some(&first_day) = keys.first() else {
        return WindowSummary {
            window_days,
            buckets: Vec::new(),
            mood_totals,
        };
    };

    let mut by_day: HashMap<DateKey, EncounterTally> = HashMap::new();
    for entry in newest_first(entries) {
        let key = entry.date_key();
        if key < first_day || key > today {
            continue;
        }
        by_day.entry(key).or_default().record(entry.mood);
        *mood_totals.entry(entry.mood).or_insert(0) += 1;
    }

    let buckets = keys
        .into_iter()
        .map(|key| match by_day.get(&key) {
            Some(tally) => DayBucket {
                date_key: key,
                dominant_mood: tally.dominant(),
                entry_count: tally.total(),
            },
            None => DayBucket::empty(key),
        })
        .collect();

    WindowSummary {
        window_days,
        buckets,
        mood_totals,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::insights::test_support::{day, entry_at, entry_on};

    #[test]
    fn test_empty_week() {
        let today = day(2024, 3, 15);
        let summary = summarize_window(&[], 7, today);

        assert_eq!(summary.buckets.len(), 7);
        for bucket in &summary.buckets {
            assert_eq!(bucket.dominant_mood, None);
            assert_eq!(bucket.entry_count, 0);
        }
        assert_eq!(summary.mood_totals.len(), 5);
        assert!(summary.mood_totals.values().all(|&count| count == 0));
        assert_eq!(summary.active_days(), 0);
    }

    #[test]
    fn test_buckets_run_oldest_to_today() {
        let today = day(2024, 3, 15);
        let summary = summarize_window(&[], 7, today);

        assert_eq!(summary.buckets[0].date_key.to_string(), "2024-03-09");
        assert_eq!(summary.buckets[6].date_key, today);
        for pair in summary.buckets.windows(2) {
            assert_eq!(pair[1].date_key.previous(), Some(pair[0].date_key));
        }
    }

    #[test]
    fn test_entries_outside_window_are_ignored() {
        let today = day(2024, 3, 15);
        let inside = vec![
            entry_on(1, today, Mood::Happy),
            entry_on(2, today.days_before(6).unwrap(), Mood::Sad),
        ];
        let mut with_outside = inside.clone();
        with_outside.push(entry_on(3, today.days_before(7).unwrap(), Mood::Angry));
        with_outside.push(entry_on(4, day(2024, 3, 16), Mood::Angry));
        with_outside.push(entry_on(5, day(2023, 3, 15), Mood::Tired));

        assert_eq!(
            summarize_window(&with_outside, 7, today),
            summarize_window(&inside, 7, today)
        );

        let summary = summarize_window(&with_outside, 7, today);
        assert_eq!(summary.mood_totals[&Mood::Angry], 0);
        assert_eq!(summary.total_entries(), 2);
    }

    #[test]
    fn test_dominant_mood_per_day() {
        let today = day(2024, 3, 15);
        let entries = vec![
            entry_at(1, today, 8, Mood::Sad),
            entry_at(2, today, 12, Mood::Happy),
            entry_at(3, today, 18, Mood::Sad),
        ];
        let summary = summarize_window(&entries, 7, today);
        let last = summary.buckets.last().unwrap();

        assert_eq!(last.dominant_mood, Some(Mood::Sad));
        assert_eq!(last.entry_count, 3);
        assert_eq!(summary.mood_totals[&Mood::Sad], 2);
        assert_eq!(summary.mood_totals[&Mood::Happy], 1);
    }

    #[test]
    fn test_daily_tie_goes_to_newest_entry() {
        let today = day(2024, 3, 15);
        let entries = vec![
            entry_at(1, today, 8, Mood::Angry),
            entry_at(2, today, 20, Mood::Neutral),
        ];
        let summary = summarize_window(&entries, 1, today);
        assert_eq!(summary.buckets.len(), 1);
        assert_eq!(summary.buckets[0].dominant_mood, Some(Mood::Neutral));
    }

    #[test]
    fn test_thirty_day_window() {
        let today = day(2024, 3, 15);
        let entries = vec![
            entry_on(1, today.days_before(29).unwrap(), Mood::Tired),
            entry_on(2, today.days_before(30).unwrap(), Mood::Tired),
        ];
        let summary = summarize_window(&entries, 30, today);

        assert_eq!(summary.buckets.len(), 30);
        assert_eq!(summary.buckets[0].date_key.to_string(), "2024-02-15");
        assert_eq!(summary.buckets[0].entry_count, 1);
        assert_eq!(summary.mood_totals[&Mood::Tired], 1);
    }

    #[test]
    fn test_zero_length_window() {
        let today = day(2024, 3, 15);
        let summary = summarize_window(&[entry_on(1, today, Mood::Happy)], 0, today);
        assert!(summary.buckets.is_empty());
        assert_eq!(summary.total_entries(), 0);
        assert_eq!(summary.mood_totals.len(), 5);
    }

    #[test]
    fn test_totals_serialize_with_mood_ids() {
        let today = day(2024, 3, 15);
        let summary = summarize_window(&[entry_on(1, today, Mood::Happy)], 1, today);
        let value = serde_json::to_value(&summary).unwrap();

        assert_eq!(value["mood_totals"]["happy"], 1);
        assert_eq!(value["mood_totals"]["tired"], 0);
        assert_eq!(value["buckets"][0]["date_key"], "2024-03-15");
        assert_eq!(value["buckets"][0]["dominant_mood"], "happy");
    }
}
