//! The at-a-glance mood summary.

use super::date_key::DateKey;
use super::frequency::most_frequent_mood;
use super::streak::{current_streak, Streak};
use crate::constants::{DATE_FORMAT_SHORT, NOT_AVAILABLE};
use crate::mood::{Mood, MoodEntry};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoodSummary {
    pub total_entries: usize,
    pub most_frequent: Option<Mood>,
    /// Day of the newest entry.
    pub last_entry: Option<DateKey>,
    pub streak: Streak,
}

impl MoodSummary {
    pub fn most_frequent_label(&self) -> String {
        self.most_frequent
            .map_or_else(|| NOT_AVAILABLE.to_string(), |m| m.label().to_string())
    }

    /// Short form of the newest entry's day, e.g. "Mar 5".
    pub fn last_entry_label(&self) -> String {
        self.last_entry
            .map_or_else(|| NOT_AVAILABLE.to_string(), |d| d.format(DATE_FORMAT_SHORT))
    }
}

pub fn summarize(entries: &[MoodEntry], today: DateKey) -> MoodSummary {
    MoodSummary {
        total_entries: entries.len(),
        most_frequent: most_frequent_mood(entries),
        last_entry: entries
            .iter()
            .max_by_key(|entry| entry.timestamp)
            .map(MoodEntry::date_key),
        streak: current_streak(entries, today),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::insights::test_support::{day, entry_on};

    #[test]
    fn test_summary_of_empty_history() {
        let summary = summarize(&[], day(2024, 3, 15));
        assert_eq!(summary.total_entries, 0);
        assert_eq!(summary.most_frequent_label(), "N/A");
        assert_eq!(summary.last_entry_label(), "N/A");
        assert_eq!(summary.streak.label(), "No streak");
    }

    #[test]
    fn test_last_entry_is_newest_not_first_stored() {
        let today = day(2024, 3, 15);
        let entries = vec![
            entry_on(1, day(2024, 3, 2), Mood::Sad),
            entry_on(2, day(2024, 3, 5), Mood::Happy),
            entry_on(3, day(2024, 3, 1), Mood::Happy),
        ];
        let summary = summarize(&entries, today);

        assert_eq!(summary.total_entries, 3);
        assert_eq!(summary.last_entry_label(), "Mar 5");
        assert_eq!(summary.most_frequent, Some(Mood::Happy));
        assert_eq!(summary.streak.days, 0);
    }
}
