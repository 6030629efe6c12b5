//! The current logging streak.
//!
//! A streak counts consecutive calendar days, ending at and including today,
//! that each have at least one entry. It only ever starts from today: a
//! history that stops yesterday, or entries dated in the future with nothing
//! today, is no streak at all.

use super::calendar::covered_days;
use super::date_key::DateKey;
use crate::constants::NO_STREAK_LABEL;
use crate::mood::MoodEntry;
use serde::Serialize;
use std::fmt;

/// Length of the current streak in days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Streak {
    pub days: u32,
}

impl Streak {
    pub fn is_active(&self) -> bool {
        self.days > 0
    }

    /// "No streak" when empty, otherwise e.g. "3 days".
    pub fn label(&self) -> String {
        if self.is_active() {
            format!("{} days", self.days)
        } else {
            NO_STREAK_LABEL.to_string()
        }
    }
}

impl fmt::Display for Streak {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// Walks backward from `today` one calendar day at a time while each day is covered.
pub fn current_streak(entries: &[MoodEntry], today: DateKey) -> Streak {
    let covered = covered_days(entries);
    if !covered.contains(&today) {
        return Streak::default();
    }

    let mut days = 1;
    let mut cursor = today;
    while let Some(previous) = cursor.previous() {
        if !covered.contains(&previous) {
            break;
        }
        days += 1;
        cursor = previous;
    }

    Streak { days }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::insights::test_support::{day, entry_at, entry_on};
    use crate::mood::Mood;

    fn ago(today: DateKey, days: u32) -> DateKey {
        today.days_before(days).unwrap()
    }

    #[test]
    fn test_three_consecutive_days() {
        let today = day(2024, 3, 15);
        let entries = vec![
            entry_on(1, today, Mood::Happy),
            entry_on(2, ago(today, 1), Mood::Sad),
            entry_on(3, ago(today, 2), Mood::Neutral),
        ];
        let streak = current_streak(&entries, today);
        assert_eq!(streak.days, 3);
        assert_eq!(streak.label(), "3 days");
    }

    #[test]
    fn test_gap_breaks_streak() {
        let today = day(2024, 3, 15);
        let entries = vec![
            entry_on(1, today, Mood::Happy),
            entry_on(2, ago(today, 3), Mood::Sad),
        ];
        assert_eq!(current_streak(&entries, today).days, 1);
    }

    #[test]
    fn test_no_entry_today_means_no_streak() {
        let today = day(2024, 3, 15);
        let entries: Vec<MoodEntry> = (1..=10)
            .map(|back| entry_on(i64::from(back), ago(today, back), Mood::Happy))
            .collect();

        let streak = current_streak(&entries, today);
        assert_eq!(streak.days, 0);
        assert!(!streak.is_active());
        assert_eq!(streak.label(), "No streak");
        assert_eq!(current_streak(&[], today).label(), "No streak");
    }

    #[test]
    fn test_same_day_entries_count_once() {
        let today = day(2024, 3, 15);
        let entries = vec![
            entry_at(1, today, 8, Mood::Happy),
            entry_at(2, today, 21, Mood::Tired),
        ];
        assert_eq!(current_streak(&entries, today).days, 1);
    }

    #[test]
    fn test_future_entry_without_today_is_no_streak() {
        let today = day(2024, 3, 15);
        let tomorrow = day(2024, 3, 16);
        let entries = vec![
            entry_on(1, tomorrow, Mood::Happy),
            entry_on(2, ago(today, 1), Mood::Happy),
        ];
        assert_eq!(current_streak(&entries, today).days, 0);
    }

    #[test]
    fn test_future_entries_do_not_extend_streak() {
        let today = day(2024, 3, 15);
        let entries = vec![
            entry_on(1, day(2024, 3, 16), Mood::Happy),
            entry_on(2, today, Mood::Happy),
            entry_on(3, ago(today, 1), Mood::Happy),
        ];
        assert_eq!(current_streak(&entries, today).days, 2);
    }

    #[test]
    fn test_streak_crosses_month_boundary() {
        let today = day(2024, 3, 2);
        let entries: Vec<MoodEntry> = (0..5)
            .map(|back| entry_on(i64::from(back), ago(today, back), Mood::Neutral))
            .collect();
        assert_eq!(current_streak(&entries, today).days, 5);
    }
}
