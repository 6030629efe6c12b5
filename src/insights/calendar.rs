//! Which calendar days have entries.

use super::date_key::DateKey;
use crate::mood::{newest_first, Mood, MoodEntry};
use std::collections::{BTreeMap, BTreeSet};

/// The distinct days covered by at least one entry.
pub fn covered_days(entries: &[MoodEntry]) -> BTreeSet<DateKey> {
    entries.iter().map(MoodEntry::date_key).collect()
}

/// Maps each covered day to the moods logged on it, newest first.
pub fn dates_with_entries(entries: &[MoodEntry]) -> BTreeMap<DateKey, Vec<Mood>> {
    let mut days: BTreeMap<DateKey, Vec<Mood>> = BTreeMap::new();
    for entry in newest_first(entries) {
        days.entry(entry.date_key()).or_default().push(entry.mood);
    }
    days
}
