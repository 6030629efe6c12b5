//! Mood frequency and the most frequent mood.
//!
//! Ties are broken by encounter order: entries are scanned newest first, and
//! among moods sharing the highest count the one that was recorded first in
//! the tally wins. The same rule picks each day's dominant mood in
//! [`window`](super::window).

use crate::constants::NOT_AVAILABLE;
use crate::mood::{newest_first, Mood, MoodEntry};

/// Mood counts kept in the order each mood was first seen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EncounterTally {
    counts: Vec<(Mood, usize)>,
}

impl EncounterTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one occurrence of `mood`.
    pub fn record(&mut self, mood: Mood) {
        match self.counts.iter_mut().find(|(seen, _)| *seen == mood) {
            Some((_, count)) => *count += 1,
            None => self.counts.push((mood, 1)),
        }
    }

    pub fn count(&self, mood: Mood) -> usize {
        self.counts
            .iter()
            .find(|(seen, _)| *seen == mood)
            .map_or(0, |(_, count)| *count)
    }

    /// Total occurrences across all moods.
    pub fn total(&self) -> usize {
        self.counts.iter().map(|(_, count)| count).sum()
    }

    /// The highest-count mood; the earliest recorded mood wins a tie.
    pub fn dominant(&self) -> Option<Mood> {
        let mut best: Option<(Mood, usize)> = None;
        for &(mood, count) in &self.counts {
            match best {
                Some((_, best_count)) if count <= best_count => {}
                _ => best = Some((mood, count)),
            }
        }
        best.map(|(mood, _)| mood)
    }
}

impl FromIterator<Mood> for EncounterTally {
    fn from_iter<I: IntoIterator<Item = Mood>>(iter: I) -> Self {
        let mut tally = EncounterTally::new();
        for mood in iter {
            tally.record(mood);
        }
        tally
    }
}

/// Returns the mood logged most often, or `None` for an empty collection.
pub fn most_frequent_mood(entries: &[MoodEntry]) -> Option<Mood> {
    newest_first(entries)
        .into_iter()
        .map(|entry| entry.mood)
        .collect::<EncounterTally>()
        .dominant()
}

/// Display form of [`most_frequent_mood`]: the mood label, or `N/A`.
pub fn most_frequent_mood_label(entries: &[MoodEntry]) -> String {
    most_frequent_mood(entries).map_or_else(|| NOT_AVAILABLE.to_string(), |m| m.label().to_string())
}
