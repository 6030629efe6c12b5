//! Temporal mood aggregation.
//!
//! Pure functions over a snapshot of the entry collection and the current
//! local day. Nothing here touches storage, the clock, or the network; the
//! caller supplies both the entries and `today`.
//!
//! # Module Structure
//!
//! - `date_key`: calendar-day normalization
//! - `calendar`: days covered by entries
//! - `frequency`: mood counts and the most frequent mood
//! - `streak`: consecutive-day logging streak ending today
//! - `window`: per-day buckets and totals over a trailing window
//! - `summary`: the combined at-a-glance summary
//!
//! # Example
//!
//! ```
//! use moodmate::insights::{current_streak, summarize_window, DateKey};
//! use moodmate::mood::{local_timestamp, Mood, MoodEntry};
//! use chrono::{NaiveDate, NaiveTime};
//!
//! let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
//! let noon = NaiveTime::from_hms_opt(12, 0, 0).unwrap();
//! let entries = vec![MoodEntry::new(1, local_timestamp(today, noon), Mood::Happy, "", None)];
//!
//! let today = DateKey::new(today);
//! assert_eq!(current_streak(&entries, today).days, 1);
//! assert_eq!(summarize_window(&entries, 7, today).buckets.len(), 7);
//! ```

pub mod calendar;
pub mod date_key;
pub mod frequency;
pub mod streak;
pub mod summary;
pub mod window;

pub use calendar::{covered_days, dates_with_entries};
pub use date_key::DateKey;
pub use frequency::{most_frequent_mood, most_frequent_mood_label, EncounterTally};
pub use streak::{current_streak, Streak};
pub use summary::{summarize, MoodSummary};
pub use window::{summarize_window, DayBucket, MoodTotals, WindowSummary};
