//! The mood entry model.
//!
//! A [`MoodEntry`] is one logged mood for a moment in time, with an optional
//! note and an optional weather attachment. Entries are immutable once created;
//! the collection only ever grows by prepending and is persisted in full.
//!
//! The serde representation is the persisted record shape:
//!
//! ```json
//! {"id": 1704456000000, "date": "2024-01-05T12:00:00Z", "mood": "happy",
//!  "note": "", "weather": {"temp": 7, "condition": "Clouds", "city": "Oslo"}}
//! ```

use crate::insights::date_key::DateKey;
use chrono::{DateTime, Local, NaiveDate, NaiveTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// The closed set of moods a person can log.
///
/// Declaration order is the legend order used by every per-mood tally.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Happy,
    Neutral,
    Sad,
    Angry,
    Tired,
}

impl Mood {
    /// Every mood, in legend order.
    pub const ALL: [Mood; 5] = [
        Mood::Happy,
        Mood::Neutral,
        Mood::Sad,
        Mood::Angry,
        Mood::Tired,
    ];

    /// The stable identifier used in storage.
    pub fn id(self) -> &'static str {
        match self {
            Mood::Happy => "happy",
            Mood::Neutral => "neutral",
            Mood::Sad => "sad",
            Mood::Angry => "angry",
            Mood::Tired => "tired",
        }
    }

    /// The display label used in exports and reports.
    pub fn label(self) -> &'static str {
        match self {
            Mood::Happy => "Happy",
            Mood::Neutral => "Neutral",
            Mood::Sad => "Sad",
            Mood::Angry => "Angry",
            Mood::Tired => "Tired",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Mood::Happy => "😊",
            Mood::Neutral => "😐",
            Mood::Sad => "😔",
            Mood::Angry => "😠",
            Mood::Tired => "😴",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Mood {
    type Err = String;

    /// Parses a mood identifier, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mood::ALL
            .into_iter()
            .find(|mood| mood.id().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown mood: '{}'", s))
    }
}

/// Weather conditions attached to an entry at creation time.
///
/// The core never validates this; it is carried through as provided.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Weather {
    /// Temperature in whole degrees Celsius.
    #[serde(rename = "temp", deserialize_with = "deserialize_rounded_temperature")]
    pub temperature_celsius: i32,
    /// Condition keyword from the provider (e.g. "Clear", "Rain").
    pub condition: String,
    /// Provider icon code, kept for compatibility with existing records.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
}

/// Rounds a Celsius reading half-up to a whole degree.
pub fn round_temperature(celsius: f64) -> i32 {
    (celsius + 0.5).floor() as i32
}

// Older records may hold a fractional temperature.
fn deserialize_rounded_temperature<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = f64::deserialize(deserializer)?;
    Ok(round_temperature(raw))
}

/// One logged mood.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodEntry {
    /// Unique, increasing with creation order.
    pub id: i64,
    /// The instant the entry's subject date represents.
    #[serde(rename = "date")]
    pub timestamp: DateTime<Utc>,
    pub mood: Mood,
    #[serde(default)]
    pub note: String,
    #[serde(default)]
    pub weather: Option<Weather>,
}

impl MoodEntry {
    pub fn new(
        id: i64,
        timestamp: DateTime<Utc>,
        mood: Mood,
        note: impl Into<String>,
        weather: Option<Weather>,
    ) -> Self {
        Self {
            id,
            timestamp,
            mood,
            note: note.into(),
            weather,
        }
    }

    /// The local calendar day this entry belongs to.
    pub fn date_key(&self) -> DateKey {
        DateKey::from_timestamp(&self.timestamp)
    }
}

/// Allocates the id for an entry created at `now`.
///
/// Ids are creation-time milliseconds, bumped past the largest existing id so
/// they stay unique and increasing even when two entries share a millisecond
/// or the clock moves backwards.
pub fn next_entry_id(existing: &[MoodEntry], now: DateTime<Utc>) -> i64 {
    let candidate = now.timestamp_millis();
    match existing.iter().map(|entry| entry.id).max() {
        Some(max_id) if candidate <= max_id => max_id + 1,
        _ => candidate,
    }
}

/// Returns the entries ordered newest first.
///
/// The sort is stable: entries sharing a timestamp keep their collection order.
pub fn newest_first(entries: &[MoodEntry]) -> Vec<&MoodEntry> {
    let mut sorted: Vec<&MoodEntry> = entries.iter().collect();
    sorted.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    sorted
}

/// Converts a local wall-clock date and time into an instant.
///
/// Times that fall into a DST gap resolve to local noon of the same date, so
/// the entry still lands on the requested calendar day.
pub fn local_timestamp(date: NaiveDate, time: NaiveTime) -> DateTime<Utc> {
    let resolved = Local
        .from_local_datetime(&date.and_time(time))
        .earliest()
        .or_else(|| {
            NaiveTime::from_hms_opt(12, 0, 0)
                .and_then(|noon| Local.from_local_datetime(&date.and_time(noon)).earliest())
        });

    match resolved {
        Some(local) => local.with_timezone(&Utc),
        None => Utc.from_utc_datetime(&date.and_time(time)),
    }
}
