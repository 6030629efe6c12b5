//! Creating new mood entries.

use crate::constants::{DATE_FORMAT_HEADING, MISSING_MOOD_MESSAGE};
use crate::errors::{AppError, AppResult};
use crate::mood::{local_timestamp, next_entry_id, Mood, MoodEntry, Weather};
use crate::store::EntryStore;
use crate::weather::WeatherIcon;
use chrono::{DateTime, Local, NaiveDate, Utc};
use tracing::{debug, info};

/// What the user asked to log.
#[derive(Debug, Clone, Default)]
pub struct NewEntry {
    /// `None` when no mood was selected; saving is rejected.
    pub mood: Option<Mood>,
    pub note: String,
    /// Subject date; defaults to today.
    pub date: Option<NaiveDate>,
}

/// Logs a new entry and persists the updated collection.
///
/// The entry's timestamp is the chosen date at the current local time of day.
/// `fetch_weather` is only called once the request is known to be valid, and
/// whatever it returns is attached as-is. The weather is fetched before the
/// store is locked; the id allocation and the save happen under the lock.
///
/// # Errors
///
/// Returns an error if:
/// - No mood was selected
/// - Another writer holds the store lock
/// - The store cannot be read or written
pub fn log_entry<S, F>(
    store: &S,
    request: NewEntry,
    now: DateTime<Local>,
    fetch_weather: F,
) -> AppResult<MoodEntry>
where
    S: EntryStore,
    F: FnOnce() -> Option<Weather>,
{
    let mood = request
        .mood
        .ok_or_else(|| AppError::Validation(MISSING_MOOD_MESSAGE.to_string()))?;

    let weather = fetch_weather();
    debug!("Weather attached: {}", weather.is_some());

    let date = request.date.unwrap_or_else(|| now.date_naive());
    let timestamp = local_timestamp(date, now.time());

    let entry = store.update(|entries| {
        let id = next_entry_id(entries, now.with_timezone(&Utc));
        let entry = MoodEntry::new(id, timestamp, mood, request.note, weather);
        entries.insert(0, entry.clone());
        Ok(entry)
    })?;

    info!("Logged {} for {} (id {})", mood.id(), date, entry.id);
    Ok(entry)
}

/// Confirmation line for a saved entry.
pub fn render_saved_entry(entry: &MoodEntry) -> String {
    let mut line = format!(
        "Saved {} {} for {}",
        entry.mood.emoji(),
        entry.mood.label(),
        entry.date_key().format(DATE_FORMAT_HEADING)
    );

    if let Some(weather) = &entry.weather {
        let icon = WeatherIcon::from_condition(Some(weather.condition.as_str()));
        line.push_str(&format!(
            " ({} {}°C, {}",
            icon.glyph(),
            weather.temperature_celsius,
            weather.condition
        ));
        if let Some(city) = &weather.city {
            line.push_str(&format!(" in {}", city));
        }
        line.push(')');
    }

    line
}
