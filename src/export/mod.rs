//! CSV export of the entry collection.
//!
//! The output is a single text blob:
//!
//! ```text
//! Date,Mood,Note,Temperature,Weather
//! "January 5, 2024",Happy,"walked; then tea",7°C,Clouds
//! "January 4, 2024",Tired,"",N/A,N/A
//! ```
//!
//! Rows follow the collection's order; nothing is re-sorted. Notes have every
//! comma replaced by a semicolon and every line break (`\n`, `\r\n` or `\r`)
//! replaced by a space, then are wrapped in double quotes. Embedded double
//! quotes in notes are not escaped.

use crate::constants::{CSV_HEADER, DATE_FORMAT_LONG, NOT_AVAILABLE};
use crate::mood::MoodEntry;

/// Renders `entries` as CSV, one header row plus one row per entry.
pub fn export_csv(entries: &[MoodEntry]) -> String {
    let mut csv = String::with_capacity(CSV_HEADER.len() + 1 + entries.len() * 64);
    csv.push_str(CSV_HEADER);
    csv.push('\n');

    for entry in entries {
        csv.push_str(&csv_row(entry));
        csv.push('\n');
    }

    csv
}

fn csv_row(entry: &MoodEntry) -> String {
    let date = entry.date_key().format(DATE_FORMAT_LONG);
    let note = entry
        .note
        .replace(',', ";")
        .replace("\r\n", " ")
        .replace(['\n', '\r'], " ");
    let (temperature, condition) = match &entry.weather {
        Some(weather) => (
            format!("{}°C", weather.temperature_celsius),
            weather.condition.clone(),
        ),
        None => (NOT_AVAILABLE.to_string(), NOT_AVAILABLE.to_string()),
    };

    format!(
        "\"{}\",{},\"{}\",{},{}",
        date,
        entry.mood.label(),
        note,
        temperature,
        condition
    )
}
