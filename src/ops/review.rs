//! Read-only views over the history: listing, stats, trends and calendar.
//!
//! Everything here takes loaded entries and returns text (or serializable
//! values for `--json`); nothing touches the store.

use crate::constants::{
    DATE_FORMAT_ISO, DATE_FORMAT_LONG, DATE_FORMAT_SHORT, MIN_ENTRIES_FOR_TRENDS,
    MONTHLY_WINDOW_DAYS, NO_ENTRIES_MESSAGE, NO_NOTE_PLACEHOLDER, WEEKLY_WINDOW_DAYS,
};
use crate::insights::{summarize_window, DateKey, MoodSummary, MoodTotals, WindowSummary};
use crate::mood::{newest_first, Mood, MoodEntry};
use crate::weather::WeatherIcon;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt::Write as _;

const BAR: &str = "█";
const EMPTY_DAY: &str = "·";

/// Entries newest first, optionally limited to one mood.
pub fn filter_entries(entries: &[MoodEntry], mood: Option<Mood>) -> Vec<&MoodEntry> {
    newest_first(entries)
        .into_iter()
        .filter(|entry| mood.map_or(true, |wanted| entry.mood == wanted))
        .collect()
}

/// The history listing, one line per entry.
pub fn render_entry_list(entries: &[MoodEntry], mood: Option<Mood>) -> String {
    let selected = filter_entries(entries, mood);
    if selected.is_empty() {
        return format!("{}\n", NO_ENTRIES_MESSAGE);
    }

    let mut out = String::new();
    for entry in selected {
        let note = if entry.note.trim().is_empty() {
            NO_NOTE_PLACEHOLDER
        } else {
            entry.note.as_str()
        };
        let _ = write!(
            out,
            "{} {:<20} {}",
            entry.mood.emoji(),
            entry.date_key().format(DATE_FORMAT_LONG),
            note
        );
        if let Some(weather) = &entry.weather {
            let icon = WeatherIcon::from_condition(Some(weather.condition.as_str()));
            let _ = write!(out, "  {} {}°C", icon.glyph(), weather.temperature_celsius);
        }
        out.push('\n');
    }
    out
}

pub fn render_summary(summary: &MoodSummary) -> String {
    let mut out = String::from("Your Mood Summary\n");
    let _ = writeln!(out, "  Total entries:  {}", summary.total_entries);
    let _ = writeln!(out, "  Frequent mood:  {}", summary.most_frequent_label());
    let _ = writeln!(out, "  Last entry:     {}", summary.last_entry_label());
    let _ = writeln!(out, "  Current streak: {}", summary.streak.label());
    out
}

/// The weekly overview and monthly distribution shown by `trends`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrendReport {
    pub weekly: WindowSummary,
    pub monthly: WindowSummary,
}

pub fn has_enough_for_trends(entries: &[MoodEntry]) -> bool {
    entries.len() >= MIN_ENTRIES_FOR_TRENDS
}

/// Builds both trend windows, or `None` when the history is too short.
pub fn trend_report(entries: &[MoodEntry], today: DateKey) -> Option<TrendReport> {
    if !has_enough_for_trends(entries) {
        return None;
    }
    Some(TrendReport {
        weekly: summarize_window(entries, WEEKLY_WINDOW_DAYS, today),
        monthly: summarize_window(entries, MONTHLY_WINDOW_DAYS, today),
    })
}

/// A single window of arbitrary length, under the same minimum as `trends`.
pub fn custom_window(entries: &[MoodEntry], days: u32, today: DateKey) -> Option<WindowSummary> {
    has_enough_for_trends(entries).then(|| summarize_window(entries, days, today))
}

pub fn render_trends(report: &TrendReport) -> String {
    let mut out = render_window(&report.weekly, "Weekly Overview");
    out.push('\n');
    out.push_str("Monthly Distribution\n");
    out.push_str(&render_distribution(&report.monthly.mood_totals));
    out
}

/// Per-day bars followed by a one-line legend of the window totals.
pub fn render_window(window: &WindowSummary, title: &str) -> String {
    let mut out = format!("{}\n", title);

    for bucket in &window.buckets {
        let day = bucket.date_key.format(DATE_FORMAT_SHORT);
        match bucket.dominant_mood {
            Some(mood) => {
                let _ = writeln!(
                    out,
                    "  {:<7} {} {} {}",
                    day,
                    mood.emoji(),
                    BAR.repeat(bucket.entry_count),
                    bucket.entry_count
                );
            }
            None => {
                let _ = writeln!(out, "  {:<7} {}", day, EMPTY_DAY);
            }
        }
    }

    let legend: Vec<String> = window
        .mood_totals
        .iter()
        .map(|(mood, count)| format!("{} {}", mood.emoji(), count))
        .collect();
    let _ = writeln!(out, "  {}", legend.join("  "));
    out
}

/// One bar per mood, in legend order.
pub fn render_distribution(totals: &MoodTotals) -> String {
    let mut out = String::new();
    for (mood, &count) in totals {
        let _ = writeln!(
            out,
            "  {} {:<8} {:>3} {}",
            mood.emoji(),
            mood.label(),
            count,
            BAR.repeat(count)
        );
    }
    out
}

/// Calendar keys as ISO strings, for JSON output.
pub fn calendar_for_output(calendar: &BTreeMap<DateKey, Vec<Mood>>) -> BTreeMap<String, Vec<Mood>> {
    calendar
        .iter()
        .map(|(key, moods)| (key.format(DATE_FORMAT_ISO), moods.clone()))
        .collect()
}

pub fn render_calendar(calendar: &BTreeMap<DateKey, Vec<Mood>>) -> String {
    if calendar.is_empty() {
        return format!("{}\n", NO_ENTRIES_MESSAGE);
    }

    let mut out = String::new();
    for (key, moods) in calendar {
        let emojis: Vec<&str> = moods.iter().map(|mood| mood.emoji()).collect();
        let _ = writeln!(out, "{}  {}", key, emojis.join(" "));
    }
    out
}
