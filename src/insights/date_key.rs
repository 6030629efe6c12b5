//! Calendar-day keys.
//!
//! Every comparison the engine makes between entries and "today" happens on
//! local wall-clock calendar days. `DateKey` is that unit; it renders as
//! `YYYY-MM-DD`, so string order and chronological order agree.

use crate::constants::DATE_FORMAT_ISO;
use chrono::{DateTime, Days, Local, NaiveDate, TimeZone, Utc};
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A local calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DateKey(NaiveDate);

impl DateKey {
    pub fn new(date: NaiveDate) -> Self {
        DateKey(date)
    }

    /// Normalizes an instant to the local calendar day it falls on.
    pub fn from_timestamp(timestamp: &DateTime<Utc>) -> Self {
        Self::from_timestamp_in(timestamp, &Local)
    }

    /// Normalizes an instant to its calendar day in `tz`.
    pub fn from_timestamp_in<Tz: TimeZone>(timestamp: &DateTime<Utc>, tz: &Tz) -> Self {
        DateKey(timestamp.with_timezone(tz).date_naive())
    }

    /// The current local calendar day.
    pub fn today() -> Self {
        DateKey(Local::now().date_naive())
    }

    pub fn date(self) -> NaiveDate {
        self.0
    }

    /// The calendar day before this one.
    pub fn previous(self) -> Option<Self> {
        self.0.pred_opt().map(DateKey)
    }

    /// The calendar day `days` before this one.
    pub fn days_before(self, days: u32) -> Option<Self> {
        self.0.checked_sub_days(Days::new(u64::from(days))).map(DateKey)
    }

    /// Renders the day with a chrono format string.
    pub fn format(self, fmt: &str) -> String {
        self.0.format(fmt).to_string()
    }
}

impl From<NaiveDate> for DateKey {
    fn from(date: NaiveDate) -> Self {
        DateKey(date)
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT_ISO))
    }
}

impl FromStr for DateKey {
    type Err = chrono::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(s, DATE_FORMAT_ISO).map(DateKey)
    }
}

impl Serialize for DateKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
