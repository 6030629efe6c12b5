use crate::constants::{
    APP_DESCRIPTION, APP_NAME, DATE_FORMAT_COMPACT, DATE_FORMAT_ISO, LOG_FORMAT_JSON, LOG_FORMAT_TEXT,
    MAX_WINDOW_DAYS,
};
use crate::mood::Mood;
use crate::weather::Coordinates;
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Track your daily moods and reflections
#[derive(Parser, Debug)]
#[clap(name = APP_NAME, about = APP_DESCRIPTION)]
#[clap(author, version, long_about = None)]
pub struct CliArgs {
    /// Print verbose output
    #[clap(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Log output format (defaults to MOODMATE_LOG_FORMAT, then text)
    #[clap(long, value_name = "FORMAT", global = true, value_parser = [LOG_FORMAT_TEXT, LOG_FORMAT_JSON])]
    pub log_format: Option<String>,

    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Log how you feel today, or on a chosen date
    Log(LogArgs),

    /// Show your mood history, newest first
    List {
        /// Only show entries with this mood
        #[clap(short = 'm', long, value_enum)]
        mood: Option<Mood>,
    },

    /// Show total entries, most frequent mood, last entry and current streak
    Stats {
        /// Print the summary as JSON
        #[clap(long)]
        json: bool,
    },

    /// Show the weekly overview and monthly distribution
    Trends {
        /// Show a single window of this many days instead (at most 3650)
        #[clap(
            short = 'd',
            long,
            value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_WINDOW_DAYS))
        )]
        days: Option<u32>,

        /// Print the window summaries as JSON
        #[clap(long)]
        json: bool,
    },

    /// Show the days that have entries and the moods logged on them
    Calendar {
        /// Print the calendar as JSON
        #[clap(long)]
        json: bool,
    },

    /// Export every entry as CSV
    Export {
        /// Write to this file instead of stdout
        #[clap(short = 'o', long)]
        output: Option<PathBuf>,
    },
}

#[derive(Args, Debug)]
pub struct LogArgs {
    /// How you feel
    #[clap(short = 'm', long, value_enum)]
    pub mood: Option<Mood>,

    /// Optional note
    #[clap(short = 'n', long, default_value = "")]
    pub note: String,

    /// Log for a specific date (format: YYYY-MM-DD or YYYYMMDD)
    #[clap(short = 'd', long)]
    pub date: Option<String>,

    /// Latitude for the weather lookup
    #[clap(long, allow_hyphen_values = true, requires = "longitude")]
    pub latitude: Option<f64>,

    /// Longitude for the weather lookup
    #[clap(long, allow_hyphen_values = true, requires = "latitude")]
    pub longitude: Option<f64>,

    /// Do not attach weather to this entry
    #[clap(long, conflicts_with_all = &["latitude", "longitude"])]
    pub no_weather: bool,
}

impl LogArgs {
    /// Get the date if specified, parsing it into a NaiveDate
    pub fn parse_date(&self) -> Option<Result<NaiveDate, chrono::ParseError>> {
        self.date.as_ref().map(|date_str| {
            NaiveDate::parse_from_str(date_str, DATE_FORMAT_ISO)
                .or_else(|_| NaiveDate::parse_from_str(date_str, DATE_FORMAT_COMPACT))
        })
    }

    /// The location given on the command line, if any.
    pub fn location(&self) -> Result<Option<Coordinates>, String> {
        match (self.latitude, self.longitude) {
            (Some(latitude), Some(longitude)) => Coordinates::new(latitude, longitude).map(Some),
            _ => Ok(None),
        }
    }
}
