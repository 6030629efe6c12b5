/*!
# Moodmate - A Daily Mood Journal

Moodmate is a command-line tool for logging how you feel each day and looking
back at the history.

This file contains the main application flow: logging setup, configuration,
and dispatch of the selected command.

## Usage

```
moodmate [OPTIONS] <COMMAND>

Commands:
  log       Log how you feel today, or on a chosen date
  list      Show your mood history, newest first
  stats     Show total entries, most frequent mood, last entry and current streak
  trends    Show the weekly overview and monthly distribution
  calendar  Show the days that have entries and the moods logged on them
  export    Export every entry as CSV

Options:
  -v, --verbose               Print verbose output
      --log-format <FORMAT>   Log output format [possible values: text, json]
  -h, --help                  Print help
  -V, --version               Print version
```

## Configuration

- `MOODMATE_DIR`: where entries are stored (defaults to "~/.moodmate")
- `MOODMATE_WEATHER_API_KEY` or `OPENWEATHER_API_KEY`: enables weather lookups
- `MOODMATE_LATITUDE` / `MOODMATE_LONGITUDE`: default location for weather
- `MOODMATE_LOG_FORMAT`: "text" or "json"
*/

use chrono::Local;
use clap::Parser;
use moodmate::cli::{CliArgs, Command, LogArgs};
use moodmate::config::Config;
use moodmate::constants::{
    DEFAULT_LOG_LEVEL, ENV_VAR_LOG_FORMAT, LOG_FORMAT_JSON, LOG_FORMAT_TEXT,
    NOT_ENOUGH_FOR_TRENDS_MESSAGE, TRACING_ROOT_SPAN_NAME, TRACING_SERVICE_NAME,
};
use moodmate::errors::{AppError, AppResult};
use moodmate::insights::{dates_with_entries, summarize, DateKey};
use moodmate::ops::{self, NewEntry};
use moodmate::store::{EntryStore, JsonFileStore};
use moodmate::weather;
use std::io::{self, Write};
use std::process;
use tracing::{debug, error, info, info_span};
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

fn main() {
    let args = CliArgs::parse();

    let log_format = args
        .log_format
        .clone()
        .or_else(|| std::env::var(ENV_VAR_LOG_FORMAT).ok())
        .unwrap_or_else(|| LOG_FORMAT_TEXT.to_string());

    if let Err(e) = init_tracing(&log_format, args.verbose) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }

    let correlation_id = Uuid::new_v4();
    let root_span = info_span!(
        TRACING_ROOT_SPAN_NAME,
        service = TRACING_SERVICE_NAME,
        correlation_id = %correlation_id
    );
    let _guard = root_span.enter();

    if let Err(e) = run(args) {
        error!("Command failed: {}", e);
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Sets up the global subscriber. Logs go to stderr; stdout carries output.
fn init_tracing(format: &str, verbose: bool) -> AppResult<()> {
    let default_level = if verbose { "debug" } else { DEFAULT_LOG_LEVEL };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr);

    match format {
        LOG_FORMAT_JSON => builder.json().with_current_span(true).init(),
        LOG_FORMAT_TEXT => builder.init(),
        other => {
            return Err(AppError::Config(format!(
                "Unsupported log format '{}'. Expected '{}' or '{}'",
                other, LOG_FORMAT_TEXT, LOG_FORMAT_JSON
            )))
        }
    }
    Ok(())
}

/// Loads configuration and runs the selected command.
///
/// # Errors
///
/// This function can return various types of errors, including:
/// - Configuration errors (invalid data directory, bad default location)
/// - Validation errors (no mood selected, malformed date)
/// - Store and I/O errors
fn run(args: CliArgs) -> AppResult<()> {
    debug!("CLI arguments: {:?}", args);

    let config = Config::load()?;
    config.validate()?;
    debug!("Configuration: {:?}", config);

    let store = JsonFileStore::new(&config.data_dir);
    let now = Local::now();
    let today = DateKey::new(now.date_naive());

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match args.command {
        Command::Log(log_args) => {
            let entry = log(&store, &config, log_args, now)?;
            writeln!(out, "{}", ops::render_saved_entry(&entry))?;
        }
        Command::List { mood } => {
            let entries = store.load_all()?;
            write!(out, "{}", ops::render_entry_list(&entries, mood))?;
        }
        Command::Stats { json } => {
            let entries = store.load_all()?;
            let summary = summarize(&entries, today);
            if json {
                writeln!(out, "{}", serde_json::to_string_pretty(&summary)?)?;
            } else {
                write!(out, "{}", ops::render_summary(&summary))?;
            }
        }
        Command::Trends { days, json } => {
            let entries = store.load_all()?;
            match days {
                Some(days) => match ops::custom_window(&entries, days, today) {
                    Some(window) if json => {
                        writeln!(out, "{}", serde_json::to_string_pretty(&window)?)?
                    }
                    Some(window) => write!(
                        out,
                        "{}",
                        ops::render_window(&window, &format!("Last {} Days", days))
                    )?,
                    None => writeln!(out, "{}", NOT_ENOUGH_FOR_TRENDS_MESSAGE)?,
                },
                None => match ops::trend_report(&entries, today) {
                    Some(report) if json => {
                        writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?
                    }
                    Some(report) => write!(out, "{}", ops::render_trends(&report))?,
                    None => writeln!(out, "{}", NOT_ENOUGH_FOR_TRENDS_MESSAGE)?,
                },
            }
        }
        Command::Calendar { json } => {
            let entries = store.load_all()?;
            let calendar = dates_with_entries(&entries);
            if json {
                let printable = ops::calendar_for_output(&calendar);
                writeln!(out, "{}", serde_json::to_string_pretty(&printable)?)?;
            } else {
                write!(out, "{}", ops::render_calendar(&calendar))?;
            }
        }
        Command::Export { output } => {
            let entries = store.load_all()?;
            match output {
                Some(path) => {
                    let written = ops::export_to_file(&entries, &path)?;
                    writeln!(
                        out,
                        "Exported {} entries to {}",
                        entries.len(),
                        written.display()
                    )?;
                }
                None => ops::write_export(&entries, &mut out)?,
            }
        }
    }

    Ok(())
}

fn log(
    store: &JsonFileStore,
    config: &Config,
    args: LogArgs,
    now: chrono::DateTime<Local>,
) -> AppResult<moodmate::MoodEntry> {
    let date = args
        .parse_date()
        .transpose()
        .map_err(|e| AppError::Validation(format!("Invalid date format: {}", e)))?;
    let location = args.location().map_err(AppError::Validation)?;
    let skip_weather = args.no_weather;

    let request = NewEntry {
        mood: args.mood,
        note: args.note,
        date,
    };

    let entry = ops::log_entry(store, request, now, || {
        if skip_weather {
            info!("Weather disabled for this entry");
            None
        } else {
            weather::fetch_best_effort(&config.weather, location)
        }
    })?;
    Ok(entry)
}
