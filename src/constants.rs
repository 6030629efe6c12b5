//! Constants used throughout the application.
//!
//! This module contains all constants used in the MoodMate application, organized
//! into logical groups. Having constants centralized makes them easier to find,
//! modify, and reference consistently.

// Application Metadata
/// The name of the application.
pub const APP_NAME: &str = "moodmate";
/// The description of the application used in CLI help text.
pub const APP_DESCRIPTION: &str = "Track your daily moods and reflections";

// Logging Configuration
/// Log format identifier for plain text.
pub const LOG_FORMAT_TEXT: &str = "text";
/// Log format identifier for JSON.
pub const LOG_FORMAT_JSON: &str = "json";
/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "warn";
/// Service name used in tracing spans and structured logs.
pub const TRACING_SERVICE_NAME: &str = "moodmate";
/// Name for the root tracing span covering an application invocation.
pub const TRACING_ROOT_SPAN_NAME: &str = "app_invocation";

// Configuration Keys & Environment Variables
/// Environment variable for the MoodMate data directory.
pub const ENV_VAR_MOODMATE_DIR: &str = "MOODMATE_DIR";
/// Environment variable for the weather provider API key.
pub const ENV_VAR_WEATHER_API_KEY: &str = "MOODMATE_WEATHER_API_KEY";
/// Fallback environment variable for the weather provider API key.
pub const ENV_VAR_OPENWEATHER_API_KEY: &str = "OPENWEATHER_API_KEY";
/// Environment variable overriding the weather provider base URL.
pub const ENV_VAR_WEATHER_URL: &str = "MOODMATE_WEATHER_URL";
/// Environment variable for the default latitude used for weather lookups.
pub const ENV_VAR_LATITUDE: &str = "MOODMATE_LATITUDE";
/// Environment variable for the default longitude used for weather lookups.
pub const ENV_VAR_LONGITUDE: &str = "MOODMATE_LONGITUDE";
/// Environment variable selecting the log format.
pub const ENV_VAR_LOG_FORMAT: &str = "MOODMATE_LOG_FORMAT";
/// Standard environment variable for the user's home directory.
pub const ENV_VAR_HOME: &str = "HOME";
/// Default sub-directory for MoodMate data within the user's home directory.
pub const DEFAULT_DATA_SUBDIR: &str = ".moodmate";

// Storage
/// Namespace under which the entry collection is persisted.
pub const STORE_NAMESPACE: &str = "moodEntries";
/// File extension of the persisted entry collection.
pub const STORE_FILE_EXTENSION: &str = ".json";
/// Advisory lock file guarding writes to the data directory.
pub const STORE_LOCK_FILE_NAME: &str = ".moodmate.lock";
/// Default POSIX permissions for newly created directories (owner read/write/execute).
#[cfg(unix)]
pub const DEFAULT_DIR_PERMISSIONS: u32 = 0o700;
/// Default POSIX permissions for newly created files (owner read/write).
#[cfg(unix)]
pub const DEFAULT_FILE_PERMISSIONS: u32 = 0o600;
/// Placeholder string for redacted information in debug output.
pub const REDACTED_PLACEHOLDER: &str = "[REDACTED]";

// Date/Time Logic
/// Date format string for ISO date format (YYYY-MM-DD). Also the date-key format.
pub const DATE_FORMAT_ISO: &str = "%Y-%m-%d";
/// Date format string for compact date format (YYYYMMDD).
pub const DATE_FORMAT_COMPACT: &str = "%Y%m%d";
/// Long calendar date, e.g. "January 5, 2024".
pub const DATE_FORMAT_LONG: &str = "%B %-d, %Y";
/// Short calendar date, e.g. "Jan 5".
pub const DATE_FORMAT_SHORT: &str = "%b %-d";
/// Heading date for the log command, e.g. "Friday, January 5, 2024".
pub const DATE_FORMAT_HEADING: &str = "%A, %B %-d, %Y";

// Insights
/// Lookback length of the weekly overview.
pub const WEEKLY_WINDOW_DAYS: u32 = 7;
/// Lookback length of the monthly distribution.
pub const MONTHLY_WINDOW_DAYS: u32 = 30;
/// Longest custom trends window, roughly ten years.
pub const MAX_WINDOW_DAYS: u32 = 3650;
/// Number of entries required before trends are shown.
pub const MIN_ENTRIES_FOR_TRENDS: usize = 3;
/// Sentinel shown when a value cannot be derived.
pub const NOT_AVAILABLE: &str = "N/A";
/// Label of a zero-length streak.
pub const NO_STREAK_LABEL: &str = "No streak";

// Export
/// Header row of the CSV export. Column order is a compatibility contract.
pub const CSV_HEADER: &str = "Date,Mood,Note,Temperature,Weather";
/// Default file name offered for CSV exports.
pub const DEFAULT_EXPORT_FILE_NAME: &str = "mood-journal-export.csv";

// Weather
/// Default base URL of the weather provider.
pub const DEFAULT_WEATHER_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";
/// Request timeout for weather lookups, in seconds.
pub const WEATHER_TIMEOUT_SECS: u64 = 5;
/// Unit system requested from the weather provider (Celsius).
pub const WEATHER_UNITS: &str = "metric";

// User-facing messages
/// Warning shown when an entry is saved without a mood.
pub const MISSING_MOOD_MESSAGE: &str = "Please select a mood before saving";
/// Shown when a listing has nothing to show.
pub const NO_ENTRIES_MESSAGE: &str = "No entries found.";
/// Shown in place of an empty note.
pub const NO_NOTE_PLACEHOLDER: &str = "No note added";
/// Shown when there are too few entries for trends.
pub const NOT_ENOUGH_FOR_TRENDS_MESSAGE: &str = "You need at least 3 entries to view trends.";
