//! Configuration management for the moodmate application.
//!
//! This module handles loading and validating configuration settings from environment
//! variables, with sensible defaults.
//!
//! # Environment Variables
//!
//! - `MOODMATE_DIR`: Directory holding the entry store (defaults to ~/.moodmate)
//! - `MOODMATE_WEATHER_API_KEY`: Weather provider key (fallback `OPENWEATHER_API_KEY`)
//! - `MOODMATE_WEATHER_URL`: Weather provider base URL
//! - `MOODMATE_LATITUDE` / `MOODMATE_LONGITUDE`: Default location for weather lookups
//! - `HOME`: Used for expanding the default data directory path

use crate::constants::{
    DEFAULT_DATA_SUBDIR, DEFAULT_WEATHER_BASE_URL, ENV_VAR_HOME, ENV_VAR_LATITUDE,
    ENV_VAR_LONGITUDE, ENV_VAR_MOODMATE_DIR, ENV_VAR_OPENWEATHER_API_KEY,
    ENV_VAR_WEATHER_API_KEY, ENV_VAR_WEATHER_URL, REDACTED_PLACEHOLDER, WEATHER_TIMEOUT_SECS,
};
use crate::errors::{AppError, AppResult};
use crate::weather::Coordinates;
use std::env;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

/// Weather provider settings.
#[derive(Clone)]
pub struct WeatherConfig {
    /// API key; weather is never fetched without one.
    pub api_key: Option<String>,
    pub base_url: String,
    /// Location used when a command does not supply one.
    pub location: Option<Coordinates>,
    pub timeout: Duration,
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_WEATHER_BASE_URL.to_string(),
            location: None,
            timeout: Duration::from_secs(WEATHER_TIMEOUT_SECS),
        }
    }
}

impl fmt::Debug for WeatherConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeatherConfig")
            .field(
                "api_key",
                &self.api_key.as_ref().map(|_| REDACTED_PLACEHOLDER),
            )
            .field("base_url", &self.base_url)
            .field("location", &self.location.map(|_| REDACTED_PLACEHOLDER))
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Configuration for the moodmate application.
///
/// # Examples
///
/// ```
/// use moodmate::Config;
/// use moodmate::config::WeatherConfig;
/// use std::path::PathBuf;
///
/// let config = Config {
///     data_dir: PathBuf::from("/path/to/data"),
///     weather: WeatherConfig::default(),
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Default)]
pub struct Config {
    /// Directory where the entry store lives.
    ///
    /// Loaded from `MOODMATE_DIR` with a fallback to `~/.moodmate`.
    pub data_dir: PathBuf,

    pub weather: WeatherConfig,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("data_dir", &"[REDACTED_PATH]")
            .field("weather", &self.weather)
            .finish()
    }
}

/// Reads an environment variable, treating an empty value as unset.
fn env_non_empty(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.trim().is_empty())
}

impl Config {
    /// Loads configuration from environment variables with sensible defaults.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if:
    /// - The data directory path expansion fails or yields an empty path
    /// - Only one of latitude/longitude is set, or either fails to parse or is out of range
    pub fn load() -> AppResult<Self> {
        let data_dir_str = env::var(ENV_VAR_MOODMATE_DIR).unwrap_or_else(|_| {
            let home = env::var(ENV_VAR_HOME).unwrap_or_else(|_| "".to_string());
            format!("{}/{}", home, DEFAULT_DATA_SUBDIR)
        });

        // Expand the path (handles ~ and environment variables)
        let expanded_path = shellexpand::full(&data_dir_str)
            .map_err(|e| AppError::Config(format!("Failed to expand path: {}", e)))?;

        let data_dir = PathBuf::from(expanded_path.into_owned());
        if data_dir.as_os_str().is_empty() {
            return Err(AppError::Config("Data directory path is empty".to_string()));
        }

        let weather = WeatherConfig {
            api_key: env_non_empty(ENV_VAR_WEATHER_API_KEY)
                .or_else(|| env_non_empty(ENV_VAR_OPENWEATHER_API_KEY)),
            base_url: env_non_empty(ENV_VAR_WEATHER_URL)
                .unwrap_or_else(|| DEFAULT_WEATHER_BASE_URL.to_string()),
            location: parse_location(
                env_non_empty(ENV_VAR_LATITUDE).as_deref(),
                env_non_empty(ENV_VAR_LONGITUDE).as_deref(),
            )?,
            timeout: Duration::from_secs(WEATHER_TIMEOUT_SECS),
        };

        Ok(Config { data_dir, weather })
    }

    /// Validates that the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` with one of the following messages:
    /// - "Data directory path is empty"
    /// - "Data directory must be an absolute path"
    /// - "Weather base URL must start with http:// or https://"
    pub fn validate(&self) -> AppResult<()> {
        if self.data_dir.as_os_str().is_empty() {
            return Err(AppError::Config("Data directory path is empty".to_string()));
        }

        if !self.data_dir.is_absolute() {
            return Err(AppError::Config(
                "Data directory must be an absolute path".to_string(),
            ));
        }

        let url = &self.weather.base_url;
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(AppError::Config(
                "Weather base URL must start with http:// or https://".to_string(),
            ));
        }

        Ok(())
    }
}

/// Parses an optional latitude/longitude pair. Both or neither must be given.
pub fn parse_location(
    latitude: Option<&str>,
    longitude: Option<&str>,
) -> AppResult<Option<Coordinates>> {
    let (latitude, longitude) = match (latitude, longitude) {
        (None, None) => return Ok(None),
        (Some(lat), Some(lon)) => (lat, lon),
        _ => {
            return Err(AppError::Config(format!(
                "Both {} and {} must be set to use a default location",
                ENV_VAR_LATITUDE, ENV_VAR_LONGITUDE
            )))
        }
    };

    let parse = |name: &str, value: &str| {
        value
            .trim()
            .parse::<f64>()
            .map_err(|_| AppError::Config(format!("{} is not a number: '{}'", name, value)))
    };

    let coordinates = Coordinates::new(
        parse(ENV_VAR_LATITUDE, latitude)?,
        parse(ENV_VAR_LONGITUDE, longitude)?,
    )
    .map_err(AppError::Config)?;

    Ok(Some(coordinates))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::tempdir;

    const MANAGED_VARS: &[&str] = &[
        ENV_VAR_MOODMATE_DIR,
        ENV_VAR_WEATHER_API_KEY,
        ENV_VAR_OPENWEATHER_API_KEY,
        ENV_VAR_WEATHER_URL,
        ENV_VAR_LATITUDE,
        ENV_VAR_LONGITUDE,
    ];

    /// Clears managed variables, runs `f`, then restores the originals.
    fn with_clean_env<T>(f: impl FnOnce() -> T) -> T {
        let saved: Vec<(&str, Option<String>)> = MANAGED_VARS
            .iter()
            .map(|&name| (name, env::var(name).ok()))
            .collect();
        for name in MANAGED_VARS {
            env::remove_var(name);
        }

        let result = f();

        for (name, value) in saved {
            match value {
                Some(value) => env::set_var(name, value),
                None => env::remove_var(name),
            }
        }
        result
    }

    #[test]
    fn test_debug_impl_redacts_sensitive_info() {
        let config = Config {
            data_dir: PathBuf::from("/home/username/private/moods"),
            weather: WeatherConfig {
                api_key: Some("super-secret-key".to_string()),
                location: Some(Coordinates::new(59.91, 10.75).unwrap()),
                ..WeatherConfig::default()
            },
        };

        let debug_output = format!("{:?}", config);

        assert!(debug_output.contains("[REDACTED_PATH]"));
        assert!(debug_output.contains(REDACTED_PLACEHOLDER));
        assert!(!debug_output.contains("super-secret-key"));
        assert!(!debug_output.contains("/home/username/private/moods"));
        assert!(!debug_output.contains("59.91"));
    }

    #[test]
    #[serial]
    fn test_load_with_custom_dir() {
        let temp_dir = tempdir().unwrap();
        let dir_path = temp_dir.path().to_string_lossy().to_string();

        let config = with_clean_env(|| {
            env::set_var(ENV_VAR_MOODMATE_DIR, &dir_path);
            Config::load().unwrap()
        });

        assert_eq!(config.data_dir, PathBuf::from(dir_path));
        assert!(config.weather.api_key.is_none());
        assert!(config.weather.location.is_none());
        assert_eq!(config.weather.base_url, DEFAULT_WEATHER_BASE_URL);
    }

    #[test]
    #[serial]
    fn test_api_key_fallback_and_precedence() {
        with_clean_env(|| {
            env::set_var(ENV_VAR_MOODMATE_DIR, "/tmp/moodmate");
            env::set_var(ENV_VAR_OPENWEATHER_API_KEY, "fallback");
            assert_eq!(
                Config::load().unwrap().weather.api_key.as_deref(),
                Some("fallback")
            );

            env::set_var(ENV_VAR_WEATHER_API_KEY, "primary");
            assert_eq!(
                Config::load().unwrap().weather.api_key.as_deref(),
                Some("primary")
            );

            env::set_var(ENV_VAR_WEATHER_API_KEY, "");
            assert_eq!(
                Config::load().unwrap().weather.api_key.as_deref(),
                Some("fallback")
            );
        });
    }

    #[test]
    #[serial]
    fn test_load_location_from_env() {
        let config = with_clean_env(|| {
            env::set_var(ENV_VAR_MOODMATE_DIR, "/tmp/moodmate");
            env::set_var(ENV_VAR_LATITUDE, "59.91");
            env::set_var(ENV_VAR_LONGITUDE, " 10.75 ");
            Config::load().unwrap()
        });

        let location = config.weather.location.unwrap();
        assert_eq!(location.latitude, 59.91);
        assert_eq!(location.longitude, 10.75);
    }

    #[test]
    #[serial]
    fn test_load_rejects_half_a_location() {
        let result = with_clean_env(|| {
            env::set_var(ENV_VAR_MOODMATE_DIR, "/tmp/moodmate");
            env::set_var(ENV_VAR_LATITUDE, "59.91");
            Config::load()
        });

        match result {
            Err(AppError::Config(msg)) => assert!(msg.contains("must be set")),
            _ => panic!("Expected Config error for a lone latitude"),
        }
    }

    #[test]
    fn test_parse_location_errors() {
        assert!(parse_location(None, None).unwrap().is_none());

        match parse_location(Some("north"), Some("10")) {
            Err(AppError::Config(msg)) => assert!(msg.contains("not a number")),
            _ => panic!("Expected Config error for non-numeric latitude"),
        }

        match parse_location(Some("91"), Some("10")) {
            Err(AppError::Config(msg)) => assert!(msg.contains("out of range")),
            _ => panic!("Expected Config error for out-of-range latitude"),
        }
    }

    #[test]
    fn test_validate_valid_config() {
        let temp_dir = tempdir().unwrap();
        let config = Config {
            data_dir: temp_dir.path().to_path_buf(),
            weather: WeatherConfig::default(),
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_empty_data_dir() {
        let config = Config::default();
        match config.validate() {
            Err(AppError::Config(message)) => {
                assert!(message.contains("Data directory path is empty"))
            }
            _ => panic!("Expected Config error about empty data directory"),
        }
    }

    #[test]
    fn test_validate_relative_data_dir() {
        let config = Config {
            data_dir: PathBuf::from("relative/path"),
            weather: WeatherConfig::default(),
        };
        match config.validate() {
            Err(AppError::Config(message)) => {
                assert!(message.contains("must be an absolute path"))
            }
            _ => panic!("Expected Config error about relative path"),
        }
    }

    #[test]
    fn test_validate_weather_url_scheme() {
        let config = Config {
            data_dir: PathBuf::from("/data"),
            weather: WeatherConfig {
                base_url: "ftp://weather.example".to_string(),
                ..WeatherConfig::default()
            },
        };
        assert!(config.validate().is_err());
    }
}
