//! Current-weather lookups for new entries.
//!
//! This module provides a small blocking client for an OpenWeatherMap-style
//! "current weather" endpoint and the icon mapping used when rendering
//! attached weather. Weather is an optional enrichment: [`fetch_best_effort`]
//! turns every failure into `None` so entry creation never depends on it.

use crate::config::WeatherConfig;
use crate::constants::WEATHER_UNITS;
use crate::errors::{AppError, AppResult, WeatherError};
use crate::mood::{round_temperature, Weather};
use reqwest::blocking::Client;
use serde::Deserialize;
use std::fmt;
use tracing::{debug, warn};

/// A geographic position in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    /// Validates latitude in [-90, 90] and longitude in [-180, 180].
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, String> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(format!("Latitude out of range: {}", latitude));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(format!("Longitude out of range: {}", longitude));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }
}

/// Response body of the current-weather endpoint (only the fields we read).
#[derive(Debug, Deserialize)]
struct CurrentWeatherResponse {
    main: MainReadings,
    #[serde(default)]
    weather: Vec<ConditionReading>,
    #[serde(default)]
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct MainReadings {
    temp: f64,
}

#[derive(Debug, Deserialize)]
struct ConditionReading {
    main: String,
    #[serde(default)]
    icon: Option<String>,
}

impl CurrentWeatherResponse {
    fn into_weather(self) -> Result<Weather, WeatherError> {
        let condition = self.weather.into_iter().next().ok_or_else(|| {
            WeatherError::InvalidResponse("response has no weather conditions".to_string())
        })?;

        Ok(Weather {
            temperature_celsius: round_temperature(self.main.temp),
            condition: condition.main,
            icon: condition.icon,
            city: self.name.filter(|name| !name.is_empty()),
        })
    }
}

/// Client for the weather provider.
pub struct WeatherClient {
    base_url: String,
    api_key: String,
    client: Client,
}

impl WeatherClient {
    /// Creates a client with the configured request timeout.
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        timeout: std::time::Duration,
    ) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(WeatherError::Request)?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            client,
        })
    }

    /// Creates a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns `WeatherError::MissingApiKey` when no API key is configured.
    pub fn from_config(config: &WeatherConfig) -> AppResult<Self> {
        let api_key = config
            .api_key
            .as_deref()
            .ok_or(WeatherError::MissingApiKey)?;
        Self::new(config.base_url.as_str(), api_key, config.timeout)
    }

    /// Fetches the current weather at `location`, in Celsius.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The provider is not reachable or the request times out
    /// - The provider answers with a non-success status
    /// - The response body does not have the expected shape
    pub fn current(&self, location: Coordinates) -> AppResult<Weather> {
        debug!(
            "Fetching weather for ({:.3}, {:.3})",
            location.latitude, location.longitude
        );

        let url = format!("{}/weather", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[
                ("lat", location.latitude.to_string()),
                ("lon", location.longitude.to_string()),
                ("units", WEATHER_UNITS.to_string()),
                ("appid", self.api_key.clone()),
            ])
            .send()
            .map_err(WeatherError::Request)?;

        let status = response.status();
        if !status.is_success() {
            return Err(WeatherError::UnexpectedStatus(status.as_u16()).into());
        }

        let body: CurrentWeatherResponse = response.json().map_err(|e| {
            WeatherError::InvalidResponse(format!("Failed to parse weather response: {}", e))
        })?;

        let weather = body.into_weather()?;
        debug!(
            "Weather: {}°C, {}",
            weather.temperature_celsius, weather.condition
        );
        Ok(weather)
    }
}

/// Looks up the weather, degrading every failure to `None`.
///
/// `location` overrides the configured default location. Without a location
/// or an API key no request is made.
pub fn fetch_best_effort(config: &WeatherConfig, location: Option<Coordinates>) -> Option<Weather> {
    let Some(location) = location.or(config.location) else {
        debug!("No location available, skipping weather lookup");
        return None;
    };

    match WeatherClient::from_config(config).and_then(|client| client.current(location)) {
        Ok(weather) => Some(weather),
        Err(AppError::Weather(WeatherError::MissingApiKey)) => {
            debug!("No weather API key configured, skipping weather lookup");
            None
        }
        Err(e) => {
            warn!("Weather unavailable, saving entry without it: {}", e);
            None
        }
    }
}

/// Icon shown for a weather condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeatherIcon {
    Sun,
    Cloud,
    CloudRain,
    CloudSnow,
    CloudLightning,
}

impl WeatherIcon {
    /// Maps a provider condition keyword, ignoring case. Unknown or missing is `Sun`.
    pub fn from_condition(condition: Option<&str>) -> Self {
        match condition.map(str::to_ascii_lowercase).as_deref() {
            Some("clear") => WeatherIcon::Sun,
            Some("clouds") => WeatherIcon::Cloud,
            Some("rain") | Some("drizzle") => WeatherIcon::CloudRain,
            Some("snow") => WeatherIcon::CloudSnow,
            Some("thunderstorm") => WeatherIcon::CloudLightning,
            _ => WeatherIcon::Sun,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            WeatherIcon::Sun => "sun",
            WeatherIcon::Cloud => "cloud",
            WeatherIcon::CloudRain => "cloud-rain",
            WeatherIcon::CloudSnow => "cloud-snow",
            WeatherIcon::CloudLightning => "cloud-lightning",
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            WeatherIcon::Sun => "☀",
            WeatherIcon::Cloud => "☁",
            WeatherIcon::CloudRain => "🌧",
            WeatherIcon::CloudSnow => "🌨",
            WeatherIcon::CloudLightning => "🌩",
        }
    }
}

impl fmt::Display for WeatherIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
