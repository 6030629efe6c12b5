//! Error handling utilities for the moodmate application.
//!
//! This module provides the central error type `AppError` which represents all
//! possible error conditions that might occur in the application, as well as the
//! convenience type alias `AppResult` for functions that can return these errors.
//!
//! The aggregation engine (`insights`, `export`) never fails; every error here
//! originates in the host operations around it.

use std::path::PathBuf;
use thiserror::Error;

/// Represents errors that can occur while reading or writing the entry store.
///
/// Note that a malformed store file is *not* an error: it loads as an empty
/// collection. These variants only cover failures while saving.
///
/// # Examples
///
/// ```
/// use moodmate::errors::StoreError;
/// use std::path::PathBuf;
///
/// let error = StoreError::InvalidLocation {
///     path: PathBuf::from("relative/dir"),
///     reason: "data directory must be absolute".to_string(),
/// };
/// assert!(format!("{}", error).contains("relative/dir"));
/// ```
#[derive(Debug, Error)]
pub enum StoreError {
    /// The entry collection could not be serialized.
    #[error("Failed to serialize mood entries: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The store location is unusable.
    #[error("Invalid store location {path}: {reason}")]
    InvalidLocation {
        /// The offending path
        path: PathBuf,
        /// Why it was rejected
        reason: String,
    },
}

/// Represents errors that can occur when locking the data directory for a write.
///
/// # Examples
///
/// ```
/// use moodmate::errors::LockError;
/// use std::path::PathBuf;
///
/// let error = LockError::StoreBusy {
///     path: PathBuf::from("/data/.moodmate.lock"),
/// };
///
/// assert!(format!("{}", error).contains("another moodmate process"));
/// ```
#[derive(Debug, Error)]
pub enum LockError {
    /// Another process holds the store lock.
    #[error("Mood store is being written by another moodmate process: {path}. Please retry once it has finished.")]
    StoreBusy {
        /// The lock file that is held
        path: PathBuf,
    },

    /// Acquiring the lock failed for a technical reason.
    #[error("Failed to acquire store lock {path}: {source}. Please check that the data directory is writable.")]
    AcquisitionFailed {
        /// The lock file that couldn't be locked
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

/// Represents failures talking to the weather provider.
///
/// These never abort entry creation; callers degrade to "no weather attached".
///
/// # Examples
///
/// ```
/// use moodmate::errors::WeatherError;
///
/// let error = WeatherError::UnexpectedStatus(401);
/// assert!(format!("{}", error).contains("401"));
/// ```
#[derive(Debug, Error)]
pub enum WeatherError {
    /// No API key is configured.
    #[error("No weather API key configured")]
    MissingApiKey,

    /// The provider could not be reached.
    #[error("Weather request failed: {0}")]
    Request(#[source] reqwest::Error),

    /// The provider answered with a non-success status.
    #[error("Weather provider returned HTTP {0}")]
    UnexpectedStatus(u16),

    /// The provider's payload did not have the expected shape.
    #[error("Invalid response from weather provider: {0}")]
    InvalidResponse(String),
}

/// Represents all possible errors that can occur in the moodmate application.
///
/// # Examples
///
/// ```
/// use moodmate::errors::AppError;
///
/// let error = AppError::Config("Data directory path is empty".to_string());
/// assert_eq!(format!("{}", error), "Configuration error: Data directory path is empty");
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// Errors related to configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input/output errors from filesystem operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// User input that cannot be turned into an entry (e.g. no mood selected).
    #[error("{0}")]
    Validation(String),

    /// Errors while persisting the entry collection.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Errors related to the store lock.
    #[error("Store locking error: {0}")]
    Lock(#[from] LockError),

    /// Errors from the weather provider.
    #[error("Weather error: {0}")]
    Weather(#[from] WeatherError),

    /// Errors rendering machine-readable output.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// A type alias for `Result<T, AppError>` to simplify function signatures.
pub type AppResult<T> = Result<T, AppError>;
