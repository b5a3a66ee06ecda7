//! Error Types
//!
//! Failure taxonomy for the two remote clients, local input validation and
//! startup configuration. Remote failures are always caught at the component
//! boundary and turned into local UI state; nothing here crashes the app.

use thiserror::Error;

/// Autocomplete lookup failure. Non-fatal: callers degrade to an empty
/// suggestion list and log to the console.
#[derive(Debug, Error)]
pub enum SuggestionFetchError {
    #[error("suggestion request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("suggestion service returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("failed to parse suggestion payload: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Weather lookup failure. Surfaced as inline user-visible text.
#[derive(Debug, Error)]
pub enum WeatherFetchError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error("weather request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("weather service returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("failed to parse weather payload: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Local input validation failure. Short-circuits before any request is
/// issued; never presented to the user as an error.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("location must not be empty")]
    EmptyLocation,
}

/// Startup configuration failure
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required build-time environment variable {0}")]
    MissingVar(&'static str),
}
