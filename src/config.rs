//! Environment Configuration
//!
//! Base URLs and API keys for the two remote services. The keys are
//! credentials: they come from the build environment and must never appear
//! as literals in source.

use crate::error::ConfigError;

const DEFAULT_WEATHER_BASE_URL: &str = "https://api.openweathermap.org";
const DEFAULT_GEO_BASE_URL: &str = "https://wft-geo-db.p.rapidapi.com";

/// Remote endpoints and credentials, resolved at build time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub weather_base_url: String,
    pub weather_api_key: String,
    pub geo_base_url: String,
    pub geo_api_key: String,
}

impl AppConfig {
    /// Read configuration from the compile-time environment.
    ///
    /// `WEATHER_API_KEY` and `GEO_API_KEY` are required. The base URLs fall
    /// back to the public endpoints when `WEATHER_API_URL` / `GEO_API_URL`
    /// are unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        let weather_api_key =
            option_env!("WEATHER_API_KEY").ok_or(ConfigError::MissingVar("WEATHER_API_KEY"))?;
        let geo_api_key =
            option_env!("GEO_API_KEY").ok_or(ConfigError::MissingVar("GEO_API_KEY"))?;

        Ok(Self {
            weather_base_url: option_env!("WEATHER_API_URL")
                .unwrap_or(DEFAULT_WEATHER_BASE_URL)
                .to_string(),
            weather_api_key: weather_api_key.to_string(),
            geo_base_url: option_env!("GEO_API_URL")
                .unwrap_or(DEFAULT_GEO_BASE_URL)
                .to_string(),
            geo_api_key: geo_api_key.to_string(),
        })
    }
}
