//! Current Weather Client
//!
//! Wraps the OpenWeather current-weather endpoint and normalizes its payload
//! into a display-ready [`WeatherReading`].

use serde::Deserialize;

use crate::config::AppConfig;
use crate::error::{ValidationError, WeatherFetchError};
use crate::models::{UnitPreference, WeatherReading};
use crate::units::{compass_point, hpa_to_inhg, km_to_miles, visibility_km};

use super::truncate_body;

#[derive(Debug, Clone)]
pub struct WeatherClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl WeatherClient {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.weather_base_url.clone(),
            api_key: config.weather_api_key.clone(),
        }
    }

    /// Fetch current weather for `location`, normalized into the requested
    /// unit system.
    pub async fn fetch_current(
        &self,
        location: &str,
        units: UnitPreference,
    ) -> Result<WeatherReading, WeatherFetchError> {
        validate_location(location)?;

        let url = format!("{}/data/2.5/weather", self.base_url);

        let res = self
            .http
            .get(&url)
            .query(&[
                ("q", location),
                ("appid", self.api_key.as_str()),
                ("units", units.as_query_param()),
            ])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(WeatherFetchError::Status {
                status,
                body: truncate_body(&body),
            });
        }

        let parsed: OwCurrentResponse = serde_json::from_str(&body)?;
        Ok(normalize(parsed, units))
    }
}

fn validate_location(location: &str) -> Result<(), ValidationError> {
    if location.trim().is_empty() {
        Err(ValidationError::EmptyLocation)
    } else {
        Ok(())
    }
}

fn icon_url(code: &str) -> String {
    format!("https://openweathermap.org/img/wn/{code}@2x.png")
}

/// Pure mapping from the remote payload to a display-ready reading.
///
/// Temperature and wind speed already arrive in the requested unit system
/// because the `units` parameter is forwarded to the service. Pressure and
/// visibility are always reported in hPa and meters on the wire and are
/// converted here, exactly once; nothing downstream converts numbers again.
fn normalize(payload: OwCurrentResponse, units: UnitPreference) -> WeatherReading {
    let (condition, icon) = payload
        .weather
        .first()
        .map(|w| (w.description.clone(), w.icon.clone()))
        .unwrap_or_else(|| ("Unknown".to_string(), "01d".to_string()));

    let km = visibility_km(payload.visibility);
    let (pressure, visibility) = match units {
        UnitPreference::Metric => (payload.main.pressure, km),
        UnitPreference::Imperial => (hpa_to_inhg(payload.main.pressure), km_to_miles(km)),
    };

    WeatherReading {
        temperature: payload.main.temp,
        condition,
        icon_url: icon_url(&icon),
        humidity_pct: payload.main.humidity,
        wind_speed: payload.wind.speed,
        wind_direction: compass_point(payload.wind.deg),
        pressure,
        visibility,
    }
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    humidity: u8,
    pressure: f64,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    description: String,
    icon: String,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: f64,
    #[serde(default)]
    deg: f64,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    main: OwMain,
    weather: Vec<OwWeather>,
    wind: OwWind,
    #[serde(default)]
    visibility: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "weather": [{"description": "scattered clouds", "icon": "03d"}],
        "main": {"temp": 18.4, "pressure": 1013.0, "humidity": 62},
        "visibility": 10000,
        "wind": {"speed": 4.2, "deg": 200}
    }"#;

    fn parse(body: &str) -> OwCurrentResponse {
        serde_json::from_str(body).expect("sample payload should parse")
    }

    #[test]
    fn empty_location_is_rejected_locally() {
        assert_eq!(validate_location(""), Err(ValidationError::EmptyLocation));
        assert_eq!(validate_location("  "), Err(ValidationError::EmptyLocation));
        assert_eq!(validate_location("Paris"), Ok(()));
    }

    #[test]
    fn metric_normalization() {
        let reading = normalize(parse(SAMPLE), UnitPreference::Metric);
        assert_eq!(reading.temperature, 18.4);
        assert_eq!(reading.condition, "scattered clouds");
        assert_eq!(
            reading.icon_url,
            "https://openweathermap.org/img/wn/03d@2x.png"
        );
        assert_eq!(reading.humidity_pct, 62);
        assert_eq!(reading.wind_speed, 4.2);
        // 200 / 45 = 4.44 rounds to sector 4
        assert_eq!(reading.wind_direction, "S");
        assert_eq!(reading.pressure, 1013.0);
        assert_eq!(reading.visibility, 10.0);
    }

    #[test]
    fn imperial_converts_only_pressure_and_visibility() {
        let reading = normalize(parse(SAMPLE), UnitPreference::Imperial);
        // Temperature and wind speed pass through: the service already
        // delivered them in imperial units.
        assert_eq!(reading.temperature, 18.4);
        assert_eq!(reading.wind_speed, 4.2);
        assert!((reading.pressure - 1013.0 * 0.02953).abs() < 1e-9);
        assert!((reading.visibility - 10.0 * 0.621371).abs() < 1e-9);
    }

    #[test]
    fn normalization_is_idempotent() {
        let first = normalize(parse(SAMPLE), UnitPreference::Metric);
        let second = normalize(parse(SAMPLE), UnitPreference::Metric);
        assert_eq!(first, second);
    }

    #[test]
    fn missing_condition_falls_back() {
        let body = r#"{
            "weather": [],
            "main": {"temp": 1.0, "pressure": 990.0, "humidity": 80},
            "wind": {"speed": 1.0, "deg": 0}
        }"#;
        let reading = normalize(parse(body), UnitPreference::Metric);
        assert_eq!(reading.condition, "Unknown");
        assert_eq!(reading.visibility, 0.0);
        assert_eq!(reading.wind_direction, "N");
    }
}
