//! Frontend Models
//!
//! Data shared between the API clients and the UI components.

/// Metric/imperial display-and-request mode toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnitPreference {
    #[default]
    Metric,
    Imperial,
}

impl UnitPreference {
    /// Value of the `units` query parameter understood by the weather service
    pub fn as_query_param(self) -> &'static str {
        match self {
            UnitPreference::Metric => "metric",
            UnitPreference::Imperial => "imperial",
        }
    }
}

/// Light/dark theme flag held by the app shell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Normalized current-weather readings for one location.
///
/// Every numeric field is already in the requested unit system when the
/// reading leaves the client; rendering only attaches labels.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReading {
    pub temperature: f64,
    pub condition: String,
    pub icon_url: String,
    pub humidity_pct: u8,
    pub wind_speed: f64,
    /// One of the 8 compass points (N, NE, ... NW)
    pub wind_direction: &'static str,
    /// hPa under metric, inHg under imperial
    pub pressure: f64,
    /// km under metric, miles under imperial
    pub visibility: f64,
}

/// Per-fetch UI state for a fetch-driven component
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RequestState<T> {
    #[default]
    Idle,
    Loading,
    Success(T),
    Error(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_preference_query_params() {
        assert_eq!(UnitPreference::Metric.as_query_param(), "metric");
        assert_eq!(UnitPreference::Imperial.as_query_param(), "imperial");
        assert_eq!(UnitPreference::default(), UnitPreference::Metric);
    }

    #[test]
    fn theme_toggles_back_and_forth() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
    }
}
