//! Unit Helpers
//!
//! Pure conversion, classification and formatting helpers for weather
//! readings. Everything here is deterministic and free of I/O.

use crate::models::UnitPreference;

/// Eight compass sectors of 45 degrees each, anchored at north
pub const COMPASS_POINTS: [&str; 8] = ["N", "NE", "E", "SE", "S", "SW", "W", "NW"];

pub const HPA_TO_INHG: f64 = 0.02953;
pub const KM_TO_MILES: f64 = 0.621371;

/// Map a wind bearing in degrees to its nearest compass sector.
///
/// Uses `round(degrees / 45) mod 8`, so sector boundaries at 22.5-degree
/// multiples round away from the lower sector and 360 wraps back to north.
pub fn compass_point(degrees: f64) -> &'static str {
    let index = ((degrees / 45.0).round() as usize) % 8;
    COMPASS_POINTS[index]
}

/// The weather service reports visibility in meters regardless of the
/// requested unit system.
pub fn visibility_km(meters: f64) -> f64 {
    meters / 1000.0
}

pub fn hpa_to_inhg(hpa: f64) -> f64 {
    hpa * HPA_TO_INHG
}

pub fn km_to_miles(km: f64) -> f64 {
    km * KM_TO_MILES
}

/// Card tint band derived from the temperature in Celsius
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TempTint {
    Cold,
    Mild,
    Hot,
}

impl TempTint {
    pub fn css_color(self) -> &'static str {
        match self {
            TempTint::Cold => "rgba(0, 0, 255, 0.2)",
            TempTint::Mild => "rgba(0, 255, 0, 0.2)",
            TempTint::Hot => "rgba(255, 0, 0, 0.2)",
        }
    }
}

/// Classify a Celsius temperature into its tint band.
///
/// Bands are [..10) cold, [10, 25) mild, [25..] hot; lower bounds inclusive.
pub fn temp_tint(celsius: f64) -> TempTint {
    if celsius < 10.0 {
        TempTint::Cold
    } else if celsius < 25.0 {
        TempTint::Mild
    } else {
        TempTint::Hot
    }
}

/// Recover the Celsius value of a display temperature, whatever the active
/// unit system. Used only for tint classification, never for display.
pub fn display_temp_to_celsius(value: f64, units: UnitPreference) -> f64 {
    match units {
        UnitPreference::Metric => value,
        UnitPreference::Imperial => (value - 32.0) / 1.8,
    }
}

pub fn format_temperature(value: f64, units: UnitPreference) -> String {
    let symbol = match units {
        UnitPreference::Metric => "°C",
        UnitPreference::Imperial => "°F",
    };
    format!("{value:.1}{symbol}")
}

pub fn format_wind(speed: f64, direction: &str, units: UnitPreference) -> String {
    let unit = match units {
        UnitPreference::Metric => "m/s",
        UnitPreference::Imperial => "mph",
    };
    format!("{speed:.1} {unit} {direction}")
}

pub fn format_pressure(value: f64, units: UnitPreference) -> String {
    match units {
        UnitPreference::Metric => format!("{value:.0} hPa"),
        UnitPreference::Imperial => format!("{value:.2} inHg"),
    }
}

pub fn format_visibility(value: f64, units: UnitPreference) -> String {
    match units {
        UnitPreference::Metric => format!("{value:.1} km"),
        UnitPreference::Imperial => format!("{value:.1} miles"),
    }
}
