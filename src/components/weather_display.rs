//! Weather Display Component
//!
//! Fetches and renders the current-weather card for the selected location.
//! Every change to the (location, units) pair re-enters the loading state
//! and issues exactly one fetch; completions for a superseded pair are
//! discarded by sequence number. The success state snapshots the location
//! and units the reading was fetched for, so the card can never label one
//! city's data with another city's name.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::flow::FetchSequence;
use crate::api::WeatherClient;
use crate::config::AppConfig;
use crate::models::{RequestState, UnitPreference, WeatherReading};
use crate::units;

/// A reading together with the inputs it was fetched for
#[derive(Debug, Clone, PartialEq)]
struct FetchedWeather {
    location: String,
    units: UnitPreference,
    reading: WeatherReading,
}

impl FetchedWeather {
    /// Card tint, derived from the snapshot's own temperature and units,
    /// never from the live toggle.
    fn tint(&self) -> &'static str {
        let celsius = units::display_temp_to_celsius(self.reading.temperature, self.units);
        units::temp_tint(celsius).css_color()
    }
}

/// Current-weather card.
///
/// Props:
/// - location: city to look up; empty renders nothing and issues no request
/// - units: unit preference, metric when omitted
#[component]
pub fn WeatherDisplay(
    #[prop(into)] location: Signal<String>,
    #[prop(optional, into)] units: Option<Signal<UnitPreference>>,
) -> impl IntoView {
    let units = units.unwrap_or_else(|| Signal::derive(|| UnitPreference::Metric));

    let config = expect_context::<AppConfig>();
    let (state, set_state) = signal(RequestState::<FetchedWeather>::Idle);

    // Sequence number of the newest issued fetch; stale completions compare
    // against it and are dropped.
    let fetch_seq = StoredValue::new(FetchSequence::default());

    Effect::new(move |_| {
        let place = location.get();
        let units_now = units.get();

        let seq = fetch_seq.try_update_value(|s| s.next()).unwrap_or_default();

        if place.trim().is_empty() {
            set_state.set(RequestState::Idle);
            return;
        }

        set_state.set(RequestState::Loading);
        let cfg = config.clone();
        spawn_local(async move {
            let client = WeatherClient::new(&cfg);
            let result = client.fetch_current(&place, units_now).await;
            if !fetch_seq.with_value(|s| s.is_current(seq)) {
                // A newer (location, units) pair owns the card now
                return;
            }
            match result {
                Ok(reading) => set_state.set(RequestState::Success(FetchedWeather {
                    location: place,
                    units: units_now,
                    reading,
                })),
                Err(err) => set_state.set(RequestState::Error(format!(
                    "Failed to fetch weather data. Please try again: {err}"
                ))),
            }
        });
    });

    on_cleanup(move || {
        let _ = fetch_seq.try_update_value(|s| s.next());
    });

    view! {
        <div class="weather-display">
            {move || match state.get() {
                RequestState::Idle => view! { <div></div> }.into_any(),
                RequestState::Loading => {
                    view! { <div class="weather-loading">"Loading..."</div> }.into_any()
                }
                RequestState::Error(message) => {
                    view! { <div class="weather-error">{message}</div> }.into_any()
                }
                RequestState::Success(fetched) => weather_card(fetched).into_any(),
            }}
        </div>
    }
}

/// Render the populated card. The snapshot's numbers are already in its
/// unit system; only labels are attached here.
fn weather_card(fetched: FetchedWeather) -> impl IntoView {
    let tint = fetched.tint();
    let FetchedWeather {
        location,
        units,
        reading,
    } = fetched;

    view! {
        <div class="weather-card" style:background-color=tint>
            <h2>{location}</h2>
            <div class="weather-main">
                <img src=reading.icon_url alt=reading.condition.clone() />
                <div>
                    <h3>{units::format_temperature(reading.temperature, units)}</h3>
                    <p>{reading.condition}</p>
                </div>
            </div>
            <div class="weather-details">
                <p>{format!("Humidity: {}%", reading.humidity_pct)}</p>
                <p>
                    {format!(
                        "Wind: {}",
                        units::format_wind(reading.wind_speed, reading.wind_direction, units),
                    )}
                </p>
                <p>{format!("Pressure: {}", units::format_pressure(reading.pressure, units))}</p>
                <p>
                    {format!(
                        "Visibility: {}",
                        units::format_visibility(reading.visibility, units),
                    )}
                </p>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::TempTint;

    fn reading(temperature: f64) -> WeatherReading {
        WeatherReading {
            temperature,
            condition: "clear sky".to_string(),
            icon_url: "https://openweathermap.org/img/wn/01d@2x.png".to_string(),
            humidity_pct: 40,
            wind_speed: 2.0,
            wind_direction: "N",
            pressure: 1015.0,
            visibility: 10.0,
        }
    }

    #[test]
    fn success_state_keeps_the_fetched_location_and_units() {
        let fetched = FetchedWeather {
            location: "Paris".to_string(),
            units: UnitPreference::Metric,
            reading: reading(18.0),
        };
        // The card renders from this snapshot alone; a later change to the
        // selected location or unit toggle cannot relabel it.
        assert_eq!(fetched.location, "Paris");
        assert_eq!(fetched.units, UnitPreference::Metric);
        assert_eq!(fetched.reading, reading(18.0));
    }

    #[test]
    fn tint_uses_the_snapshot_units() {
        // 50 degrees is mild as Fahrenheit (10 C) but hot as Celsius, so
        // the tint must follow the units the reading was fetched with.
        let imperial = FetchedWeather {
            location: "Reykjavik".to_string(),
            units: UnitPreference::Imperial,
            reading: reading(50.0),
        };
        let metric = FetchedWeather {
            units: UnitPreference::Metric,
            ..imperial.clone()
        };
        assert_eq!(imperial.tint(), TempTint::Mild.css_color());
        assert_eq!(metric.tint(), TempTint::Hot.css_color());
    }
}
