//! Weather Lookup App
//!
//! Top-level shell: owns the selected location, unit preference and theme,
//! and passes them down to the search box and the weather card.

use leptos::prelude::*;

use crate::components::{SearchInput, UnitToggle, WeatherDisplay};
use crate::config::AppConfig;
use crate::models::{Theme, UnitPreference};

#[component]
pub fn App() -> impl IntoView {
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            return view! {
                <div class="config-error">
                    <h1>"Weather Lookup"</h1>
                    <p>{format!("Configuration error: {err}")}</p>
                </div>
            }
            .into_any();
        }
    };

    // Make endpoints and credentials available to the fetching components
    provide_context(config);

    let (location, set_location) = signal(String::new());
    let (units, set_units) = signal(UnitPreference::Metric);
    let (theme, set_theme) = signal(Theme::Light);

    let shell_class = move || match theme.get() {
        Theme::Light => "app-shell light",
        Theme::Dark => "app-shell dark",
    };

    view! {
        <div class=shell_class>
            <header class="app-header">
                <h1>"Weather Lookup"</h1>
                <button
                    type="button"
                    class="theme-toggle"
                    on:click=move |_| set_theme.update(|t| *t = t.toggled())
                >
                    {move || match theme.get() {
                        Theme::Light => "Dark mode",
                        Theme::Dark => "Light mode",
                    }}
                </button>
            </header>

            <SearchInput on_location_select=move |place: String| set_location.set(place) />

            <UnitToggle units=units set_units=set_units />

            <WeatherDisplay location=location units=units />
        </div>
    }
    .into_any()
}
