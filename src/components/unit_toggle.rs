//! Unit Toggle Component
//!
//! Two-state metric/imperial switch bound to the shared unit preference.

use leptos::prelude::*;

use crate::models::UnitPreference;

#[component]
pub fn UnitToggle(
    units: ReadSignal<UnitPreference>,
    set_units: WriteSignal<UnitPreference>,
) -> impl IntoView {
    let button_class = move |mode: UnitPreference| {
        if units.get() == mode {
            "unit-button active"
        } else {
            "unit-button"
        }
    };

    view! {
        <div class="unit-toggle">
            <button
                type="button"
                class=move || button_class(UnitPreference::Metric)
                on:click=move |_| set_units.set(UnitPreference::Metric)
            >
                "°C"
            </button>
            <button
                type="button"
                class=move || button_class(UnitPreference::Imperial)
                on:click=move |_| set_units.set(UnitPreference::Imperial)
            >
                "°F"
            </button>
        </div>
    }
}
