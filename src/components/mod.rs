//! UI Components
//!
//! Reusable Leptos components.

mod flow;
mod search_input;
mod unit_toggle;
mod weather_display;

pub use search_input::SearchInput;
pub use unit_toggle::UnitToggle;
pub use weather_display::WeatherDisplay;
