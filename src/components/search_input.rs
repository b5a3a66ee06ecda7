//! Search Input Component
//!
//! Debounced city search box with a dismissible autocomplete suggestion list.
//!
//! Per keystroke: (re)start the single 300 ms debounce timer; when it fires
//! with non-empty text, issue one suggestion fetch tagged with a sequence
//! number. All ordering decisions (which timer may fire, which completion
//! may be applied) live in [`SearchFlow`]; this component only performs the
//! side effects it prescribes.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;
use web_sys::console;

use super::flow::SearchFlow;
use crate::api::GeoSuggestionClient;
use crate::config::AppConfig;

/// Quiet period after the last keystroke before a suggestion fetch fires
const DEBOUNCE_MS: u32 = 300;

/// City search box.
///
/// Props:
/// - on_location_select: fired exactly once per suggestion click, with the
///   chosen city name
#[component]
pub fn SearchInput(#[prop(into)] on_location_select: Callback<String>) -> impl IntoView {
    let config = expect_context::<AppConfig>();

    let (query, set_query) = signal(String::new());
    let (suggestions, set_suggestions) = signal(Vec::<String>::new());

    let flow = StoredValue::new(SearchFlow::default());
    // Single outstanding debounce timer; replacing the handle cancels the
    // previous callback.
    let pending_timer = StoredValue::new_local(None::<Timeout>);

    let schedule_fetch = move |text: String| {
        let tag = flow.try_update_value(|f| f.on_input(&text)).unwrap_or(None);

        let Some(seq) = tag else {
            pending_timer.set_value(None);
            set_suggestions.set(Vec::new());
            return;
        };

        let cfg = config.clone();
        let timer = Timeout::new(DEBOUNCE_MS, move || {
            if !flow.try_update_value(|f| f.on_elapsed(seq)).unwrap_or(false) {
                return;
            }
            spawn_local(async move {
                let client = GeoSuggestionClient::new(&cfg);
                let result = client.suggest(&text).await;
                if !flow.with_value(|f| f.is_current(seq)) {
                    // Superseded while in flight
                    return;
                }
                match result {
                    Ok(names) => set_suggestions.set(names),
                    Err(err) => {
                        console::warn_1(&format!("suggestion fetch failed: {err}").into());
                        set_suggestions.set(Vec::new());
                    }
                }
            });
        });
        pending_timer.set_value(Some(timer));
    };

    let dismiss_suggestions = move || {
        flow.update_value(|f| f.invalidate());
        pending_timer.set_value(None);
        set_suggestions.set(Vec::new());
    };

    let select_suggestion = move |name: String| {
        dismiss_suggestions();
        set_query.set(name.clone());
        on_location_select.run(name);
    };

    on_cleanup(move || {
        let _ = flow.try_update_value(|f| f.invalidate());
        let _ = pending_timer.try_set_value(None);
    });

    view! {
        <div class="search-input">
            <input
                type="text"
                placeholder="Search for a city..."
                autocomplete="off"
                prop:value=move || query.get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    let text = input.value();
                    set_query.set(text.clone());
                    schedule_fetch(text);
                }
                on:keydown=move |ev: web_sys::KeyboardEvent| {
                    if ev.key() == "Escape" {
                        dismiss_suggestions();
                    }
                }
            />

            {move || {
                let names = suggestions.get();
                if names.is_empty() {
                    view! { <div></div> }.into_any()
                } else {
                    view! {
                        <ul class="suggestion-list">
                            {names.into_iter().map(|name| {
                                let name_for_click = name.clone();
                                view! {
                                    <li>
                                        <button
                                            type="button"
                                            class="suggestion-item"
                                            on:click=move |_| select_suggestion(name_for_click.clone())
                                        >
                                            {name}
                                        </button>
                                    </li>
                                }
                            }).collect_view()}
                        </ul>
                    }.into_any()
                }
            }}
        </div>
    }
}
