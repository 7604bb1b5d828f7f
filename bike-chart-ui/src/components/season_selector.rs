//! Dropdown selector for choosing a season.

use crate::state::AppState;
use dioxus::prelude::*;

/// Season dropdown selector.
/// Reads the available options from AppState and updates selected_season on change.
#[component]
pub fn SeasonSelector() -> Element {
    let mut state = use_context::<AppState>();
    let options = state.season_options.read().clone();
    let selected = (state.selected_season)();

    let on_change = move |evt: Event<FormData>| {
        state.selected_season.set(evt.value());
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: "season-select",
                style: "font-weight: bold; margin-right: 8px;",
                "Season: "
            }
            select {
                id: "season-select",
                onchange: on_change,
                for season in options.iter() {
                    option {
                        value: "{season}",
                        selected: *season == selected,
                        if season.is_empty() { "(unlabelled)" } else { "{season}" }
                    }
                }
            }
        }
    }
}
