//! Search bar component

use dioxus::prelude::*;

use crate::state::AppState;

/// Free-text search across all record fields
#[component]
pub fn SearchBar() -> Element {
    let mut state = use_context::<AppState>();
    let query = (state.controls)().search_query;

    rsx! {
        div {
            class: "search-bar",
            style: "margin-bottom: 16px;",

            input {
                r#type: "text",
                placeholder: "Search by food, type, done by, social media, link, recipe...",
                value: "{query}",
                oninput: move |evt| {
                    // Resets to page 1 as a side effect
                    state.controls.write().set_search_query(evt.value());
                },
                style: "
                    width: 420px;
                    max-width: 100%;
                    padding: 8px 12px;
                    border: 1px solid #d0d0d0;
                    border-radius: 6px;
                    font-size: 14px;
                    outline: none;
                ",
            }
        }
    }
}
