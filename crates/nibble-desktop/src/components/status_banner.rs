//! Status banner component

use dioxus::prelude::*;

use crate::state::{AppState, StatusMessage};

/// Success/failure acknowledgment banner, dismissed with a click
#[component]
pub fn StatusBanner() -> Element {
    let mut state = use_context::<AppState>();
    let Some(message) = (state.status)() else {
        return rsx! {};
    };

    let (text, bg, fg) = match &message {
        StatusMessage::Success(text) => (text.clone(), "#e6f4ea", "#17663a"),
        StatusMessage::Failure(text) => (text.clone(), "#fdeaea", "#a12622"),
    };

    rsx! {
        div {
            class: "status-banner",
            style: "
                display: flex;
                justify-content: space-between;
                align-items: center;
                padding: 10px 16px;
                background: {bg};
                color: {fg};
                font-size: 14px;
            ",

            span { "{text}" }

            button {
                style: "
                    border: none;
                    background: transparent;
                    color: {fg};
                    font-size: 16px;
                    cursor: pointer;
                ",
                onclick: move |_| state.status.set(None),
                "\u{d7}"
            }
        }
    }
}
