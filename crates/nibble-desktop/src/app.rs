//! Main application component

use std::sync::Arc;

use dioxus::prelude::*;

use crate::components::{Sidebar, StatusBanner};
use crate::services::ApiClient;
use crate::state::{AppState, ListControls, View};
use crate::views::{Browse, Create};

/// Root application component
#[component]
pub fn App() -> Element {
    // State signals
    let ideas = use_signal(Vec::new);
    let loading = use_signal(|| true);
    let controls = use_signal(ListControls::default);
    let editing = use_signal(|| None);
    let status = use_signal(|| None);
    let active_view = use_signal(|| View::Browse);
    let refresh_version = use_signal(|| 0_u64);
    let api = use_signal(|| Arc::new(ApiClient::from_env()));

    use_context_provider(|| AppState {
        ideas,
        loading,
        controls,
        editing,
        status,
        active_view,
        refresh_version,
        api,
    });

    let view = active_view();

    rsx! {
        div {
            class: "app-container",
            style: "
                display: flex;
                height: 100vh;
                font-family: system-ui, -apple-system, sans-serif;
                font-size: 14px;
                background: #fafafa;
                color: #1a1a1a;
            ",

            Sidebar {}

            div {
                class: "main-content",
                style: "flex: 1; display: flex; flex-direction: column; overflow-y: auto;",

                StatusBanner {}

                if view == View::Browse {
                    Browse {}
                } else {
                    Create {}
                }
            }
        }
    }
}
