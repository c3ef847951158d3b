//! Sidebar navigation component

use dioxus::prelude::*;

use crate::state::{AppState, View};

/// Navigation between the browsing and creation screens
#[component]
pub fn Sidebar() -> Element {
    let state = use_context::<AppState>();
    let active = (state.active_view)();

    rsx! {
        div {
            class: "sidebar",
            style: "
                width: 180px;
                border-right: 1px solid #e0e0e0;
                background: #f4f4f4;
                padding: 16px 8px;
                display: flex;
                flex-direction: column;
                gap: 4px;
            ",

            div {
                style: "font-weight: 600; font-size: 16px; padding: 8px 12px 16px;",
                "Nibble"
            }

            SidebarItem { label: "Food Ideas", view: View::Browse, active }
            SidebarItem { label: "Create", view: View::Create, active }
        }
    }
}

#[component]
fn SidebarItem(label: String, view: View, active: View) -> Element {
    let mut state = use_context::<AppState>();
    let is_active = view == active;

    let bg = if is_active { "#e2e2e2" } else { "transparent" };
    let weight = if is_active { "600" } else { "400" };

    rsx! {
        button {
            class: "sidebar-item",
            style: "
                text-align: left;
                padding: 8px 12px;
                border: none;
                border-radius: 6px;
                background: {bg};
                font-weight: {weight};
                font-size: 14px;
                cursor: pointer;
            ",
            onclick: move |_| {
                state.active_view.set(view);
            },
            "{label}"
        }
    }
}
