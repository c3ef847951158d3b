//! Pagination controls component

use dioxus::prelude::*;

use crate::state::AppState;

const PAGE_SIZES: [usize; 3] = [5, 10, 20];

const NAV_BUTTON_STYLE: &str = "
    padding: 4px 12px;
    border: 1px solid #d0d0d0;
    border-radius: 6px;
    background: #ffffff;
    cursor: pointer;
";

/// Rows-per-page select plus Prev/Next navigation, clamped to the page range
#[component]
pub fn Pagination() -> Element {
    let mut state = use_context::<AppState>();
    let total = state.total_pages();
    let controls = (state.controls)();
    let current = nibble_core::filter::clamp_page(controls.current_page, total);
    let rows = controls.rows_per_page;

    rsx! {
        div {
            class: "pagination",
            style: "
                display: flex;
                justify-content: space-between;
                align-items: center;
                margin-top: 16px;
            ",

            div {
                style: "display: flex; align-items: center; gap: 8px;",

                span { "Rows per page:" }
                select {
                    value: "{rows}",
                    onchange: move |evt| {
                        if let Ok(size) = evt.value().parse::<usize>() {
                            // Resets to page 1 as a side effect
                            state.controls.write().set_rows_per_page(size);
                        }
                    },
                    style: "padding: 4px 8px; border: 1px solid #d0d0d0; border-radius: 6px;",

                    for size in PAGE_SIZES {
                        option { key: "{size}", value: "{size}", selected: size == rows, "{size}" }
                    }
                }
            }

            div {
                style: "display: flex; align-items: center; gap: 8px;",

                button {
                    style: NAV_BUTTON_STYLE,
                    disabled: current == 1,
                    onclick: move |_| {
                        let total = state.total_pages();
                        let mut controls = state.controls.write();
                        let page = controls.current_page;
                        controls.current_page =
                            nibble_core::filter::clamp_page(page.saturating_sub(1), total);
                    },
                    "Prev"
                }

                span { "Page {current} of {total}" }

                button {
                    style: NAV_BUTTON_STYLE,
                    disabled: current == total,
                    onclick: move |_| {
                        let total = state.total_pages();
                        let mut controls = state.controls.write();
                        let page = controls.current_page;
                        controls.current_page = nibble_core::filter::clamp_page(page + 1, total);
                    },
                    "Next"
                }
            }
        }
    }
}
