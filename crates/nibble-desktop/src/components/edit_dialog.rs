//! Edit dialog component

use dioxus::prelude::*;

use crate::state::{AppState, EditDraft};

const FIELD_STYLE: &str = "
    width: 100%;
    padding: 8px 10px;
    border: 1px solid #d0d0d0;
    border-radius: 6px;
    font-size: 14px;
    box-sizing: border-box;
";

/// Modal dialog for editing the selected record.
///
/// Rendered only while a draft is active; Cancel discards the draft without
/// any API call, Save hands it back to the browsing view.
#[component]
pub fn EditDialog(on_save: EventHandler<EditDraft>) -> Element {
    let mut state = use_context::<AppState>();
    let Some(draft) = (state.editing)() else {
        return rsx! {};
    };

    let update_draft = move |apply: fn(&mut EditDraft, String), value: String| {
        let mut editing = state.editing.write();
        if let Some(draft) = editing.as_mut() {
            apply(draft, value);
        }
    };

    rsx! {
        // Backdrop
        div {
            class: "edit-dialog-backdrop",
            style: "
                position: fixed;
                inset: 0;
                background: rgba(0, 0, 0, 0.4);
                display: flex;
                align-items: center;
                justify-content: center;
            ",

            div {
                class: "edit-dialog",
                style: "
                    width: 480px;
                    max-height: 85vh;
                    overflow-y: auto;
                    background: #ffffff;
                    border-radius: 10px;
                    padding: 20px;
                    display: flex;
                    flex-direction: column;
                    gap: 12px;
                ",

                h2 {
                    style: "margin: 0 0 4px; font-size: 18px;",
                    "Edit Food Idea"
                }

                select {
                    value: "{draft.meal}",
                    onchange: move |evt| update_draft(|d, v| d.meal = v, evt.value()),
                    style: FIELD_STYLE,

                    option { value: "", disabled: true, "Select type" }
                    option { value: "breakfast", "Breakfast" }
                    option { value: "lunch", "Lunch" }
                    option { value: "dinner", "Dinner" }
                }

                input {
                    value: "{draft.food}",
                    placeholder: "Food name",
                    oninput: move |evt| update_draft(|d, v| d.food = v, evt.value()),
                    style: FIELD_STYLE,
                }

                input {
                    value: "{draft.social_media}",
                    placeholder: "Social Media",
                    oninput: move |evt| update_draft(|d, v| d.social_media = v, evt.value()),
                    style: FIELD_STYLE,
                }

                input {
                    value: "{draft.done_by}",
                    placeholder: "Done By",
                    oninput: move |evt| update_draft(|d, v| d.done_by = v, evt.value()),
                    style: FIELD_STYLE,
                }

                input {
                    value: "{draft.link}",
                    placeholder: "Link",
                    oninput: move |evt| update_draft(|d, v| d.link = v, evt.value()),
                    style: FIELD_STYLE,
                }

                textarea {
                    value: "{draft.recipe_text}",
                    placeholder: "Recipe (one step per line)",
                    oninput: move |evt| update_draft(|d, v| d.recipe_text = v, evt.value()),
                    style: "{FIELD_STYLE} min-height: 120px; resize: vertical; font-family: inherit;",
                }

                div {
                    style: "display: flex; justify-content: flex-end; gap: 8px; margin-top: 8px;",

                    button {
                        style: "
                            padding: 6px 14px;
                            border: 1px solid #d0d0d0;
                            border-radius: 6px;
                            background: #ffffff;
                            cursor: pointer;
                        ",
                        onclick: move |_| state.editing.set(None),
                        "Cancel"
                    }

                    button {
                        style: "
                            padding: 6px 14px;
                            border: none;
                            border-radius: 6px;
                            background: #1a5bc4;
                            color: #ffffff;
                            cursor: pointer;
                        ",
                        onclick: move |_| {
                            if let Some(draft) = (state.editing)() {
                                on_save.call(draft);
                            }
                        },
                        "Save"
                    }
                }
            }
        }
    }
}
