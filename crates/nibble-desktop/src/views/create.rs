//! Creation view - the new food idea form

use dioxus::prelude::*;

use nibble_core::models::normalize_recipe;
use nibble_core::IdeaDraft;

use crate::components::dialogs::alert;
use crate::state::{AppState, StatusMessage};

const SOCIAL_PLATFORMS: [&str; 4] = ["Facebook", "Instagram", "TikTok", "YouTube"];
const CONTRIBUTORS: [&str; 2] = ["Lawrence", "Ynna"];

const FIELD_STYLE: &str = "
    width: 100%;
    padding: 8px 10px;
    border: 1px solid #d0d0d0;
    border-radius: 6px;
    font-size: 14px;
    box-sizing: border-box;
";
const LABEL_STYLE: &str = "display: block; font-weight: 500; margin-bottom: 6px;";

/// Creation view: collect a new record and submit it to the API
#[component]
pub fn Create() -> Element {
    let mut state = use_context::<AppState>();

    let mut meal = use_signal(String::new);
    let mut food = use_signal(String::new);
    let mut social_media = use_signal(String::new);
    let mut done_by = use_signal(String::new);
    let mut link = use_signal(String::new);
    let mut recipe = use_signal(String::new);

    let submit = move |_| {
        let draft = IdeaDraft {
            meal: meal(),
            food: food(),
            social_media: social_media(),
            done_by: done_by(),
            link: link(),
            recipe: normalize_recipe(&recipe()),
        };

        spawn(async move {
            let api = (state.api)();
            match api.create(&draft).await {
                Ok(()) => {
                    tracing::info!(food = %draft.food, "Saved food idea");
                    state
                        .status
                        .set(Some(StatusMessage::Success("Food idea saved!".to_string())));
                    // Back to empty defaults
                    meal.set(String::new());
                    food.set(String::new());
                    social_media.set(String::new());
                    done_by.set(String::new());
                    link.set(String::new());
                    recipe.set(String::new());
                    // Let a mounted browsing view know the list changed
                    state.notify_changed();
                }
                Err(err) => {
                    // Form contents are kept so the user can retry
                    tracing::error!("Failed to save food idea: {err}");
                    alert("Save failed", "The food idea could not be saved.").await;
                }
            }
        });
    };

    rsx! {
        div {
            class: "create-view",
            style: "padding: 24px; display: flex; justify-content: center;",

            div {
                class: "create-card",
                style: "
                    width: 560px;
                    max-width: 100%;
                    background: #ffffff;
                    border: 1px solid #e0e0e0;
                    border-radius: 10px;
                    padding: 24px;
                    display: flex;
                    flex-direction: column;
                    gap: 16px;
                ",

                div {
                    h2 { style: "margin: 0 0 4px; font-size: 18px;", "Create Food Idea" }
                    p {
                        style: "margin: 0; color: #707070;",
                        "Fill out the form below to add a new food idea."
                    }
                }

                div {
                    label { style: LABEL_STYLE, "Type" }
                    select {
                        value: "{meal}",
                        onchange: move |evt| meal.set(evt.value()),
                        style: FIELD_STYLE,

                        option { value: "", disabled: true, selected: meal().is_empty(), "Select type" }
                        option { value: "Breakfast", "Breakfast" }
                        option { value: "Lunch", "Lunch" }
                        option { value: "Dinner", "Dinner" }
                    }
                }

                div {
                    label { style: LABEL_STYLE, "Food" }
                    input {
                        r#type: "text",
                        placeholder: "Enter food name",
                        value: "{food}",
                        oninput: move |evt| food.set(evt.value()),
                        style: FIELD_STYLE,
                    }
                }

                div {
                    label { style: LABEL_STYLE, "Social Media" }
                    select {
                        value: "{social_media}",
                        onchange: move |evt| social_media.set(evt.value()),
                        style: FIELD_STYLE,

                        option { value: "", disabled: true, selected: social_media().is_empty(), "Select platform" }
                        for platform in SOCIAL_PLATFORMS {
                            option { key: "{platform}", value: "{platform}", "{platform}" }
                        }
                    }
                }

                div {
                    label { style: LABEL_STYLE, "Done By" }
                    select {
                        value: "{done_by}",
                        onchange: move |evt| done_by.set(evt.value()),
                        style: FIELD_STYLE,

                        option { value: "", disabled: true, selected: done_by().is_empty(), "Select person" }
                        for person in CONTRIBUTORS {
                            option { key: "{person}", value: "{person}", "{person}" }
                        }
                    }
                }

                div {
                    label { style: LABEL_STYLE, "Link" }
                    input {
                        r#type: "url",
                        placeholder: "https://example.com",
                        value: "{link}",
                        oninput: move |evt| link.set(evt.value()),
                        style: FIELD_STYLE,
                    }
                }

                div {
                    label { style: LABEL_STYLE, "Recipe (one step per line)" }
                    textarea {
                        placeholder: "Enter recipe steps, each step on a new line",
                        value: "{recipe}",
                        oninput: move |evt| recipe.set(evt.value()),
                        style: "{FIELD_STYLE} min-height: 120px; resize: vertical; font-family: inherit;",
                    }
                }

                div {
                    button {
                        style: "
                            padding: 8px 18px;
                            border: none;
                            border-radius: 6px;
                            background: #1a5bc4;
                            color: #ffffff;
                            font-size: 14px;
                            cursor: pointer;
                        ",
                        onclick: submit,
                        "Create"
                    }
                }
            }
        }
    }
}
