//! Idea table component

use dioxus::prelude::*;

use nibble_core::{FoodIdea, IdeaId};

use crate::state::AppState;

const TH_STYLE: &str = "
    text-align: left;
    padding: 8px 12px;
    border-bottom: 2px solid #d0d0d0;
    font-weight: 600;
";
const TD_STYLE: &str = "
    padding: 8px 12px;
    border-bottom: 1px solid #e8e8e8;
    vertical-align: top;
";

/// Table of the current page of food ideas with inline edit/delete actions
#[component]
pub fn IdeaTable(on_edit: EventHandler<FoodIdea>, on_delete: EventHandler<IdeaId>) -> Element {
    let state = use_context::<AppState>();
    let page_ideas = state.page_ideas();

    rsx! {
        table {
            class: "idea-table",
            style: "width: 100%; border-collapse: collapse; background: #ffffff;",

            thead {
                tr {
                    th { style: TH_STYLE, "Type" }
                    th { style: TH_STYLE, "Food" }
                    th { style: TH_STYLE, "Social Media" }
                    th { style: TH_STYLE, "Done By" }
                    th { style: TH_STYLE, "Link" }
                    th { style: TH_STYLE, "Recipe" }
                    th { style: TH_STYLE, "Actions" }
                }
            }

            tbody {
                for idea in page_ideas {
                    {
                        let idea_id = idea.id;
                        let row = idea.clone();

                        rsx! {
                            tr {
                                key: "{idea_id}",

                                td { style: TD_STYLE, "{idea.meal}" }
                                td { style: TD_STYLE, "{idea.food}" }
                                td { style: TD_STYLE, "{idea.social_media}" }
                                td { style: TD_STYLE, "{idea.done_by}" }
                                td {
                                    style: TD_STYLE,
                                    a {
                                        href: "{idea.link}",
                                        target: "_blank",
                                        style: "color: #1a5bc4; text-decoration: underline;",
                                        "{idea.link}"
                                    }
                                }
                                td {
                                    style: TD_STYLE,
                                    ul {
                                        style: "margin: 0; padding-left: 18px;",
                                        for (index, step) in idea.recipe.iter().enumerate() {
                                            li { key: "{index}", "{step}" }
                                        }
                                    }
                                }
                                td {
                                    style: TD_STYLE,
                                    div {
                                        style: "display: flex; gap: 8px;",

                                        button {
                                            style: "
                                                padding: 4px 10px;
                                                border: 1px solid #d0d0d0;
                                                border-radius: 6px;
                                                background: #f4f4f4;
                                                cursor: pointer;
                                            ",
                                            onclick: move |_| on_edit.call(row.clone()),
                                            "Edit"
                                        }

                                        button {
                                            style: "
                                                padding: 4px 10px;
                                                border: 1px solid #d9534f;
                                                border-radius: 6px;
                                                background: #d9534f;
                                                color: #ffffff;
                                                cursor: pointer;
                                            ",
                                            onclick: move |_| on_delete.call(idea_id),
                                            "Delete"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
