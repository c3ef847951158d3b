//! Browsing view - search, paginate, and inline edit/delete food ideas

use dioxus::prelude::*;

use nibble_core::filter;
use nibble_core::IdeaId;

use crate::components::dialogs::{alert, confirm};
use crate::components::{EditDialog, IdeaTable, Pagination, SearchBar};
use crate::state::{AppState, EditDraft, StatusMessage};

/// Browsing view: the records restricted to breakfast/lunch/dinner, with
/// free-text search, pagination, and modal editing
#[component]
pub fn Browse() -> Element {
    let mut state = use_context::<AppState>();

    // Fetch on mount, and again whenever another view broadcasts a change
    use_effect(move || {
        let _version = (state.refresh_version)();
        spawn(async move {
            fetch_ideas(&mut state).await;
        });
    });

    let on_edit = move |idea: nibble_core::FoodIdea| {
        state.editing.set(Some(EditDraft::from_idea(&idea)));
    };

    let on_save = move |draft: EditDraft| {
        spawn(async move {
            let api = (state.api)();
            let (id, patch) = draft.into_patch();
            match api.update(id, &patch).await {
                Ok(()) => {
                    tracing::info!(id = %id, "Updated food idea");
                    state.editing.set(None);
                    fetch_ideas(&mut state).await;
                }
                Err(err) => {
                    // Dialog stays open so the user's input survives a retry
                    tracing::error!("Failed to update food idea: {err}");
                    alert("Update failed", "The food idea could not be saved.").await;
                }
            }
        });
    };

    let on_delete = move |id: IdeaId| {
        spawn(async move {
            if !confirm(
                "Delete food idea",
                "Are you sure you want to delete this idea?",
            )
            .await
            {
                return;
            }

            let api = (state.api)();
            match api.delete(id).await {
                Ok(()) => {
                    tracing::info!(id = %id, "Deleted food idea");
                    fetch_ideas(&mut state).await;
                    // Step back if the current page fell off the end
                    let total = state.total_pages();
                    let mut controls = state.controls.write();
                    if controls.current_page > total {
                        controls.current_page = total;
                    }
                }
                Err(err) => {
                    tracing::error!("Failed to delete food idea: {err}");
                    alert("Delete failed", "The food idea could not be deleted.").await;
                }
            }
        });
    };

    let loading = (state.loading)();
    let have_ideas = !(state.ideas)().is_empty();

    rsx! {
        div {
            class: "browse-view",
            style: "padding: 24px;",

            h1 {
                style: "text-align: center; font-size: 22px; margin: 0 0 24px;",
                "Food Ideas"
            }

            if loading {
                p { style: "text-align: center; color: #707070;", "Loading food ideas..." }
            } else if !have_ideas {
                p { style: "text-align: center; color: #707070;", "No food ideas yet. Create one!" }
            } else {
                SearchBar {}
                IdeaTable { on_edit, on_delete }
                Pagination {}
            }

            EditDialog { on_save }
        }
    }
}

/// Reload the full list from the API and re-apply the meal-type
/// restriction. On failure the previous list contents are kept.
async fn fetch_ideas(state: &mut AppState) {
    state.loading.set(true);
    let api = (state.api)();
    match api.list().await {
        Ok(ideas) => {
            let ideas = filter::restrict_to_meals(ideas);
            tracing::debug!(count = ideas.len(), "Fetched food ideas");
            state.ideas.set(ideas);
        }
        Err(err) => {
            tracing::error!("Failed to fetch food ideas: {err}");
            state
                .status
                .set(Some(StatusMessage::Failure(
                    "Could not load food ideas from the server".to_string(),
                )));
        }
    }
    state.loading.set(false);
}
