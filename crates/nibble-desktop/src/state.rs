//! Application state management
//!
//! Global state accessible via Dioxus context providers.

use std::sync::Arc;

use dioxus::prelude::*;

use nibble_core::models::normalize_recipe;
use nibble_core::{filter, FoodIdea, IdeaId, IdeaPatch};

use crate::services::ApiClient;

/// Which screen the app is showing
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum View {
    Browse,
    Create,
}

/// Transient acknowledgment surfaced after a user action
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StatusMessage {
    Success(String),
    Failure(String),
}

/// Editable copy of a record backing the edit dialog.
///
/// The recipe is held as newline-delimited text while editing and converted
/// back to a step list on save.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditDraft {
    pub id: IdeaId,
    pub meal: String,
    pub food: String,
    pub social_media: String,
    pub done_by: String,
    pub link: String,
    pub recipe_text: String,
}

impl EditDraft {
    #[must_use]
    pub fn from_idea(idea: &FoodIdea) -> Self {
        Self {
            id: idea.id,
            meal: idea.meal.clone(),
            food: idea.food.clone(),
            social_media: idea.social_media.clone(),
            done_by: idea.done_by.clone(),
            link: idea.link.clone(),
            recipe_text: idea.recipe.join("\n"),
        }
    }

    /// Convert back into an update payload, normalizing the recipe text
    #[must_use]
    pub fn into_patch(self) -> (IdeaId, IdeaPatch) {
        let patch = IdeaPatch {
            meal: Some(self.meal),
            food: Some(self.food),
            social_media: Some(self.social_media),
            done_by: Some(self.done_by),
            link: Some(self.link),
            recipe: Some(normalize_recipe(&self.recipe_text)),
        };
        (self.id, patch)
    }
}

/// Search and pagination state for the browsing view.
///
/// Plain data so the reset semantics are testable: a new query or page
/// size always lands back on page 1.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListControls {
    pub search_query: String,
    /// 1-based page number
    pub current_page: usize,
    pub rows_per_page: usize,
}

impl Default for ListControls {
    fn default() -> Self {
        Self {
            search_query: String::new(),
            current_page: 1,
            rows_per_page: 5,
        }
    }
}

impl ListControls {
    pub fn set_search_query(&mut self, query: String) {
        self.search_query = query;
        self.current_page = 1;
    }

    pub fn set_rows_per_page(&mut self, size: usize) {
        self.rows_per_page = size;
        self.current_page = 1;
    }
}

/// Global application state
#[derive(Clone, Copy)]
pub struct AppState {
    /// Records currently loaded from the API, already restricted to the
    /// listed meal types
    pub ideas: Signal<Vec<FoodIdea>>,
    /// Whether a fetch is in flight
    pub loading: Signal<bool>,
    /// Search query and page position for the browsing view
    pub controls: Signal<ListControls>,
    /// Record being edited in the modal, if any
    pub editing: Signal<Option<EditDraft>>,
    /// Last success/failure acknowledgment for the banner
    pub status: Signal<Option<StatusMessage>>,
    /// Active screen
    pub active_view: Signal<View>,
    /// Monotonic change broadcast: bumped after a successful create so a
    /// mounted browsing view re-fetches. Views not mounted at bump time
    /// never see it; missed events are not queued.
    pub refresh_version: Signal<u64>,
    /// Shared API client
    pub api: Signal<Arc<ApiClient>>,
}

impl AppState {
    /// The loaded records matching the current search query
    #[must_use]
    pub fn filtered_ideas(&self) -> Vec<FoodIdea> {
        let query = (self.controls)().search_query;
        (self.ideas)()
            .into_iter()
            .filter(|idea| filter::matches_query(idea, &query))
            .collect()
    }

    /// Page count for the current filter and page size
    #[must_use]
    pub fn total_pages(&self) -> usize {
        filter::total_pages(self.filtered_ideas().len(), (self.controls)().rows_per_page)
    }

    /// The records visible on the current page, with the page clamped
    /// into range
    #[must_use]
    pub fn page_ideas(&self) -> Vec<FoodIdea> {
        let filtered = self.filtered_ideas();
        let controls = (self.controls)();
        let page = filter::clamp_page(
            controls.current_page,
            filter::total_pages(filtered.len(), controls.rows_per_page),
        );
        filter::page_slice(&filtered, page, controls.rows_per_page).to_vec()
    }

    /// Broadcast that the record list changed somewhere else
    pub fn notify_changed(&mut self) {
        let next = (self.refresh_version)() + 1;
        self.refresh_version.set(next);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn edit_draft_round_trips_recipe_text() {
        let idea = FoodIdea {
            id: IdeaId::from(1),
            meal: "dinner".to_string(),
            food: "Spaghetti".to_string(),
            social_media: "TikTok".to_string(),
            done_by: "Ynna".to_string(),
            link: String::new(),
            recipe: vec!["boil water".to_string(), "add pasta".to_string()],
        };

        let draft = EditDraft::from_idea(&idea);
        assert_eq!(draft.recipe_text, "boil water\nadd pasta");

        let (id, patch) = draft.into_patch();
        assert_eq!(id, idea.id);
        assert_eq!(patch.recipe, Some(idea.recipe));
        assert_eq!(patch.food.as_deref(), Some("Spaghetti"));
    }

    #[test]
    fn search_query_change_resets_to_page_1() {
        let mut controls = ListControls::default();
        controls.current_page = 3;

        controls.set_search_query("pasta".to_string());

        assert_eq!(controls.search_query, "pasta");
        assert_eq!(controls.current_page, 1);
    }

    #[test]
    fn rows_per_page_change_resets_to_page_1() {
        let mut controls = ListControls::default();
        controls.current_page = 2;

        controls.set_rows_per_page(20);

        assert_eq!(controls.rows_per_page, 20);
        assert_eq!(controls.current_page, 1);
    }

    #[test]
    fn edit_draft_drops_blank_recipe_lines_on_save() {
        let mut draft = EditDraft::from_idea(&FoodIdea {
            id: IdeaId::from(1),
            meal: String::new(),
            food: String::new(),
            social_media: String::new(),
            done_by: String::new(),
            link: String::new(),
            recipe: Vec::new(),
        });
        draft.recipe_text = "  boil water \n\n   \nserve".to_string();

        let (_, patch) = draft.into_patch();
        assert_eq!(
            patch.recipe,
            Some(vec!["boil water".to_string(), "serve".to_string()])
        );
    }
}
