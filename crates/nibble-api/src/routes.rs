use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;
use serde::Serialize;
use tokio::sync::Mutex;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use nibble_core::store::{self, JsonStore};
use nibble_core::{FoodIdea, IdeaDraft, IdeaId, IdeaPatch};

use crate::config::AppConfig;
use crate::error::AppError;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    // Serializes each load-transform-save pair so overlapping mutations
    // cannot lose updates.
    store: Arc<Mutex<JsonStore>>,
}

impl AppState {
    pub fn from_config(config: Arc<AppConfig>) -> Self {
        let store = JsonStore::new(&config.data_file);
        Self {
            config,
            store: Arc::new(Mutex::new(store)),
        }
    }
}

pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/food-ideas", get(list_ideas).post(create_idea))
        .route(
            "/food-ideas/{id}",
            axum::routing::put(update_idea).delete(delete_idea),
        )
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_headers(Any)
                .allow_methods(Any),
        )
        .with_state(state)
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    timestamp: i64,
}

async fn healthz() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        timestamp: Utc::now().timestamp(),
    })
}

#[derive(Debug, Serialize)]
struct Ack {
    success: bool,
}

const ACK: Ack = Ack { success: true };

async fn list_ideas(State(state): State<AppState>) -> Result<Json<Vec<FoodIdea>>, AppError> {
    let store = state.store.lock().await;
    let ideas = store.load_all()?;
    Ok(Json(ideas))
}

async fn create_idea(
    State(state): State<AppState>,
    Json(draft): Json<IdeaDraft>,
) -> Result<(StatusCode, Json<Ack>), AppError> {
    let store = state.store.lock().await;
    let mut ideas = store.load_all()?;
    let id = store::assign_id(&ideas);
    ideas.push(draft.into_idea(id));
    store.save_all(&ideas)?;
    tracing::info!(id = %id, total = ideas.len(), "Created food idea");
    Ok((StatusCode::CREATED, Json(ACK)))
}

async fn update_idea(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(patch): Json<IdeaPatch>,
) -> Result<Json<Ack>, AppError> {
    let id = IdeaId::from(id);
    let store = state.store.lock().await;
    let mut ideas = store.load_all()?;
    store::update_idea(&mut ideas, id, patch)?;
    store.save_all(&ideas)?;
    tracing::info!(id = %id, "Updated food idea");
    Ok(Json(ACK))
}

async fn delete_idea(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Ack>, AppError> {
    let id = IdeaId::from(id);
    let store = state.store.lock().await;
    let mut ideas = store.load_all()?;
    let removed = store::remove_idea(&mut ideas, id)?;
    store.save_all(&ideas)?;
    tracing::info!(id = %id, food = %removed.food, "Deleted food idea");
    Ok(Json(ACK))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    use super::*;

    fn test_state(dir: &TempDir) -> AppState {
        let config = AppConfig {
            bind_addr: "127.0.0.1:0".to_string(),
            data_file: dir.path().join("food-ideas.json"),
        };
        AppState::from_config(Arc::new(config))
    }

    fn draft(meal: &str, food: &str) -> IdeaDraft {
        IdeaDraft {
            meal: meal.to_string(),
            food: food.to_string(),
            ..IdeaDraft::default()
        }
    }

    #[tokio::test]
    async fn create_then_list_round_trip() {
        let dir = TempDir::new().unwrap();
        let state = test_state(&dir);

        let (status, Json(ack)) =
            create_idea(State(state.clone()), Json(draft("dinner", "Soup")))
                .await
                .unwrap();
        assert_eq!(status, StatusCode::CREATED);
        assert!(ack.success);

        let Json(ideas) = list_ideas(State(state.clone())).await.unwrap();
        assert_eq!(ideas.len(), 1);
        assert_eq!(ideas[0].food, "Soup");
        assert_eq!(ideas[0].meal, "dinner");

        // Idempotent read
        let Json(again) = list_ideas(State(state)).await.unwrap();
        assert_eq!(ideas, again);
    }

    #[tokio::test]
    async fn created_ids_are_unique() {
        let dir = TempDir::new().unwrap();
        let state = test_state(&dir);

        for food in ["Soup", "Ramen", "Tacos"] {
            create_idea(State(state.clone()), Json(draft("lunch", food)))
                .await
                .unwrap();
        }

        let Json(ideas) = list_ideas(State(state)).await.unwrap();
        assert_eq!(ideas.len(), 3);
        for idea in &ideas {
            assert_eq!(ideas.iter().filter(|i| i.id == idea.id).count(), 1);
        }
    }

    #[tokio::test]
    async fn update_replaces_only_supplied_fields() {
        let dir = TempDir::new().unwrap();
        let state = test_state(&dir);

        create_idea(State(state.clone()), Json(draft("dinner", "Soup")))
            .await
            .unwrap();
        let Json(ideas) = list_ideas(State(state.clone())).await.unwrap();
        let id = ideas[0].id.value();

        // Wire-shaped partial payload, as a client would send it
        let patch: IdeaPatch =
            serde_json::from_value(serde_json::json!({ "doneBy": "B" })).unwrap();
        update_idea(State(state.clone()), Path(id), Json(patch))
            .await
            .unwrap();

        let Json(ideas) = list_ideas(State(state)).await.unwrap();
        assert_eq!(ideas[0].done_by, "B");
        assert_eq!(ideas[0].food, "Soup");
    }

    #[tokio::test]
    async fn update_of_absent_id_is_not_found() {
        let dir = TempDir::new().unwrap();
        let state = test_state(&dir);

        let err = update_idea(State(state), Path(999), Json(IdeaPatch::default()))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound));
    }

    #[tokio::test]
    async fn delete_removes_exactly_one_and_then_404s() {
        let dir = TempDir::new().unwrap();
        let state = test_state(&dir);

        for food in ["Soup", "Ramen", "Tacos"] {
            create_idea(State(state.clone()), Json(draft("dinner", food)))
                .await
                .unwrap();
        }
        let Json(ideas) = list_ideas(State(state.clone())).await.unwrap();
        let middle = ideas[1].id.value();

        delete_idea(State(state.clone()), Path(middle)).await.unwrap();

        let Json(remaining) = list_ideas(State(state.clone())).await.unwrap();
        assert_eq!(remaining.len(), 2);
        assert_eq!(remaining[0], ideas[0]);
        assert_eq!(remaining[1], ideas[2]);

        let err = delete_idea(State(state), Path(middle)).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound));
    }

    #[tokio::test]
    async fn list_survives_a_corrupted_data_file() {
        let dir = TempDir::new().unwrap();
        let state = test_state(&dir);
        std::fs::write(dir.path().join("food-ideas.json"), "{definitely not json").unwrap();

        let Json(ideas) = list_ideas(State(state)).await.unwrap();
        assert!(ideas.is_empty());
    }
}
