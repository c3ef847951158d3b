//! Data models

mod idea;

pub use idea::{normalize_recipe, FoodIdea, IdeaDraft, IdeaId, IdeaPatch};
