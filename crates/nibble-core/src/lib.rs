//! nibble-core - Core library for Nibble
//!
//! This crate contains the shared models, the flat-file JSON store, and the
//! pure list transforms (filtering, search, pagination) used by the API
//! server and the desktop client.

pub mod error;
pub mod filter;
pub mod models;
pub mod store;

pub use error::{Error, Result};
pub use models::{FoodIdea, IdeaDraft, IdeaId, IdeaPatch};
