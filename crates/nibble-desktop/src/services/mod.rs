//! Desktop services

mod api;

pub use api::{ApiClient, ApiError};
