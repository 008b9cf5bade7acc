//! Web layer for the trip planner.
//!
//! Exposes the use cases under `/trip-planner` as a JSON API.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
