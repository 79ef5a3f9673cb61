//! # API Route Handlers
//!
//! This module organizes the Axum route handlers for the `vistag-server`.

pub mod general;
pub mod tags;

// Re-export all handlers from the sub-modules to make them easily accessible
// to the router under a single `handlers::` path.
pub use general::*;
pub use tags::*;

// Shared items used by the handler modules.
use super::{errors::AppError, state::AppState};
