//! # API Route Handlers
//!
//! This module organizes all the Axum route handlers for the `formaid-server`.
//! The handlers are split into logical sub-modules based on their functionality.

pub mod general;
pub mod knowledge;
pub mod support_chat;
pub mod validation;

// Re-export all handlers from the sub-modules to make them easily accessible
// to the router under a single `handlers::` path.
pub use general::*;
pub use knowledge::*;
pub use support_chat::*;
pub use validation::*;

// Shared items used by multiple handler modules.
use super::{errors::AppError, state::AppState};
