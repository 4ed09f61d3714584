pub mod categories;
pub mod questions;
pub mod quiz;

use crate::TriviaError;

/// Fallback for unknown routes.
pub async fn not_found() -> TriviaError {
    TriviaError::NotFound
}

/// Fallback for known routes hit with an unsupported method.
pub async fn method_not_allowed() -> TriviaError {
    TriviaError::MethodNotAllowed
}
