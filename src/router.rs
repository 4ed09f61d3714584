use axum::{
    Router, middleware,
    routing::{delete, get, post},
};

use crate::db::TriviaStorage;
use crate::handlers::{categories, method_not_allowed, not_found, questions, quiz};

#[derive(Clone)]
pub struct TriviaState {
    pub storage: TriviaStorage,
}

impl TriviaState {
    pub fn new(storage: TriviaStorage) -> Self {
        Self { storage }
    }
}

pub fn trivia_router(state: TriviaState) -> Router {
    Router::new()
        .route("/categories", get(categories::list_categories))
        .route(
            "/categories/{id}/questions",
            get(categories::category_questions),
        )
        .route(
            "/questions",
            get(questions::list_questions).post(questions::create_question),
        )
        .route("/questions/search", post(questions::search))
        .route("/questions/{id}", delete(questions::delete_question))
        .route("/quiz", post(quiz::play_quiz))
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .layer(middleware::from_fn(crate::middleware::cors))
        .with_state(state)
}
