use std::collections::HashSet;

use axum::{Json, extract::State};
use tracing::debug;

use crate::middleware::JsonBody;
use crate::service::{QuizSelector, draw_question};
use crate::types::requests::QuizRequest;
use crate::types::responses::QuizResponse;
use crate::{TriviaError, router::TriviaState};

/// POST /quiz -> one random question not yet served, or `null` once the pool is empty.
pub async fn play_quiz(
    State(state): State<TriviaState>,
    JsonBody(body): JsonBody<QuizRequest>,
) -> Result<Json<QuizResponse>, TriviaError> {
    let (Some(category), Some(previous)) = (body.quiz_category, body.previous_questions) else {
        return Err(TriviaError::unprocessable(
            "quiz requires `quiz_category` and `previous_questions`",
        ));
    };
    let selector = QuizSelector::try_from(&category)?;

    let pool = state
        .storage
        .quiz_pool(selector.category(), &previous)
        .await
        .map_err(TriviaError::unprocessable)?;
    debug!(?selector, pool = pool.len(), previous = previous.len(), "quiz pool");

    let exclude: HashSet<i64> = previous.into_iter().collect();
    let question = draw_question(pool, &exclude, &mut rand::rng());

    Ok(Json(QuizResponse {
        success: true,
        question,
    }))
}
