use axum::{
    Json,
    extract::{Path, State},
};

use crate::db::CategoryMap;
use crate::types::responses::{CategoriesResponse, QuestionsResponse};
use crate::{TriviaError, router::TriviaState};

/// GET /categories -> `{id: type}` ordered by type.
pub async fn list_categories(
    State(state): State<TriviaState>,
) -> Result<Json<CategoriesResponse>, TriviaError> {
    let categories = state.storage.list_categories().await?;
    if categories.is_empty() {
        return Err(TriviaError::NotFound);
    }

    Ok(Json(CategoriesResponse {
        success: true,
        categories: CategoryMap::from(categories),
    }))
}

/// GET /categories/{id}/questions
pub async fn category_questions(
    State(state): State<TriviaState>,
    Path(raw_id): Path<String>,
) -> Result<Json<QuestionsResponse>, TriviaError> {
    let category_id: i64 = raw_id.parse().map_err(|_| TriviaError::NotFound)?;

    let questions = state
        .storage
        .list_questions_by_category(category_id)
        .await?;
    if questions.is_empty() {
        return Err(TriviaError::NotFound);
    }

    Ok(Json(QuestionsResponse {
        success: true,
        total_questions: questions.len(),
        questions,
        categories: None,
        current_category: Some(category_id),
    }))
}
