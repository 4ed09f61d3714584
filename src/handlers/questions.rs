use axum::{
    Json,
    extract::{Path, State},
};
use tracing::{info, warn};

use crate::db::{CategoryMap, NewQuestion};
use crate::middleware::{JsonBody, Page};
use crate::service::{paginate, search_questions};
use crate::types::requests::{CreateQuestionRequest, SearchRequest};
use crate::types::responses::{CreatedResponse, DeletedResponse, QuestionsResponse};
use crate::{TriviaError, router::TriviaState};

/// GET /questions?page=N -> one page of questions plus every category.
pub async fn list_questions(
    State(state): State<TriviaState>,
    Page(page): Page,
) -> Result<Json<QuestionsResponse>, TriviaError> {
    let all = state.storage.list_questions().await?;
    let current = paginate(&all, page).to_vec();
    if current.is_empty() {
        return Err(TriviaError::NotFound);
    }

    let categories = state.storage.list_categories().await?;

    Ok(Json(QuestionsResponse {
        success: true,
        questions: current,
        total_questions: all.len(),
        categories: Some(CategoryMap::from(categories)),
        current_category: None,
    }))
}

/// POST /questions -> insert a question.
pub async fn create_question(
    State(state): State<TriviaState>,
    JsonBody(body): JsonBody<CreateQuestionRequest>,
) -> Result<Json<CreatedResponse>, TriviaError> {
    let new = NewQuestion::try_from(body)?;
    let id = state.storage.insert_question(&new).await.map_err(|e| {
        warn!(category = new.category, error = %e, "question insert failed");
        TriviaError::unprocessable(e)
    })?;

    info!(id, category = new.category, "question created");
    Ok(Json(CreatedResponse {
        success: true,
        created: id,
    }))
}

/// DELETE /questions/{id}
pub async fn delete_question(
    State(state): State<TriviaState>,
    Path(raw_id): Path<String>,
) -> Result<Json<DeletedResponse>, TriviaError> {
    let id: i64 = raw_id
        .parse()
        .map_err(|_| TriviaError::unprocessable(format!("invalid question id `{raw_id}`")))?;

    let deleted = state
        .storage
        .delete_question(id)
        .await
        .map_err(TriviaError::unprocessable)?;
    if !deleted {
        return Err(TriviaError::unprocessable(format!("question {id} does not exist")));
    }

    info!(id, "question deleted");
    Ok(Json(DeletedResponse {
        success: true,
        deleted: id,
    }))
}

/// POST /questions/search -> case-insensitive substring match on question text.
pub async fn search(
    State(state): State<TriviaState>,
    JsonBody(body): JsonBody<SearchRequest>,
) -> Result<Json<QuestionsResponse>, TriviaError> {
    let Some(term) = body.search_term.filter(|t| !t.is_empty()) else {
        return Err(TriviaError::NotFound);
    };

    let questions = search_questions(state.storage.list_questions().await?, &term);

    Ok(Json(QuestionsResponse {
        success: true,
        total_questions: questions.len(),
        questions,
        categories: None,
        current_category: None,
    }))
}
