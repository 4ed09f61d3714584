use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum TriviaError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Resource not found")]
    NotFound,

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Unprocessable: {0}")]
    Unprocessable(String),

    #[error("Database error: {0}")]
    DatabaseError(#[from] SqlxError),
}

impl TriviaError {
    /// Store mutation failures surface as 422 without detail.
    pub fn unprocessable(reason: impl std::fmt::Display) -> Self {
        TriviaError::Unprocessable(reason.to_string())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            TriviaError::BadRequest(_) => StatusCode::BAD_REQUEST,
            TriviaError::NotFound => StatusCode::NOT_FOUND,
            TriviaError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            TriviaError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            TriviaError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for TriviaError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        match &self {
            TriviaError::BadRequest(_) | TriviaError::Unprocessable(_) => {
                tracing::warn!(status = status.as_u16(), error = %self, "request rejected");
            }
            TriviaError::NotFound | TriviaError::MethodNotAllowed => {}
            TriviaError::DatabaseError(_) => {
                tracing::error!(status = status.as_u16(), error = %self, "request failed");
            }
        }
        (status, Json(ApiErrorBody::for_status(status))).into_response()
    }
}

/// Standardized API error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    pub success: bool,
    pub error: u16,
    pub message: &'static str,
}

impl ApiErrorBody {
    pub fn for_status(status: StatusCode) -> Self {
        let (status, message) = match status {
            StatusCode::BAD_REQUEST => (status, "Bad Request"),
            StatusCode::NOT_FOUND => (status, "Resource Not Found"),
            StatusCode::METHOD_NOT_ALLOWED => (status, "Method Not Allowed"),
            StatusCode::UNPROCESSABLE_ENTITY => (status, "Unable to process request"),
            _ => (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error"),
        };
        Self {
            success: false,
            error: status.as_u16(),
            message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_statuses_fold_into_internal_error() {
        let body = ApiErrorBody::for_status(StatusCode::BAD_GATEWAY);
        assert_eq!(body.error, 500);
        assert_eq!(body.message, "Internal Server Error");
        assert!(!body.success);
    }

    #[test]
    fn method_not_allowed_keeps_its_code() {
        let body = ApiErrorBody::for_status(TriviaError::MethodNotAllowed.status());
        assert_eq!(body.error, 405);
        assert_eq!(body.message, "Method Not Allowed");
    }

    #[test]
    fn store_failures_map_to_server_error() {
        let err = TriviaError::from(SqlxError::RowNotFound);
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            TriviaError::unprocessable("boom").status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }
}
