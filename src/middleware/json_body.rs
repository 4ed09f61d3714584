use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
};
use serde::de::DeserializeOwned;

use crate::TriviaError;

/// `Json<T>` whose rejections use the API error envelope.
///
/// A body that parses but has the wrong shape is 422; anything else
/// (bad syntax, missing content type) is 400.
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = TriviaError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(JsonBody(value)),
            Err(JsonRejection::JsonDataError(e)) => Err(TriviaError::Unprocessable(e.body_text())),
            Err(rejection) => Err(TriviaError::BadRequest(rejection.body_text())),
        }
    }
}
