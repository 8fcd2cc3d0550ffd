//! JSON body extractor whose rejection uses the shared error body

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;
use shared::error::AppError;

/// Like [`axum::Json`], but a malformed body is answered with
/// `InvalidRequest` (400) as `{code, message}` instead of plain text.
pub struct AppJson<T>(pub T);

impl<T, S> FromRequest<S> for AppJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match axum::Json::<T>::from_request(req, state).await {
            Ok(axum::Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(rejection_error(rejection)),
        }
    }
}

fn rejection_error(rejection: JsonRejection) -> AppError {
    tracing::debug!(status = %rejection.status(), "Rejected request body");
    AppError::invalid_request(rejection.body_text())
}
