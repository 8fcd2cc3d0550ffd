//! Account endpoints: sign-up, sign-in

use axum::{Json, extract::State};
use shared::models::{SignInInput, SignInResponse, SignUpInput, User};

use super::{ApiResult, AppJson};
use crate::services::users;
use crate::state::AppState;

/// POST /api/auth/signup
pub async fn sign_up(
    State(state): State<AppState>,
    AppJson(input): AppJson<SignUpInput>,
) -> ApiResult<User> {
    let user = users::sign_up(state.store.as_ref(), &input).await?;
    Ok(Json(user))
}

/// POST /api/auth/signin
pub async fn sign_in(
    State(state): State<AppState>,
    AppJson(input): AppJson<SignInInput>,
) -> ApiResult<SignInResponse> {
    let response = users::sign_in(state.store.as_ref(), &state.jwt_secret, &input).await?;
    Ok(Json(response))
}
