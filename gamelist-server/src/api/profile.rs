//! Current-user profile endpoints

use axum::{Json, extract::State};
use shared::models::{ProfileInput, User, UserCount};

use super::{ApiResult, AppJson};
use crate::auth::RequestContext;
use crate::services::users;
use crate::state::AppState;

/// GET /api/profile
pub async fn get_profile(ctx: RequestContext) -> ApiResult<User> {
    Ok(Json(users::profile(&ctx).await?))
}

/// PUT /api/profile
pub async fn update_profile(
    State(state): State<AppState>,
    ctx: RequestContext,
    AppJson(input): AppJson<ProfileInput>,
) -> ApiResult<User> {
    let user = users::update_profile(&ctx, &state.allowed_email_domains, &input).await?;
    Ok(Json(user))
}

/// GET /api/users/count
pub async fn user_count(ctx: RequestContext) -> ApiResult<UserCount> {
    Ok(Json(users::count_users(&ctx).await?))
}
