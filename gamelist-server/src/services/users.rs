//! Account operations

use shared::error::{AppError, ErrorCode};
use shared::models::{ProfileInput, SignInInput, SignInResponse, SignUpInput, User, UserCount};
use shared::util::now_millis;

use crate::auth::{RequestContext, create_token};
use crate::db::{NewUserRow, Store};
use crate::error::{ServiceError, ServiceResult};
use crate::util::{hash_password, verify_password};

pub async fn sign_up(store: &dyn Store, input: &SignUpInput) -> ServiceResult<User> {
    let new_user = input.validate().into_result()?;
    let hashed_password =
        hash_password(&new_user.password).map_err(|e| ServiceError::Db(e.to_string().into()))?;

    let row = NewUserRow {
        name: new_user.name,
        email: new_user.email,
        hashed_password,
    };
    let user = store
        .create_user(&row, now_millis())
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::EmailAlreadyRegistered))?;

    tracing::info!(user_id = %user.id, "User signed up");
    Ok(user)
}

/// Unknown email and wrong password give the same error
pub async fn sign_in(
    store: &dyn Store,
    jwt_secret: &str,
    input: &SignInInput,
) -> ServiceResult<SignInResponse> {
    let email = input.email.trim().to_lowercase();
    let record = store
        .find_user_by_email(&email)
        .await?
        .ok_or_else(AppError::invalid_credentials)?;

    if !verify_password(&input.password, &record.hashed_password) {
        return Err(AppError::invalid_credentials().into());
    }

    let user = record.user;
    let token =
        create_token(user.id, &user.email, jwt_secret).map_err(|e| ServiceError::Db(e.into()))?;

    tracing::info!(user_id = %user.id, "User signed in");
    Ok(SignInResponse { token, user })
}

pub async fn profile(ctx: &RequestContext) -> ServiceResult<User> {
    ctx.store
        .find_user(ctx.user_id())
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::UserNotFound).into())
}

pub async fn update_profile(
    ctx: &RequestContext,
    allowed_domains: &[String],
    input: &ProfileInput,
) -> ServiceResult<User> {
    let update = input.validate(allowed_domains).into_result()?;

    if let Some(other) = ctx.store.find_user_by_email(&update.email).await?
        && other.user.id != ctx.user_id()
    {
        return Err(AppError::new(ErrorCode::EmailAlreadyRegistered).into());
    }

    ctx.store
        .update_profile(ctx.user_id(), &update, now_millis())
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::UserNotFound).into())
}

pub async fn count_users(ctx: &RequestContext) -> ServiceResult<UserCount> {
    let count = ctx.store.count_users().await?;
    Ok(UserCount { count })
}
