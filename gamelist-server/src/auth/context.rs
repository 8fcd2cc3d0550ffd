//! Request context extractor
//!
//! Protected handlers take a [`RequestContext`]: the authenticated principal
//! plus the store handle. Services receive `&RequestContext` instead of
//! reaching for global state.

use std::sync::Arc;

use axum::{extract::FromRequestParts, http::request::Parts};
use shared::error::AppError;
use uuid::Uuid;

use super::jwt::{JwtError, verify_token};
use crate::db::Store;
use crate::state::AppState;

/// Authenticated user identity extracted from JWT
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserIdentity {
    pub user_id: Uuid,
    pub email: String,
}

#[derive(Clone)]
pub struct RequestContext {
    pub principal: UserIdentity,
    pub store: Arc<dyn Store>,
}

impl RequestContext {
    pub fn new(principal: UserIdentity, store: Arc<dyn Store>) -> Self {
        Self { principal, store }
    }

    pub fn user_id(&self) -> Uuid {
        self.principal.user_id
    }
}

impl FromRequestParts<AppState> for RequestContext {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if let Some(identity) = parts.extensions.get::<UserIdentity>() {
            return Ok(Self::new(identity.clone(), state.store.clone()));
        }

        let auth_header = parts
            .headers
            .get(http::header::AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .ok_or_else(AppError::not_authenticated)?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| AppError::invalid_token("Invalid Authorization format"))?;

        let claims = verify_token(token, &state.jwt_secret).map_err(|e| {
            tracing::debug!(uri = %parts.uri, "JWT validation failed: {e}");
            match e {
                JwtError::Expired => AppError::token_expired(),
                JwtError::Invalid(_) => AppError::invalid_token("Invalid token"),
            }
        })?;

        let user_id = Uuid::parse_str(&claims.sub)
            .map_err(|e| AppError::invalid_token(format!("Malformed JWT claims: {e}")))?;
        let identity = UserIdentity {
            user_id,
            email: claims.email,
        };

        parts.extensions.insert(identity.clone());

        Ok(Self::new(identity, state.store.clone()))
    }
}
