//! Application state

use std::sync::Arc;

use crate::BoxError;
use crate::auth::RateLimiter;
use crate::config::Config;
use crate::db::{PgStore, Store};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Storage backend
    pub store: Arc<dyn Store>,
    /// JWT secret for user authentication
    pub jwt_secret: String,
    /// Email domains accepted on profile update
    pub allowed_email_domains: Arc<[String]>,
    /// Rate limiter for sign-in/sign-up routes
    pub rate_limiter: RateLimiter,
}

impl AppState {
    /// Connect to PostgreSQL, run migrations, build state
    pub async fn new(config: &Config) -> Result<Self, BoxError> {
        let store = PgStore::connect(&config.database_url).await?;
        tracing::info!("Database ready");
        Ok(Self::with_store(
            Arc::new(store),
            config.jwt_secret.clone(),
            config.allowed_email_domains.clone(),
        ))
    }

    pub fn with_store(
        store: Arc<dyn Store>,
        jwt_secret: impl Into<String>,
        allowed_email_domains: Vec<String>,
    ) -> Self {
        Self {
            store,
            jwt_secret: jwt_secret.into(),
            allowed_email_domains: allowed_email_domains.into(),
            rate_limiter: RateLimiter::new(),
        }
    }
}
