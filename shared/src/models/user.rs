//! User Model

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User entity (public view, never carries the password hash)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub email_verified: bool,
    pub image: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Sign-up payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SignUpInput {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Validated sign-up data (email normalized)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Sign-in payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignInInput {
    pub email: String,
    pub password: String,
}

/// Sign-in response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignInResponse {
    pub token: String,
    pub user: User,
}

/// Profile update payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileInput {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub image: Option<String>,
}

/// Validated profile update. `image: None` keeps the stored image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileUpdate {
    pub name: String,
    pub email: String,
    pub image: Option<String>,
}

/// Number of registered users
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct UserCount {
    pub count: i64,
}
