//! Storage layer
//!
//! Services talk to a [`Store`]; the PostgreSQL and in-memory implementations
//! share the same contract:
//!
//! - games of a list are returned ordered by `order_index ASC NULLS LAST, id ASC`
//! - a new game gets `max(order_index) + 1` within its list (1 for the first)
//! - deleting a list deletes its games; deleting a game leaves the other
//!   ordinals untouched

pub mod memory;
pub mod pg;

use async_trait::async_trait;
use shared::models::{
    Game, GameDraft, GameList, GameListDraft, ProfileUpdate, User,
};
use uuid::Uuid;

pub use crate::BoxError;
pub use memory::MemoryStore;
pub use pg::PgStore;

/// User row including the password hash
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UserRecord {
    #[sqlx(flatten)]
    pub user: User,
    pub hashed_password: String,
}

/// Data for a user row about to be inserted
#[derive(Debug, Clone)]
pub struct NewUserRow {
    pub name: String,
    pub email: String,
    pub hashed_password: String,
}

#[async_trait]
pub trait Store: Send + Sync {
    // ── Users ──

    /// Insert a user; `None` when the email is already registered
    async fn create_user(&self, row: &NewUserRow, now: i64) -> Result<Option<User>, BoxError>;
    async fn find_user(&self, id: Uuid) -> Result<Option<User>, BoxError>;
    async fn find_user_by_email(&self, email: &str) -> Result<Option<UserRecord>, BoxError>;
    /// `None` when the user no longer exists. An absent image keeps the stored one.
    async fn update_profile(
        &self,
        id: Uuid,
        update: &ProfileUpdate,
        now: i64,
    ) -> Result<Option<User>, BoxError>;
    async fn count_users(&self) -> Result<i64, BoxError>;

    // ── Game lists ──

    async fn lists_by_owner(&self, user_id: Uuid) -> Result<Vec<GameList>, BoxError>;
    async fn find_list(&self, list_id: i64) -> Result<Option<GameList>, BoxError>;
    async fn create_list(
        &self,
        user_id: Uuid,
        draft: &GameListDraft,
        now: i64,
    ) -> Result<GameList, BoxError>;
    async fn update_list(
        &self,
        list_id: i64,
        draft: &GameListDraft,
        now: i64,
    ) -> Result<Option<GameList>, BoxError>;
    /// `false` when nothing was deleted
    async fn delete_list(&self, list_id: i64) -> Result<bool, BoxError>;

    // ── Games ──

    async fn games_in_list(&self, list_id: i64) -> Result<Vec<Game>, BoxError>;
    async fn find_game(&self, game_id: i64) -> Result<Option<Game>, BoxError>;
    async fn create_game(&self, list_id: i64, draft: &GameDraft, now: i64)
    -> Result<Game, BoxError>;
    async fn update_game(
        &self,
        game_id: i64,
        draft: &GameDraft,
        now: i64,
    ) -> Result<Option<Game>, BoxError>;
    async fn delete_game(&self, game_id: i64) -> Result<bool, BoxError>;
    /// Overwrite one game's ordinal, scoped to its list.
    /// `false` when no game with that id lives in the list.
    async fn set_game_order(
        &self,
        list_id: i64,
        game_id: i64,
        order_index: i32,
        now: i64,
    ) -> Result<bool, BoxError>;
}
