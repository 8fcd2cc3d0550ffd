//! Backend seam for the synchronizer

use async_trait::async_trait;
use shared::models::{Game, GameInput, ReorderItem, ReorderResult};

use crate::{ClientResult, HttpClient};

/// Operations the synchronizer needs from the server.
///
/// Every failure carries a human-readable message (`ClientError::message`).
#[async_trait]
pub trait ListActions: Send + Sync {
    async fn add_game(&self, list_id: i64, input: &GameInput) -> ClientResult<Game>;

    async fn update_game(
        &self,
        list_id: i64,
        game_id: i64,
        input: &GameInput,
    ) -> ClientResult<Game>;

    async fn delete_game(&self, list_id: i64, game_id: i64) -> ClientResult<()>;

    /// Persist `(id, order_index)` pairs for the games of `list_id`
    async fn reorder(&self, items: &[ReorderItem], list_id: i64) -> ClientResult<ReorderResult>;
}

#[async_trait]
impl ListActions for HttpClient {
    async fn add_game(&self, list_id: i64, input: &GameInput) -> ClientResult<Game> {
        HttpClient::add_game(self, list_id, input).await
    }

    async fn update_game(
        &self,
        list_id: i64,
        game_id: i64,
        input: &GameInput,
    ) -> ClientResult<Game> {
        HttpClient::update_game(self, list_id, game_id, input).await
    }

    async fn delete_game(&self, list_id: i64, game_id: i64) -> ClientResult<()> {
        HttpClient::delete_game(self, list_id, game_id).await
    }

    async fn reorder(&self, items: &[ReorderItem], list_id: i64) -> ClientResult<ReorderResult> {
        HttpClient::reorder(self, items, list_id).await
    }
}
