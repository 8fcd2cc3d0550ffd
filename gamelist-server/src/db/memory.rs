//! In-memory store
//!
//! Same contract as [`super::PgStore`], held in process memory. Used by the
//! test suites; [`MemoryStore::fail_order_writes_for`] makes ordinal writes for
//! chosen games fail so partial reorder outcomes can be exercised.

use std::collections::{BTreeMap, HashSet};

use async_trait::async_trait;
use shared::models::{Game, GameDraft, GameList, GameListDraft, ProfileUpdate, User};
use shared::tags::join_tags;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{BoxError, NewUserRow, Store, UserRecord};

#[derive(Default)]
struct Inner {
    users: BTreeMap<Uuid, UserRecord>,
    lists: BTreeMap<i64, GameList>,
    games: BTreeMap<i64, Game>,
    last_list_id: i64,
    last_game_id: i64,
    failing_games: HashSet<i64>,
}

#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every later `set_game_order` for `game_id` fail with a store error
    pub async fn fail_order_writes_for(&self, game_id: i64) {
        self.inner.write().await.failing_games.insert(game_id);
    }
}

fn non_empty_tags(tags: &[String]) -> Option<String> {
    Some(join_tags(tags)).filter(|t| !t.is_empty())
}

#[async_trait]
impl Store for MemoryStore {
    async fn create_user(&self, row: &NewUserRow, now: i64) -> Result<Option<User>, BoxError> {
        let mut inner = self.inner.write().await;
        if inner.users.values().any(|r| r.user.email == row.email) {
            return Ok(None);
        }
        let user = User {
            id: Uuid::new_v4(),
            name: row.name.clone(),
            email: row.email.clone(),
            email_verified: false,
            image: None,
            created_at: now,
            updated_at: now,
        };
        inner.users.insert(
            user.id,
            UserRecord {
                user: user.clone(),
                hashed_password: row.hashed_password.clone(),
            },
        );
        Ok(Some(user))
    }

    async fn find_user(&self, id: Uuid) -> Result<Option<User>, BoxError> {
        Ok(self.inner.read().await.users.get(&id).map(|r| r.user.clone()))
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<UserRecord>, BoxError> {
        let inner = self.inner.read().await;
        Ok(inner.users.values().find(|r| r.user.email == email).cloned())
    }

    async fn update_profile(
        &self,
        id: Uuid,
        update: &ProfileUpdate,
        now: i64,
    ) -> Result<Option<User>, BoxError> {
        let mut inner = self.inner.write().await;
        let Some(record) = inner.users.get_mut(&id) else {
            return Ok(None);
        };
        record.user.name = update.name.clone();
        record.user.email = update.email.clone();
        if let Some(image) = &update.image {
            record.user.image = Some(image.clone());
        }
        record.user.updated_at = now;
        Ok(Some(record.user.clone()))
    }

    async fn count_users(&self) -> Result<i64, BoxError> {
        Ok(self.inner.read().await.users.len() as i64)
    }

    async fn lists_by_owner(&self, user_id: Uuid) -> Result<Vec<GameList>, BoxError> {
        let inner = self.inner.read().await;
        Ok(inner
            .lists
            .values()
            .filter(|l| l.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn find_list(&self, list_id: i64) -> Result<Option<GameList>, BoxError> {
        Ok(self.inner.read().await.lists.get(&list_id).cloned())
    }

    async fn create_list(
        &self,
        user_id: Uuid,
        draft: &GameListDraft,
        now: i64,
    ) -> Result<GameList, BoxError> {
        let mut inner = self.inner.write().await;
        inner.last_list_id += 1;
        let list = GameList {
            id: inner.last_list_id,
            name: draft.name.clone(),
            description: Some(draft.description.clone()),
            tags: non_empty_tags(&draft.tags),
            is_public: false,
            user_id,
            created_at: now,
            updated_at: now,
        };
        inner.lists.insert(list.id, list.clone());
        Ok(list)
    }

    async fn update_list(
        &self,
        list_id: i64,
        draft: &GameListDraft,
        now: i64,
    ) -> Result<Option<GameList>, BoxError> {
        let mut inner = self.inner.write().await;
        let Some(list) = inner.lists.get_mut(&list_id) else {
            return Ok(None);
        };
        list.name = draft.name.clone();
        list.description = Some(draft.description.clone());
        list.tags = non_empty_tags(&draft.tags);
        list.updated_at = now;
        Ok(Some(list.clone()))
    }

    async fn delete_list(&self, list_id: i64) -> Result<bool, BoxError> {
        let mut inner = self.inner.write().await;
        if inner.lists.remove(&list_id).is_none() {
            return Ok(false);
        }
        inner.games.retain(|_, g| g.list_id != list_id);
        Ok(true)
    }

    async fn games_in_list(&self, list_id: i64) -> Result<Vec<Game>, BoxError> {
        let inner = self.inner.read().await;
        let mut games: Vec<Game> = inner
            .games
            .values()
            .filter(|g| g.list_id == list_id)
            .cloned()
            .collect();
        // NULLS LAST, then id
        games.sort_by_key(|g| (g.order_index.is_none(), g.order_index, g.id));
        Ok(games)
    }

    async fn find_game(&self, game_id: i64) -> Result<Option<Game>, BoxError> {
        Ok(self.inner.read().await.games.get(&game_id).cloned())
    }

    async fn create_game(
        &self,
        list_id: i64,
        draft: &GameDraft,
        now: i64,
    ) -> Result<Game, BoxError> {
        let mut inner = self.inner.write().await;
        let next_order = inner
            .games
            .values()
            .filter(|g| g.list_id == list_id)
            .filter_map(|g| g.order_index)
            .max()
            .unwrap_or(0)
            + 1;
        inner.last_game_id += 1;
        let game = Game {
            id: inner.last_game_id,
            name: draft.name.clone(),
            url: Some(draft.url.clone()),
            site_name: Some(draft.site_name.clone()),
            tags: non_empty_tags(&draft.tags),
            order_index: Some(next_order),
            list_id,
            created_at: now,
            updated_at: now,
        };
        inner.games.insert(game.id, game.clone());
        Ok(game)
    }

    async fn update_game(
        &self,
        game_id: i64,
        draft: &GameDraft,
        now: i64,
    ) -> Result<Option<Game>, BoxError> {
        let mut inner = self.inner.write().await;
        let Some(game) = inner.games.get_mut(&game_id) else {
            return Ok(None);
        };
        game.name = draft.name.clone();
        game.url = Some(draft.url.clone());
        game.site_name = Some(draft.site_name.clone());
        game.tags = non_empty_tags(&draft.tags);
        game.updated_at = now;
        Ok(Some(game.clone()))
    }

    async fn delete_game(&self, game_id: i64) -> Result<bool, BoxError> {
        Ok(self.inner.write().await.games.remove(&game_id).is_some())
    }

    async fn set_game_order(
        &self,
        list_id: i64,
        game_id: i64,
        order_index: i32,
        now: i64,
    ) -> Result<bool, BoxError> {
        let mut inner = self.inner.write().await;
        if inner.failing_games.contains(&game_id) {
            return Err(format!("write failed for game {game_id}").into());
        }
        match inner.games.get_mut(&game_id) {
            Some(game) if game.list_id == list_id => {
                game.order_index = Some(order_index);
                game.updated_at = now;
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}
