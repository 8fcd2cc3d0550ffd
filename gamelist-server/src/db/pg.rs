//! PostgreSQL store

use async_trait::async_trait;
use shared::models::{Game, GameDraft, GameList, GameListDraft, ProfileUpdate, User};
use shared::tags::join_tags;
use sqlx::PgPool;
use uuid::Uuid;

use super::{BoxError, NewUserRow, Store, UserRecord};

const USER_COLUMNS: &str = "id, name, email, email_verified, image, created_at, updated_at";

#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Connect and run migrations
    pub async fn connect(database_url: &str) -> Result<Self, BoxError> {
        let pool = PgPool::connect(database_url).await?;
        sqlx::migrate!("./migrations").run(&pool).await?;
        Ok(Self::new(pool))
    }
}

#[async_trait]
impl Store for PgStore {
    async fn create_user(&self, row: &NewUserRow, now: i64) -> Result<Option<User>, BoxError> {
        let user = sqlx::query_as(&format!(
            "INSERT INTO users (id, name, email, hashed_password, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $5)
             ON CONFLICT (email) DO NOTHING
             RETURNING {USER_COLUMNS}"
        ))
        .bind(Uuid::new_v4())
        .bind(&row.name)
        .bind(&row.email)
        .bind(&row.hashed_password)
        .bind(now)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }

    async fn find_user(&self, id: Uuid) -> Result<Option<User>, BoxError> {
        let user = sqlx::query_as(&format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<UserRecord>, BoxError> {
        let record = sqlx::query_as("SELECT * FROM users WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;
        Ok(record)
    }

    async fn update_profile(
        &self,
        id: Uuid,
        update: &ProfileUpdate,
        now: i64,
    ) -> Result<Option<User>, BoxError> {
        let user = sqlx::query_as(&format!(
            "UPDATE users SET name = $1, email = $2, image = COALESCE($3, image), updated_at = $4
             WHERE id = $5
             RETURNING {USER_COLUMNS}"
        ))
        .bind(&update.name)
        .bind(&update.email)
        .bind(&update.image)
        .bind(now)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }

    async fn count_users(&self) -> Result<i64, BoxError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    async fn lists_by_owner(&self, user_id: Uuid) -> Result<Vec<GameList>, BoxError> {
        let lists = sqlx::query_as("SELECT * FROM game_lists WHERE user_id = $1 ORDER BY id")
            .bind(user_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(lists)
    }

    async fn find_list(&self, list_id: i64) -> Result<Option<GameList>, BoxError> {
        let list = sqlx::query_as("SELECT * FROM game_lists WHERE id = $1")
            .bind(list_id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(list)
    }

    async fn create_list(
        &self,
        user_id: Uuid,
        draft: &GameListDraft,
        now: i64,
    ) -> Result<GameList, BoxError> {
        let list = sqlx::query_as(
            "INSERT INTO game_lists (name, description, tags, user_id, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $5)
             RETURNING *",
        )
        .bind(&draft.name)
        .bind(&draft.description)
        .bind(join_tags(&draft.tags))
        .bind(user_id)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;
        Ok(list)
    }

    async fn update_list(
        &self,
        list_id: i64,
        draft: &GameListDraft,
        now: i64,
    ) -> Result<Option<GameList>, BoxError> {
        let list = sqlx::query_as(
            "UPDATE game_lists SET name = $1, description = $2, tags = $3, updated_at = $4
             WHERE id = $5
             RETURNING *",
        )
        .bind(&draft.name)
        .bind(&draft.description)
        .bind(join_tags(&draft.tags))
        .bind(now)
        .bind(list_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(list)
    }

    async fn delete_list(&self, list_id: i64) -> Result<bool, BoxError> {
        // games go with it (ON DELETE CASCADE)
        let rows = sqlx::query("DELETE FROM game_lists WHERE id = $1")
            .bind(list_id)
            .execute(&self.pool)
            .await?;
        Ok(rows.rows_affected() > 0)
    }

    async fn games_in_list(&self, list_id: i64) -> Result<Vec<Game>, BoxError> {
        let games = sqlx::query_as(
            "SELECT * FROM games WHERE list_id = $1
             ORDER BY order_index ASC NULLS LAST, id ASC",
        )
        .bind(list_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(games)
    }

    async fn find_game(&self, game_id: i64) -> Result<Option<Game>, BoxError> {
        let game = sqlx::query_as("SELECT * FROM games WHERE id = $1")
            .bind(game_id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(game)
    }

    async fn create_game(
        &self,
        list_id: i64,
        draft: &GameDraft,
        now: i64,
    ) -> Result<Game, BoxError> {
        let game = sqlx::query_as(
            r#"INSERT INTO games (name, url, site_name, tags, order_index, list_id, created_at, updated_at)
            SELECT $1, $2, $3, $4, COALESCE(MAX(order_index), 0) + 1, $5, $6, $6
            FROM games WHERE list_id = $5
            RETURNING *"#,
        )
        .bind(&draft.name)
        .bind(&draft.url)
        .bind(&draft.site_name)
        .bind(join_tags(&draft.tags))
        .bind(list_id)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;
        Ok(game)
    }

    async fn update_game(
        &self,
        game_id: i64,
        draft: &GameDraft,
        now: i64,
    ) -> Result<Option<Game>, BoxError> {
        let game = sqlx::query_as(
            "UPDATE games SET name = $1, url = $2, site_name = $3, tags = $4, updated_at = $5
             WHERE id = $6
             RETURNING *",
        )
        .bind(&draft.name)
        .bind(&draft.url)
        .bind(&draft.site_name)
        .bind(join_tags(&draft.tags))
        .bind(now)
        .bind(game_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(game)
    }

    async fn delete_game(&self, game_id: i64) -> Result<bool, BoxError> {
        let rows = sqlx::query("DELETE FROM games WHERE id = $1")
            .bind(game_id)
            .execute(&self.pool)
            .await?;
        Ok(rows.rows_affected() > 0)
    }

    async fn set_game_order(
        &self,
        list_id: i64,
        game_id: i64,
        order_index: i32,
        now: i64,
    ) -> Result<bool, BoxError> {
        let rows = sqlx::query(
            "UPDATE games SET order_index = $1, updated_at = $2 WHERE id = $3 AND list_id = $4",
        )
        .bind(order_index)
        .bind(now)
        .bind(game_id)
        .bind(list_id)
        .execute(&self.pool)
        .await?;
        Ok(rows.rows_affected() > 0)
    }
}
