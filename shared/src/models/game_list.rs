//! Game List Model

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::game::Game;

/// Game list entity (an ordered collection of games owned by one user)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct GameList {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    /// Comma-delimited tags
    pub tags: Option<String>,
    pub is_public: bool,
    pub user_id: Uuid,
    pub created_at: i64,
    pub updated_at: i64,
}

impl GameList {
    /// Tags split into trimmed, non-empty entries
    pub fn tag_list(&self) -> Vec<String> {
        self.tags
            .as_deref()
            .map(crate::tags::parse_tags)
            .unwrap_or_default()
    }
}

/// Game list together with its games in display order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameListDetail {
    #[serde(flatten)]
    pub list: GameList,
    pub games: Vec<Game>,
}

/// Create / update game list payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameListInput {
    pub name: String,
    pub description: String,
    pub tags: String,
}

/// Validated game list data (trimmed, tags normalized)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameListDraft {
    pub name: String,
    pub description: String,
    pub tags: Vec<String>,
}
