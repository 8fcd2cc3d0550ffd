//! Game Model

use serde::{Deserialize, Serialize};

/// Game entity (an item of a game list)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Game {
    pub id: i64,
    pub name: String,
    pub url: Option<String>,
    pub site_name: Option<String>,
    /// Comma-delimited tags
    pub tags: Option<String>,
    /// Position among the list's games; `None` only before first assignment
    pub order_index: Option<i32>,
    pub list_id: i64,
    pub created_at: i64,
    pub updated_at: i64,
}

impl Game {
    /// Tags split into trimmed, non-empty entries
    pub fn tag_list(&self) -> Vec<String> {
        self.tags
            .as_deref()
            .map(crate::tags::parse_tags)
            .unwrap_or_default()
    }
}

/// Add / update game payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameInput {
    pub name: String,
    pub url: String,
    pub site_name: String,
    pub tags: String,
}

/// Validated game data (trimmed, tags normalized)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameDraft {
    pub name: String,
    pub url: String,
    pub site_name: String,
    pub tags: Vec<String>,
}
