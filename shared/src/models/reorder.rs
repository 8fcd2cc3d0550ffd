//! Reorder payloads

use serde::{Deserialize, Serialize};

/// New ordinal for one game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReorderItem {
    pub id: i64,
    pub order_index: i32,
}

/// Batch ordinal update for the games of one list
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ReorderRequest {
    pub items: Vec<ReorderItem>,
}

/// Outcome of a fully applied batch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ReorderResult {
    /// Pairs whose game was found in the list and rewritten
    pub written: usize,
    /// Pairs naming a game that is not in the list
    pub skipped: usize,
}
