//! Drag-end handling and ordinal renumbering

use shared::models::{Game, ReorderItem};

/// A finished drag: `active_id` was dropped onto `over_id`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragEnd {
    pub active_id: i64,
    /// `None` when dropped outside any game
    pub over_id: Option<i64>,
}

impl DragEnd {
    pub fn new(active_id: i64, over_id: Option<i64>) -> Self {
        Self { active_id, over_id }
    }
}

/// Remove the element at `from` and reinsert it at `to`
pub fn move_item<T>(items: &mut Vec<T>, from: usize, to: usize) {
    if from == to || from >= items.len() || to >= items.len() {
        return;
    }
    let item = items.remove(from);
    items.insert(to, item);
}

/// Assign ordinals `1..=N` in sequence order and return the pairs to persist
pub fn renumber(games: &mut [Game]) -> Vec<ReorderItem> {
    games
        .iter_mut()
        .zip(1..)
        .map(|(game, order_index)| {
            game.order_index = Some(order_index);
            ReorderItem {
                id: game.id,
                order_index,
            }
        })
        .collect()
}

/// Apply a drag-end to `games`.
///
/// `None` (and `games` untouched) when there is no drop target, the game was
/// dropped onto itself, or either id is not in the sequence.
pub fn apply_drag_end(games: &mut Vec<Game>, event: DragEnd) -> Option<Vec<ReorderItem>> {
    let over_id = event.over_id?;
    if over_id == event.active_id {
        return None;
    }
    let from = games.iter().position(|g| g.id == event.active_id)?;
    let to = games.iter().position(|g| g.id == over_id)?;

    move_item(games, from, to);
    Some(renumber(games))
}
