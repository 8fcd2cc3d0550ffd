//! Reorder synchronizer for one game list

use std::collections::HashMap;
use std::sync::Arc;

use shared::models::{Game, GameInput, ReorderRequest};
use shared::validation::Validated;
use tokio::task::JoinHandle;

use super::order::{self, DragEnd};
use super::widget::{WidgetError, WidgetEvent, WidgetKey, WidgetState};
use crate::ListActions;

/// Owns the rendered sequence of one list's games.
///
/// Drag-end events are applied optimistically: local order and ordinals change
/// at once and the new ordinals are persisted by a spawned task whose outcome
/// is only logged. A failed reorder is never rolled back; call
/// [`replace_items`](Self::replace_items) with fresh server data to resync.
pub struct ReorderSynchronizer {
    list_id: i64,
    games: Vec<Game>,
    backend: Arc<dyn ListActions>,
    widgets: HashMap<WidgetKey, WidgetState>,
}

impl ReorderSynchronizer {
    /// `games` must already be in display order
    pub fn new(list_id: i64, games: Vec<Game>, backend: Arc<dyn ListActions>) -> Self {
        Self {
            list_id,
            games,
            backend,
            widgets: HashMap::new(),
        }
    }

    pub fn list_id(&self) -> i64 {
        self.list_id
    }

    /// Games in display order
    pub fn games(&self) -> &[Game] {
        &self.games
    }

    pub fn game_ids(&self) -> Vec<i64> {
        self.games.iter().map(|g| g.id).collect()
    }

    /// Replace local state with an authoritative sequence
    pub fn replace_items(&mut self, games: Vec<Game>) {
        self.games = games;
    }

    // ── Reorder ─────────────────────────────────────────────────────

    /// Apply a drag-end locally and return the batch to persist.
    ///
    /// `None` when the event is a no-op.
    pub fn apply_drag_end(&mut self, event: DragEnd) -> Option<ReorderRequest> {
        let items = order::apply_drag_end(&mut self.games, event)?;
        Some(ReorderRequest { items })
    }

    /// Apply a drag-end locally and persist it in the background.
    ///
    /// Needs a tokio runtime. The returned handle resolves once the request
    /// finished; failures are logged, never surfaced.
    pub fn handle_drag_end(&mut self, event: DragEnd) -> Option<JoinHandle<()>> {
        let request = self.apply_drag_end(event)?;
        let backend = Arc::clone(&self.backend);
        let list_id = self.list_id;

        Some(tokio::spawn(async move {
            match backend.reorder(&request.items, list_id).await {
                Ok(result) => tracing::debug!(
                    list_id,
                    written = result.written,
                    skipped = result.skipped,
                    "Reorder persisted"
                ),
                Err(e) => tracing::error!(list_id, error = %e, "Failed to persist reorder"),
            }
        }))
    }

    // ── Widgets ─────────────────────────────────────────────────────

    pub fn widget(&self, key: WidgetKey) -> &WidgetState {
        const IDLE: &WidgetState = &WidgetState::Idle;
        self.widgets.get(&key).unwrap_or(IDLE)
    }

    /// Keys of every widget not currently idle
    pub fn active_widgets(&self) -> impl Iterator<Item = WidgetKey> + '_ {
        self.widgets.keys().copied()
    }

    fn dispatch(&mut self, key: WidgetKey, event: WidgetEvent) {
        let state = self.widgets.remove(&key).unwrap_or_default().next(event);
        if state != WidgetState::Idle {
            self.widgets.insert(key, state);
        }
    }

    pub fn open(&mut self, key: WidgetKey) {
        self.dispatch(key, WidgetEvent::Open);
    }

    pub fn close(&mut self, key: WidgetKey) {
        self.dispatch(key, WidgetEvent::Close);
    }

    /// Validate on the client; field errors go to the widget
    fn check(&mut self, key: WidgetKey, input: &GameInput) -> Result<(), WidgetError> {
        match input.validate() {
            Validated::Valid(_) => Ok(()),
            Validated::Invalid(errors) => {
                self.dispatch(key, WidgetEvent::Reject(errors.clone()));
                Err(WidgetError::Fields(errors))
            }
        }
    }

    /// Settle a submitted widget with the backend outcome
    fn settle<T>(
        &mut self,
        key: WidgetKey,
        outcome: crate::ClientResult<T>,
    ) -> Result<T, WidgetError> {
        match outcome {
            Ok(value) => {
                self.dispatch(key, WidgetEvent::Resolve(Ok(())));
                Ok(value)
            }
            Err(e) => {
                let message = e.message();
                tracing::warn!(list_id = self.list_id, ?key, error = %message, "Submission failed");
                self.dispatch(key, WidgetEvent::Resolve(Err(message.clone())));
                Err(WidgetError::Submit(message))
            }
        }
    }

    // ── Add / update / delete ───────────────────────────────────────

    /// Add a game; on success it is appended to the local sequence
    pub async fn add_game(&mut self, input: &GameInput) -> Result<Game, WidgetError> {
        let key = WidgetKey::Add;
        self.check(key, input)?;
        self.dispatch(key, WidgetEvent::Submit);

        let outcome = self.backend.add_game(self.list_id, input).await;
        let game = self.settle(key, outcome)?;
        self.games.push(game.clone());
        Ok(game)
    }

    /// Update a game; on success it is replaced in place
    pub async fn update_game(
        &mut self,
        game_id: i64,
        input: &GameInput,
    ) -> Result<Game, WidgetError> {
        let key = WidgetKey::Edit(game_id);
        self.check(key, input)?;
        self.dispatch(key, WidgetEvent::Submit);

        let outcome = self.backend.update_game(self.list_id, game_id, input).await;
        let game = self.settle(key, outcome)?;
        if let Some(slot) = self.games.iter_mut().find(|g| g.id == game_id) {
            *slot = game.clone();
        }
        Ok(game)
    }

    /// Delete a game; on success it is removed locally (no renumbering)
    /// together with its widgets
    pub async fn delete_game(&mut self, game_id: i64) -> Result<(), WidgetError> {
        let key = WidgetKey::Delete(game_id);
        self.dispatch(key, WidgetEvent::Submit);

        let outcome = self.backend.delete_game(self.list_id, game_id).await;
        self.settle(key, outcome)?;
        self.games.retain(|g| g.id != game_id);
        self.widgets.retain(|key, _| key.game_id() != Some(game_id));
        Ok(())
    }
}
