//! Synchronizer behaviour against a recording backend

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use gamelist_client::{
    ClientError, ClientResult, DragEnd, ListActions, ReorderSynchronizer, WidgetError, WidgetKey,
    WidgetState,
};
use shared::models::{Game, GameInput, ReorderItem, ReorderResult};

const LIST_ID: i64 = 7;

#[derive(Debug, Clone, PartialEq)]
enum Call {
    Add(String),
    Update(i64, String),
    Delete(i64),
    Reorder(i64, Vec<ReorderItem>),
}

/// Records every call; fails all of them when `failing` is set
#[derive(Default)]
struct RecordingBackend {
    calls: Mutex<Vec<Call>>,
    failing: bool,
}

impl RecordingBackend {
    fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) -> ClientResult<()> {
        self.calls.lock().unwrap().push(call);
        if self.failing {
            Err(ClientError::NotFound(
                "Game list not found or you don't have permission".into(),
            ))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl ListActions for RecordingBackend {
    async fn add_game(&self, list_id: i64, input: &GameInput) -> ClientResult<Game> {
        self.record(Call::Add(input.name.clone()))?;
        Ok(Game {
            order_index: Some(100),
            ..game(100, &input.name, list_id)
        })
    }

    async fn update_game(
        &self,
        list_id: i64,
        game_id: i64,
        input: &GameInput,
    ) -> ClientResult<Game> {
        self.record(Call::Update(game_id, input.name.clone()))?;
        // fixture ids double as ordinals
        Ok(Game {
            order_index: Some(game_id as i32),
            ..game(game_id, &input.name, list_id)
        })
    }

    async fn delete_game(&self, _list_id: i64, game_id: i64) -> ClientResult<()> {
        self.record(Call::Delete(game_id))
    }

    async fn reorder(&self, items: &[ReorderItem], list_id: i64) -> ClientResult<ReorderResult> {
        self.record(Call::Reorder(list_id, items.to_vec()))?;
        Ok(ReorderResult {
            written: items.len(),
            skipped: 0,
        })
    }
}

fn game(id: i64, name: &str, list_id: i64) -> Game {
    Game {
        id,
        name: name.to_string(),
        url: Some(format!("https://{}.example.com", name.to_lowercase())),
        site_name: Some("Example".into()),
        tags: Some("daily".into()),
        order_index: None,
        list_id,
        created_at: 0,
        updated_at: 0,
    }
}

/// Games `names[i]` with id `i + 1` and ordinal `i + 1`
fn games(names: &[&str]) -> Vec<Game> {
    names
        .iter()
        .zip(1..)
        .map(|(name, i)| Game {
            order_index: Some(i as i32),
            ..game(i, name, LIST_ID)
        })
        .collect()
}

fn synchronizer(names: &[&str], backend: Arc<RecordingBackend>) -> ReorderSynchronizer {
    ReorderSynchronizer::new(LIST_ID, games(names), backend)
}

/// (name, ordinal) pairs in display order
fn snapshot(sync: &ReorderSynchronizer) -> Vec<(String, Option<i32>)> {
    sync.games()
        .iter()
        .map(|g| (g.name.clone(), g.order_index))
        .collect()
}

fn expect(pairs: &[(&str, i32)]) -> Vec<(String, Option<i32>)> {
    pairs
        .iter()
        .map(|(n, o)| (n.to_string(), Some(*o)))
        .collect()
}

fn input(name: &str) -> GameInput {
    GameInput {
        name: name.into(),
        url: format!("https://{}.example.com", name.to_lowercase()),
        site_name: "Example".into(),
        tags: "daily".into(),
    }
}

// ── Reorder ─────────────────────────────────────────────────────────

#[test]
fn test_every_move_renumbers_one_to_n() {
    let names = ["A", "B", "C", "D", "E"];
    for from in 0..names.len() {
        for to in 0..names.len() {
            if from == to {
                continue;
            }
            let mut sync = synchronizer(&names, Arc::new(RecordingBackend::default()));
            let mut expected: Vec<i64> = sync.game_ids();
            let moved = expected.remove(from);
            expected.insert(to, moved);

            let request = sync
                .apply_drag_end(DragEnd::new(from as i64 + 1, Some(to as i64 + 1)))
                .unwrap();

            assert_eq!(sync.game_ids(), expected);
            let ordinals: Vec<_> = sync.games().iter().map(|g| g.order_index).collect();
            let one_to_n: Vec<_> = (1..=names.len() as i32).map(Some).collect();
            assert_eq!(ordinals, one_to_n);

            let sent: Vec<_> = request.items.iter().map(|i| (i.id, i.order_index)).collect();
            let local: Vec<_> = sync
                .games()
                .iter()
                .map(|g| (g.id, g.order_index.unwrap()))
                .collect();
            assert_eq!(sent, local);
        }
    }
}

#[test]
fn test_move_first_onto_last() {
    let mut sync = synchronizer(&["A", "B", "C"], Arc::new(RecordingBackend::default()));
    sync.apply_drag_end(DragEnd::new(1, Some(3))).unwrap();
    assert_eq!(snapshot(&sync), expect(&[("B", 1), ("C", 2), ("A", 3)]));
}

#[test]
fn test_move_last_onto_first() {
    let mut sync = synchronizer(&["A", "B", "C"], Arc::new(RecordingBackend::default()));
    sync.apply_drag_end(DragEnd::new(3, Some(1))).unwrap();
    assert_eq!(snapshot(&sync), expect(&[("C", 1), ("A", 2), ("B", 3)]));
}

#[test]
fn test_drop_on_itself_is_a_noop() {
    let mut sync = synchronizer(&["A", "B", "C"], Arc::new(RecordingBackend::default()));
    let before = snapshot(&sync);
    assert!(sync.apply_drag_end(DragEnd::new(2, Some(2))).is_none());
    assert_eq!(snapshot(&sync), before);
}

#[test]
fn test_drop_outside_is_a_noop() {
    let mut sync = synchronizer(&["A", "B", "C"], Arc::new(RecordingBackend::default()));
    let before = snapshot(&sync);
    assert!(sync.apply_drag_end(DragEnd::new(2, None)).is_none());
    assert_eq!(snapshot(&sync), before);
}

#[test]
fn test_unknown_ids_are_a_noop() {
    let mut sync = synchronizer(&["A", "B", "C"], Arc::new(RecordingBackend::default()));
    let before = snapshot(&sync);
    assert!(sync.apply_drag_end(DragEnd::new(42, Some(1))).is_none());
    assert!(sync.apply_drag_end(DragEnd::new(1, Some(42))).is_none());
    assert_eq!(snapshot(&sync), before);
}

#[tokio::test]
async fn test_noop_drag_sends_nothing() {
    let backend = Arc::new(RecordingBackend::default());
    let mut sync = synchronizer(&["A", "B"], backend.clone());
    assert!(sync.handle_drag_end(DragEnd::new(1, None)).is_none());
    assert!(sync.handle_drag_end(DragEnd::new(1, Some(1))).is_none());
    assert!(backend.calls().is_empty());
}

#[tokio::test]
async fn test_drag_end_persists_full_batch() {
    let backend = Arc::new(RecordingBackend::default());
    let mut sync = synchronizer(&["A", "B", "C"], backend.clone());

    let handle = sync.handle_drag_end(DragEnd::new(1, Some(3))).unwrap();
    // local state is already updated before the request completes
    assert_eq!(snapshot(&sync), expect(&[("B", 1), ("C", 2), ("A", 3)]));
    handle.await.unwrap();

    assert_eq!(
        backend.calls(),
        vec![Call::Reorder(
            LIST_ID,
            vec![
                ReorderItem { id: 2, order_index: 1 },
                ReorderItem { id: 3, order_index: 2 },
                ReorderItem { id: 1, order_index: 3 },
            ]
        )]
    );
}

#[tokio::test]
async fn test_failed_persistence_keeps_optimistic_order() {
    let backend = Arc::new(RecordingBackend::failing());
    let mut sync = synchronizer(&["A", "B", "C"], backend.clone());

    let handle = sync.handle_drag_end(DragEnd::new(3, Some(1))).unwrap();
    handle.await.unwrap();

    assert_eq!(backend.calls().len(), 1);
    assert_eq!(snapshot(&sync), expect(&[("C", 1), ("A", 2), ("B", 3)]));
    // nothing surfaced on any widget
    assert_eq!(sync.widget(WidgetKey::Add), &WidgetState::Idle);
}

#[tokio::test]
async fn test_rapid_reorders_each_send_the_latest_arrangement() {
    let backend = Arc::new(RecordingBackend::default());
    let mut sync = synchronizer(&["A", "B", "C"], backend.clone());

    // A onto C gives B, C, A; then C onto B gives C, B, A
    let first = sync.handle_drag_end(DragEnd::new(1, Some(3))).unwrap();
    let second = sync.handle_drag_end(DragEnd::new(3, Some(2))).unwrap();
    first.await.unwrap();
    second.await.unwrap();

    assert_eq!(snapshot(&sync), expect(&[("C", 1), ("B", 2), ("A", 3)]));

    let batches: Vec<Vec<ReorderItem>> = backend
        .calls()
        .into_iter()
        .map(|c| match c {
            Call::Reorder(_, items) => items,
            other => panic!("unexpected call {other:?}"),
        })
        .collect();
    assert_eq!(batches.len(), 2);
    for items in &batches {
        let ordinals: Vec<_> = items.iter().map(|i| i.order_index).collect();
        assert_eq!(ordinals, [1, 2, 3]);
    }
    // tasks may complete in any order
    let arrangements: Vec<Vec<i64>> = batches
        .iter()
        .map(|items| items.iter().map(|i| i.id).collect())
        .collect();
    assert!(arrangements.contains(&vec![2, 3, 1]));
    assert!(arrangements.contains(&vec![3, 2, 1]));
}

#[tokio::test]
async fn test_replace_items_overrides_local_state() {
    let backend = Arc::new(RecordingBackend::default());
    let mut sync = synchronizer(&["A", "B", "C"], backend);
    sync.apply_drag_end(DragEnd::new(1, Some(3))).unwrap();

    sync.replace_items(games(&["X", "Y"]));
    assert_eq!(snapshot(&sync), expect(&[("X", 1), ("Y", 2)]));
}

// ── Add / update / delete ───────────────────────────────────────────

#[tokio::test]
async fn test_add_game_appends_on_success() {
    let backend = Arc::new(RecordingBackend::default());
    let mut sync = synchronizer(&["A"], backend.clone());
    sync.open(WidgetKey::Add);
    assert_eq!(sync.widget(WidgetKey::Add), &WidgetState::Editing);

    let added = sync.add_game(&input("Wordle")).await.unwrap();
    assert_eq!(added.name, "Wordle");
    assert_eq!(sync.widget(WidgetKey::Add), &WidgetState::Succeeded);
    assert_eq!(sync.game_ids(), [1, 100]);
    assert_eq!(backend.calls(), vec![Call::Add("Wordle".into())]);
}

#[tokio::test]
async fn test_invalid_input_never_reaches_the_backend() {
    let backend = Arc::new(RecordingBackend::default());
    let mut sync = synchronizer(&["A"], backend.clone());
    sync.open(WidgetKey::Add);

    let err = sync
        .add_game(&GameInput {
            url: "not a url".into(),
            ..input("")
        })
        .await
        .unwrap_err();
    let WidgetError::Fields(fields) = &err else {
        panic!("expected field errors, got {err:?}");
    };
    assert_eq!(fields.first("name"), Some("Game name is required"));
    assert_eq!(fields.first("url"), Some("A valid URL is required"));
    assert_eq!(sync.widget(WidgetKey::Add), &WidgetState::Error(err.clone()));
    assert!(backend.calls().is_empty());
    assert_eq!(sync.game_ids(), [1]);
}

#[tokio::test]
async fn test_backend_failure_is_surfaced_on_the_widget() {
    let backend = Arc::new(RecordingBackend::failing());
    let mut sync = synchronizer(&["A", "B"], backend);
    sync.open(WidgetKey::Edit(2));

    let err = sync.update_game(2, &input("Renamed")).await.unwrap_err();
    assert_eq!(
        err,
        WidgetError::Submit("Game list not found or you don't have permission".into())
    );
    assert_eq!(sync.widget(WidgetKey::Edit(2)).error(), Some(&err));
    assert_eq!(sync.games()[1].name, "B");

    sync.close(WidgetKey::Edit(2));
    assert_eq!(sync.widget(WidgetKey::Edit(2)), &WidgetState::Idle);
}

#[tokio::test]
async fn test_update_replaces_in_place_and_delete_removes() {
    let backend = Arc::new(RecordingBackend::default());
    let mut sync = synchronizer(&["A", "B", "C"], backend.clone());

    sync.update_game(2, &input("Bee")).await.unwrap();
    assert_eq!(sync.games()[1].name, "Bee");
    assert_eq!(sync.game_ids(), [1, 2, 3]);
    sync.update_game(1, &input("Ay")).await.unwrap();

    sync.delete_game(1).await.unwrap();
    // the deleted game's widgets go with it
    assert_eq!(sync.widget(WidgetKey::Delete(1)), &WidgetState::Idle);
    assert_eq!(sync.widget(WidgetKey::Edit(1)), &WidgetState::Idle);
    assert_eq!(sync.active_widgets().collect::<Vec<_>>(), [WidgetKey::Edit(2)]);
    // remaining ordinals are not compacted
    assert_eq!(snapshot(&sync), expect(&[("Bee", 2), ("C", 3)]));

    assert_eq!(
        backend.calls(),
        vec![
            Call::Update(2, "Bee".into()),
            Call::Update(1, "Ay".into()),
            Call::Delete(1)
        ]
    );
}
