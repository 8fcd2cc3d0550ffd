//! Batch ordinal write for the games of one list
//!
//! Pairs are written one statement at a time, in request order, with no
//! enclosing transaction. A later batch for the same list simply overwrites
//! the ordinals of an earlier one.

use shared::error::{AppError, ErrorCode};
use shared::models::{ReorderItem, ReorderResult};
use shared::util::now_millis;

use super::lists::owned_list;
use crate::auth::RequestContext;
use crate::error::ServiceResult;

/// Apply `items` to the games of `list_id`.
///
/// - the caller must own the list, otherwise nothing is written
/// - a pair naming a game outside the list is skipped
/// - the first store failure stops the batch; pairs before it stay written
pub async fn reorder(
    ctx: &RequestContext,
    list_id: i64,
    items: &[ReorderItem],
) -> ServiceResult<ReorderResult> {
    owned_list(ctx, list_id).await?;

    let now = now_millis();
    let mut result = ReorderResult::default();
    for item in items {
        match ctx
            .store
            .set_game_order(list_id, item.id, item.order_index, now)
            .await
        {
            Ok(true) => result.written += 1,
            Ok(false) => {
                tracing::warn!(list_id, game_id = item.id, "Reorder skipped game outside list");
                result.skipped += 1;
            }
            Err(e) => {
                tracing::error!(
                    error = %e,
                    list_id,
                    game_id = item.id,
                    written = result.written,
                    "Reorder write failed"
                );
                return Err(AppError::new(ErrorCode::ReorderFailed)
                    .with_detail("written", result.written)
                    .with_detail("failed_id", item.id)
                    .into());
            }
        }
    }

    tracing::debug!(list_id, written = result.written, skipped = result.skipped, "Reorder applied");
    Ok(result)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use shared::models::Game;

    use super::*;
    use crate::db::MemoryStore;
    use crate::services::testing::{context, game_input, list_input};
    use crate::services::{games, lists};

    async fn seeded(store: &Arc<MemoryStore>) -> (RequestContext, i64, Vec<Game>) {
        let ctx = context(store);
        let list = lists::create(&ctx, &list_input("Daily")).await.unwrap();
        let mut added = Vec::new();
        for name in ["A", "B", "C"] {
            added.push(games::add(&ctx, list.id, &game_input(name)).await.unwrap());
        }
        (ctx, list.id, added)
    }

    async fn order_of(ctx: &RequestContext, list_id: i64) -> Vec<(String, Option<i32>)> {
        ctx.store
            .games_in_list(list_id)
            .await
            .unwrap()
            .into_iter()
            .map(|g| (g.name, g.order_index))
            .collect()
    }

    fn item(id: i64, order_index: i32) -> ReorderItem {
        ReorderItem { id, order_index }
    }

    #[tokio::test]
    async fn test_reorder_rewrites_every_pair() {
        let store = Arc::new(MemoryStore::new());
        let (ctx, list_id, g) = seeded(&store).await;

        // A dropped onto C
        let items = [item(g[1].id, 1), item(g[2].id, 2), item(g[0].id, 3)];
        let result = reorder(&ctx, list_id, &items).await.unwrap();
        assert_eq!(result, ReorderResult { written: 3, skipped: 0 });
        assert_eq!(
            order_of(&ctx, list_id).await,
            [
                ("B".to_string(), Some(1)),
                ("C".to_string(), Some(2)),
                ("A".to_string(), Some(3))
            ]
        );
    }

    #[tokio::test]
    async fn test_non_owner_writes_nothing() {
        let store = Arc::new(MemoryStore::new());
        let (ctx, list_id, g) = seeded(&store).await;
        let stranger = context(&store);

        let err = reorder(&stranger, list_id, &[item(g[0].id, 3), item(g[2].id, 1)])
            .await
            .unwrap_err();
        let err = AppError::from(err);
        assert_eq!(err.code, ErrorCode::ListNotFound);
        assert_eq!(err.message, "Game list not found or you don't have permission");
        assert_eq!(
            order_of(&ctx, list_id).await,
            [
                ("A".to_string(), Some(1)),
                ("B".to_string(), Some(2)),
                ("C".to_string(), Some(3))
            ]
        );
    }

    #[tokio::test]
    async fn test_failure_mid_batch_keeps_earlier_writes() {
        let store = Arc::new(MemoryStore::new());
        let (ctx, list_id, g) = seeded(&store).await;
        store.fail_order_writes_for(g[1].id).await;

        let items = [item(g[2].id, 1), item(g[1].id, 2), item(g[0].id, 3)];
        let err = AppError::from(reorder(&ctx, list_id, &items).await.unwrap_err());
        assert_eq!(err.code, ErrorCode::ReorderFailed);
        let details = err.details.unwrap();
        assert_eq!(details["written"], 1);
        assert_eq!(details["failed_id"], g[1].id);

        // C written, B failed, A never attempted
        let games = ctx.store.games_in_list(list_id).await.unwrap();
        let by_name = |n: &str| games.iter().find(|x| x.name == n).unwrap().order_index;
        assert_eq!(by_name("C"), Some(1));
        assert_eq!(by_name("B"), Some(2));
        assert_eq!(by_name("A"), Some(1));
    }

    #[tokio::test]
    async fn test_games_outside_list_are_skipped() {
        let store = Arc::new(MemoryStore::new());
        let (ctx, list_id, g) = seeded(&store).await;
        let other = lists::create(&ctx, &list_input("Other")).await.unwrap();
        let foreign = games::add(&ctx, other.id, &game_input("Foreign"))
            .await
            .unwrap();

        let items = [item(foreign.id, 9), item(g[0].id, 5), item(777, 1)];
        let result = reorder(&ctx, list_id, &items).await.unwrap();
        assert_eq!(result, ReorderResult { written: 1, skipped: 2 });
        assert_eq!(
            ctx.store.find_game(foreign.id).await.unwrap().unwrap().order_index,
            Some(1)
        );
    }

    #[tokio::test]
    async fn test_empty_batch_is_noop() {
        let store = Arc::new(MemoryStore::new());
        let (ctx, list_id, _) = seeded(&store).await;
        assert_eq!(
            reorder(&ctx, list_id, &[]).await.unwrap(),
            ReorderResult::default()
        );
    }

    #[tokio::test]
    async fn test_last_batch_wins() {
        let store = Arc::new(MemoryStore::new());
        let (ctx, list_id, g) = seeded(&store).await;

        let first = [item(g[2].id, 1), item(g[0].id, 2), item(g[1].id, 3)];
        let second = [item(g[1].id, 1), item(g[2].id, 2), item(g[0].id, 3)];
        reorder(&ctx, list_id, &second).await.unwrap();
        reorder(&ctx, list_id, &first).await.unwrap();

        let names: Vec<_> = order_of(&ctx, list_id)
            .await
            .into_iter()
            .map(|(n, _)| n)
            .collect();
        assert_eq!(names, ["C", "A", "B"]);
    }
}
