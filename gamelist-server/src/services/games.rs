//! Game operations within a list

use shared::error::AppError;
use shared::models::{Game, GameInput};
use shared::util::now_millis;

use super::lists::owned_list;
use crate::auth::RequestContext;
use crate::error::ServiceResult;

/// Load a game of `list_id`, where the list is owned by the caller
async fn owned_game(ctx: &RequestContext, list_id: i64, game_id: i64) -> ServiceResult<Game> {
    let game = ctx
        .store
        .find_game(game_id)
        .await?
        .filter(|g| g.list_id == list_id)
        .ok_or_else(AppError::game_not_found)?;
    match ctx.store.find_list(list_id).await? {
        Some(list) if list.user_id == ctx.user_id() => Ok(game),
        _ => Err(AppError::game_not_found().into()),
    }
}

/// Appends the game: its ordinal is one past the list's current maximum
pub async fn add(ctx: &RequestContext, list_id: i64, input: &GameInput) -> ServiceResult<Game> {
    let draft = input.validate().into_result()?;
    owned_list(ctx, list_id).await?;
    let game = ctx.store.create_game(list_id, &draft, now_millis()).await?;
    tracing::info!(list_id, game_id = game.id, order_index = ?game.order_index, "Game added");
    Ok(game)
}

/// Rewrites the game's fields; its ordinal is left alone
pub async fn update(
    ctx: &RequestContext,
    list_id: i64,
    game_id: i64,
    input: &GameInput,
) -> ServiceResult<Game> {
    let draft = input.validate().into_result()?;
    owned_game(ctx, list_id, game_id).await?;
    ctx.store
        .update_game(game_id, &draft, now_millis())
        .await?
        .ok_or_else(|| AppError::game_not_found().into())
}

/// Remaining ordinals are not compacted
pub async fn delete(ctx: &RequestContext, list_id: i64, game_id: i64) -> ServiceResult<()> {
    owned_game(ctx, list_id, game_id).await?;
    if !ctx.store.delete_game(game_id).await? {
        return Err(AppError::game_not_found().into());
    }
    tracing::info!(list_id, game_id, "Game deleted");
    Ok(())
}
