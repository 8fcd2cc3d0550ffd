//! Game list operations
//!
//! Every operation is scoped to lists owned by the caller. A list that does
//! not exist and a list owned by someone else both report `ListNotFound`.

use shared::error::AppError;
use shared::models::{GameList, GameListDetail, GameListInput};
use shared::util::now_millis;

use crate::auth::RequestContext;
use crate::error::ServiceResult;

/// Load a list the caller owns
pub async fn owned_list(ctx: &RequestContext, list_id: i64) -> ServiceResult<GameList> {
    match ctx.store.find_list(list_id).await? {
        Some(list) if list.user_id == ctx.user_id() => Ok(list),
        Some(_) => {
            tracing::warn!(list_id, user_id = %ctx.user_id(), "Access to list owned by another user");
            Err(AppError::list_not_found().into())
        }
        None => Err(AppError::list_not_found().into()),
    }
}

async fn with_games(ctx: &RequestContext, list: GameList) -> ServiceResult<GameListDetail> {
    let games = ctx.store.games_in_list(list.id).await?;
    Ok(GameListDetail { list, games })
}

/// The caller's lists, each with its games in display order
pub async fn list_mine(ctx: &RequestContext) -> ServiceResult<Vec<GameListDetail>> {
    let lists = ctx.store.lists_by_owner(ctx.user_id()).await?;
    let mut details = Vec::with_capacity(lists.len());
    for list in lists {
        details.push(with_games(ctx, list).await?);
    }
    Ok(details)
}

pub async fn get(ctx: &RequestContext, list_id: i64) -> ServiceResult<GameListDetail> {
    let list = owned_list(ctx, list_id).await?;
    with_games(ctx, list).await
}

pub async fn create(ctx: &RequestContext, input: &GameListInput) -> ServiceResult<GameList> {
    let draft = input.validate().into_result()?;
    let list = ctx
        .store
        .create_list(ctx.user_id(), &draft, now_millis())
        .await?;
    tracing::info!(list_id = list.id, user_id = %ctx.user_id(), "Game list created");
    Ok(list)
}

pub async fn update(
    ctx: &RequestContext,
    list_id: i64,
    input: &GameListInput,
) -> ServiceResult<GameList> {
    let draft = input.validate().into_result()?;
    owned_list(ctx, list_id).await?;
    ctx.store
        .update_list(list_id, &draft, now_millis())
        .await?
        .ok_or_else(|| AppError::list_not_found().into())
}

/// Deletes the list together with its games
pub async fn delete(ctx: &RequestContext, list_id: i64) -> ServiceResult<()> {
    owned_list(ctx, list_id).await?;
    if !ctx.store.delete_list(list_id).await? {
        return Err(AppError::list_not_found().into());
    }
    tracing::info!(list_id, "Game list deleted");
    Ok(())
}
