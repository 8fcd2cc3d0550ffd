use axum::{Json, extract::Path};
use shared::models::{Game, GameInput, ReorderRequest, ReorderResult};

use super::{ApiResult, AppJson};
use crate::auth::RequestContext;
use crate::services::{games, reorder};

pub async fn add_game(
    ctx: RequestContext,
    Path(list_id): Path<i64>,
    AppJson(input): AppJson<GameInput>,
) -> ApiResult<Game> {
    Ok(Json(games::add(&ctx, list_id, &input).await?))
}

pub async fn update_game(
    ctx: RequestContext,
    Path((list_id, game_id)): Path<(i64, i64)>,
    AppJson(input): AppJson<GameInput>,
) -> ApiResult<Game> {
    Ok(Json(games::update(&ctx, list_id, game_id, &input).await?))
}

pub async fn delete_game(
    ctx: RequestContext,
    Path((list_id, game_id)): Path<(i64, i64)>,
) -> ApiResult<serde_json::Value> {
    games::delete(&ctx, list_id, game_id).await?;
    Ok(Json(serde_json::json!({ "deleted": game_id })))
}

/// POST /api/lists/{list_id}/reorder
pub async fn reorder_games(
    ctx: RequestContext,
    Path(list_id): Path<i64>,
    AppJson(req): AppJson<ReorderRequest>,
) -> ApiResult<ReorderResult> {
    Ok(Json(reorder::reorder(&ctx, list_id, &req.items).await?))
}
