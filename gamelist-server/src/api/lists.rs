use axum::{Json, extract::Path};
use shared::models::{GameList, GameListDetail, GameListInput};

use super::{ApiResult, AppJson};
use crate::auth::RequestContext;
use crate::services::lists;

pub async fn list_mine(ctx: RequestContext) -> ApiResult<Vec<GameListDetail>> {
    Ok(Json(lists::list_mine(&ctx).await?))
}

pub async fn create_list(
    ctx: RequestContext,
    AppJson(input): AppJson<GameListInput>,
) -> ApiResult<GameList> {
    Ok(Json(lists::create(&ctx, &input).await?))
}

pub async fn get_list(
    ctx: RequestContext,
    Path(list_id): Path<i64>,
) -> ApiResult<GameListDetail> {
    Ok(Json(lists::get(&ctx, list_id).await?))
}

pub async fn update_list(
    ctx: RequestContext,
    Path(list_id): Path<i64>,
    AppJson(input): AppJson<GameListInput>,
) -> ApiResult<GameList> {
    Ok(Json(lists::update(&ctx, list_id, &input).await?))
}

pub async fn delete_list(
    ctx: RequestContext,
    Path(list_id): Path<i64>,
) -> ApiResult<serde_json::Value> {
    lists::delete(&ctx, list_id).await?;
    Ok(Json(serde_json::json!({ "deleted": list_id })))
}
