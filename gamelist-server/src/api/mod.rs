//! HTTP routes

pub mod auth;
pub mod games;
pub mod health;
mod json;
pub mod lists;
pub mod profile;

pub use json::AppJson;

use axum::routing::{get, post, put};
use axum::{Router, middleware};
use shared::error::AppError;
use tower_http::trace::TraceLayer;

use crate::auth::rate_limit::{signin_rate_limit, signup_rate_limit};
use crate::state::AppState;

pub type ApiResult<T> = Result<axum::Json<T>, AppError>;

/// Create the combined router
pub fn create_router(state: AppState) -> Router {
    // Public account routes (rate limited)
    let accounts = Router::new()
        .route(
            "/api/auth/signup",
            post(auth::sign_up).layer(middleware::from_fn_with_state(
                state.clone(),
                signup_rate_limit,
            )),
        )
        .route(
            "/api/auth/signin",
            post(auth::sign_in).layer(middleware::from_fn_with_state(
                state.clone(),
                signin_rate_limit,
            )),
        );

    // Bearer-authenticated routes (RequestContext extractor)
    let protected = Router::new()
        .route(
            "/api/profile",
            get(profile::get_profile).put(profile::update_profile),
        )
        .route("/api/users/count", get(profile::user_count))
        .route("/api/lists", get(lists::list_mine).post(lists::create_list))
        .route(
            "/api/lists/{list_id}",
            get(lists::get_list)
                .put(lists::update_list)
                .delete(lists::delete_list),
        )
        .route("/api/lists/{list_id}/games", post(games::add_game))
        .route(
            "/api/lists/{list_id}/games/{game_id}",
            put(games::update_game).delete(games::delete_game),
        )
        .route("/api/lists/{list_id}/reorder", post(games::reorder_games));

    Router::new()
        .route("/health", get(health::health_check))
        .merge(accounts)
        .merge(protected)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
