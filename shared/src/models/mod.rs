//! Data models
//!
//! Shared between gamelist-server and gamelist-client (via API).
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! List and game IDs are `i64` (BIGSERIAL), user IDs are UUIDs.
//! Timestamps are Unix milliseconds.

pub mod game;
pub mod game_list;
pub mod reorder;
pub mod user;

// Re-exports
pub use game::*;
pub use game_list::*;
pub use reorder::*;
pub use user::*;
