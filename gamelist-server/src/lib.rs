//! gamelist-server: HTTP API for game lists
//!
//! - Accounts: sign-up, sign-in (JWT), profile
//! - Game lists and their games, with explicit ordinals
//! - Batch reorder of a list's games
//!
//! Storage sits behind the [`db::Store`] trait: [`db::PgStore`] in production,
//! [`db::MemoryStore`] for tests.

pub mod api;
pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod services;
pub mod state;
pub mod util;

pub use config::Config;
pub use state::AppState;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;
