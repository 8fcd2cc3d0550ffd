//! Shared types for the game-lists workspace
//!
//! Domain models, the unified error system, input validation and tag
//! handling used by both `gamelist-server` and `gamelist-client`.

pub mod error;
pub mod models;
pub mod tags;
pub mod util;
pub mod validation;

// Re-exports
pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
pub use models::{Game, GameInput, GameList, GameListInput, ReorderItem, User};
pub use validation::{FieldErrors, Validated};
