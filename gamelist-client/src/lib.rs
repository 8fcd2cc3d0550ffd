//! gamelist-client: HTTP client and reorder synchronizer for gamelist-server
//!
//! - [`HttpClient`]: typed calls for accounts, lists, games and reorder
//! - [`ListActions`]: the backend seam the synchronizer talks to
//! - [`sync::ReorderSynchronizer`]: optimistic drag-to-reorder plus the
//!   add/edit/delete widget flows for one list

pub mod actions;
pub mod config;
pub mod error;
pub mod http;
pub mod sync;

pub use actions::ListActions;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;
pub use sync::{DragEnd, ReorderSynchronizer, WidgetError, WidgetEvent, WidgetKey, WidgetState};
