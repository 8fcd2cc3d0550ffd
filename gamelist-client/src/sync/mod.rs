//! Client-side state for one game list
//!
//! The synchronizer owns the rendered sequence of games. Reorders are applied
//! locally first and persisted in the background; add/edit/delete go through a
//! widget state machine and only touch local state once the server agrees.

pub mod order;
pub mod synchronizer;
pub mod widget;

pub use order::{DragEnd, move_item, renumber};
pub use synchronizer::ReorderSynchronizer;
pub use widget::{WidgetError, WidgetEvent, WidgetKey, WidgetState};
