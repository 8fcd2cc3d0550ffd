//! Business operations
//!
//! Authenticated operations take `&RequestContext`; sign-up and sign-in take
//! the store directly.

pub mod games;
pub mod lists;
pub mod reorder;
pub mod users;
