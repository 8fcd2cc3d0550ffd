//! Authentication: JWT issuance/verification, the request context extractor,
//! and rate limiting for the account routes

pub mod context;
pub mod jwt;
pub mod rate_limit;

pub use context::{RequestContext, UserIdentity};
pub use jwt::{Claims, JwtError, create_token, verify_token};
pub use rate_limit::RateLimiter;
