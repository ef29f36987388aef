//! Request guards for the HTTP entry point: rate limiting and response caching.

mod cache;
mod rate_limit;

pub use cache::ResponseCache;
pub use rate_limit::{RateLimitResult, RateLimiter, client_identity};
