//! Per-client token-bucket rate limiting.

use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use moka::sync::Cache;

use crate::core::config::RateLimitConfig;

/// Token bucket for one client.
#[derive(Debug)]
struct TokenBucket {
    state: Mutex<BucketState>,
    capacity: f64,
    /// Tokens per second.
    refill_rate: f64,
}

#[derive(Debug)]
struct BucketState {
    tokens: f64,
    last_refill: Instant,
}

impl TokenBucket {
    fn new(capacity: u32, window: Duration) -> Self {
        let capacity = f64::from(capacity.max(1));
        Self {
            state: Mutex::new(BucketState {
                tokens: capacity,
                last_refill: Instant::now(),
            }),
            capacity,
            refill_rate: capacity / window.as_secs_f64(),
        }
    }

    /// Refill, then take one token if available.
    fn try_consume(&self) -> RateLimitResult {
        // A poisoned bucket only means another request panicked mid-update.
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());

        let now = Instant::now();
        let elapsed = now.duration_since(state.last_refill).as_secs_f64();
        state.tokens = (state.tokens + elapsed * self.refill_rate).min(self.capacity);
        state.last_refill = now;

        if state.tokens >= 1.0 {
            state.tokens -= 1.0;
            RateLimitResult::Allowed {
                remaining: state.tokens.floor() as u32,
            }
        } else {
            let needed = 1.0 - state.tokens;
            RateLimitResult::RateLimited {
                retry_after: Duration::from_secs_f64(needed / self.refill_rate),
            }
        }
    }
}

/// Result of a rate limit check.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RateLimitResult {
    Allowed { remaining: u32 },
    RateLimited { retry_after: Duration },
}

impl RateLimitResult {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allowed { .. })
    }

    /// Whole seconds to send in `Retry-After`, at least one.
    pub fn retry_after_secs(&self) -> u64 {
        match self {
            Self::Allowed { .. } => 0,
            Self::RateLimited { retry_after } => retry_after.as_secs_f64().ceil().max(1.0) as u64,
        }
    }
}

/// Token-bucket limiter keyed by client identity.
///
/// Buckets live in a bounded moka cache and are evicted after ten idle
/// windows.
pub struct RateLimiter {
    config: RateLimitConfig,
    buckets: Cache<String, Arc<TokenBucket>>,
}

impl RateLimiter {
    pub fn new(config: RateLimitConfig) -> Self {
        let buckets = Cache::builder()
            .max_capacity(config.max_clients)
            .time_to_idle(config.window() * 10)
            .build();
        Self { config, buckets }
    }

    /// Consume one request for `identity`.
    pub fn check(&self, identity: &str) -> RateLimitResult {
        if !self.config.enabled {
            return RateLimitResult::Allowed {
                remaining: self.config.max_requests,
            };
        }

        let bucket = self.buckets.get_with(identity.to_string(), || {
            Arc::new(TokenBucket::new(self.config.max_requests, self.config.window()))
        });
        bucket.try_consume()
    }

    /// Number of tracked clients.
    pub fn client_count(&self) -> u64 {
        self.buckets.run_pending_tasks();
        self.buckets.entry_count()
    }
}

/// Identity a request is limited under: the API key, else the source IP,
/// else `"anonymous"`.
pub fn client_identity(api_key: Option<&str>, source_ip: Option<&str>) -> String {
    api_key
        .map(|key| format!("key:{key}"))
        .or_else(|| source_ip.filter(|ip| !ip.is_empty()).map(|ip| format!("ip:{ip}")))
        .unwrap_or_else(|| "anonymous".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(max_requests: u32, enabled: bool) -> RateLimitConfig {
        RateLimitConfig {
            enabled,
            max_requests,
            window_secs: 60,
            max_clients: 100,
        }
    }

    #[test]
    fn test_limit_reached() {
        let limiter = RateLimiter::new(config(3, true));
        for expected in [2, 1, 0] {
            assert_eq!(limiter.check("a"), RateLimitResult::Allowed { remaining: expected });
        }
        let limited = limiter.check("a");
        assert!(!limited.is_allowed());
        assert!(limited.retry_after_secs() >= 1);
        assert!(limited.retry_after_secs() <= 20);
    }

    #[test]
    fn test_clients_are_independent() {
        let limiter = RateLimiter::new(config(1, true));
        assert!(limiter.check("a").is_allowed());
        assert!(!limiter.check("a").is_allowed());
        assert!(limiter.check("b").is_allowed());
        assert_eq!(limiter.client_count(), 2);
    }

    #[test]
    fn test_refill() {
        let bucket = TokenBucket::new(10, Duration::from_secs(1));
        for _ in 0..10 {
            assert!(bucket.try_consume().is_allowed());
        }
        assert!(!bucket.try_consume().is_allowed());
        std::thread::sleep(Duration::from_millis(150));
        assert!(bucket.try_consume().is_allowed());
    }

    #[test]
    fn test_disabled() {
        let limiter = RateLimiter::new(config(1, false));
        for _ in 0..50 {
            assert!(limiter.check("a").is_allowed());
        }
    }

    #[test]
    fn test_client_identity() {
        assert_eq!(client_identity(Some("k"), Some("1.2.3.4")), "key:k");
        assert_eq!(client_identity(None, Some("1.2.3.4")), "ip:1.2.3.4");
        assert_eq!(client_identity(None, Some("")), "anonymous");
        assert_eq!(client_identity(None, None), "anonymous");
    }
}
