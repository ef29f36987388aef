//! Warm context shared by every serverless invocation.
//!
//! The server (registry, services and router) is built on the first request
//! and reused by every request after it. The rate limiter, response cache and
//! user store live for as long as the context does.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use tokio::sync::OnceCell;
use tracing::info;

use super::auth::{InMemoryUserStore, UserStore};
use super::config::Config;
use super::error::{Error, Result};
use super::guard::{RateLimiter, ResponseCache};
use super::server::McpServer;

pub struct WarmContext {
    config: Config,
    server: OnceCell<Arc<McpServer>>,
    limiter: RateLimiter,
    cache: ResponseCache,
    users: Arc<dyn UserStore>,
    cors_headers: bool,
    initializations: AtomicUsize,
}

impl WarmContext {
    /// Context with an in-memory user store seeded from `config.auth`.
    pub fn new(config: Config) -> Self {
        let users = Arc::new(InMemoryUserStore::from_config(&config.auth));
        Self::with_user_store(config, users)
    }

    pub fn with_user_store(config: Config, users: Arc<dyn UserStore>) -> Self {
        Self {
            limiter: RateLimiter::new(config.rate_limit.clone()),
            cache: ResponseCache::new(&config.cache),
            server: OnceCell::new(),
            users,
            cors_headers: true,
            initializations: AtomicUsize::new(0),
            config,
        }
    }

    /// Turn off the CORS headers the event handler adds itself, for hosts
    /// that apply their own CORS layer.
    pub fn without_cors_headers(mut self) -> Self {
        self.cors_headers = false;
        self
    }

    /// The server, built on first use.
    pub async fn server(&self) -> Result<Arc<McpServer>> {
        self.server
            .get_or_try_init(|| async {
                self.initializations.fetch_add(1, Ordering::SeqCst);
                let server = McpServer::new(self.config.clone())?;
                info!(tools = server.registry().len(), "Warm context initialized");
                Ok::<_, Error>(Arc::new(server))
            })
            .await
            .cloned()
    }

    /// How many times the server has been built.
    pub fn initializations(&self) -> usize {
        self.initializations.load(Ordering::SeqCst)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn limiter(&self) -> &RateLimiter {
        &self.limiter
    }

    pub fn cache(&self) -> &ResponseCache {
        &self.cache
    }

    pub fn users(&self) -> &dyn UserStore {
        self.users.as_ref()
    }

    pub fn cors_headers(&self) -> bool {
        self.cors_headers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_server_built_once() {
        let context = WarmContext::new(Config::default());
        assert_eq!(context.initializations(), 0);

        let first = context.server().await.unwrap();
        let second = context.server().await.unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(context.initializations(), 1);
    }
}
