//! API key authentication for the HTTP entry point.
//!
//! The key comes from `Authorization: Bearer` or `x-api-key`, and the
//! owning user is looked up in a [`UserStore`]. Blocked and suspended
//! users are refused with their own messages.

mod api_key;
mod user_store;

pub use api_key::extract_api_key;
pub use user_store::{InMemoryUserStore, User, UserStatus, UserStore, UserStoreError};

use thiserror::Error;
use tracing::{debug, warn};

use super::serverless::HttpEvent;

/// Why a request was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AuthFailure {
    #[error("API key required. Send it as 'Authorization: Bearer <key>' or in the 'x-api-key' header.")]
    MissingKey,

    #[error("Invalid API key.")]
    InvalidKey,

    #[error("This API key has been blocked. Contact the server administrator.")]
    Blocked,

    #[error("This account is suspended. Contact the server administrator to restore access.")]
    Suspended,

    #[error("Authentication service temporarily unavailable. Please retry shortly.")]
    Unavailable,
}

/// Outcome of [`authenticate`].
#[derive(Debug, Clone)]
pub struct AuthResult {
    pub authenticated: bool,
    pub user: Option<User>,
    pub api_key: Option<String>,
    pub error: Option<AuthFailure>,
}

impl AuthResult {
    fn granted(user: User, api_key: String) -> Self {
        Self {
            authenticated: true,
            user: Some(user),
            api_key: Some(api_key),
            error: None,
        }
    }

    fn refused(error: AuthFailure, api_key: Option<String>) -> Self {
        Self {
            authenticated: false,
            user: None,
            api_key,
            error: Some(error),
        }
    }
}

/// Authenticate an event against a user store.
pub async fn authenticate(event: &HttpEvent, store: &dyn UserStore) -> AuthResult {
    let Some(api_key) = extract_api_key(event) else {
        debug!("Request without API key");
        return AuthResult::refused(AuthFailure::MissingKey, None);
    };

    let user = match store.find_by_api_key(&api_key).await {
        Ok(Some(user)) => user,
        Ok(None) => {
            warn!("Rejected unknown API key");
            return AuthResult::refused(AuthFailure::InvalidKey, Some(api_key));
        }
        Err(e) => {
            warn!(error = %e, "User store lookup failed");
            return AuthResult::refused(AuthFailure::Unavailable, Some(api_key));
        }
    };

    match user.status {
        UserStatus::Active => AuthResult::granted(user, api_key),
        UserStatus::Blocked => {
            warn!(user = %user.id, "Rejected blocked user");
            AuthResult::refused(AuthFailure::Blocked, Some(api_key))
        }
        UserStatus::Suspended => {
            warn!(user = %user.id, "Rejected suspended user");
            AuthResult::refused(AuthFailure::Suspended, Some(api_key))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    fn store() -> InMemoryUserStore {
        InMemoryUserStore::new()
            .with_user("good", User::new("u1", "Active", UserStatus::Active))
            .with_user("blocked", User::new("u2", "Blocked", UserStatus::Blocked))
            .with_user("paused", User::new("u3", "Suspended", UserStatus::Suspended))
    }

    fn with_key(key: &str) -> HttpEvent {
        HttpEvent::new("POST", "/mcp").with_header("x-api-key", key)
    }

    struct BrokenStore;

    #[async_trait]
    impl UserStore for BrokenStore {
        async fn find_by_api_key(&self, _: &str) -> Result<Option<User>, UserStoreError> {
            Err(UserStoreError::Unavailable("connection refused".to_string()))
        }
    }

    #[tokio::test]
    async fn test_active_user() {
        let result = authenticate(&with_key("good"), &store()).await;
        assert!(result.authenticated);
        assert_eq!(result.user.unwrap().id, "u1");
        assert_eq!(result.api_key.as_deref(), Some("good"));
        assert!(result.error.is_none());
    }

    #[tokio::test]
    async fn test_failures_are_distinct() {
        let missing = authenticate(&HttpEvent::new("POST", "/mcp"), &store()).await;
        let invalid = authenticate(&with_key("nope"), &store()).await;
        let blocked = authenticate(&with_key("blocked"), &store()).await;
        let suspended = authenticate(&with_key("paused"), &store()).await;
        let unavailable = authenticate(&with_key("good"), &BrokenStore).await;

        assert_eq!(missing.error, Some(AuthFailure::MissingKey));
        assert_eq!(invalid.error, Some(AuthFailure::InvalidKey));
        assert_eq!(blocked.error, Some(AuthFailure::Blocked));
        assert_eq!(suspended.error, Some(AuthFailure::Suspended));
        assert_eq!(unavailable.error, Some(AuthFailure::Unavailable));

        let messages: std::collections::HashSet<String> = [missing, invalid, blocked, suspended, unavailable]
            .iter()
            .map(|r| {
                assert!(!r.authenticated);
                r.error.unwrap().to_string()
            })
            .collect();
        assert_eq!(messages.len(), 5);
    }
}
