//! API key to user lookup.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::config::AuthConfig;

/// Account state of a key holder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    Active,
    Blocked,
    Suspended,
}

/// The owner of an API key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub status: UserStatus,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn new(id: impl Into<String>, name: impl Into<String>, status: UserStatus) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            status,
            created_at: Utc::now(),
        }
    }
}

/// The backing store could not answer.
#[derive(Debug, Error)]
pub enum UserStoreError {
    #[error("User store unavailable: {0}")]
    Unavailable(String),
}

/// Looks up the user owning an API key.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// `Ok(None)` means the key is unknown.
    async fn find_by_api_key(&self, api_key: &str) -> Result<Option<User>, UserStoreError>;
}

/// Fixed key table held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserStore {
    users: HashMap<String, User>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed with the configured key, if any.
    pub fn from_config(auth: &AuthConfig) -> Self {
        let store = Self::new();
        match &auth.api_key {
            Some(key) => store.with_user(key.clone(), User::new("default", "Default user", UserStatus::Active)),
            None => store,
        }
    }

    pub fn with_user(mut self, api_key: impl Into<String>, user: User) -> Self {
        self.users.insert(api_key.into(), user);
        self
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn find_by_api_key(&self, api_key: &str) -> Result<Option<User>, UserStoreError> {
        Ok(self.users.get(api_key).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_seeded_from_config() {
        let store = InMemoryUserStore::from_config(&AuthConfig {
            api_key: Some("secret".to_string()),
            required: false,
        });
        let user = store.find_by_api_key("secret").await.unwrap().unwrap();
        assert_eq!(user.status, UserStatus::Active);
        assert!(store.find_by_api_key("other").await.unwrap().is_none());
    }

    #[test]
    fn test_empty_without_key() {
        let store = InMemoryUserStore::from_config(&AuthConfig::default());
        assert!(store.is_empty());
        let found = tokio_test::block_on(store.find_by_api_key("")).unwrap();
        assert!(found.is_none());
    }
}
