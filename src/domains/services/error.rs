//! Domain service error types.

use thiserror::Error;

/// Errors a domain service can raise.
///
/// Soft failures (an unknown token category, a degraded framework mode) are
/// successful payloads, not errors.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// A lookup key did not match anything in the knowledge store.
    #[error("{kind} '{name}' not found. Available: {available}")]
    NotFound {
        kind: &'static str,
        name: String,
        available: String,
    },

    /// The request was well-typed but not usable.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl ServiceError {
    /// Create a "not found" error listing the valid keys.
    pub fn not_found<I, S>(kind: &'static str, name: impl Into<String>, available: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let available = available
            .into_iter()
            .map(|s| s.as_ref().to_string())
            .collect::<Vec<_>>()
            .join(", ");
        Self::NotFound {
            kind,
            name: name.into(),
            available,
        }
    }

    /// Create an "invalid input" error.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = ServiceError::not_found("Component", "carousel", ["button", "card"]);
        assert_eq!(
            err.to_string(),
            "Component 'carousel' not found. Available: button, card"
        );
    }
}
