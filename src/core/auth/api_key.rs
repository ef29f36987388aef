//! API key extraction from request headers.

use crate::core::serverless::HttpEvent;

/// Pull the API key out of an event.
///
/// `Authorization: Bearer <key>` wins over `x-api-key`. Header names are
/// matched case-insensitively and blank values count as absent.
pub fn extract_api_key(event: &HttpEvent) -> Option<String> {
    let bearer = event.header("authorization").and_then(|value| {
        let (scheme, token) = value.trim().split_once(' ')?;
        scheme.eq_ignore_ascii_case("bearer").then(|| token.trim())
    });

    bearer
        .or_else(|| event.header("x-api-key").map(str::trim))
        .filter(|key| !key.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event() -> HttpEvent {
        HttpEvent::new("POST", "/mcp")
    }

    #[test]
    fn test_bearer_token() {
        let event = event().with_header("Authorization", "Bearer abc123");
        assert_eq!(extract_api_key(&event).as_deref(), Some("abc123"));
    }

    #[test]
    fn test_x_api_key_any_case() {
        let event = event().with_header("X-API-KEY", "k1");
        assert_eq!(extract_api_key(&event).as_deref(), Some("k1"));
    }

    #[test]
    fn test_bearer_wins_over_x_api_key() {
        let event = event()
            .with_header("authorization", "bearer from-bearer")
            .with_header("x-api-key", "from-header");
        assert_eq!(extract_api_key(&event).as_deref(), Some("from-bearer"));
    }

    #[test]
    fn test_blank_and_non_bearer_values() {
        assert_eq!(extract_api_key(&event().with_header("x-api-key", "   ")), None);
        assert_eq!(
            extract_api_key(&event().with_header("Authorization", "Basic dXNlcg==")),
            None
        );
        assert_eq!(extract_api_key(&event()), None);
    }

    #[test]
    fn test_non_bearer_authorization_falls_back() {
        let event = event()
            .with_header("Authorization", "Basic dXNlcg==")
            .with_header("x-api-key", "k2");
        assert_eq!(extract_api_key(&event).as_deref(), Some("k2"));
    }
}
