//! Tool response cache.

use std::sync::Arc;

use moka::sync::Cache;
use serde_json::Value;

use crate::core::config::CacheConfig;
use crate::domains::tools::ToolResult;

/// TTL cache of successful tool results keyed by tool name and arguments.
///
/// Keys use a canonical rendering of the arguments, so `{"a":1,"b":2}` and
/// `{"b":2,"a":1}` share an entry. Error envelopes are never stored.
pub struct ResponseCache {
    cache: Option<Cache<String, Arc<ToolResult>>>,
}

impl ResponseCache {
    pub fn new(config: &CacheConfig) -> Self {
        let cache = config.is_enabled().then(|| {
            Cache::builder()
                .time_to_live(config.ttl())
                .max_capacity(config.max_entries)
                .build()
        });
        Self { cache }
    }

    pub fn is_enabled(&self) -> bool {
        self.cache.is_some()
    }

    /// Cache key for a call.
    pub fn key_for(tool: &str, args: &Value) -> String {
        let mut key = String::with_capacity(tool.len() + 32);
        key.push_str(tool);
        key.push(':');
        write_canonical(args, &mut key);
        key
    }

    pub fn get(&self, tool: &str, args: &Value) -> Option<ToolResult> {
        let cache = self.cache.as_ref()?;
        cache
            .get(&Self::key_for(tool, args))
            .map(|hit| hit.as_ref().clone())
    }

    /// Store a result. Errors are skipped.
    pub fn insert(&self, tool: &str, args: &Value, result: &ToolResult) {
        if result.is_error() {
            return;
        }
        if let Some(cache) = &self.cache {
            cache.insert(Self::key_for(tool, args), Arc::new(result.clone()));
        }
    }

    pub fn entry_count(&self) -> u64 {
        self.cache.as_ref().map_or(0, |cache| {
            cache.run_pending_tasks();
            cache.entry_count()
        })
    }
}

/// JSON with object keys sorted at every level. `null` renders as `{}`.
fn write_canonical(value: &Value, out: &mut String) {
    match value {
        Value::Null => out.push_str("{}"),
        Value::Object(map) => {
            let mut keys: Vec<&String> = map.keys().collect();
            keys.sort();
            out.push('{');
            for (i, key) in keys.into_iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                out.push_str(&Value::String(key.clone()).to_string());
                out.push(':');
                match &map[key] {
                    Value::Null => out.push_str("null"),
                    nested => write_canonical(nested, out),
                }
            }
            out.push('}');
        }
        Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                match item {
                    Value::Null => out.push_str("null"),
                    nested => write_canonical(nested, out),
                }
            }
            out.push(']');
        }
        scalar => out.push_str(&scalar.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::ToolError;
    use serde_json::json;

    fn cache() -> ResponseCache {
        ResponseCache::new(&CacheConfig::default())
    }

    #[test]
    fn test_key_ignores_argument_order() {
        let a = ResponseCache::key_for("t", &json!({ "a": 1, "b": { "y": [1, null], "x": "s" } }));
        let b = ResponseCache::key_for("t", &json!({ "b": { "x": "s", "y": [1, null] }, "a": 1 }));
        assert_eq!(a, b);
        assert_ne!(a, ResponseCache::key_for("u", &json!({ "a": 1 })));
        assert_eq!(ResponseCache::key_for("t", &Value::Null), ResponseCache::key_for("t", &json!({})));
    }

    #[test]
    fn test_hit_after_insert() {
        let cache = cache();
        let args = json!({ "category": "color" });
        assert!(cache.get("get_design_tokens", &args).is_none());

        let result = ToolResult::success(json!({ "ok": true })).unwrap();
        cache.insert("get_design_tokens", &args, &result);
        assert_eq!(cache.get("get_design_tokens", &args), Some(result));
        assert_eq!(cache.entry_count(), 1);
    }

    #[test]
    fn test_errors_not_cached() {
        let cache = cache();
        let args = json!({});
        cache.insert("nope", &args, &ToolResult::error(&ToolError::unknown_tool("nope")));
        assert!(cache.get("nope", &args).is_none());
    }

    #[test]
    fn test_disabled_when_no_capacity() {
        let cache = ResponseCache::new(&CacheConfig {
            ttl_secs: 300,
            max_entries: 0,
        });
        assert!(!cache.is_enabled());
        let result = ToolResult::success(json!(1)).unwrap();
        cache.insert("t", &json!({}), &result);
        assert!(cache.get("t", &json!({})).is_none());
    }
}
