//! Serverless HTTP entry point.
//!
//! [`handle_event`] turns one [`HttpEvent`] into one [`HttpResponse`]. It
//! runs unchanged on a function host and behind the axum transport:
//!
//! - `OPTIONS` answers the CORS preflight with 204
//! - `GET /health` and `GET /` are public
//! - every `POST` is authenticated, rate limited and parsed as JSON-RPC 2.0

mod event;
mod jsonrpc;

pub use event::{HttpEvent, HttpResponse};
pub use jsonrpc::{JsonRpcError, JsonRpcRequest, JsonRpcResponse};

use serde_json::{Value, json};
use tracing::{debug, error, info, instrument, warn};

use super::auth::authenticate;
use super::context::WarmContext;
use super::guard::{RateLimitResult, client_identity};
use super::server::McpServer;

/// MCP protocol revision reported by `initialize`.
pub const PROTOCOL_VERSION: &str = "2024-11-05";

/// Handle one HTTP event.
#[instrument(skip_all, fields(method = %event.http_method, path = %event.path))]
pub async fn handle_event(ctx: &WarmContext, event: HttpEvent) -> HttpResponse {
    let response = route(ctx, &event).await;
    if ctx.cors_headers() {
        with_cors(response)
    } else {
        response
    }
}

async fn route(ctx: &WarmContext, event: &HttpEvent) -> HttpResponse {
    let method = event.http_method.to_ascii_uppercase();
    match (method.as_str(), event.path.as_str()) {
        ("OPTIONS", _) => HttpResponse::empty(204),
        ("GET", "/health") => HttpResponse::json(
            200,
            &json!({
                "status": "healthy",
                "timestamp": chrono::Utc::now().to_rfc3339(),
            }),
        ),
        ("GET", "/") => server_info(ctx),
        ("POST", _) => handle_rpc(ctx, event).await,
        (other, path) => HttpResponse::json(
            405,
            &json!({
                "error": "Method Not Allowed",
                "message": format!("{other} {path} is not supported; send JSON-RPC as POST"),
            }),
        ),
    }
}

fn server_info(ctx: &WarmContext) -> HttpResponse {
    let server = &ctx.config().server;
    HttpResponse::json(
        200,
        &json!({
            "name": server.name,
            "version": server.version,
            "protocol": "JSON-RPC 2.0",
            "protocolVersion": PROTOCOL_VERSION,
            "endpoints": {
                "rpc": "POST",
                "health": "GET /health",
            },
            "authRequired": ctx.config().auth.is_enforced(),
        }),
    )
}

fn with_cors(response: HttpResponse) -> HttpResponse {
    response
        .with_header("Access-Control-Allow-Origin", "*")
        .with_header("Access-Control-Allow-Methods", "GET, POST, OPTIONS")
        .with_header("Access-Control-Allow-Headers", "Content-Type, Authorization, x-api-key")
}

fn rpc_response(status: u16, response: &JsonRpcResponse) -> HttpResponse {
    HttpResponse::json(status, &response.to_value())
}

async fn handle_rpc(ctx: &WarmContext, event: &HttpEvent) -> HttpResponse {
    // Only a key the user store accepted may select a rate-limit bucket.
    let verified_key = if ctx.config().auth.is_enforced() {
        let auth = authenticate(event, ctx.users()).await;
        if !auth.authenticated {
            let message = auth
                .error
                .map(|e| e.to_string())
                .unwrap_or_else(|| "Unauthorized".to_string());
            return HttpResponse::json(401, &json!({ "error": "Unauthorized", "message": message }));
        }
        auth.api_key
    } else {
        None
    };

    let identity = client_identity(verified_key.as_deref(), event.source_ip.as_deref());
    let decision = ctx.limiter().check(&identity);
    if let RateLimitResult::RateLimited { .. } = decision {
        let retry_after = decision.retry_after_secs();
        warn!(client = %identity, retry_after, "Rate limit exceeded");
        return HttpResponse::json(
            429,
            &json!({
                "error": "Too Many Requests",
                "message": format!("Rate limit exceeded. Retry after {retry_after} seconds."),
                "retryAfter": retry_after,
            }),
        )
        .with_header("Retry-After", retry_after.to_string());
    }

    let body = event.body.as_deref().unwrap_or_default();
    let value: Value = match serde_json::from_str(body) {
        Ok(value) => value,
        Err(e) => {
            debug!(error = %e, "Unparseable request body");
            return rpc_response(400, &JsonRpcResponse::parse_error(e.to_string()));
        }
    };
    let request: JsonRpcRequest = match serde_json::from_value(value) {
        Ok(request) => request,
        Err(e) => {
            debug!(error = %e, "Body is not a JSON-RPC request");
            return rpc_response(400, &JsonRpcResponse::invalid_request(None));
        }
    };

    let server = match ctx.server().await {
        Ok(server) => server,
        Err(e) => {
            error!(error = %e, "Server initialization failed");
            return rpc_response(500, &JsonRpcResponse::internal_error(request.id, e.to_string()));
        }
    };

    let (response, cache_status) = process_request(ctx, &server, request).await;
    let http = rpc_response(200, &response);
    match cache_status {
        Some(status) => http.with_header("X-Cache", status),
        None => http,
    }
}

/// Run a JSON-RPC request. The second value is the `X-Cache` status for
/// `tools/call`.
async fn process_request(
    ctx: &WarmContext,
    server: &McpServer,
    request: JsonRpcRequest,
) -> (JsonRpcResponse, Option<&'static str>) {
    if request.jsonrpc != "2.0" {
        return (JsonRpcResponse::invalid_request(request.id), None);
    }

    info!(method = %request.method, "JSON-RPC request");
    let id = request.id;
    match request.method.as_str() {
        "initialize" => (JsonRpcResponse::success(id, initialize_result(server)), None),
        "tools/list" => (
            JsonRpcResponse::success(id, json!({ "tools": server.list_tools() })),
            None,
        ),
        "tools/call" => call_tool(ctx, server, id, request.params).await,
        "ping" => (JsonRpcResponse::success(id, json!({})), None),
        method if method.starts_with("notifications/") => {
            debug!(method, "Notification acknowledged");
            (JsonRpcResponse::success(id, Value::Null), None)
        }
        method => {
            warn!(method, "Unknown method");
            (JsonRpcResponse::method_not_found(id, method), None)
        }
    }
}

fn initialize_result(server: &McpServer) -> Value {
    json!({
        "protocolVersion": PROTOCOL_VERSION,
        "capabilities": { "tools": {} },
        "serverInfo": {
            "name": server.name(),
            "version": server.version(),
        },
        "instructions": server.instructions(),
    })
}

async fn call_tool(
    ctx: &WarmContext,
    server: &McpServer,
    id: Option<Value>,
    params: Option<Value>,
) -> (JsonRpcResponse, Option<&'static str>) {
    let params = params.unwrap_or(Value::Null);
    let Some(name) = params.get("name").and_then(Value::as_str) else {
        return (JsonRpcResponse::invalid_params(id, "Missing tool name"), None);
    };
    let arguments = params.get("arguments").cloned().unwrap_or_else(|| json!({}));

    let (result, status) = match ctx.cache().get(name, &arguments) {
        Some(hit) => {
            debug!(tool = name, "Response cache hit");
            (hit, "HIT")
        }
        None => {
            let result = server.call_tool(name, arguments.clone()).await;
            ctx.cache().insert(name, &arguments, &result);
            (result, "MISS")
        }
    };

    match serde_json::to_value(&result) {
        Ok(envelope) => (JsonRpcResponse::success(id, envelope), Some(status)),
        Err(e) => (JsonRpcResponse::internal_error(id, e.to_string()), None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Config;

    #[tokio::test]
    async fn test_preflight() {
        let ctx = WarmContext::new(Config::default());
        let response = handle_event(&ctx, HttpEvent::new("OPTIONS", "/mcp")).await;
        assert_eq!(response.status_code, 204);
        assert_eq!(response.header("access-control-allow-origin"), Some("*"));
        assert!(response.body.is_empty());
    }

    #[tokio::test]
    async fn test_health_skips_auth() {
        let mut config = Config::default();
        config.auth.api_key = Some("secret".to_string());
        let ctx = WarmContext::new(config);

        let response = handle_event(&ctx, HttpEvent::new("GET", "/health")).await;
        assert_eq!(response.status_code, 200);
        assert_eq!(response.json_body().unwrap()["status"], "healthy");
        assert_eq!(ctx.initializations(), 0);
    }

    #[tokio::test]
    async fn test_cors_headers_can_be_disabled() {
        let ctx = WarmContext::new(Config::default()).without_cors_headers();
        let response = handle_event(&ctx, HttpEvent::new("GET", "/")).await;
        assert_eq!(response.status_code, 200);
        assert!(response.header("access-control-allow-origin").is_none());
        assert_eq!(response.header("content-type"), Some("application/json"));
    }

    #[tokio::test]
    async fn test_unsupported_method() {
        let ctx = WarmContext::new(Config::default());
        let response = handle_event(&ctx, HttpEvent::new("DELETE", "/mcp")).await;
        assert_eq!(response.status_code, 405);
    }
}
