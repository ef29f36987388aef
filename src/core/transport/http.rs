//! HTTP transport implementation.
//!
//! axum server that converts each request into an [`HttpEvent`] and answers
//! with whatever [`handle_event`] returns, so local HTTP and serverless
//! deployments share one request pipeline.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    extract::{ConnectInfo, Request, State},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use bytes::Bytes;
use http::{HeaderName, HeaderValue, StatusCode};
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, warn};

use super::{TransportError, TransportResult, config::HttpConfig};
use crate::core::WarmContext;
use crate::core::serverless::{HttpEvent, HttpResponse, handle_event};

/// Largest request body accepted.
const MAX_BODY_BYTES: usize = 1024 * 1024;

/// State shared by every route.
#[derive(Clone)]
struct AppState {
    context: Arc<WarmContext>,
    trust_forwarded_for: bool,
}

/// HTTP transport handler.
pub struct HttpTransport {
    config: HttpConfig,
}

impl HttpTransport {
    /// Create a new HTTP transport with the given config.
    pub fn new(config: HttpConfig) -> Self {
        Self { config }
    }

    /// Get the bind address.
    pub fn address(&self) -> String {
        format!("{}:{}", self.config.host, self.config.port)
    }

    /// Build the router. The context should come from
    /// [`WarmContext::without_cors_headers`] when CORS is enabled here.
    pub fn router(&self, context: Arc<WarmContext>) -> Router {
        let mut app = Router::new()
            .route(&self.config.rpc_path, post(handle_request))
            .route("/health", get(handle_request))
            .route("/", get(handle_request))
            .with_state(AppState {
                context,
                trust_forwarded_for: self.config.trust_forwarded_for,
            });

        if self.config.enable_cors {
            let cors = CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any);
            app = app.layer(cors);
        }
        app
    }

    /// Run the HTTP transport.
    pub async fn run(self, context: Arc<WarmContext>) -> TransportResult<()> {
        let addr = self.address();
        let app = self.router(context);

        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| TransportError::bind(&addr, e))?;

        let cors_status = if self.config.enable_cors {
            "enabled"
        } else {
            "disabled"
        };
        info!(
            "Ready - listening on {} (JSON-RPC over HTTP, CORS {})",
            addr, cors_status
        );
        info!("  → JSON-RPC: POST {}", self.config.rpc_path);
        info!("  → Health:   GET /health");

        axum::serve(
            listener,
            app.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .await
        .map_err(|e| TransportError::http(e.to_string()))?;

        Ok(())
    }
}

async fn handle_request(State(state): State<AppState>, request: Request) -> Response {
    let event = match to_event(request, state.trust_forwarded_for).await {
        Ok(event) => event,
        Err(response) => return response,
    };
    to_response(handle_event(&state.context, event).await)
}

async fn to_event(request: Request, trust_forwarded_for: bool) -> Result<HttpEvent, Response> {
    let (parts, body) = request.into_parts();

    let forwarded = parts
        .headers
        .get("x-forwarded-for")
        .filter(|_| trust_forwarded_for)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(|ip| ip.trim().to_string())
        .filter(|ip| !ip.is_empty());
    let peer = parts
        .extensions
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip().to_string());

    let headers: HashMap<String, String> = parts
        .headers
        .iter()
        .filter_map(|(name, value)| Some((name.to_string(), value.to_str().ok()?.to_string())))
        .collect();

    let bytes: Bytes = axum::body::to_bytes(body, MAX_BODY_BYTES)
        .await
        .map_err(|e| {
            warn!(error = %e, "Failed to read request body");
            (StatusCode::PAYLOAD_TOO_LARGE, e.to_string()).into_response()
        })?;

    Ok(HttpEvent {
        http_method: parts.method.to_string(),
        path: parts.uri.path().to_string(),
        headers,
        body: (!bytes.is_empty()).then(|| String::from_utf8_lossy(&bytes).into_owned()),
        source_ip: forwarded.or(peer),
    })
}

fn to_response(response: HttpResponse) -> Response {
    let status = StatusCode::from_u16(response.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let mut out = (status, Body::from(response.body)).into_response();
    for (name, value) in response.headers {
        if let (Ok(name), Ok(value)) = (
            HeaderName::try_from(name.as_str()),
            HeaderValue::try_from(value.as_str()),
        ) {
            out.headers_mut().insert(name, value);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Config;
    use http_body_util::BodyExt;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    fn app(config: Config) -> Router {
        app_with(config, HttpConfig::default())
    }

    fn app_with(config: Config, http: HttpConfig) -> Router {
        let context = Arc::new(WarmContext::new(config).without_cors_headers());
        HttpTransport::new(http).router(context)
    }

    fn ping_from(forwarded_for: &str) -> Request {
        let mut request = rpc(json!({ "jsonrpc": "2.0", "id": 1, "method": "ping" }));
        request
            .headers_mut()
            .insert("x-forwarded-for", HeaderValue::from_str(forwarded_for).unwrap());
        request
    }

    fn limited_to_one() -> Config {
        let mut config = Config::default();
        config.rate_limit.max_requests = 1;
        config
    }

    async fn body_json(response: Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn rpc(body: Value) -> Request {
        http::Request::builder()
            .method("POST")
            .uri("/mcp")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let response = app(Config::default())
            .oneshot(http::Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["status"], "healthy");
    }

    #[tokio::test]
    async fn test_tools_list_over_http() {
        let response = app(Config::default())
            .oneshot(rpc(json!({ "jsonrpc": "2.0", "id": 1, "method": "tools/list" })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["id"], 1);
        assert_eq!(body["result"]["tools"].as_array().unwrap().len(), 17);
    }

    #[tokio::test]
    async fn test_tools_call_sets_cache_header() {
        let response = app(Config::default())
            .oneshot(rpc(json!({
                "jsonrpc": "2.0",
                "id": 2,
                "method": "tools/call",
                "params": { "name": "list_components", "arguments": {} }
            })))
            .await
            .unwrap();
        assert_eq!(response.headers()["x-cache"], "MISS");
        let body = body_json(response).await;
        assert_eq!(body["result"]["content"][0]["type"], "text");
    }

    #[tokio::test]
    async fn test_auth_over_http() {
        let mut config = Config::default();
        config.auth.api_key = Some("secret".to_string());
        let app = app(config);

        let denied = app
            .clone()
            .oneshot(rpc(json!({ "jsonrpc": "2.0", "id": 1, "method": "ping" })))
            .await
            .unwrap();
        assert_eq!(denied.status(), StatusCode::UNAUTHORIZED);

        let mut request = rpc(json!({ "jsonrpc": "2.0", "id": 1, "method": "ping" }));
        request
            .headers_mut()
            .insert("authorization", HeaderValue::from_static("Bearer secret"));
        let allowed = app.oneshot(request).await.unwrap();
        assert_eq!(allowed.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_cors_preflight_handled_by_layer() {
        let response = app(Config::default())
            .oneshot(
                http::Request::builder()
                    .method("OPTIONS")
                    .uri("/mcp")
                    .header("origin", "http://localhost:3000")
                    .header("access-control-request-method", "POST")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert!(response.status().is_success());
        assert_eq!(response.headers()["access-control-allow-origin"], "*");
    }

    #[tokio::test]
    async fn test_forwarded_for_ignored_by_default() {
        let app = app(limited_to_one());
        let mut statuses = Vec::new();
        for i in 0..3 {
            let response = app.clone().oneshot(ping_from(&format!("10.9.0.{i}"))).await.unwrap();
            statuses.push(response.status());
        }
        assert_eq!(
            statuses,
            [StatusCode::OK, StatusCode::TOO_MANY_REQUESTS, StatusCode::TOO_MANY_REQUESTS]
        );
    }

    #[tokio::test]
    async fn test_forwarded_for_used_behind_trusted_proxy() {
        let http = HttpConfig {
            trust_forwarded_for: true,
            ..HttpConfig::default()
        };
        let app = app_with(limited_to_one(), http);

        let first = app.clone().oneshot(ping_from("10.9.0.1")).await.unwrap();
        let other_client = app.clone().oneshot(ping_from("10.9.0.2")).await.unwrap();
        let repeat = app.oneshot(ping_from("10.9.0.1, 172.16.0.1")).await.unwrap();
        assert_eq!(first.status(), StatusCode::OK);
        assert_eq!(other_client.status(), StatusCode::OK);
        assert_eq!(repeat.status(), StatusCode::TOO_MANY_REQUESTS);
    }
}
