//! REST API exposure for the mock
//!
//! Every path other than the health checks and custom routes lands in one
//! fallback handler, because routing is decided by the backend's URL parsing
//! rather than by the axum router.

use super::super::backend::{BackendResponse, MockResponse};
use super::super::host::ServerHost;
use crate::core::ApiError;
use anyhow::Result;
use axum::body::Body;
use axum::extract::{Request, State};
use axum::http::{HeaderValue, header};
use axum::response::{IntoResponse, Response};
use axum::{Json, Router, routing::get};
use serde_json::{Value, json};
use std::sync::Arc;
use std::time::Duration;
use tower_http::trace::TraceLayer;

/// Largest request body read, matching axum's default body limit
pub const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

/// REST API exposure implementation
pub struct RestExposure;

impl RestExposure {
    /// Build the REST router from a host
    ///
    /// Returns a router with:
    /// - Health check routes
    /// - Custom routes
    /// - The mock handler as fallback for everything else
    pub fn build_router(host: Arc<ServerHost>, custom_routes: Vec<Router>) -> Result<Router> {
        let mock_routes = Router::new().fallback(handle_request).with_state(host);

        let mut app = Self::health_routes();
        for custom_router in custom_routes {
            app = app.merge(custom_router);
        }

        Ok(app.merge(mock_routes).layer(TraceLayer::new_for_http()))
    }

    /// Build health check routes
    fn health_routes() -> Router {
        Router::new()
            .route("/health", get(Self::health_check))
            .route("/healthz", get(Self::health_check))
    }

    /// Health check endpoint handler
    async fn health_check() -> Json<Value> {
        Json(json!({
            "status": "ok",
            "service": "mock-api"
        }))
    }
}

/// Translate an HTTP request for the backend and its answer back
async fn handle_request(State(host): State<Arc<ServerHost>>, request: Request) -> Response {
    let (parts, body) = request.into_parts();
    let bytes = match axum::body::to_bytes(body, MAX_BODY_BYTES).await {
        Ok(bytes) => bytes,
        Err(e) => {
            return ApiError::InvalidBody {
                message: e.to_string(),
            }
            .into_response();
        }
    };

    // A body that is not JSON is treated as absent
    let json_body = serde_json::from_slice::<Value>(&bytes).ok();
    let url = parts.uri.to_string();

    let outcome = host.backend.handle(parts.method.clone(), &url, json_body);
    if matches!(outcome, Ok(BackendResponse::PassThrough)) {
        let request = Request::from_parts(parts, Body::from(bytes));
        return host.pass_through(request).await;
    }

    let delay = match host.backend.config() {
        Ok(config) => config.delay,
        Err(e) => {
            tracing::warn!(error = %e, "Could not read delay; answering without it");
            0
        }
    };
    if delay > 0 {
        tokio::time::sleep(Duration::from_millis(delay)).await;
    }

    match outcome {
        Ok(BackendResponse::Mock(response)) => response.into_response(),
        Ok(BackendResponse::PassThrough) => ApiError::NotHandled { url }.into_response(),
        Err(err) => {
            tracing::debug!(%url, error = %err, "Mock request failed");
            err.into_response()
        }
    }
}

impl IntoResponse for MockResponse {
    fn into_response(self) -> Response {
        let mut response = match self.body {
            Some(body) => (self.status, Json(body)).into_response(),
            None => self.status.into_response(),
        };

        if let Some(location) = self
            .location
            .and_then(|location| HeaderValue::from_str(&location).ok())
        {
            response.headers_mut().insert(header::LOCATION, location);
        }
        response
    }
}
