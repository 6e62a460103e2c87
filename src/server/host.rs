//! Server host for transport-agnostic API exposure
//!
//! [`ServerHost`] bundles the in-memory backend with the router that takes
//! over requests the mock does not serve. Exposures consume the host and
//! only translate between their protocol and [`InMemoryBackend::handle`].

use crate::core::ApiError;
use crate::server::backend::InMemoryBackend;
use axum::Router;
use axum::extract::Request;
use axum::response::{IntoResponse, Response};
use tower::ServiceExt;

/// Host context containing all server state
pub struct ServerHost {
    /// The mock itself
    pub backend: InMemoryBackend,

    /// Router receiving pass-through requests
    pub passthru: Option<Router>,
}

impl ServerHost {
    pub fn new(backend: InMemoryBackend, passthru: Option<Router>) -> Self {
        Self { backend, passthru }
    }

    /// Check if pass-through requests have somewhere to go
    pub fn has_passthru(&self) -> bool {
        self.passthru.is_some()
    }

    /// Hand a request the mock declined to the pass-through router
    ///
    /// Without a pass-through router the request is answered with
    /// [`ApiError::NotHandled`].
    pub async fn pass_through(&self, request: Request) -> Response {
        let Some(router) = &self.passthru else {
            return ApiError::NotHandled {
                url: request.uri().to_string(),
            }
            .into_response();
        };

        tracing::debug!(uri = %request.uri(), "Forwarding to pass-through router");
        match router.clone().oneshot(request).await {
            Ok(response) => response,
            Err(never) => match never {},
        }
    }
}
