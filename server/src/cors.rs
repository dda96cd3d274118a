//! Static CORS policy.
//!
//! # Design
//! The policy is fixed at startup: one allowed origin with credentials, all
//! methods, all headers, on every path. A single middleware layer stamps the
//! headers onto every outgoing response and answers `OPTIONS` preflights
//! directly with 204, so preflights never reach the store.

use axum::extract::{Request, State};
use axum::http::header::{HeaderMap, HeaderValue};
use axum::http::{Method, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

const ALLOW_ORIGIN: &str = "access-control-allow-origin";
const ALLOW_CREDENTIALS: &str = "access-control-allow-credentials";
const ALLOW_METHODS: &str = "access-control-allow-methods";
const ALLOW_HEADERS: &str = "access-control-allow-headers";

/// The configured cross-origin policy, ready to stamp onto responses.
#[derive(Debug, Clone)]
pub struct CorsPolicy {
    allow_origin: HeaderValue,
}

impl CorsPolicy {
    pub fn new(allow_origin: HeaderValue) -> Self {
        Self { allow_origin }
    }

    fn apply(&self, headers: &mut HeaderMap) {
        headers.insert(ALLOW_ORIGIN, self.allow_origin.clone());
        headers.insert(ALLOW_CREDENTIALS, HeaderValue::from_static("true"));
        headers.insert(ALLOW_METHODS, HeaderValue::from_static("*"));
        headers.insert(ALLOW_HEADERS, HeaderValue::from_static("*"));
    }
}

/// Middleware applying the policy uniformly: preflights are answered here,
/// everything else passes through and gets the headers on the way out.
pub async fn layer(State(policy): State<CorsPolicy>, request: Request, next: Next) -> Response {
    if request.method() == Method::OPTIONS {
        let mut response = StatusCode::NO_CONTENT.into_response();
        policy.apply(response.headers_mut());
        return response;
    }
    let mut response = next.run(request).await;
    policy.apply(response.headers_mut());
    response
}
