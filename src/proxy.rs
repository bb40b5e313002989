//! `/api/` reverse proxy.
//!
//! DESIGN
//! ======
//! Requests whose path starts with `/api/` are forwarded to the backend origin
//! with the leading `/api` removed (`/api/auth/me?x=1` -> `/auth/me?x=1`).
//! The incoming `Host` header is dropped so the upstream sees its own origin,
//! and hop-by-hop headers are stripped in both directions. Upstream redirects
//! are passed through, not followed. Request bodies are buffered up to a cap;
//! response bodies stream through.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures become `502 Bad Gateway`; the browser sees the same
//! status whether the backend is down or timed out. Unreadable request bodies
//! are `413` when over the cap and `400` otherwise.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use std::time::Duration;

use axum::body::{Body, to_bytes};
use axum::extract::{Request, State};
use axum::http::header::{CONTENT_LENGTH, HOST};
use axum::http::{HeaderMap, HeaderName, StatusCode};
use axum::response::{IntoResponse, Response};
use http_body_util::LengthLimitError;

pub const API_PREFIX: &str = "/api";

/// Largest request body forwarded upstream.
const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

const HOP_BY_HOP: [&str; 8] = [
    "connection",
    "keep-alive",
    "proxy-authenticate",
    "proxy-authorization",
    "te",
    "trailer",
    "transfer-encoding",
    "upgrade",
];

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("path is not under /api/")]
    NotProxied,
    #[error("failed to read request body: {0}")]
    Body(axum::Error),
    #[error("upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::NotProxied => StatusCode::NOT_FOUND,
            Self::Body(e) => body_error_status(e),
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
        };
        (status, self.to_string()).into_response()
    }
}

/// `413` when the body hit the size cap, `400` for any other read failure
/// (client abort, malformed chunking).
fn body_error_status(err: &axum::Error) -> StatusCode {
    let mut source: Option<&(dyn std::error::Error + 'static)> = Some(err);
    while let Some(e) = source {
        if e.is::<LengthLimitError>() {
            return StatusCode::PAYLOAD_TOO_LARGE;
        }
        source = e.source();
    }
    StatusCode::BAD_REQUEST
}

/// Strip exactly one leading `/api`, keeping the query string. Only paths
/// beginning with `/api/` qualify.
pub fn upstream_path(path_and_query: &str) -> Option<&str> {
    path_and_query.strip_prefix(API_PREFIX).filter(|rest| rest.starts_with('/'))
}

fn strip_hop_by_hop(headers: &mut HeaderMap) {
    for name in HOP_BY_HOP {
        headers.remove(HeaderName::from_static(name));
    }
}

/// Shared forwarding client. Clone is cheap; the connection pool is shared.
#[derive(Clone)]
pub struct ApiProxy {
    client: reqwest::Client,
    backend_url: String,
}

impl ApiProxy {
    /// `backend_url` must already be normalized (no trailing slash).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(backend_url: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::none())
            .build()?;
        Ok(Self { client, backend_url: backend_url.into() })
    }

    pub fn backend_url(&self) -> &str {
        &self.backend_url
    }

    pub fn upstream_url(&self, path_and_query: &str) -> Option<String> {
        upstream_path(path_and_query).map(|rest| format!("{}{rest}", self.backend_url))
    }

    /// Forward one request and relay the upstream response.
    pub async fn forward(&self, req: Request) -> Result<Response, ProxyError> {
        let (parts, body) = req.into_parts();
        let path_and_query = parts.uri.path_and_query().map_or_else(|| parts.uri.path(), |pq| pq.as_str());
        let url = self.upstream_url(path_and_query).ok_or(ProxyError::NotProxied)?;

        let body = to_bytes(body, MAX_BODY_BYTES).await.map_err(ProxyError::Body)?;
        let mut headers = parts.headers;
        strip_hop_by_hop(&mut headers);
        headers.remove(HOST);
        headers.remove(CONTENT_LENGTH);

        tracing::debug!(method = %parts.method, %url, "proxying api request");
        let upstream = self.client.request(parts.method, &url).headers(headers).body(body).send().await?;

        let status = upstream.status();
        let mut headers = upstream.headers().clone();
        strip_hop_by_hop(&mut headers);
        headers.remove(CONTENT_LENGTH);

        let mut response = Response::new(Body::from_stream(upstream.bytes_stream()));
        *response.status_mut() = status;
        *response.headers_mut() = headers;
        Ok(response)
    }
}

/// Axum handler mounted under `/api/`.
pub async fn proxy_api(State(proxy): State<ApiProxy>, req: Request) -> Response {
    let path = req.uri().path().to_owned();
    match proxy.forward(req).await {
        Ok(response) => response,
        Err(e) => {
            tracing::warn!(%path, backend = proxy.backend_url(), error = %e, "api proxy failed");
            e.into_response()
        }
    }
}
