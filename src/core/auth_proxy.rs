//! Same-origin proxy for the external authentication service
//!
//! The browser only talks to `/api/auth/*` on this server. Requests are
//! forwarded to `AUTH_SERVICE_URL` with the headers the session cookie
//! depends on, and the upstream answer is passed back unchanged.

use axum::{
    Json, Router,
    body::{Body, Bytes},
    extract::State,
    http::{HeaderMap, HeaderName, Method, StatusCode, Uri, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Serialize;
use std::sync::Arc;

use crate::core::config::Config;

/// Request headers passed on to the auth service
const FORWARDED_REQUEST_HEADERS: [HeaderName; 4] = [
    header::CONTENT_TYPE,
    header::ACCEPT,
    header::COOKIE,
    header::AUTHORIZATION,
];

/// Response headers passed back to the browser
const FORWARDED_RESPONSE_HEADERS: [HeaderName; 2] = [header::CONTENT_TYPE, header::SET_COOKIE];

/// Proxy state
#[derive(Clone)]
pub struct AuthProxyState {
    upstream: Option<String>,
    client: reqwest::Client,
}

impl AuthProxyState {
    pub fn new(config: &Config) -> Self {
        Self {
            upstream: config.auth_service_url.clone(),
            client: reqwest::Client::new(),
        }
    }
}

/// Error body, shaped like the auth service's own errors
#[derive(Debug, Serialize)]
pub struct ProxyError {
    pub message: String,
}

/// Create the auth proxy router
pub fn auth_proxy_router(state: AuthProxyState) -> Router {
    let state = Arc::new(state);

    Router::new()
        .route("/api/auth/signin", post(forward_handler))
        .route("/api/auth/signout", post(forward_handler))
        .route("/api/auth/signup", post(forward_handler))
        .route("/api/auth/session", get(forward_handler))
        .with_state(state)
}

/// Forward one request to the auth service
async fn forward_handler(
    State(state): State<Arc<AuthProxyState>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let Some(upstream) = state.upstream.as_deref() else {
        tracing::warn!("Auth request to {} but AUTH_SERVICE_URL is not set", uri.path());
        return error_response(
            StatusCode::SERVICE_UNAVAILABLE,
            "Authentication service is not configured",
        );
    };

    let url = upstream_url(upstream, &uri);
    tracing::debug!("Forwarding {} {} to {}", method, uri.path(), url);

    let response = state
        .client
        .request(method, &url)
        .headers(filter_headers(&headers, &FORWARDED_REQUEST_HEADERS))
        .body(body)
        .send()
        .await;

    let response = match response {
        Ok(resp) => resp,
        Err(e) => {
            tracing::error!("Failed to reach auth service at {}: {}", url, e);
            return error_response(
                StatusCode::BAD_GATEWAY,
                "Authentication service is unreachable",
            );
        }
    };

    let status = response.status();
    let response_headers = filter_headers(response.headers(), &FORWARDED_RESPONSE_HEADERS);

    match response.bytes().await {
        Ok(bytes) => {
            if !status.is_success() {
                tracing::info!("Auth service answered {} for {}", status, uri.path());
            }
            let mut resp = Response::new(Body::from(bytes));
            *resp.status_mut() = status;
            *resp.headers_mut() = response_headers;
            resp
        }
        Err(e) => {
            tracing::error!("Failed to read auth service response: {}", e);
            error_response(
                StatusCode::BAD_GATEWAY,
                "Invalid response from authentication service",
            )
        }
    }
}

/// Upstream URL for a proxied request, keeping path and query
fn upstream_url(upstream: &str, uri: &Uri) -> String {
    let path_and_query = uri
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or_else(|| uri.path());
    format!("{}{}", upstream.trim_end_matches('/'), path_and_query)
}

/// Copy the allowed headers, keeping repeated values such as `Set-Cookie`
fn filter_headers(headers: &HeaderMap, allowed: &[HeaderName]) -> HeaderMap {
    let mut filtered = HeaderMap::new();
    for name in allowed {
        for value in headers.get_all(name) {
            filtered.append(name.clone(), value.clone());
        }
    }
    filtered
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (
        status,
        Json(ProxyError {
            message: message.to_string(),
        }),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn unconfigured() -> Arc<AuthProxyState> {
        Arc::new(AuthProxyState::new(&Config {
            auth_service_url: None,
        }))
    }

    #[test]
    fn test_upstream_url_keeps_path_and_query() {
        let uri: Uri = "/api/auth/session?fresh=1".parse().unwrap();
        assert_eq!(
            upstream_url("http://auth:4000/", &uri),
            "http://auth:4000/api/auth/session?fresh=1"
        );

        let uri: Uri = "/api/auth/signup".parse().unwrap();
        assert_eq!(
            upstream_url("http://auth:4000", &uri),
            "http://auth:4000/api/auth/signup"
        );
    }

    #[test]
    fn test_filter_headers_drops_unlisted() {
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_static("sid=abc"));
        headers.insert(header::HOST, HeaderValue::from_static("localhost:3000"));
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );

        let filtered = filter_headers(&headers, &FORWARDED_REQUEST_HEADERS);

        assert_eq!(filtered.get(header::COOKIE).unwrap(), "sid=abc");
        assert_eq!(
            filtered.get(header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
        assert!(filtered.get(header::HOST).is_none());
    }

    #[test]
    fn test_filter_headers_keeps_repeated_set_cookie() {
        let mut headers = HeaderMap::new();
        headers.append(header::SET_COOKIE, HeaderValue::from_static("a=1"));
        headers.append(header::SET_COOKIE, HeaderValue::from_static("b=2"));

        let filtered = filter_headers(&headers, &FORWARDED_RESPONSE_HEADERS);

        assert_eq!(filtered.get_all(header::SET_COOKIE).iter().count(), 2);
    }

    #[tokio::test]
    async fn test_unconfigured_proxy_answers_503_with_message() {
        let response = forward_handler(
            State(unconfigured()),
            Method::POST,
            Uri::from_static("/api/auth/signup"),
            HeaderMap::new(),
            Bytes::new(),
        )
        .await;

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(
            json["message"],
            "Authentication service is not configured"
        );
    }

    #[test]
    fn test_proxy_error_serialization() {
        let error = ProxyError {
            message: "Something went wrong".to_string(),
        };
        let json = serde_json::to_string(&error).unwrap();

        assert_eq!(json, r#"{"message":"Something went wrong"}"#);
    }
}
