//! Session context for the client
//!
//! Provides the reactive [`SessionState`] to the component tree and an
//! [`AuthClient`] that talks to the same-origin `/api/auth/*` endpoints.
//! The session starts as `Initializing` on both server and client and is
//! only resolved after hydration, so server and client render the same.

use leptos::prelude::*;

use crate::core::wire::{self, RawResponse};
use crate::core::{
    AuthClient, AuthError, Credentials, RegistrationRequest, Session, SessionState, SignInResult,
    SignupResponse,
};

/// Reactive session state shared by every view
#[derive(Clone, Copy)]
pub struct SessionContext {
    pub state: RwSignal<SessionState>,
}

impl SessionContext {
    pub fn set_session(&self, session: Option<Session>) {
        self.state.set(SessionState::from_session(session));
    }

    pub fn clear(&self) {
        self.state.set(SessionState::Anonymous);
    }
}

/// Provide session context to the component tree
pub fn provide_session_context() -> SessionContext {
    let ctx = SessionContext {
        state: RwSignal::new(SessionState::Initializing),
    };

    // Resolve the session once the client has mounted
    #[cfg(not(feature = "ssr"))]
    {
        use leptos::logging::warn;
        use leptos::task::spawn_local;

        Effect::new(move |_| {
            spawn_local(async move {
                match HttpAuthClient.current_session().await {
                    Ok(session) => ctx.set_session(session),
                    Err(e) => {
                        warn!("Could not load session: {}", e);
                        ctx.clear();
                    }
                }
            });
        });
    }

    provide_context(ctx);
    ctx
}

/// Get session context from the component tree
pub fn use_session_context() -> SessionContext {
    expect_context::<SessionContext>()
}

/// [`AuthClient`] backed by the same-origin auth endpoints.
///
/// Stateless; the flows keep [`SessionContext`] in sync.
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpAuthClient;

impl AuthClient for HttpAuthClient {
    async fn sign_in(&self, credentials: &Credentials) -> Result<SignInResult, AuthError> {
        let raw = send(Method::Post, wire::SIGNIN_PATH, Some(to_json(credentials)?)).await?;
        Ok(wire::decode_sign_in(&raw))
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        let raw = send(Method::Post, wire::SIGNOUT_PATH, None).await?;
        wire::decode_sign_out(&raw)
    }

    async fn sign_up(&self, request: &RegistrationRequest) -> Result<SignupResponse, AuthError> {
        let raw = send(Method::Post, wire::SIGNUP_PATH, Some(to_json(request)?)).await?;
        wire::decode_signup(&raw)
    }

    async fn current_session(&self) -> Result<Option<Session>, AuthError> {
        let raw = send(Method::Get, wire::SESSION_PATH, None).await?;
        wire::decode_session(&raw)
    }
}

#[derive(Debug, Clone, Copy)]
enum Method {
    Get,
    Post,
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, AuthError> {
    serde_json::to_string(value).map_err(|e| AuthError::Decode(e.to_string()))
}

#[cfg(not(feature = "ssr"))]
async fn send(method: Method, path: &str, body: Option<String>) -> Result<RawResponse, AuthError> {
    use gloo_net::http::Request;

    let builder = match method {
        Method::Get => Request::get(path),
        Method::Post => Request::post(path),
    };

    let response = match body {
        Some(body) => builder
            .header("Content-Type", "application/json")
            .body(body)
            .map_err(|e| AuthError::Network(e.to_string()))?
            .send()
            .await,
        None => builder.send().await,
    }
    .map_err(|e| AuthError::Network(e.to_string()))?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| AuthError::Decode(e.to_string()))?;

    Ok(RawResponse::new(status, body))
}

#[cfg(feature = "ssr")]
async fn send(
    _method: Method,
    _path: &str,
    _body: Option<String>,
) -> Result<RawResponse, AuthError> {
    Err(AuthError::Unavailable)
}
