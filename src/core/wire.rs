//! Endpoints and response decoding for the auth service
//!
//! Transport lives in the UI layer; everything here works on a plain
//! status code and body so it can be tested without a browser.

use serde::Deserialize;

use super::error::AuthError;
use super::forms::{SignInResult, SignupResponse};
use super::session::Session;

pub const SIGNIN_PATH: &str = "/api/auth/signin";
pub const SIGNOUT_PATH: &str = "/api/auth/signout";
pub const SIGNUP_PATH: &str = "/api/auth/signup";
pub const SESSION_PATH: &str = "/api/auth/session";

/// Status and body of an HTTP response
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

/// Message from an error body: `message` first, then `error`
fn error_message(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    parsed
        .message
        .or(parsed.error)
        .filter(|m| !m.trim().is_empty())
}

fn rejected(raw: &RawResponse) -> AuthError {
    AuthError::Rejected {
        status: raw.status,
        message: error_message(&raw.body),
    }
}

/// Decode a sign-in answer. A refusal is a result, not an error.
pub fn decode_sign_in(raw: &RawResponse) -> SignInResult {
    if raw.is_success() {
        SignInResult::accepted()
    } else {
        SignInResult::rejected(error_message(&raw.body))
    }
}

pub fn decode_sign_out(raw: &RawResponse) -> Result<(), AuthError> {
    if raw.is_success() {
        Ok(())
    } else {
        Err(rejected(raw))
    }
}

pub fn decode_signup(raw: &RawResponse) -> Result<SignupResponse, AuthError> {
    if !raw.is_success() {
        return Err(rejected(raw));
    }
    if raw.body.trim().is_empty() {
        return Ok(SignupResponse::default());
    }
    serde_json::from_str(&raw.body).map_err(|e| AuthError::Decode(e.to_string()))
}

/// Decode the current session. `null`, `{}` and 401 all mean no session.
pub fn decode_session(raw: &RawResponse) -> Result<Option<Session>, AuthError> {
    if raw.status == 401 {
        return Ok(None);
    }
    if !raw.is_success() {
        return Err(rejected(raw));
    }
    if raw.body.trim().is_empty() {
        return Ok(None);
    }

    let value: serde_json::Value =
        serde_json::from_str(&raw.body).map_err(|e| AuthError::Decode(e.to_string()))?;

    match &value {
        serde_json::Value::Null => Ok(None),
        serde_json::Value::Object(map) if map.is_empty() => Ok(None),
        _ => serde_json::from_value(value)
            .map(Some)
            .map_err(|e| AuthError::Decode(e.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::role::Role;

    #[test]
    fn test_sign_in_accepted() {
        let result = decode_sign_in(&RawResponse::new(200, r#"{"ok":true}"#));
        assert!(result.ok);
        assert!(result.error.is_none());
    }

    #[test]
    fn test_sign_in_refused_carries_error() {
        let result = decode_sign_in(&RawResponse::new(401, r#"{"error":"Invalid"}"#));
        assert!(!result.ok);
        assert_eq!(result.error.as_deref(), Some("Invalid"));

        let result = decode_sign_in(&RawResponse::new(401, "not json"));
        assert!(!result.ok);
        assert!(result.error.is_none());
    }

    #[test]
    fn test_signup_success_message() {
        let resp = decode_signup(&RawResponse::new(201, r#"{"message":"Created"}"#)).unwrap();
        assert_eq!(resp.message.as_deref(), Some("Created"));

        let resp = decode_signup(&RawResponse::new(204, "")).unwrap();
        assert!(resp.message.is_none());
    }

    #[test]
    fn test_signup_failure_is_rejected_with_message() {
        let err = decode_signup(&RawResponse::new(
            400,
            r#"{"message":"Email already registered"}"#,
        ))
        .unwrap_err();

        assert_eq!(
            err,
            AuthError::Rejected {
                status: 400,
                message: Some("Email already registered".to_string())
            }
        );
    }

    #[test]
    fn test_signup_garbage_body_is_decode_error() {
        let err = decode_signup(&RawResponse::new(200, "<html>")).unwrap_err();
        assert!(matches!(err, AuthError::Decode(_)));
    }

    #[test]
    fn test_session_absent_forms() {
        for raw in [
            RawResponse::new(200, "null"),
            RawResponse::new(200, "{}"),
            RawResponse::new(200, ""),
            RawResponse::new(401, r#"{"message":"Unauthorized"}"#),
        ] {
            assert_eq!(decode_session(&raw).unwrap(), None);
        }
    }

    #[test]
    fn test_session_present() {
        let raw = RawResponse::new(
            200,
            r#"{"user":{"email":"a@b.c","name":"Ana","role":"Admin"}}"#,
        );
        let session = decode_session(&raw).unwrap().unwrap();

        assert_eq!(session.role(), Some(Role::Admin));
        assert_eq!(session.user.name.as_deref(), Some("Ana"));
    }

    #[test]
    fn test_session_with_incomplete_user_is_still_signed_in() {
        use crate::core::flows::{NavItem, nav_links};
        use crate::core::session::SessionState;

        for body in [
            r#"{"user":{"email":"a@b.c"}}"#,
            r#"{"user":{"email":"a@b.c","role":"Viewer"}}"#,
            r#"{"user":{"email":null,"role":"TeamMember"}}"#,
        ] {
            let session = decode_session(&RawResponse::new(200, body))
                .unwrap()
                .unwrap_or_else(|| panic!("no session for {}", body));

            let links = nav_links(&SessionState::Authenticated(session)).unwrap();
            assert_eq!(links, vec![NavItem::Home, NavItem::SignOut], "{}", body);
        }
    }

    #[test]
    fn test_session_server_error() {
        let err = decode_session(&RawResponse::new(500, "")).unwrap_err();
        assert_eq!(
            err,
            AuthError::Rejected {
                status: 500,
                message: None
            }
        );
    }

    #[test]
    fn test_sign_out() {
        assert!(decode_sign_out(&RawResponse::new(200, "")).is_ok());
        assert!(decode_sign_out(&RawResponse::new(502, "")).is_err());
    }

    #[test]
    fn test_error_message_prefers_message() {
        assert_eq!(
            error_message(r#"{"message":"m","error":"e"}"#).as_deref(),
            Some("m")
        );
        assert_eq!(error_message(r#"{"error":"e"}"#).as_deref(), Some("e"));
        assert_eq!(error_message(r#"{"message":""}"#), None);
    }
}
