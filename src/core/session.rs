//! Session data as seen by the client
//!
//! The session itself is issued and stored by the external auth service.
//! The client only reads the user's role and whether a session exists.

use serde::{Deserialize, Deserializer, Serialize};

use super::role::{Role, can_access_dashboard};

/// User attached to a session.
///
/// Every field is optional: a session the auth service vouches for is kept
/// even when the user record is incomplete.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    /// `None` when the role is missing or not one we know
    #[serde(default, deserialize_with = "known_role")]
    pub role: Option<Role>,
}

fn known_role<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Role>, D::Error> {
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value
        .as_ref()
        .and_then(serde_json::Value::as_str)
        .and_then(|s| s.parse().ok()))
}

/// Authenticated session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub user: SessionUser,
}

impl Session {
    pub fn role(&self) -> Option<Role> {
        self.user.role
    }

    pub fn role_label(&self) -> &'static str {
        self.role().map_or("Member", |role| role.label())
    }

    /// Name to show in the UI, falling back to the email address
    pub fn display_name(&self) -> &str {
        [&self.user.name, &self.user.email]
            .into_iter()
            .filter_map(|v| v.as_deref())
            .find(|v| !v.trim().is_empty())
            .unwrap_or("User")
    }
}

/// Session state of the running client
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SessionState {
    /// Client has not finished mounting or has not asked the auth service yet
    #[default]
    Initializing,
    /// No session present
    Anonymous,
    /// Session present
    Authenticated(Session),
}

impl SessionState {
    pub fn from_session(session: Option<Session>) -> Self {
        match session {
            Some(session) => SessionState::Authenticated(session),
            None => SessionState::Anonymous,
        }
    }

    pub fn is_ready(&self) -> bool {
        !matches!(self, SessionState::Initializing)
    }

    pub fn session(&self) -> Option<&Session> {
        match self {
            SessionState::Authenticated(session) => Some(session),
            _ => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session().is_some()
    }

    pub fn can_access_dashboard(&self) -> bool {
        self.session()
            .and_then(Session::role)
            .is_some_and(can_access_dashboard)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(role: Role) -> Session {
        Session {
            user: SessionUser {
                email: Some("ana@example.com".to_string()),
                name: Some("Ana".to_string()),
                role: Some(role),
            },
        }
    }

    #[test]
    fn test_initializing_is_not_anonymous() {
        let state = SessionState::default();
        assert_eq!(state, SessionState::Initializing);
        assert!(!state.is_ready());
        assert!(!state.is_authenticated());
        assert_ne!(state, SessionState::Anonymous);
    }

    #[test]
    fn test_from_session() {
        assert_eq!(SessionState::from_session(None), SessionState::Anonymous);

        let state = SessionState::from_session(Some(session(Role::Admin)));
        assert!(state.is_ready());
        assert!(state.is_authenticated());
    }

    #[test]
    fn test_dashboard_access_by_state() {
        assert!(SessionState::Authenticated(session(Role::Admin)).can_access_dashboard());
        assert!(SessionState::Authenticated(session(Role::ProjectManager)).can_access_dashboard());
        assert!(!SessionState::Authenticated(session(Role::TeamMember)).can_access_dashboard());
        assert!(!SessionState::Anonymous.can_access_dashboard());
        assert!(!SessionState::Initializing.can_access_dashboard());
    }

    #[test]
    fn test_display_name_falls_back_to_email() {
        let mut s = session(Role::TeamMember);
        assert_eq!(s.display_name(), "Ana");

        s.user.name = Some("  ".to_string());
        assert_eq!(s.display_name(), "ana@example.com");

        s.user.name = None;
        assert_eq!(s.display_name(), "ana@example.com");

        s.user.email = None;
        assert_eq!(s.display_name(), "User");
    }

    #[test]
    fn test_session_deserialization() {
        let json = r#"{"user":{"email":"pm@example.com","role":"ProjectManager"}}"#;
        let s: Session = serde_json::from_str(json).unwrap();

        assert_eq!(s.role(), Some(Role::ProjectManager));
        assert!(s.user.name.is_none());
    }

    #[test]
    fn test_incomplete_user_keeps_session_without_dashboard() {
        for json in [
            r#"{"user":{"email":"a@b.c"}}"#,
            r#"{"user":{"email":"a@b.c","role":"Viewer"}}"#,
            r#"{"user":{"email":null,"role":null}}"#,
            r#"{"user":{"email":"a@b.c","role":7}}"#,
        ] {
            let s: Session = serde_json::from_str(json).unwrap();
            assert_eq!(s.role(), None, "{}", json);
            assert_eq!(s.role_label(), "Member");

            let state = SessionState::Authenticated(s);
            assert!(state.is_authenticated());
            assert!(!state.can_access_dashboard());
        }
    }
}
