//! Form payloads and client-side validation
//!
//! Values are checked for presence only. Format rules (email shape,
//! password strength) belong to the auth service.

use serde::{Deserialize, Serialize};

use super::error::FormError;
use super::role::Role;

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Login credentials, created per submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Both email and password must be present
    pub fn validate(&self) -> Result<(), FormError> {
        let mut missing = Vec::new();
        if is_blank(&self.email) {
            missing.push("email");
        }
        if is_blank(&self.password) {
            missing.push("password");
        }

        if missing.is_empty() {
            Ok(())
        } else {
            Err(FormError::MissingFields(missing))
        }
    }
}

/// Raw values of the registration form
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RegistrationForm {
    pub fullname: String,
    pub email: String,
    pub password: String,
    pub role: String,
}

/// Signup payload sent to `POST /api/auth/signup`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistrationRequest {
    pub email: String,
    pub password: String,
    pub fullname: String,
    pub role: Role,
}

impl RegistrationForm {
    /// Validate and convert into a signup payload.
    ///
    /// An empty role falls back to [`Role::TeamMember`]; any other
    /// unknown value is rejected.
    pub fn into_request(self) -> Result<RegistrationRequest, FormError> {
        let mut missing = Vec::new();
        if is_blank(&self.fullname) {
            missing.push("fullname");
        }
        if is_blank(&self.email) {
            missing.push("email");
        }
        if is_blank(&self.password) {
            missing.push("password");
        }
        if !missing.is_empty() {
            return Err(FormError::MissingFields(missing));
        }

        let role = if is_blank(&self.role) {
            Role::default()
        } else {
            self.role
                .parse::<Role>()
                .map_err(|_| FormError::InvalidRole(self.role.clone()))?
        };

        Ok(RegistrationRequest {
            email: self.email.trim().to_string(),
            password: self.password,
            fullname: self.fullname.trim().to_string(),
            role,
        })
    }
}

/// Successful signup response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SignupResponse {
    #[serde(default)]
    pub message: Option<String>,
}

/// Outcome of a sign-in attempt that reached the auth service
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SignInResult {
    pub ok: bool,
    pub error: Option<String>,
}

impl SignInResult {
    pub fn accepted() -> Self {
        Self {
            ok: true,
            error: None,
        }
    }

    pub fn rejected(error: Option<String>) -> Self {
        Self { ok: false, error }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> RegistrationForm {
        RegistrationForm {
            fullname: "Ana Torres".to_string(),
            email: "ana@example.com".to_string(),
            password: "secret".to_string(),
            role: "ProjectManager".to_string(),
        }
    }

    #[test]
    fn test_credentials_valid() {
        assert!(Credentials::new("a@b.c", "pw").validate().is_ok());
    }

    #[test]
    fn test_credentials_missing_fields() {
        assert_eq!(
            Credentials::new("", "pw").validate(),
            Err(FormError::MissingFields(vec!["email"]))
        );
        assert_eq!(
            Credentials::new("a@b.c", "").validate(),
            Err(FormError::MissingFields(vec!["password"]))
        );
        assert_eq!(
            Credentials::new(" ", "\t").validate(),
            Err(FormError::MissingFields(vec!["email", "password"]))
        );
    }

    #[test]
    fn test_registration_into_request() {
        let request = form().into_request().unwrap();

        assert_eq!(request.fullname, "Ana Torres");
        assert_eq!(request.email, "ana@example.com");
        assert_eq!(request.role, Role::ProjectManager);
    }

    #[test]
    fn test_registration_missing_fullname() {
        let mut f = form();
        f.fullname = String::new();

        assert_eq!(
            f.into_request(),
            Err(FormError::MissingFields(vec!["fullname"]))
        );
    }

    #[test]
    fn test_registration_missing_everything() {
        let result = RegistrationForm::default().into_request();

        assert_eq!(
            result,
            Err(FormError::MissingFields(vec![
                "fullname", "email", "password"
            ]))
        );
    }

    #[test]
    fn test_registration_empty_role_defaults_to_team_member() {
        let mut f = form();
        f.role = String::new();

        assert_eq!(f.into_request().unwrap().role, Role::TeamMember);
    }

    #[test]
    fn test_registration_unknown_role_rejected() {
        let mut f = form();
        f.role = "Owner".to_string();

        assert_eq!(
            f.into_request(),
            Err(FormError::InvalidRole("Owner".to_string()))
        );
    }

    #[test]
    fn test_registration_request_wire_format() {
        let request = form().into_request().unwrap();
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "email": "ana@example.com",
                "password": "secret",
                "fullname": "Ana Torres",
                "role": "ProjectManager"
            })
        );
    }

    #[test]
    fn test_signup_response_without_message() {
        let resp: SignupResponse = serde_json::from_str("{}").unwrap();
        assert!(resp.message.is_none());
    }
}
