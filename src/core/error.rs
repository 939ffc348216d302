//! Error types shared by the client flows

/// Failure talking to the external auth service
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AuthError {
    /// Service answered with a non-success status
    #[error("Request rejected ({status}): {}", .message.as_deref().unwrap_or("no message"))]
    Rejected {
        status: u16,
        message: Option<String>,
    },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid response: {0}")]
    Decode(String),

    /// Called from a context that cannot reach the service (server render)
    #[error("Auth service unavailable")]
    Unavailable,
}

impl AuthError {
    /// Message supplied by the service, if any
    pub fn service_message(&self) -> Option<&str> {
        match self {
            AuthError::Rejected { message, .. } => {
                message.as_deref().filter(|m| !m.trim().is_empty())
            }
            _ => None,
        }
    }

    /// Whether the failure happened at the request level (non-2xx or transport)
    pub fn is_request_error(&self) -> bool {
        matches!(self, AuthError::Rejected { .. } | AuthError::Network(_))
    }
}

/// Client-side validation failure
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FormError {
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    #[error("Invalid role: {0}")]
    InvalidRole(String),
}
