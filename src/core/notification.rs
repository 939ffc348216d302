//! Modal notices shown to the user
//!
//! A [`Notice`] describes what the modal shows. Rendering it is up to
//! whichever [`Notifier`](super::gateway::Notifier) is in use.

/// Delay before a success notice closes on its own
pub const SUCCESS_TIMER_MS: u32 = 1500;

/// Icon shown at the top of the modal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeIcon {
    Success,
    Error,
    Warning,
    Info,
}

/// Modal notice
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub icon: NoticeIcon,
    pub title: String,
    pub text: String,
    /// Auto-dismiss after this many milliseconds
    pub timer_ms: Option<u32>,
    pub show_confirm_button: bool,
    pub confirm_text: String,
    /// Cancel button label; no cancel button when `None`
    pub cancel_text: Option<String>,
}

impl Notice {
    pub fn new(icon: NoticeIcon, title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            icon,
            title: title.into(),
            text: text.into(),
            timer_ms: None,
            show_confirm_button: true,
            confirm_text: "OK".to_string(),
            cancel_text: None,
        }
    }

    pub fn error(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(NoticeIcon::Error, title, text)
    }

    pub fn success(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(NoticeIcon::Success, title, text)
    }

    /// Close automatically after `ms` with no confirm button
    pub fn with_timer(mut self, ms: u32) -> Self {
        self.timer_ms = Some(ms);
        self.show_confirm_button = false;
        self
    }

    pub fn with_buttons(mut self, confirm: impl Into<String>, cancel: impl Into<String>) -> Self {
        self.show_confirm_button = true;
        self.confirm_text = confirm.into();
        self.cancel_text = Some(cancel.into());
        self
    }

    pub fn is_confirmation(&self) -> bool {
        self.cancel_text.is_some()
    }

    // Canned notices

    pub fn login_required_fields() -> Self {
        Self::error("Required fields", "Please fill in all fields")
    }

    pub fn registration_required_fields() -> Self {
        Self::error("Required fields", "Please fill in all required fields")
    }

    pub fn invalid_role(role: &str) -> Self {
        Self::error("Invalid role", format!("\"{}\" is not a selectable role", role))
    }

    pub fn welcome() -> Self {
        Self::success("Welcome!", "Signed in successfully").with_timer(SUCCESS_TIMER_MS)
    }

    pub fn login_rejected(error: Option<&str>) -> Self {
        let text = error
            .filter(|e| !e.trim().is_empty())
            .unwrap_or("Invalid credentials");
        Self::error("Error", text)
    }

    pub fn registered(message: Option<&str>) -> Self {
        let text = message
            .filter(|m| !m.trim().is_empty())
            .unwrap_or("Account created");
        Self::success("Registration successful!", text).with_timer(SUCCESS_TIMER_MS)
    }

    pub fn registration_failed(message: Option<&str>) -> Self {
        let text = message.unwrap_or("An error occurred during registration");
        Self::error("Error", text)
    }

    pub fn unexpected_error() -> Self {
        Self::error("Error", "An unexpected error occurred")
    }

    pub fn confirm_sign_out() -> Self {
        Self::new(NoticeIcon::Warning, "Are you sure?", "Do you want to log out?")
            .with_buttons("Yes, log out", "Cancel")
    }
}

/// How a modal was closed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DialogResult {
    pub is_confirmed: bool,
}

impl DialogResult {
    pub fn confirmed() -> Self {
        Self { is_confirmed: true }
    }

    /// Cancelled, timed out, replaced or closed
    pub fn dismissed() -> Self {
        Self {
            is_confirmed: false,
        }
    }
}
