//! Authentication UI module
//!
//! Login and registration forms plus the navigation bar. All three drive
//! the flows in [`crate::core::flows`] with the browser collaborators.

mod login_form;
mod navbar;
mod register_form;

pub use login_form::LoginForm;
pub use navbar::Navbar;
pub use register_form::RegisterForm;

use leptos::prelude::RwSignal;

use crate::core::{AuthFlows, SessionState};
use crate::ui::navigator::RouterNavigator;
use crate::ui::notifications::{NotificationCenter, use_notification_center};
use crate::ui::session::{HttpAuthClient, use_session_context};

/// Flows wired to the browser collaborators
pub type ClientFlows =
    AuthFlows<HttpAuthClient, NotificationCenter, RouterNavigator, RwSignal<SessionState>>;

/// Build the flows from context. Call from a component inside the `<Router>`.
pub fn use_auth_flows() -> ClientFlows {
    AuthFlows::new(
        HttpAuthClient,
        use_notification_center(),
        RouterNavigator::new(),
        use_session_context().state,
    )
}
