//! Client logic for authentication, session state and role-gated navigation

#[cfg(feature = "ssr")]
pub mod auth_proxy;
#[cfg(feature = "ssr")]
pub mod config;
pub mod error;
pub mod flows;
pub mod forms;
pub mod gateway;
pub mod notification;
pub mod role;
pub mod route;
pub mod session;
pub mod wire;

pub use error::{AuthError, FormError};
pub use flows::{
    AuthFlows, BusyGuard, NavItem, SignOutEvent, SignOutOutcome, SignOutState, SubmitOutcome,
    nav_links, toggle_menu,
};
pub use forms::{Credentials, RegistrationForm, RegistrationRequest, SignInResult, SignupResponse};
pub use gateway::{AuthClient, Navigator, Notifier, UiState};
pub use notification::{DialogResult, Notice, NoticeIcon, SUCCESS_TIMER_MS};
pub use role::{Role, can_access_dashboard};
pub use route::AppRoute;
pub use session::{Session, SessionState, SessionUser};
