//! Login, registration and sign-out flows
//!
//! Each flow is: local validation, one call to the auth service, a
//! notice, and on success a redirect. Every path ends in a visible
//! notice or a redirect, and the busy flag is cleared on every exit.

use leptos::logging::{error, log, warn};

use super::error::FormError;
use super::forms::{Credentials, RegistrationForm};
use super::gateway::{AuthClient, Navigator, Notifier, UiState};
use super::notification::Notice;
use super::route::AppRoute;
use super::session::SessionState;

/// Holds a form's busy flag for the duration of one submission
pub struct BusyGuard<'a, B: UiState<bool>> {
    flag: &'a B,
}

impl<'a, B: UiState<bool>> BusyGuard<'a, B> {
    /// Returns `None` if a submission is already in flight
    pub fn acquire(flag: &'a B) -> Option<Self> {
        if flag.get() {
            return None;
        }
        flag.set(true);
        Some(Self { flag })
    }
}

impl<B: UiState<bool>> Drop for BusyGuard<'_, B> {
    fn drop(&mut self) {
        self.flag.set(false);
    }
}

/// Result of a form submission
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Another submission was still running
    Ignored,
    /// Client-side validation failed, nothing was sent
    Invalid(FormError),
    Succeeded,
    /// The auth service refused the request
    Rejected,
    /// The call failed unexpectedly
    Failed,
}

/// Sign-out progress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SignOutState {
    #[default]
    Idle,
    ConfirmationPending,
    SigningOut,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignOutEvent {
    Requested,
    Confirmed,
    Declined,
    Completed,
}

impl SignOutState {
    /// Next state, or `None` if the event is not valid here
    pub fn next(self, event: SignOutEvent) -> Option<SignOutState> {
        use SignOutEvent::*;
        use SignOutState::*;

        match (self, event) {
            (Idle, Requested) => Some(ConfirmationPending),
            (ConfirmationPending, Confirmed) => Some(SigningOut),
            (ConfirmationPending, Declined) => Some(Idle),
            (SigningOut, Completed) => Some(Idle),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignOutOutcome {
    /// A sign-out was already in progress
    Ignored,
    Declined,
    SignedOut,
}

/// Apply a sign-out event; `false` if it is not valid in the current state
fn advance<S: UiState<SignOutState>>(state: &S, event: SignOutEvent) -> bool {
    match state.get().next(event) {
        Some(next) => {
            state.set(next);
            true
        }
        None => false,
    }
}

/// Entries of the navigation bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavItem {
    Home,
    Dashboard,
    SignOut,
}

impl NavItem {
    pub fn label(&self) -> &'static str {
        match self {
            NavItem::Home => "Home",
            NavItem::Dashboard => "Dashboard",
            NavItem::SignOut => "Log out",
        }
    }

    /// Link target; `None` for actions
    pub fn route(&self) -> Option<AppRoute> {
        match self {
            NavItem::Home => Some(AppRoute::Home),
            NavItem::Dashboard => Some(AppRoute::Dashboard),
            NavItem::SignOut => None,
        }
    }
}

/// Navigation entries for a session state.
///
/// `None` while the client is still initializing: the bar renders nothing.
pub fn nav_links(state: &SessionState) -> Option<Vec<NavItem>> {
    match state {
        SessionState::Initializing => None,
        SessionState::Anonymous => Some(Vec::new()),
        SessionState::Authenticated(_) => {
            let mut items = vec![NavItem::Home];
            if state.can_access_dashboard() {
                items.push(NavItem::Dashboard);
            }
            items.push(NavItem::SignOut);
            Some(items)
        }
    }
}

/// Flip the mobile menu
pub fn toggle_menu(open: &impl UiState<bool>) {
    open.set(!open.get());
}

/// The collaborators a flow needs
#[derive(Clone, Copy)]
pub struct AuthFlows<A, N, R, S> {
    pub auth: A,
    pub notifier: N,
    pub navigator: R,
    /// Client-side session state the flows keep in sync
    pub session: S,
}

impl<A, N, R, S> AuthFlows<A, N, R, S>
where
    A: AuthClient,
    N: Notifier,
    R: Navigator,
    S: UiState<SessionState>,
{
    pub fn new(auth: A, notifier: N, navigator: R, session: S) -> Self {
        Self {
            auth,
            notifier,
            navigator,
            session,
        }
    }

    /// Reload the session after sign-in. A failure leaves the state as it
    /// is; the sign-in itself already succeeded.
    async fn refresh_session(&self) {
        match self.auth.current_session().await {
            Ok(session) => self.session.set(SessionState::from_session(session)),
            Err(err) => warn!("Signed in but the session could not be loaded: {}", err),
        }
    }

    /// Submit the login form. Redirects to `/home` on success.
    pub async fn login<B: UiState<bool>>(
        &self,
        busy: &B,
        credentials: Credentials,
    ) -> SubmitOutcome {
        let Some(_guard) = BusyGuard::acquire(busy) else {
            return SubmitOutcome::Ignored;
        };

        if let Err(err) = credentials.validate() {
            self.notifier.notify(Notice::login_required_fields());
            return SubmitOutcome::Invalid(err);
        }

        match self.auth.sign_in(&credentials).await {
            Ok(result) if result.ok => {
                log!("Signed in as {}", credentials.email);
                self.refresh_session().await;
                self.notifier.prompt(Notice::welcome()).await;
                self.navigator.navigate(AppRoute::Home);
                SubmitOutcome::Succeeded
            }
            Ok(result) => {
                log!("Sign-in refused: {:?}", result.error);
                self.notifier
                    .notify(Notice::login_rejected(result.error.as_deref()));
                SubmitOutcome::Rejected
            }
            Err(err) => {
                error!("Sign-in failed: {}", err);
                self.notifier.notify(Notice::unexpected_error());
                SubmitOutcome::Failed
            }
        }
    }

    /// Submit the registration form. Redirects to `/dashboard` on success.
    pub async fn register<B: UiState<bool>>(
        &self,
        busy: &B,
        form: RegistrationForm,
    ) -> SubmitOutcome {
        let Some(_guard) = BusyGuard::acquire(busy) else {
            return SubmitOutcome::Ignored;
        };

        let request = match form.into_request() {
            Ok(request) => request,
            Err(err) => {
                let notice = match &err {
                    FormError::MissingFields(_) => Notice::registration_required_fields(),
                    FormError::InvalidRole(role) => Notice::invalid_role(role),
                };
                self.notifier.notify(notice);
                return SubmitOutcome::Invalid(err);
            }
        };

        match self.auth.sign_up(&request).await {
            Ok(response) => {
                log!("Registered {} as {}", request.email, request.role);
                self.notifier
                    .prompt(Notice::registered(response.message.as_deref()))
                    .await;
                self.navigator.navigate(AppRoute::Dashboard);
                SubmitOutcome::Succeeded
            }
            Err(err) if err.is_request_error() => {
                error!("Signup failed: {}", err);
                self.notifier
                    .notify(Notice::registration_failed(err.service_message()));
                SubmitOutcome::Rejected
            }
            Err(err) => {
                error!("Signup failed: {}", err);
                self.notifier.notify(Notice::unexpected_error());
                SubmitOutcome::Failed
            }
        }
    }

    /// Ask for confirmation, then clear the session and go to `/login`.
    /// Declining leaves everything as it was.
    pub async fn sign_out<P: UiState<SignOutState>>(&self, state: &P) -> SignOutOutcome {
        if !advance(state, SignOutEvent::Requested) {
            return SignOutOutcome::Ignored;
        }

        let answer = self.notifier.prompt(Notice::confirm_sign_out()).await;
        if !answer.is_confirmed {
            advance(state, SignOutEvent::Declined);
            return SignOutOutcome::Declined;
        }

        advance(state, SignOutEvent::Confirmed);
        if let Err(err) = self.auth.sign_out().await {
            warn!("Sign-out call failed, session cleared locally: {}", err);
        }
        self.session.set(SessionState::Anonymous);
        advance(state, SignOutEvent::Completed);

        self.navigator.navigate(AppRoute::Login);
        SignOutOutcome::SignedOut
    }
}
