//! Seams between the client flows and the outside world
//!
//! The flows in [`super::flows`] only talk to these traits. The browser
//! implementations live in `crate::ui`; tests use in-memory fakes.

#![allow(async_fn_in_trait)]

use std::cell::{Cell, RefCell};

use super::error::AuthError;
use super::forms::{Credentials, RegistrationRequest, SignInResult, SignupResponse};
use super::notification::{DialogResult, Notice};
use super::route::AppRoute;
use super::session::Session;

/// External authentication service
pub trait AuthClient {
    /// Establish a session without redirecting.
    ///
    /// `Ok` with `ok: false` means the service answered and refused the
    /// credentials; `Err` means the call itself failed.
    async fn sign_in(&self, credentials: &Credentials) -> Result<SignInResult, AuthError>;

    /// End the session on the auth service without redirecting.
    async fn sign_out(&self) -> Result<(), AuthError>;

    async fn sign_up(&self, request: &RegistrationRequest) -> Result<SignupResponse, AuthError>;

    async fn current_session(&self) -> Result<Option<Session>, AuthError>;
}

/// Modal notification widget
pub trait Notifier {
    /// Show a notice without waiting for it to close
    fn notify(&self, notice: Notice);

    /// Show a notice and wait until it is confirmed, cancelled or times out
    async fn prompt(&self, notice: Notice) -> DialogResult;
}

/// Imperative redirect
pub trait Navigator {
    fn navigate(&self, route: AppRoute);
}

/// Single value of local UI state
pub trait UiState<T> {
    fn get(&self) -> T;
    fn set(&self, value: T);
}

impl<T: Copy> UiState<T> for Cell<T> {
    fn get(&self) -> T {
        Cell::get(self)
    }

    fn set(&self, value: T) {
        Cell::set(self, value)
    }
}

impl<T: Clone> UiState<T> for RefCell<T> {
    fn get(&self) -> T {
        self.borrow().clone()
    }

    fn set(&self, value: T) {
        self.replace(value);
    }
}
