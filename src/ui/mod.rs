pub mod auth;
pub mod common;
pub mod icon;
pub mod navigator;
pub mod notifications;
pub mod pages;
pub mod session;

pub use auth::{LoginForm, Navbar, RegisterForm};
pub use icon::{Icon, icons};
pub use notifications::NoticeHost;

use leptos::prelude::{GetUntracked, RwSignal, Set};

use crate::core::UiState;

// Flows outlive the view that started them; a disposed signal reads as the
// default and swallows writes.
impl<T> UiState<T> for RwSignal<T>
where
    T: Clone + Default + Send + Sync + 'static,
{
    fn get(&self) -> T {
        self.try_get_untracked().unwrap_or_default()
    }

    fn set(&self, value: T) {
        let _ = self.try_set(value);
    }
}
