//! Authenticated landing page

use leptos::prelude::*;

use super::gate::{SessionLoading, SignInRequired};
use crate::core::SessionState;
use crate::ui::session::use_session_context;

#[component]
pub fn HomePage() -> impl IntoView {
    let session = use_session_context();

    view! {
        <main class="min-h-screen bg-gray-900 px-4 sm:px-6 lg:px-8">
            {move || match session.state.get() {
                SessionState::Initializing => view! { <SessionLoading /> }.into_any(),
                SessionState::Anonymous => view! { <SignInRequired /> }.into_any(),
                SessionState::Authenticated(current) => {
                    view! {
                        <div class="max-w-7xl mx-auto py-12">
                            <h1 class="text-3xl font-bold text-white">
                                {format!("Hello, {}", current.display_name())}
                            </h1>
                            <p class="mt-2 text-gray-400">
                                {format!("Signed in as {}", current.role_label())}
                            </p>
                        </div>
                    }
                    .into_any()
                }
            }}
        </main>
    }
}
