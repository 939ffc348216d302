//! Dashboard page
//!
//! Restricted to project managers and admins. The navbar hides the link
//! for other roles; the page checks again for visitors who type the URL.

use leptos::prelude::*;
use leptos_router::components::A;

use super::gate::{SessionLoading, SignInRequired};
use crate::core::{AppRoute, SessionState};
use crate::ui::session::use_session_context;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = use_session_context();

    view! {
        <main class="min-h-screen bg-gray-900 px-4 sm:px-6 lg:px-8">
            {move || {
                let state = session.state.get();
                match &state {
                    SessionState::Initializing => view! { <SessionLoading /> }.into_any(),
                    SessionState::Anonymous => view! { <SignInRequired /> }.into_any(),
                    SessionState::Authenticated(current) if state.can_access_dashboard() => {
                        view! {
                            <div class="max-w-7xl mx-auto py-12">
                                <h1 class="text-3xl font-bold text-white">"Dashboard"</h1>
                                <p class="mt-2 text-gray-400">
                                    {format!("{} view for {}", current.role_label(), current.display_name())}
                                </p>
                            </div>
                        }
                        .into_any()
                    }
                    SessionState::Authenticated(_) => view! { <AccessDenied /> }.into_any(),
                }
            }}
        </main>
    }
}

#[component]
fn AccessDenied() -> impl IntoView {
    view! {
        <div class="max-w-md mx-auto text-center py-24">
            <h2 class="text-2xl font-semibold text-white mb-2">"Access denied"</h2>
            <p class="text-gray-400 mb-8">
                "The dashboard is available to project managers and admins."
            </p>
            <A
                href=AppRoute::Home.path()
                attr:class="px-6 py-3 bg-blue-600 hover:bg-blue-700 text-white font-medium rounded-lg transition-colors"
            >
                "Back to home"
            </A>
        </div>
    }
}
