//! Placeholders shown while a page waits for, or lacks, a session

use leptos::prelude::*;
use leptos_router::components::A;

use crate::core::AppRoute;
use crate::ui::icon::{Icon, icons};

#[component]
pub fn SessionLoading() -> impl IntoView {
    view! {
        <div class="flex items-center justify-center py-24">
            <Icon name=icons::LOADER class="animate-spin h-8 w-8" />
        </div>
    }
}

/// Shown to visitors without a session
#[component]
pub fn SignInRequired() -> impl IntoView {
    view! {
        <div class="max-w-md mx-auto text-center py-24">
            <h2 class="text-2xl font-semibold text-white mb-2">"Sign in required"</h2>
            <p class="text-gray-400 mb-8">"You need to be signed in to view this page."</p>
            <A
                href=AppRoute::Login.path()
                attr:class="px-6 py-3 bg-blue-600 hover:bg-blue-700 text-white font-medium rounded-lg transition-colors"
            >
                "Sign In"
            </A>
        </div>
    }
}
