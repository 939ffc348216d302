//! Not found page component

use leptos::prelude::*;
use leptos_router::components::A;

use crate::core::AppRoute;

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gray-900 flex flex-col items-center justify-center p-4">
            <div class="text-center">
                <h1 class="text-6xl font-bold text-white mb-4">"404"</h1>

                <h2 class="text-2xl font-semibold text-white mb-2">
                    "Page Not Found"
                </h2>

                <p class="text-gray-400 mb-8 max-w-md mx-auto">
                    "The page you're looking for doesn't exist or has been moved."
                </p>

                <A
                    href=AppRoute::Root.path()
                    attr:class="px-6 py-3 bg-blue-600 hover:bg-blue-700 text-white font-medium rounded-lg transition-colors"
                >
                    "Go Home"
                </A>
            </div>
        </div>
    }
}
