//! Login page

use leptos::prelude::*;

use crate::ui::auth::LoginForm;

#[component]
pub fn LoginPage() -> impl IntoView {
    view! {
        <main class="min-h-screen bg-gray-900 flex items-center justify-center p-4">
            <div class="w-full max-w-4xl bg-gray-800 rounded-2xl shadow-xl overflow-hidden flex">
                <div class="hidden md:flex md:w-1/2 bg-gradient-to-br from-blue-600 to-indigo-700 p-12 flex-col justify-center">
                    <h2 class="text-4xl font-bold text-white">"Welcome back"</h2>
                    <p class="mt-4 text-blue-100">"Sign in to keep track of your team's projects."</p>
                </div>
                <LoginForm />
            </div>
        </main>
    }
}
