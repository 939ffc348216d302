//! Registration page

use leptos::prelude::*;

use crate::ui::auth::RegisterForm;

#[component]
pub fn RegisterPage() -> impl IntoView {
    view! {
        <main class="min-h-screen bg-gray-900 flex items-center justify-center p-4">
            <div class="w-full max-w-4xl bg-gray-800 rounded-2xl shadow-xl overflow-hidden flex">
                <RegisterForm />
                <div class="hidden md:flex md:w-1/2 bg-gradient-to-br from-indigo-700 to-blue-600 p-12 flex-col justify-center">
                    <h2 class="text-4xl font-bold text-white">"Join your team"</h2>
                    <p class="mt-4 text-blue-100">"Pick your role and start collaborating."</p>
                </div>
            </div>
        </main>
    }
}
