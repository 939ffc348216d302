//! Register form component
//!
//! Collects full name, email, password and a role. The role select offers
//! exactly the three known roles and starts on `TeamMember`.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use super::use_auth_flows;
use crate::core::{AppRoute, RegistrationForm, Role};
use crate::ui::icon::{Icon, icons};

/// Register form component
#[component]
pub fn RegisterForm() -> impl IntoView {
    let flows = use_auth_flows();

    // Form state
    let fullname = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let role = RwSignal::new(Role::default().as_str().to_string());
    let show_password = RwSignal::new(false);
    let is_loading = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let form = RegistrationForm {
            fullname: fullname.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
            role: role.get_untracked(),
        };
        spawn_local(async move {
            flows.register(&is_loading, form).await;
        });
    };

    view! {
        <div class="w-full md:w-1/2 py-10 px-6 sm:px-12">
            <div class="text-center mb-10">
                <h1 class="text-3xl font-bold text-white">"Create Account"</h1>
                <p class="text-gray-400 mt-2">"Fill in your details to get started"</p>
            </div>

            <form on:submit=on_submit class="space-y-6">
                <input
                    class="input-auth"
                    type="text"
                    name="fullname"
                    autocomplete="name"
                    placeholder="Full name"
                    prop:value=move || fullname.get()
                    on:input=move |ev| fullname.set(event_target_value(&ev))
                    disabled=move || is_loading.get()
                />

                <input
                    class="input-auth"
                    type="email"
                    name="email"
                    autocomplete="email"
                    placeholder="Email address"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                    disabled=move || is_loading.get()
                />

                <div class="relative">
                    <input
                        class="input-auth pr-10"
                        type=move || if show_password.get() { "text" } else { "password" }
                        name="password"
                        autocomplete="new-password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                        disabled=move || is_loading.get()
                    />
                    <button
                        type="button"
                        class="absolute inset-y-0 right-0 pr-3 flex items-center text-gray-400 hover:text-gray-200"
                        on:click=move |_| show_password.update(|v| *v = !*v)
                    >
                        {move || {
                            if show_password.get() {
                                view! { <Icon name=icons::EYE_CLOSED class="h-5 w-5" /> }.into_any()
                            } else {
                                view! { <Icon name=icons::EYE class="h-5 w-5" /> }.into_any()
                            }
                        }}
                    </button>
                </div>

                <div>
                    <label for="role" class="block text-sm font-medium text-gray-300 mb-1">
                        "Role"
                    </label>
                    <select
                        id="role"
                        name="role"
                        class="input-auth"
                        prop:value=move || role.get()
                        on:change=move |ev| role.set(event_target_value(&ev))
                        disabled=move || is_loading.get()
                    >
                        {Role::ALL
                            .iter()
                            .map(|option| {
                                view! {
                                    <option value=option.as_str()>{option.label()}</option>
                                }
                            })
                            .collect_view()}
                    </select>
                </div>

                <button
                    type="submit"
                    class="btn-auth"
                    disabled=move || is_loading.get()
                >
                    {move || {
                        if is_loading.get() {
                            view! {
                                <span class="flex items-center justify-center">
                                    <Icon name=icons::LOADER class="animate-spin -ml-1 mr-2 h-4 w-4" />
                                    "Registering..."
                                </span>
                            }.into_any()
                        } else {
                            view! { <span class="block">"Sign Up"</span> }.into_any()
                        }
                    }}
                </button>
            </form>

            <div class="mt-8 text-center">
                <p class="text-gray-400">
                    "Already have an account? "
                    <A href=AppRoute::Login.path() attr:class="text-blue-500 hover:text-blue-400 font-medium">
                        "Sign in"
                    </A>
                </p>
            </div>
        </div>
    }
}
