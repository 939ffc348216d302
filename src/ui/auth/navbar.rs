//! Navigation bar
//!
//! Role-gated links for the signed-in user and a confirm-then-sign-out
//! button. Renders nothing until the session has been resolved on the
//! client.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use super::use_auth_flows;
use crate::core::{AppRoute, NavItem, SignOutState, nav_links, toggle_menu};
use crate::ui::icon::{Icon, icons};
use crate::ui::session::use_session_context;

#[component]
pub fn Navbar() -> impl IntoView {
    let session = use_session_context();
    let flows = use_auth_flows();

    let menu_open = RwSignal::new(false);
    let sign_out_state = RwSignal::new(SignOutState::default());

    let on_sign_out = move |_| {
        menu_open.set(false);
        spawn_local(async move {
            flows.sign_out(&sign_out_state).await;
        });
    };

    let render_item = move |item: NavItem| match item.route() {
        Some(route) => view! {
            <A
                href=route.path()
                attr:class="block px-3 py-2 rounded-md text-sm font-medium text-gray-300 hover:bg-gray-700 hover:text-white"
                on:click=move |_| menu_open.set(false)
            >
                {item.label()}
            </A>
        }
        .into_any(),
        None => view! {
            <button
                type="button"
                class="flex items-center gap-2 px-3 py-2 rounded-md text-sm font-medium text-white bg-red-600 hover:bg-red-700 disabled:opacity-50"
                disabled=move || sign_out_state.get() != SignOutState::Idle
                on:click=on_sign_out
            >
                <Icon name=icons::LOGOUT class="h-4 w-4" />
                {item.label()}
            </button>
        }
        .into_any(),
    };

    move || {
        let items = nav_links(&session.state.get())?;

        Some(view! {
            <nav class="bg-gray-800 border-b border-gray-700">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                    <div class="flex items-center justify-between h-16">
                        <A href=AppRoute::Root.path() attr:class="text-xl font-bold text-white">
                            "ProjectFlow"
                        </A>

                        <div class="hidden md:flex items-center gap-4">
                            {items.iter().copied().map(render_item).collect_view()}
                        </div>

                        <button
                            type="button"
                            class="md:hidden p-2 rounded-md text-gray-400 hover:text-white hover:bg-gray-700"
                            aria-label="Toggle menu"
                            aria-expanded=move || menu_open.get().to_string()
                            on:click=move |_| toggle_menu(&menu_open)
                        >
                            {move || {
                                if menu_open.get() {
                                    view! { <Icon name=icons::X class="h-6 w-6" /> }.into_any()
                                } else {
                                    view! { <Icon name=icons::MENU class="h-6 w-6" /> }.into_any()
                                }
                            }}
                        </button>
                    </div>
                </div>

                <Show when=move || menu_open.get()>
                    <div class="md:hidden px-2 pt-2 pb-3 space-y-1">
                        {items.iter().copied().map(render_item).collect_view()}
                    </div>
                </Show>
            </nav>
        })
    }
}
