use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::ui::Navbar;
use crate::ui::notifications::{NoticeHost, provide_notification_center};
use crate::ui::pages::{DashboardPage, HomePage, LoginPage, NotFoundPage, RegisterPage};
use crate::ui::session::provide_session_context;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body class="bg-gray-900">
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    provide_session_context();
    let notices = provide_notification_center();

    view! {
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/projectflow.css"/>

        <Title text="ProjectFlow"/>

        <Router>
            <Navbar />
            <Routes fallback=NotFoundPage>
                <Route path=path!("/") view=HomePage />
                <Route path=path!("/home") view=HomePage />
                <Route path=path!("/dashboard") view=DashboardPage />
                <Route path=path!("/login") view=LoginPage />
                <Route path=path!("/register") view=RegisterPage />
            </Routes>
        </Router>

        <NoticeHost center=notices />
    }
}
