use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::core::{AppRoute, Navigator};

type NavigateFn = Box<dyn Fn(&str, NavigateOptions)>;

/// [`Navigator`] on top of the router's `use_navigate`.
///
/// Must be created inside the `<Router>`; the handle can then be moved
/// into async tasks freely.
#[derive(Clone, Copy)]
pub struct RouterNavigator {
    navigate: StoredValue<NavigateFn, LocalStorage>,
}

impl RouterNavigator {
    pub fn new() -> Self {
        let navigate = use_navigate();
        Self {
            navigate: StoredValue::new_local(Box::new(navigate) as NavigateFn),
        }
    }
}

impl Navigator for RouterNavigator {
    fn navigate(&self, route: AppRoute) {
        let dispatched = self
            .navigate
            .try_with_value(|navigate| navigate(route.path(), Default::default()));
        if dispatched.is_none() {
            leptos::logging::warn!("Navigation to {} dropped: view already unmounted", route);
        }
    }
}
