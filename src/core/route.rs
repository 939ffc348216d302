/// Named routes the client redirects to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppRoute {
    Root,
    Home,
    Dashboard,
    Login,
    Register,
}

impl AppRoute {
    pub fn path(&self) -> &'static str {
        match self {
            AppRoute::Root => "/",
            AppRoute::Home => "/home",
            AppRoute::Dashboard => "/dashboard",
            AppRoute::Login => "/login",
            AppRoute::Register => "/register",
        }
    }
}

impl std::fmt::Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path())
    }
}
