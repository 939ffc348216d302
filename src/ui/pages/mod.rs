//! Application pages module
//!
//! - Login and register pages
//! - Home (also served at `/`)
//! - Dashboard, restricted by role

mod dashboard;
mod gate;
mod home;
mod login;
mod not_found;
mod register;

pub use dashboard::DashboardPage;
pub use home::HomePage;
pub use login::LoginPage;
pub use not_found::NotFoundPage;
pub use register::RegisterPage;
