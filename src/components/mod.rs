//! Shared UI components exported for routes.

mod auth_form;
pub(crate) mod layout;
mod social_login;
pub(crate) mod ui;

pub(crate) use auth_form::AuthForm;
pub(crate) use layout::AppShell;
pub(crate) use ui::Toaster;
