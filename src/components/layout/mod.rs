//! Layout components shared across routes.

mod app_shell;
mod footer;

pub(crate) use app_shell::AppShell;
use footer::Footer;
