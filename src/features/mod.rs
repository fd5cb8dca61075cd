//! Feature modules that hold form rules and UI-independent state.

pub(crate) mod auth;
pub(crate) mod notify;
