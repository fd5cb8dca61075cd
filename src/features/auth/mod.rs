//! Auth form feature: modes, validation schemas, the form controller and the
//! submitters it drives. Everything except the browser submitters is plain
//! Rust so the form rules can be unit-tested natively.
//!
//! Flow Overview: a page fixes a mode, the controller validates input against
//! the mode's schema, and a valid submit hands typed credentials to the
//! configured submitter. Credentials carry passwords and must never be logged.

#[cfg(target_arch = "wasm32")]
pub(crate) mod client;
pub(crate) mod controller;
pub(crate) mod mode;
pub(crate) mod schema;
pub(crate) mod submitter;
