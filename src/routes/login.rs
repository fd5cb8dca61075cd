//! Login page.

use crate::components::{AppShell, AuthForm};
use crate::features::auth::mode::AuthMode;
use leptos::prelude::*;

#[component]
pub fn LoginPage() -> impl IntoView {
    view! {
        <AppShell>
            <AuthForm mode=AuthMode::Login />
        </AppShell>
    }
}
