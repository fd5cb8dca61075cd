//! Sign-up page.

use crate::components::{AppShell, AuthForm};
use crate::features::auth::mode::AuthMode;
use leptos::prelude::*;

#[component]
pub fn SignUpPage() -> impl IntoView {
    view! {
        <AppShell>
            <AuthForm mode=AuthMode::SignUp />
        </AppShell>
    }
}
