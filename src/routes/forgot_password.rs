//! Password reset request page; it never navigates on success.

use crate::components::{AppShell, AuthForm};
use crate::features::auth::mode::AuthMode;
use leptos::prelude::*;

#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    view! {
        <AppShell>
            <AuthForm mode=AuthMode::ForgotPassword />
        </AppShell>
    }
}
