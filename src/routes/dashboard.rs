//! Landing page after a successful login or signup. There is no session, so
//! it only confirms the redirect worked.

use crate::{components::AppShell, routes::paths};
use leptos::prelude::*;
use leptos_router::components::A;

/// Renders the dashboard page shell.
#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <AppShell>
            <div class="max-w-md text-center space-y-4">
                <h1 class="text-2xl font-bold">"Dashboard"</h1>
                <p class="text-slate-500 dark:text-slate-400">"You're signed in to SwiftLogin."</p>
                <A href={paths::LOGIN} {..} class="text-sm font-semibold text-blue-600 hover:underline">
                    "Back to login"
                </A>
            </div>
        </AppShell>
    }
}
