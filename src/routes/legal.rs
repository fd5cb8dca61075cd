//! Static legal pages linked from the footer.

use crate::components::AppShell;
use leptos::prelude::*;

#[component]
pub fn TermsOfServicePage() -> impl IntoView {
    view! {
        <AppShell>
            <LegalContent
                title="Terms of Service"
                body="By using SwiftLogin you agree to use it lawfully and to keep your credentials private."
            />
        </AppShell>
    }
}

#[component]
pub fn PrivacyPolicyPage() -> impl IntoView {
    view! {
        <AppShell>
            <LegalContent
                title="Privacy Policy"
                body="SwiftLogin does not store the data you enter in its forms beyond the current page."
            />
        </AppShell>
    }
}

#[component]
fn LegalContent(title: &'static str, body: &'static str) -> impl IntoView {
    view! {
        <article class="max-w-2xl space-y-4">
            <h1 class="text-2xl font-bold">{title}</h1>
            <p class="text-slate-600 dark:text-slate-300">{body}</p>
        </article>
    }
}
