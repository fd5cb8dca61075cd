//! Shared page chrome: brand header, centered main area and footer. It holds
//! no state; pages pass their content as children.

use super::Footer;
use crate::routes::paths;
use leptos::prelude::*;
use leptos_router::components::A;

/// Wraps a page with the header and footer.
#[component]
pub fn AppShell(children: Children) -> impl IntoView {
    view! {
        <div class="flex min-h-screen flex-col bg-white text-slate-900 dark:bg-slate-950 dark:text-slate-100">
            <header class="w-full border-b border-slate-200/60 bg-white/95 backdrop-blur dark:border-slate-800 dark:bg-slate-950/80">
                <div class="container mx-auto flex h-14 items-center px-4">
                    <A href={paths::LOGIN} {..} class="flex items-center gap-2 text-lg font-bold">
                        <span class="material-symbols-outlined text-xl text-blue-600">"login"</span>
                        <span>"SwiftLogin"</span>
                    </A>
                </div>
            </header>
            <main class="flex flex-1 items-center justify-center p-4">
                {children()}
            </main>
            <Footer />
        </div>
    }
}
