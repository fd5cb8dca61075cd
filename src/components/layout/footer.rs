use crate::{app_lib::GIT_COMMIT_HASH, routes::paths};
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn Footer() -> impl IntoView {
    let year = js_sys::Date::new_0().get_full_year();

    view! {
        <footer class="w-full border-t border-slate-200/60 bg-white/95 dark:border-slate-800 dark:bg-slate-950/80">
            <div class="container mx-auto flex flex-col items-center justify-between gap-4 px-4 py-5 text-sm text-slate-500 md:h-16 md:flex-row md:py-0 dark:text-slate-400">
                <p title=format!("Build {GIT_COMMIT_HASH}")>
                    {format!("© {year} SwiftLogin. All rights reserved.")}
                </p>
                <nav class="flex items-center gap-4">
                    <A href={paths::TERMS_OF_SERVICE} {..} class="transition-colors hover:text-slate-900 dark:hover:text-white">
                        "Terms of Service"
                    </A>
                    <A href={paths::PRIVACY_POLICY} {..} class="transition-colors hover:text-slate-900 dark:hover:text-white">
                        "Privacy Policy"
                    </A>
                </nav>
            </div>
        </footer>
    }
}
