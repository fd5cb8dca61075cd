//! Third-party sign-in buttons shown under the login and signup forms. No
//! provider is wired up yet, so a click only announces that.

use crate::{
    components::ui::{Button, ButtonVariant},
    features::notify::{Notice, state::use_toasts},
};
use leptos::{ev::MouseEvent, prelude::*};

const PROVIDERS: [&str; 2] = ["Google", "GitHub"];

#[component]
pub fn SocialLoginButtons() -> impl IntoView {
    let toasts = use_toasts();

    view! {
        <div class="relative my-6">
            <div class="absolute inset-0 flex items-center">
                <span class="w-full border-t border-slate-200 dark:border-slate-800"></span>
            </div>
            <div class="relative flex justify-center text-xs uppercase">
                <span class="bg-white px-2 text-slate-500 dark:bg-slate-900">"Or continue with"</span>
            </div>
        </div>
        <div class="grid grid-cols-2 gap-3">
            {PROVIDERS
                .into_iter()
                .map(|provider| {
                    view! {
                        <Button
                            variant=ButtonVariant::Outline
                            on_click=move |_: MouseEvent| {
                                toasts.push(Notice::info(
                                    "Not available yet",
                                    format!("Sign in with {provider} is coming soon."),
                                ));
                            }
                        >
                            {provider}
                        </Button>
                    }
                })
                .collect_view()}
        </div>
    }
}
