//! Fixed-position stack of toasts from the toast context.

use super::alert::notice_classes;
use crate::features::notify::state::{Toast, use_toasts};
use leptos::prelude::*;

/// Renders active toasts in the bottom-right corner.
#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = use_toasts();

    view! {
        <div class="fixed bottom-4 right-4 z-50 flex w-full max-w-sm flex-col gap-2 px-4 sm:px-0" aria-live="polite">
            <For
                each=move || toasts.toasts().get()
                key=|toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    let class = format!(
                        "cursor-pointer rounded-lg border px-4 py-3 shadow-lg {}",
                        notice_classes(toast.notice.kind),
                    );
                    view! {
                        <div class=class role="status" on:click=move |_| toasts.dismiss(id)>
                            <p class="text-sm font-semibold">{toast.notice.title}</p>
                            <p class="text-sm">{toast.notice.message}</p>
                        </div>
                    }
                }
            />
        </div>
    }
}
