//! Alert banners for inline success and error messages. Messages must be safe
//! to render and should never include secrets.

use crate::features::notify::NoticeKind;
use leptos::prelude::*;

/// Border and color classes for a notice style, shared with the toaster.
pub fn notice_classes(kind: NoticeKind) -> &'static str {
    match kind {
        NoticeKind::Error => {
            "border-red-200 bg-red-50 text-red-700 dark:border-red-400 dark:bg-red-900/30 dark:text-red-200"
        }
        NoticeKind::Success => {
            "border-emerald-200 bg-emerald-50 text-emerald-700 dark:border-emerald-400 dark:bg-emerald-900/30 dark:text-emerald-200"
        }
        NoticeKind::Info => {
            "border-blue-200 bg-blue-50 text-blue-700 dark:border-blue-400 dark:bg-blue-900/30 dark:text-blue-200"
        }
    }
}

/// Renders a styled alert banner.
#[component]
pub fn Alert(kind: NoticeKind, message: String) -> impl IntoView {
    let class = format!("rounded-lg border px-4 py-3 text-sm {}", notice_classes(kind));

    view! { <div class=class role="alert">{message}</div> }
}
