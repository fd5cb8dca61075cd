//! Toast context shared through Leptos. Toasts dismiss themselves after a few
//! seconds or on click.

use super::Notice;
use gloo_timers::callback::Timeout;
use leptos::prelude::*;

/// How long a toast stays on screen.
const TOAST_DISMISS_MS: u32 = 5_000;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub notice: Notice,
}

#[derive(Clone, Copy)]
/// Toast list context shared through Leptos.
pub struct ToastContext {
    toasts: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
}

impl ToastContext {
    fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
        }
    }

    /// Shows a notice and schedules its removal.
    pub fn push(&self, notice: Notice) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        self.toasts.update(|toasts| toasts.push(Toast { id, notice }));

        let toasts = self.toasts;
        Timeout::new(TOAST_DISMISS_MS, move || {
            toasts.try_update(|toasts| toasts.retain(|toast| toast.id != id));
        })
        .forget();
    }

    pub fn dismiss(&self, id: u64) {
        self.toasts.update(|toasts| toasts.retain(|toast| toast.id != id));
    }

    pub fn toasts(&self) -> Signal<Vec<Toast>> {
        self.toasts.into()
    }
}

/// Provides the toast context to the whole app.
#[component]
pub fn ToastProvider(children: Children) -> impl IntoView {
    provide_context(ToastContext::new());

    view! { {children()} }
}

/// Returns the current toast context or a detached one when none is provided.
pub fn use_toasts() -> ToastContext {
    use_context::<ToastContext>().unwrap_or_else(ToastContext::new)
}
