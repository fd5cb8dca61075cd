use crate::components::Toaster;
use crate::features::notify::state::ToastProvider;
use crate::routes::AppRoutes;
use leptos::prelude::*;
use leptos_router::components::Router;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <ToastProvider>
            <Router>
                <AppRoutes />
            </Router>
            <Toaster />
        </ToastProvider>
    }
}
