#[cfg(target_arch = "wasm32")]
mod dashboard;
#[cfg(target_arch = "wasm32")]
mod forgot_password;
#[cfg(target_arch = "wasm32")]
mod legal;
#[cfg(target_arch = "wasm32")]
mod login;
#[cfg(target_arch = "wasm32")]
mod not_found;
pub(crate) mod paths;
#[cfg(target_arch = "wasm32")]
mod signup;

#[cfg(target_arch = "wasm32")]
use {
    dashboard::DashboardPage,
    forgot_password::ForgotPasswordPage,
    legal::{PrivacyPolicyPage, TermsOfServicePage},
    leptos::prelude::*,
    leptos_router::components::{Route, Routes},
    leptos_router::path,
    login::LoginPage,
    not_found::NotFoundPage,
    signup::SignUpPage,
};

#[cfg(target_arch = "wasm32")]
#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <NotFoundPage /> }>
            <Route path=path!("/") view=LoginPage />
            <Route path=path!("/sign-up") view=SignUpPage />
            <Route path=path!("/forgot-password") view=ForgotPasswordPage />
            <Route path=path!("/dashboard") view=DashboardPage />
            <Route path=path!("/terms-of-service") view=TermsOfServicePage />
            <Route path=path!("/privacy-policy") view=PrivacyPolicyPage />
            <Route path=path!("/*any") view=NotFoundPage />
        </Routes>
    }
}
