//! Route paths shared by the router, links and redirects.

pub const LOGIN: &str = "/";
pub const SIGN_UP: &str = "/sign-up";
pub const FORGOT_PASSWORD: &str = "/forgot-password";
pub const DASHBOARD: &str = "/dashboard";
pub const TERMS_OF_SERVICE: &str = "/terms-of-service";
pub const PRIVACY_POLICY: &str = "/privacy-policy";
