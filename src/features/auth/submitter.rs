//! Submission backends for the auth form. Without an API base URL the form
//! waits a fixed delay and reports success; with one it posts the credentials
//! as JSON. Both go through the same controller state machine.

use super::mode::AuthMode;
use crate::app_lib::config::AppConfig;

/// Submitter chosen from configuration at mount time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthSubmitter {
    /// Resolves successfully after `delay_ms`.
    Simulated { delay_ms: u32 },
    /// Posts to the configured auth API.
    Api,
}

impl AuthSubmitter {
    pub fn from_config(config: &AppConfig) -> Self {
        if config.has_api() {
            AuthSubmitter::Api
        } else {
            AuthSubmitter::Simulated {
                delay_ms: config.submit_delay_ms,
            }
        }
    }
}

/// API path that receives the credentials of `mode`.
pub const fn endpoint(mode: AuthMode) -> &'static str {
    match mode {
        AuthMode::Login => "/v1/auth/login",
        AuthMode::SignUp => "/v1/auth/signup",
        AuthMode::ForgotPassword => "/v1/auth/forgot-password",
    }
}

#[cfg(target_arch = "wasm32")]
impl super::controller::Submitter for AuthSubmitter {
    async fn submit(
        &self,
        credentials: super::schema::Credentials,
    ) -> Result<(), crate::app_lib::AppError> {
        match *self {
            AuthSubmitter::Simulated { delay_ms } => {
                gloo_timers::future::TimeoutFuture::new(delay_ms).await;
                Ok(())
            }
            AuthSubmitter::Api => super::client::submit(&credentials).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{AuthSubmitter, endpoint};
    use crate::{app_lib::config::AppConfig, features::auth::mode::AuthMode};

    #[test]
    fn from_config_simulates_without_api() {
        let config = AppConfig {
            submit_delay_ms: 20,
            ..AppConfig::default()
        };

        assert_eq!(
            AuthSubmitter::from_config(&config),
            AuthSubmitter::Simulated { delay_ms: 20 }
        );
    }

    #[test]
    fn from_config_uses_api_when_configured() {
        let config = AppConfig {
            api_base_url: "https://api.swiftlogin.dev".to_string(),
            ..AppConfig::default()
        };

        assert_eq!(AuthSubmitter::from_config(&config), AuthSubmitter::Api);
    }

    #[test]
    fn endpoints_are_distinct_per_mode() {
        assert_eq!(endpoint(AuthMode::Login), "/v1/auth/login");
        assert_eq!(endpoint(AuthMode::SignUp), "/v1/auth/signup");
        assert_eq!(endpoint(AuthMode::ForgotPassword), "/v1/auth/forgot-password");
    }
}
