//! HTTP helpers for the auth API with a fixed timeout and sanitized errors.
//! The helpers never log request bodies; auth payloads carry passwords.

use super::{config::AppConfig, errors::AppError, join_url, sanitize_body};
use gloo_net::http::Request;
use gloo_timers::callback::Timeout;
use serde::Serialize;
use serde_json::to_string;
use web_sys::{AbortController, RequestCredentials};

/// Default request timeout (milliseconds) applied to all HTTP helpers.
const DEFAULT_TIMEOUT_MS: u32 = 10_000;

/// Posts JSON with cookies and expects an empty (or ignored) response body.
pub async fn post_json<B: Serialize>(path: &str, body: &B) -> Result<(), AppError> {
    let url = join_url(&AppConfig::load().api_base_url, path);
    let payload = to_string(body)
        .map_err(|err| AppError::Serialization(format!("Failed to encode request: {err}")))?;
    let response = send_with_timeout(move |signal| {
        Request::post(&url)
            .header("Content-Type", "application/json")
            .credentials(RequestCredentials::Include)
            .abort_signal(Some(signal))
            .body(payload)
            .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
    })
    .await?;

    if response.ok() {
        Ok(())
    } else {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Err(AppError::Http {
            status,
            message: sanitize_body(&body),
        })
    }
}

/// An aborted fetch means our timeout fired; anything else is a network failure.
fn map_request_error(err: &gloo_net::Error) -> AppError {
    let message = err.to_string();
    if message.to_lowercase().contains("abort") {
        AppError::Timeout(format!(
            "No response after {} seconds. Please try again.",
            DEFAULT_TIMEOUT_MS / 1_000
        ))
    } else {
        AppError::Network(format!("Unable to reach the server: {message}"))
    }
}

/// Sends a request with an abort timeout to avoid hanging the submit button.
async fn send_with_timeout(
    build_request: impl FnOnce(&web_sys::AbortSignal) -> Result<Request, AppError>,
) -> Result<gloo_net::http::Response, AppError> {
    let controller = AbortController::new()
        .map_err(|_| AppError::Config("Failed to initialize request timeout.".to_string()))?;
    let signal = controller.signal();
    let timeout_controller = controller.clone();
    let _timeout = Timeout::new(DEFAULT_TIMEOUT_MS, move || timeout_controller.abort());

    let request = build_request(&signal)?;
    request.send().await.map_err(|err| map_request_error(&err))
}
