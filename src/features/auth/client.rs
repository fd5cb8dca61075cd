//! Client wrapper for the auth API. The request body is the validated
//! credentials of the submitting mode and must never be logged.

use super::{schema::Credentials, submitter::endpoint};
use crate::app_lib::{AppError, api::post_json};

/// Posts credentials to the endpoint of their mode.
pub async fn submit(credentials: &Credentials) -> Result<(), AppError> {
    post_json(endpoint(credentials.mode()), credentials).await
}
