use reqwest::Client;

use crate::error::Result;
use crate::models::user::CreateUserPayload;

/// Forwards a user-registration payload to the external registry API.
///
/// No retry and no idempotency key: a failed call surfaces as an upstream
/// error to the caller.
///
/// # Arguments
///
/// * `http` - The shared HTTP client.
/// * `base_url` - The base URL of the registry API.
/// * `payload` - The registration payload to forward.
///
/// # Returns
///
/// A `Result<()>`.
pub async fn create_user(http: &Client, base_url: &str, payload: &CreateUserPayload) -> Result<()> {
    tracing::debug!("📝 Forwarding user registration for: {}", payload.email);

    http.post(format!("{}/users/create", base_url))
        .json(payload)
        .send()
        .await?
        .error_for_status()?;

    tracing::info!("✅ User registration forwarded: {}", payload.email);

    Ok(())
}
