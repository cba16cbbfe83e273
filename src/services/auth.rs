use std::time::Duration;

use crate::crypto::token::{AUTH_CODE_SIZE, AUTH_STATE_SIZE, generate_token};
use crate::error::Result;
use crate::models::user::User;

/// How long the simulated provider takes to answer an exchange.
const PROVIDER_LATENCY: Duration = Duration::from_millis(500);

/// Issues an authorization code/state pair for a validated credential.
///
/// This emulates the first leg of an OAuth-style exchange. The pair is opaque
/// and random but is not persisted: there is no server-side store, so
/// single-use is not enforced and `validate_external_auth` accepts any
/// non-empty pair.
///
/// # Returns
///
/// A `Result` containing the `(code, state)` pair as hex strings.
pub fn issue_authorization_code() -> Result<(String, String)> {
    let code = generate_token(AUTH_CODE_SIZE)?;
    let state = generate_token(AUTH_STATE_SIZE)?;

    Ok((code, state))
}

/// Exchanges an authorization code/state pair for a user identity.
///
/// Simulates the external authentication provider, including its response
/// latency. Any non-empty pair passes; a real provider would validate the
/// code against its own store and return the actual account.
///
/// # Arguments
///
/// * `code` - The authorization code from the login step.
/// * `state` - The state value from the login step.
///
/// # Returns
///
/// The authenticated `User`, or `None` when the pair is rejected.
pub async fn validate_external_auth(code: &str, state: &str) -> Result<Option<User>> {
    tokio::time::sleep(PROVIDER_LATENCY).await;

    if code.is_empty() || state.is_empty() {
        tracing::warn!("❌ Authorization exchange rejected: empty code or state");
        return Ok(None);
    }

    let id = generate_token(8)?;
    tracing::debug!("✅ Authorization exchange accepted, user id: {}", id);

    Ok(Some(User {
        id,
        email: "user@example.com".to_string(),
        name: "Demo User".to_string(),
        role: "operator".to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issues_distinct_code_and_state() {
        let (code, state) = issue_authorization_code().unwrap();
        assert_eq!(code.len(), AUTH_CODE_SIZE * 2);
        assert_eq!(state.len(), AUTH_STATE_SIZE * 2);
        assert_ne!(code, state);
    }

    #[tokio::test]
    async fn rejects_empty_pairs() {
        assert!(validate_external_auth("", "abc").await.unwrap().is_none());
        assert!(validate_external_auth("abc", "").await.unwrap().is_none());
        assert!(validate_external_auth("", "").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn accepts_any_non_empty_pair() {
        let user = validate_external_auth("abc", "def")
            .await
            .unwrap()
            .expect("non-empty pair must pass");

        assert_eq!(user.id.len(), 16);
        assert_eq!(user.role, "operator");
    }
}
