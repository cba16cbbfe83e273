use base64::{Engine as _, engine::general_purpose};
use chrono::Utc;

use crate::crypto::token::{SESSION_NONCE_SIZE, generate_token};
use crate::error::{AppError, Result};
use crate::models::session::Session;
use crate::models::user::User;

/// The number of milliseconds in a day.
const DAY_MILLIS: i64 = 24 * 60 * 60 * 1000;

/// Creates an opaque session token for a user.
///
/// The token is self-contained: the session (user, nonce, expiry) is
/// serialized to JSON and base64-encoded, so validation needs no server-side
/// lookup. The flip side is that a captured token cannot be revoked before it
/// expires; logout only removes the client-held copy.
///
/// # Arguments
///
/// * `user` - The authenticated user.
/// * `duration_days` - The session time-to-live in days.
///
/// # Returns
///
/// A `Result` containing the encoded token.
pub fn create_token(user: User, duration_days: i64) -> Result<String> {
    let session = Session {
        user,
        token: generate_token(SESSION_NONCE_SIZE)?,
        expires_at: Utc::now().timestamp_millis() + duration_days * DAY_MILLIS,
    };

    let json = sonic_rs::to_string(&session)
        .map_err(|e| AppError::Internal(format!("Session serialization failed: {}", e)))?;

    Ok(general_purpose::STANDARD.encode(json))
}

/// Validates and decodes a session token.
///
/// Returns `None` on any parse failure or when the session has expired;
/// callers must treat both cases identically (no session). This function
/// never panics and never surfaces an error.
///
/// # Arguments
///
/// * `token` - The encoded token from the session cookie.
///
/// # Returns
///
/// The decoded `Session` if it is well-formed and unexpired.
pub fn decode_token(token: &str) -> Option<Session> {
    let bytes = general_purpose::STANDARD.decode(token).ok()?;
    let json = String::from_utf8(bytes).ok()?;
    let session: Session = sonic_rs::from_str(&json).ok()?;

    if session.expires_at < Utc::now().timestamp_millis() {
        return None;
    }

    Some(session)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo_user() -> User {
        User {
            id: "a1b2c3d4e5f60708".to_string(),
            email: "user@example.com".to_string(),
            name: "Demo User".to_string(),
            role: "operator".to_string(),
        }
    }

    /// Encodes a session by hand, bypassing `create_token`, so tests can
    /// control the expiry.
    fn encode_session(session: &Session) -> String {
        general_purpose::STANDARD.encode(sonic_rs::to_string(session).unwrap())
    }

    #[test]
    fn round_trips_a_fresh_token() {
        let token = create_token(demo_user(), 7).unwrap();
        let session = decode_token(&token).expect("fresh token must decode");

        assert_eq!(session.user, demo_user());
        assert_eq!(session.token.len(), SESSION_NONCE_SIZE * 2);
        assert!(session.expires_at > Utc::now().timestamp_millis());
    }

    #[test]
    fn rejects_an_expired_token() {
        let session = Session {
            user: demo_user(),
            token: "deadbeef".to_string(),
            expires_at: Utc::now().timestamp_millis() - 1_000,
        };

        assert!(decode_token(&encode_session(&session)).is_none());
    }

    #[test]
    fn uses_camel_case_on_the_wire() {
        let token = create_token(demo_user(), 7).unwrap();
        let json = String::from_utf8(general_purpose::STANDARD.decode(token).unwrap()).unwrap();

        assert!(json.contains("\"expiresAt\""));
        assert!(!json.contains("expires_at"));
    }

    #[test]
    fn rejects_malformed_tokens() {
        // Not base64 at all.
        assert!(decode_token("not//valid//base64!!").is_none());
        // Valid base64 but not JSON.
        assert!(decode_token(&general_purpose::STANDARD.encode("hello")).is_none());
        // Valid JSON but not a session.
        assert!(decode_token(&general_purpose::STANDARD.encode(r#"{"user":"nope"}"#)).is_none());
        // Valid base64 but not UTF-8.
        assert!(decode_token(&general_purpose::STANDARD.encode([0xff, 0xfe, 0x00, 0x81])).is_none());
        // Truncated token.
        let token = create_token(demo_user(), 7).unwrap();
        assert!(decode_token(&token[..token.len() / 2]).is_none());
        // Empty string.
        assert!(decode_token("").is_none());
    }
}
