use serde::{Deserialize, Serialize};

use crate::models::user::User;

/// Represents a user session.
///
/// Serialized with camelCase field names because the whole struct is the
/// payload of the session cookie (base64 over JSON), so the field names are
/// part of the token wire format.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// The user this session belongs to.
    pub user: User,
    /// A random hex identifier for the session. Not a signature.
    pub token: String,
    /// The timestamp when the session expires, in epoch milliseconds.
    pub expires_at: i64,
}
