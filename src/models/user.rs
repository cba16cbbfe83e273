use serde::{Deserialize, Serialize};

/// Represents an authenticated user identity.
///
/// Produced by the external authentication provider and carried inside the
/// session token; never mutated by this service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// The unique identifier for the user.
    pub id: String,
    /// The user's email address.
    pub email: String,
    /// The user's full name.
    pub name: String,
    /// The user's role.
    pub role: String,
}

/// The access level of a registered user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum UserType {
    Admin,
    Technician,
    Viewer,
}

/// The account status of a registered user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum UserStatus {
    Active,
    Suspended,
    Canceled,
}

/// The payload forwarded to the external registry API when creating a user.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserPayload {
    /// The user's full name.
    pub name: String,
    /// The user's email address.
    pub email: String,
    /// The user's password.
    pub password: String,
    /// The user's access level.
    pub user_type: UserType,
    /// The user's account status.
    pub status: UserStatus,
    /// The client the user belongs to.
    pub client_id: i64,
}
