use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// User account - the stored record, including the password hash.
///
/// Keyed by `id` in the document; `email` is a unique secondary index and
/// is only changed through `update_user`, which re-checks uniqueness.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i32,

    pub email: String,

    /// Argon2 password hash. Serialized to the backing file only; anything
    /// leaving the core goes through [`UserResponse`].
    pub password_hash: String,

    /// Chirpy Red membership flag, flipped by the billing webhook.
    pub is_chirpy_red: bool,

    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Public user data (safe to return in API responses).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: i32,
    pub email: String,
    pub is_chirpy_red: bool,
    pub created_at: NaiveDateTime,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        UserResponse {
            id: user.id,
            email: user.email,
            is_chirpy_red: user.is_chirpy_red,
            created_at: user.created_at,
        }
    }
}
