use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Refresh token record, keyed in the document by the SHA-256 hex of the
/// raw token (the raw value is never persisted).
///
/// Revocation is a tombstone: the record is marked, never deleted, so a
/// replay after revocation is always detectable.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshToken {
    /// The user this token can mint access tokens for.
    pub user_id: i32,

    /// SHA-256 hex of the raw token (same value as the document key).
    pub token_hash: String,

    pub created_at: NaiveDateTime,

    pub expires_at: NaiveDateTime,

    /// Set exactly once, by revocation. Checked before expiry.
    pub revoked_at: Option<NaiveDateTime>,
}

impl RefreshToken {
    pub fn is_revoked(&self) -> bool {
        self.revoked_at.is_some()
    }

    pub fn is_expired_at(&self, now: NaiveDateTime) -> bool {
        self.expires_at < now
    }
}
