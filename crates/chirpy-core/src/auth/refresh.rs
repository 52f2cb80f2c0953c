use chrono::{Duration, Utc};

use crate::auth::jwt::create_access_token;
use crate::auth::token::{generate_secure_token, hash_token};
use crate::error::ChirpyError;
use crate::models::RefreshToken;
use crate::store::DocumentStore;

/// Issue a refresh token for a user. Returns the raw token string (send to
/// the client; the store keeps only the hash). The token carries no claims;
/// possession of the raw value plus a store lookup is the only proof.
pub fn create_refresh_token(
    store: &dyn DocumentStore,
    user_id: i32,
    expiry_days: u64,
) -> Result<String, ChirpyError> {
    let raw_token = generate_secure_token();
    let token_hash = hash_token(&raw_token);
    let now = Utc::now().naive_utc();

    let record = RefreshToken {
        user_id,
        token_hash: token_hash.clone(),
        created_at: now,
        expires_at: now + Duration::days(expiry_days as i64),
        revoked_at: None,
    };

    let mut doc = store.load()?;
    doc.refresh_tokens.insert(token_hash, record);
    store.write(&doc)?;

    tracing::debug!(user_id, "issued refresh token");
    Ok(raw_token)
}

/// Redeem a refresh token for a fresh access token.
///
/// Revocation is checked before expiry, so a token that is both revoked and
/// past its window reports [`ChirpyError::Revoked`]. The refresh token is
/// not rotated: the same raw value stays redeemable until revoked or
/// expired.
pub fn refresh_access_token(
    store: &dyn DocumentStore,
    raw_token: &str,
    secret: &str,
    ttl_secs: u64,
) -> Result<String, ChirpyError> {
    let doc = store.load()?;
    let record = doc
        .refresh_tokens
        .get(&hash_token(raw_token))
        .ok_or_else(|| ChirpyError::NotFound("unknown refresh token".to_string()))?;

    if record.is_revoked() {
        return Err(ChirpyError::Revoked);
    }
    if record.is_expired_at(Utc::now().naive_utc()) {
        return Err(ChirpyError::Expired);
    }

    create_access_token(record.user_id, secret, ttl_secs)
}

/// Revoke a refresh token. Idempotent: revoking an already-revoked token is
/// a no-op success. The record stays in the store as a tombstone.
pub fn revoke_refresh_token(store: &dyn DocumentStore, raw_token: &str) -> Result<(), ChirpyError> {
    let mut doc = store.load()?;
    let record = doc
        .refresh_tokens
        .get_mut(&hash_token(raw_token))
        .ok_or_else(|| ChirpyError::NotFound("unknown refresh token".to_string()))?;

    if record.is_revoked() {
        return Ok(());
    }

    record.revoked_at = Some(Utc::now().naive_utc());
    let user_id = record.user_id;
    store.write(&doc)?;

    tracing::debug!(user_id, "revoked refresh token");
    Ok(())
}
