use chrono::{Duration, Utc};
use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode, errors::ErrorKind,
};
use serde::{Deserialize, Serialize};

use crate::error::ChirpyError;

const ISSUER: &str = "chirpy";

/// JWT claims payload for access tokens.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Issuer, always "chirpy"
    pub iss: String,
    /// Subject (user ID, decimal)
    pub sub: String,
    /// Expiration time (Unix timestamp)
    pub exp: usize,
    /// Issued at (Unix timestamp)
    pub iat: usize,
}

/// Create a signed, self-contained access token binding `user_id` to an
/// absolute expiry. Verification needs no store lookup.
pub fn create_access_token(
    user_id: i32,
    secret: &str,
    ttl_secs: u64,
) -> Result<String, ChirpyError> {
    let now = Utc::now();
    let expires = now + Duration::seconds(ttl_secs as i64);

    let claims = Claims {
        iss: ISSUER.to_string(),
        sub: user_id.to_string(),
        exp: expires.timestamp() as usize,
        iat: now.timestamp() as usize,
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| ChirpyError::Internal(format!("Failed to create token: {}", e)))
}

/// Validate an access token and return the bound user id.
///
/// The algorithm is pinned to HS256; a token whose header names anything
/// else is rejected regardless of what it carries. Outcomes:
/// [`ChirpyError::Expired`] past expiry, [`ChirpyError::InvalidSignature`]
/// for a signature that does not verify (wrong key or wrong algorithm),
/// [`ChirpyError::Malformed`] for anything unparseable.
pub fn validate_access_token(token: &str, secret: &str) -> Result<i32, ChirpyError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.set_issuer(&[ISSUER]);
    validation.set_required_spec_claims(&["exp", "iss", "sub"]);

    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map_err(|e| match e.kind() {
        ErrorKind::ExpiredSignature => ChirpyError::Expired,
        ErrorKind::InvalidSignature | ErrorKind::InvalidAlgorithm => ChirpyError::InvalidSignature,
        _ => ChirpyError::Malformed,
    })?;

    token_data
        .claims
        .sub
        .parse::<i32>()
        .map_err(|_| ChirpyError::Malformed)
}
