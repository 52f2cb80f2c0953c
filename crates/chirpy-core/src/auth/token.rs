use rand::RngCore;
use sha2::{Digest, Sha256};

/// Generate a cryptographically secure random token: 32 bytes (256 bits of
/// entropy), hex-encoded.
pub fn generate_secure_token() -> String {
    let mut bytes = [0u8; 32];
    rand::thread_rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}

/// SHA-256 hash a token for safe at-rest storage.
pub fn hash_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    hex::encode(hasher.finalize())
}
