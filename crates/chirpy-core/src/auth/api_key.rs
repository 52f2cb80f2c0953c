/// Check the Polka billing webhook's shared secret. Machine-to-machine
/// auth, distinct from user auth.
///
/// Constant-time comparison to prevent timing attacks.
pub fn check_polka_api_key(provided: &str, configured: &str) -> bool {
    if provided.len() != configured.len() {
        return false;
    }
    provided
        .bytes()
        .zip(configured.bytes())
        .fold(0u8, |acc, (a, b)| acc | (a ^ b))
        == 0
}
