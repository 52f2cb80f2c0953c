use chirpy_core::auth::{
    create_refresh_token, refresh_access_token, revoke_refresh_token, validate_access_token,
};
use chirpy_core::{ChirpyError, DocumentStore, TestStore};

#[test]
fn test_issued_tokens_are_opaque_and_distinct() {
    let fixture = TestStore::new();

    let first = create_refresh_token(&fixture.store, 1, 60).expect("Failed to issue token");
    let second = create_refresh_token(&fixture.store, 1, 60).expect("Failed to issue token");

    // 32 random bytes, hex-encoded.
    assert_eq!(first.len(), 64);
    assert!(first.bytes().all(|b| b.is_ascii_hexdigit()));
    assert_ne!(first, second);
}

#[test]
fn test_raw_token_is_never_persisted() {
    let fixture = TestStore::new();

    let raw = create_refresh_token(&fixture.store, 1, 60).expect("Failed to issue token");

    let file = std::fs::read_to_string(&fixture.config.database_path)
        .expect("Failed to read backing file");
    assert!(!file.contains(&raw), "raw refresh token found on disk");
}

#[test]
fn test_refresh_mints_a_token_for_the_bound_user() {
    let fixture = TestStore::new();
    let secret = &fixture.config.jwt_secret;

    let raw = create_refresh_token(&fixture.store, 7, 60).expect("Failed to issue token");
    let access =
        refresh_access_token(&fixture.store, &raw, secret, 3600).expect("Failed to refresh");

    let user_id = validate_access_token(&access, secret).expect("Failed to validate");
    assert_eq!(user_id, 7);
}

#[test]
fn test_unknown_token_is_not_found() {
    let fixture = TestStore::new();

    let err = refresh_access_token(&fixture.store, "no-such-token", "secret", 3600)
        .expect_err("Refresh should fail");
    assert!(matches!(err, ChirpyError::NotFound(_)), "got {err:?}");

    let err = revoke_refresh_token(&fixture.store, "no-such-token")
        .expect_err("Revocation should fail");
    assert!(matches!(err, ChirpyError::NotFound(_)), "got {err:?}");
}

#[test]
fn test_revoked_token_always_fails_refresh() {
    let fixture = TestStore::new();
    let secret = &fixture.config.jwt_secret;

    let raw = create_refresh_token(&fixture.store, 1, 60).expect("Failed to issue token");
    revoke_refresh_token(&fixture.store, &raw).expect("Failed to revoke");

    // Well before natural expiry, and forever after.
    for _ in 0..2 {
        let err = refresh_access_token(&fixture.store, &raw, secret, 3600)
            .expect_err("Refresh should fail");
        assert!(matches!(err, ChirpyError::Revoked), "got {err:?}");
    }
}

#[test]
fn test_revoking_twice_is_a_no_op_success() {
    let fixture = TestStore::new();

    let raw = create_refresh_token(&fixture.store, 1, 60).expect("Failed to issue token");
    revoke_refresh_token(&fixture.store, &raw).expect("Failed to revoke");

    let doc = fixture.store.load().expect("Failed to load");
    let revoked_at = doc.refresh_tokens.values().next().unwrap().revoked_at;
    assert!(revoked_at.is_some());

    revoke_refresh_token(&fixture.store, &raw).expect("Second revoke should succeed");

    // The tombstone timestamp is not rewritten.
    let doc = fixture.store.load().expect("Failed to load");
    assert_eq!(doc.refresh_tokens.values().next().unwrap().revoked_at, revoked_at);
}

#[test]
fn test_expired_token_is_rejected() {
    let fixture = TestStore::new();

    // Zero-day window: expired as soon as any time passes.
    let raw = create_refresh_token(&fixture.store, 1, 0).expect("Failed to issue token");
    std::thread::sleep(std::time::Duration::from_millis(10));

    let err = refresh_access_token(&fixture.store, &raw, "secret", 3600)
        .expect_err("Refresh should fail");
    assert!(matches!(err, ChirpyError::Expired), "got {err:?}");
}

#[test]
fn test_revoked_takes_precedence_over_expired() {
    let fixture = TestStore::new();

    let raw = create_refresh_token(&fixture.store, 1, 0).expect("Failed to issue token");
    revoke_refresh_token(&fixture.store, &raw).expect("Failed to revoke");
    std::thread::sleep(std::time::Duration::from_millis(10));

    let err = refresh_access_token(&fixture.store, &raw, "secret", 3600)
        .expect_err("Refresh should fail");
    assert!(matches!(err, ChirpyError::Revoked), "got {err:?}");
}

#[test]
fn test_tombstones_are_kept_not_deleted() {
    let fixture = TestStore::new();

    let raw = create_refresh_token(&fixture.store, 1, 60).expect("Failed to issue token");
    revoke_refresh_token(&fixture.store, &raw).expect("Failed to revoke");

    let doc = fixture.store.load().expect("Failed to load");
    assert_eq!(doc.refresh_tokens.len(), 1);
}
