use chirpy_core::auth::verify_password;
use chirpy_core::repo::users;
use chirpy_core::{ChirpyError, DocumentStore, TestStore};

#[test]
fn test_create_user_hashes_the_password() {
    let fixture = TestStore::new();

    let user = users::create_user(&fixture.store, "u@example.com", "secret123")
        .expect("Failed to create user");

    assert_eq!(user.email, "u@example.com");
    assert!(!user.is_chirpy_red);
    assert_ne!(user.password_hash, "secret123");
    assert!(user.password_hash.starts_with("$argon2"));
    assert!(verify_password("secret123", &user.password_hash).expect("Failed to verify"));

    // The plaintext never reaches the backing file.
    let raw = std::fs::read_to_string(&fixture.config.database_path)
        .expect("Failed to read backing file");
    assert!(!raw.contains("secret123"));
}

#[test]
fn test_duplicate_email_is_a_conflict() {
    let fixture = TestStore::new();

    let original = users::create_user(&fixture.store, "u@example.com", "first")
        .expect("Failed to create user");

    let err = users::create_user(&fixture.store, "U@EXAMPLE.COM", "second")
        .expect_err("Creation should fail");
    assert!(matches!(err, ChirpyError::Conflict(_)), "got {err:?}");

    // The original record is unchanged.
    let kept = users::get_user(&fixture.store, original.id).expect("Failed to fetch user");
    assert_eq!(kept, original);
}

#[test]
fn test_invalid_email_is_rejected() {
    let fixture = TestStore::new();

    for email in ["", "not-an-email", "missing@tld@twice", "spaces in@it.com"] {
        let err = users::create_user(&fixture.store, email, "pw")
            .expect_err("Creation should fail");
        assert!(
            matches!(err, ChirpyError::Validation(_)),
            "email {email:?} got {err:?}"
        );
    }

    assert!(fixture.store.load().expect("Failed to load").users.is_empty());
}

#[test]
fn test_lookup_by_email_is_case_insensitive() {
    let fixture = TestStore::new();

    let created = users::create_user(&fixture.store, "Mixed@Example.com", "pw123456")
        .expect("Failed to create user");

    let found = users::get_user_by_email(&fixture.store, "mixed@example.com")
        .expect("Failed to fetch user");
    assert_eq!(found.id, created.id);

    let err = users::get_user_by_email(&fixture.store, "other@example.com")
        .expect_err("Fetch should fail");
    assert!(matches!(err, ChirpyError::NotFound(_)), "got {err:?}");
}

#[test]
fn test_partial_update() {
    let fixture = TestStore::new();

    let user = users::create_user(&fixture.store, "u@example.com", "old-password")
        .expect("Failed to create user");

    // Email only: the password hash is untouched.
    let updated = users::update_user(&fixture.store, user.id, Some("new@example.com"), None)
        .expect("Failed to update user");
    assert_eq!(updated.email, "new@example.com");
    assert_eq!(updated.password_hash, user.password_hash);

    // Password only: re-hashed, old password no longer verifies.
    let updated = users::update_user(&fixture.store, user.id, None, Some("new-password"))
        .expect("Failed to update user");
    assert!(verify_password("new-password", &updated.password_hash).expect("Failed to verify"));
    assert!(!verify_password("old-password", &updated.password_hash).expect("Failed to verify"));
}

#[test]
fn test_update_cannot_take_another_users_email() {
    let fixture = TestStore::new();

    users::create_user(&fixture.store, "taken@example.com", "pw123456")
        .expect("Failed to create user");
    let user = users::create_user(&fixture.store, "mine@example.com", "pw123456")
        .expect("Failed to create user");

    let err = users::update_user(&fixture.store, user.id, Some("taken@example.com"), None)
        .expect_err("Update should fail");
    assert!(matches!(err, ChirpyError::Conflict(_)), "got {err:?}");

    // Keeping your own email is not a conflict.
    users::update_user(&fixture.store, user.id, Some("mine@example.com"), None)
        .expect("Updating to own email should succeed");
}

#[test]
fn test_update_missing_user_is_not_found() {
    let fixture = TestStore::new();

    let err = users::update_user(&fixture.store, 7, Some("u@example.com"), None)
        .expect_err("Update should fail");
    assert!(matches!(err, ChirpyError::NotFound(_)), "got {err:?}");
}

#[test]
fn test_set_chirpy_red_is_idempotent() {
    let fixture = TestStore::new();

    let user = users::create_user(&fixture.store, "u@example.com", "pw123456")
        .expect("Failed to create user");
    assert!(!user.is_chirpy_red);

    users::set_chirpy_red(&fixture.store, user.id).expect("Failed to upgrade");
    users::set_chirpy_red(&fixture.store, user.id).expect("Second upgrade should be a no-op");

    let user = users::get_user(&fixture.store, user.id).expect("Failed to fetch user");
    assert!(user.is_chirpy_red);

    let err = users::set_chirpy_red(&fixture.store, 99).expect_err("Upgrade should fail");
    assert!(matches!(err, ChirpyError::NotFound(_)), "got {err:?}");
}
