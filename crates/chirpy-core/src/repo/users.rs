use chrono::Utc;
use validator::ValidateEmail;

use crate::auth::password::hash_password;
use crate::error::ChirpyError;
use crate::models::User;
use crate::store::DocumentStore;

/// Create a user. The email must be valid and unused; the password is
/// hashed before anything is written, and the plaintext is never stored
/// or logged.
pub fn create_user(
    store: &dyn DocumentStore,
    email: &str,
    password: &str,
) -> Result<User, ChirpyError> {
    if email.is_empty() || !email.validate_email() {
        return Err(ChirpyError::Validation(format!(
            "invalid email address: {email}"
        )));
    }

    let mut doc = store.load()?;
    if doc.user_by_email(email).is_some() {
        return Err(ChirpyError::Conflict(format!(
            "a user with email {email} already exists"
        )));
    }

    let password_hash = hash_password(password)?;
    let now = Utc::now().naive_utc();
    let user = User {
        id: doc.next_user_id(),
        email: email.to_string(),
        password_hash,
        is_chirpy_red: false,
        created_at: now,
        updated_at: now,
    };
    doc.users.insert(user.id, user.clone());
    store.write(&doc)?;

    tracing::debug!(id = user.id, "created user");
    Ok(user)
}

/// Fetch a user by id.
pub fn get_user(store: &dyn DocumentStore, id: i32) -> Result<User, ChirpyError> {
    let doc = store.load()?;
    doc.users
        .get(&id)
        .cloned()
        .ok_or_else(|| ChirpyError::NotFound(format!("user {id}")))
}

/// Fetch a user by email (case-insensitive).
pub fn get_user_by_email(store: &dyn DocumentStore, email: &str) -> Result<User, ChirpyError> {
    let doc = store.load()?;
    doc.user_by_email(email)
        .cloned()
        .ok_or_else(|| ChirpyError::NotFound(format!("user with email {email}")))
}

/// Partial update. A new email is re-validated and re-checked for
/// uniqueness; a new password is re-hashed.
pub fn update_user(
    store: &dyn DocumentStore,
    id: i32,
    email: Option<&str>,
    password: Option<&str>,
) -> Result<User, ChirpyError> {
    let mut doc = store.load()?;

    if let Some(email) = email {
        if email.is_empty() || !email.validate_email() {
            return Err(ChirpyError::Validation(format!(
                "invalid email address: {email}"
            )));
        }
        if doc.user_by_email(email).is_some_and(|u| u.id != id) {
            return Err(ChirpyError::Conflict(format!(
                "a user with email {email} already exists"
            )));
        }
    }

    // Hash outside the borrow of the user entry.
    let password_hash = password.map(hash_password).transpose()?;

    let user = doc
        .users
        .get_mut(&id)
        .ok_or_else(|| ChirpyError::NotFound(format!("user {id}")))?;

    if let Some(email) = email {
        user.email = email.to_string();
    }
    if let Some(hash) = password_hash {
        user.password_hash = hash;
    }
    user.updated_at = Utc::now().naive_utc();

    let updated = user.clone();
    store.write(&doc)?;

    tracing::debug!(id, "updated user");
    Ok(updated)
}

/// Flip the Chirpy Red membership flag. Idempotent: upgrading an already
/// upgraded user is a no-op success.
pub fn set_chirpy_red(store: &dyn DocumentStore, id: i32) -> Result<(), ChirpyError> {
    let mut doc = store.load()?;
    let user = doc
        .users
        .get_mut(&id)
        .ok_or_else(|| ChirpyError::NotFound(format!("user {id}")))?;

    if user.is_chirpy_red {
        return Ok(());
    }

    user.is_chirpy_red = true;
    user.updated_at = Utc::now().naive_utc();
    store.write(&doc)?;

    tracing::debug!(id, "upgraded user to chirpy red");
    Ok(())
}
