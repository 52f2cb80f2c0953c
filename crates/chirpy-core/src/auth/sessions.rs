//! Login, refresh, logout and billing-webhook flows, composed from the
//! repositories and the token service. The HTTP layer that decodes requests
//! and maps errors to status codes sits outside this crate.

use serde::Serialize;

use crate::auth::api_key::check_polka_api_key;
use crate::auth::jwt::create_access_token;
use crate::auth::password::verify_password;
use crate::auth::refresh;
use crate::config::Config;
use crate::error::ChirpyError;
use crate::models::UserResponse;
use crate::repo::users;
use crate::store::DocumentStore;

/// Webhook event name that triggers a Chirpy Red upgrade.
const USER_UPGRADED_EVENT: &str = "user.upgraded";

/// Successful login: the user plus both credentials.
#[derive(Debug, Serialize)]
pub struct Login {
    pub user: UserResponse,
    pub access_token: String,
    pub refresh_token: String,
}

/// Authenticate with email and password. On success, issues a short-lived
/// access token and a long-lived refresh token.
pub fn login(
    store: &dyn DocumentStore,
    config: &Config,
    email: &str,
    password: &str,
) -> Result<Login, ChirpyError> {
    let user = users::get_user_by_email(store, email)?;

    if !verify_password(password, &user.password_hash)? {
        return Err(ChirpyError::Unauthorized("invalid password".to_string()));
    }

    let access_token = create_access_token(user.id, &config.jwt_secret, config.jwt_expiry_secs)?;
    let refresh_token =
        refresh::create_refresh_token(store, user.id, config.refresh_token_expiry_days)?;

    tracing::debug!(user_id = user.id, "user logged in");
    Ok(Login {
        user: UserResponse::from(user),
        access_token,
        refresh_token,
    })
}

/// Mint a new access token from a refresh token.
pub fn refresh_session(
    store: &dyn DocumentStore,
    config: &Config,
    raw_refresh_token: &str,
) -> Result<String, ChirpyError> {
    refresh::refresh_access_token(
        store,
        raw_refresh_token,
        &config.jwt_secret,
        config.jwt_expiry_secs,
    )
}

/// Log out: revoke the refresh token. Idempotent.
pub fn revoke_session(
    store: &dyn DocumentStore,
    raw_refresh_token: &str,
) -> Result<(), ChirpyError> {
    refresh::revoke_refresh_token(store, raw_refresh_token)
}

/// Handle a Polka billing webhook event. Returns `true` when the user was
/// upgraded; any event other than `user.upgraded` is acknowledged without a
/// write.
pub fn upgrade_webhook(
    store: &dyn DocumentStore,
    config: &Config,
    provided_key: &str,
    event: &str,
    user_id: i32,
) -> Result<bool, ChirpyError> {
    if !check_polka_api_key(provided_key, &config.polka_api_key) {
        return Err(ChirpyError::Unauthorized("invalid api key".to_string()));
    }

    if event != USER_UPGRADED_EVENT {
        return Ok(false);
    }

    users::set_chirpy_red(store, user_id)?;
    Ok(true)
}
