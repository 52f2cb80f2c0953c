pub mod api_key;
pub mod jwt;
pub mod password;
pub mod refresh;
pub mod sessions;
pub mod token;

pub use api_key::check_polka_api_key;
pub use jwt::{Claims, create_access_token, validate_access_token};
pub use password::{hash_password, verify_password};
pub use refresh::{create_refresh_token, refresh_access_token, revoke_refresh_token};
pub use token::{generate_secure_token, hash_token};
