pub mod chirp;
pub mod refresh_token;
pub mod user;

pub use chirp::Chirp;
pub use refresh_token::RefreshToken;
pub use user::{User, UserResponse};
