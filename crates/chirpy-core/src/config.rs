use serde::Deserialize;

/// Application configuration loaded from environment variables.
///
/// No ambient globals: the config object is built once at startup and passed
/// down to whatever needs it.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Path of the JSON backing file (e.g. ./database.json)
    pub database_path: String,

    /// JWT signing secret for access tokens
    pub jwt_secret: String,

    /// Access token expiry in seconds (default: 3600)
    pub jwt_expiry_secs: u64,

    /// Refresh token validity window in days (default: 60)
    pub refresh_token_expiry_days: u64,

    /// Shared secret for the Polka billing webhook
    pub polka_api_key: String,

    /// Environment: development, production, test
    pub environment: String,
}

impl Config {
    /// Load configuration from environment variables (with .env support).
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        // Load .env file if present (ignore errors if missing)
        let _ = dotenvy::dotenv();

        Ok(Config {
            database_path: std::env::var("DATABASE_PATH")
                .unwrap_or_else(|_| "database.json".to_string()),
            jwt_secret: std::env::var("JWT_SECRET")
                .unwrap_or_else(|_| "chirpy-dev-secret-change-me".to_string()),
            jwt_expiry_secs: std::env::var("JWT_EXPIRY_SECS")
                .unwrap_or_else(|_| "3600".to_string())
                .parse()
                .unwrap_or(3600),
            refresh_token_expiry_days: std::env::var("REFRESH_TOKEN_EXPIRY_DAYS")
                .unwrap_or_else(|_| "60".to_string())
                .parse()
                .unwrap_or(60),
            polka_api_key: std::env::var("POLKA_KEY").unwrap_or_default(),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
        })
    }

    /// Check if running in development mode.
    pub fn is_dev(&self) -> bool {
        self.environment == "development"
    }
}
