//! Application configuration loaded from environment variables.

use thiserror::Error;

use crate::types::Principal;

#[derive(Debug, Error)]
#[error("Configuration error: {0}")]
pub struct ConfigError(pub String);

#[derive(Debug, Clone)]
pub struct Config {
    /// The initial administrator principal
    pub admin: Principal,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        // Pick up a local .env if one is present; ignore if not.
        dotenvy::dotenv().ok();

        Ok(Config {
            admin: Principal(env_var("COOP_ADMIN").map_err(|_| {
                ConfigError("COOP_ADMIN environment variable is required".to_string())
            })?),
        })
    }
}

fn env_var(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError(format!("Missing env var: {key}")))
}
