use crate::error::{config::ConfigError, AppError};

const DEFAULT_PORT: u16 = 8000;

/// Deployment environment the server is running in.
///
/// Rate limiting is only applied outside local development.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

pub struct Config {
    pub port: u16,
    pub database_url: String,
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let port = match std::env::var("PORT") {
            Ok(value) => value.parse::<u16>().map_err(|_| ConfigError::InvalidEnvVar {
                name: "PORT".to_string(),
                value,
            })?,
            Err(_) => DEFAULT_PORT,
        };

        let environment = match std::env::var("ENVIRONMENT").as_deref() {
            Ok("production") => Environment::Production,
            _ => Environment::Development,
        };

        Ok(Self {
            port,
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            environment,
        })
    }

    /// Whether inbound requests should be rate limited.
    pub fn rate_limit_enabled(&self) -> bool {
        self.environment == Environment::Production
    }
}
