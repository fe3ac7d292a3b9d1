//! Environment configuration
//!
//! Two values, loaded once at startup: the listen port and the MongoDB
//! connection string. A missing `.env` file or variable is fatal.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("error in loading env file: {0}")]
    EnvFile(#[from] dotenvy::Error),

    #[error("missing environment variable: {0}")]
    MissingVar(&'static str),

    #[error("PORT is not a valid port number: {0}")]
    InvalidPort(String),
}

/// Runtime configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub mongo_uri: String,
}

impl Config {
    /// Load `.env`, then read `PORT` and `MONGO_URI`
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv()?;

        let port = std::env::var("PORT").map_err(|_| ConfigError::MissingVar("PORT"))?;
        let port = port
            .parse()
            .map_err(|_| ConfigError::InvalidPort(port.clone()))?;
        let mongo_uri =
            std::env::var("MONGO_URI").map_err(|_| ConfigError::MissingVar("MONGO_URI"))?;

        Ok(Self { port, mongo_uri })
    }
}
