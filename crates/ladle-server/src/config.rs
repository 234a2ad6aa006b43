//! Configuration management for the recipe server

use anyhow::{Context, Result};

/// Server configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Server host (default: 0.0.0.0)
    pub host: String,

    /// Server port (default: 3000)
    pub port: u16,

    /// MongoDB connection string (required)
    pub mongodb_uri: String,

    /// Database name (default: recipes)
    pub database_name: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let mongodb_uri =
            std::env::var("MONGODB").context("MONGODB environment variable must be set")?;

        let port = match std::env::var("PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .with_context(|| format!("PORT is not a valid port number: {raw}"))?,
            Err(_) => 3000,
        };

        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let database_name =
            std::env::var("MONGODB_DB").unwrap_or_else(|_| "recipes".to_string());

        Ok(Self {
            host,
            port,
            mongodb_uri,
            database_name,
        })
    }
}
