/// Runtime configuration loaded from the environment (and `.env`)
use std::env;

use thiserror::Error;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_STATIC_DIR: &str = "public";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("A variável de ambiente {0} não está definida")]
    Missing(&'static str),

    #[error("Valor inválido para {key}: {value}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub mongo_uri: String,
    /// Overrides the database named in `mongo_uri`
    pub database_name: Option<String>,
    pub host: String,
    pub port: u16,
    pub static_dir: String,
    /// `None` allows any origin
    pub cors_origins: Option<Vec<String>>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from an arbitrary key lookup, so tests don't touch
    /// the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let mongo_uri = non_empty("MONGO_URI").ok_or(ConfigError::Missing("MONGO_URI"))?;

        let port = match non_empty("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::Invalid {
                key: "PORT",
                value: raw,
            })?,
            None => DEFAULT_PORT,
        };

        let cors_origins = non_empty("CORS_ALLOWED_ORIGINS").map(|raw| {
            raw.split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect::<Vec<_>>()
        });

        Ok(Self {
            mongo_uri,
            database_name: non_empty("DATABASE_NAME"),
            host: non_empty("SERVER_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            static_dir: non_empty("STATIC_DIR").unwrap_or_else(|| DEFAULT_STATIC_DIR.to_string()),
            cors_origins,
        })
    }
}
