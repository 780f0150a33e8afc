use std::{env, path::PathBuf, time::Duration};

use axum_extra::extract::cookie::Key;
use tracing::warn;

use crate::{Error, Result};

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
    pub port: u16,
    pub flash_secret: Option<String>,
    pub public_dir: PathBuf,
}

impl Config {
    /// Reads `.env` (if any) and then the process environment.
    pub fn init() -> Result<Self> {
        dotenv::dotenv().ok();

        let flash_secret = env::var("FLASH_SECRET").ok().filter(|s| !s.is_empty());
        if let Some(secret) = &flash_secret {
            if secret.len() < 64 {
                return Err(Error::Config(
                    "FLASH_SECRET must be at least 64 bytes long".to_string(),
                ));
            }
        }

        Ok(Self {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://posts.db?mode=rwc".to_string()),
            max_connections: parse_var("DATABASE_MAX_CONNECTIONS", 5)?,
            acquire_timeout: Duration::from_secs(parse_var("DATABASE_ACQUIRE_TIMEOUT_SECS", 5)?),
            port: parse_var("PORT", 8080)?,
            flash_secret,
            public_dir: env::var("PUBLIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("public")),
        })
    }

    /// Settings for an in-memory store, used by tests and local experiments.
    pub fn in_memory() -> Self {
        Self {
            database_url: "sqlite::memory:".to_string(),
            max_connections: 1,
            acquire_timeout: Duration::from_secs(5),
            port: 0,
            flash_secret: None,
            public_dir: PathBuf::from("public"),
        }
    }

    /// Key signing the flash cookie. Without a configured secret every process
    /// gets its own random key, so notices do not survive a restart.
    pub fn flash_key(&self) -> Key {
        match &self.flash_secret {
            Some(secret) => match Key::try_from(secret.as_bytes()) {
                Ok(key) => key,
                Err(err) => {
                    warn!("FLASH_SECRET rejected ({:?}), using a random key", err);
                    Key::generate()
                }
            },
            None => {
                warn!("FLASH_SECRET not set, using a random key");
                Key::generate()
            }
        }
    }
}

fn parse_var<T: std::str::FromStr>(name: &str, default: T) -> Result<T> {
    match env::var(name) {
        Ok(raw) => raw
            .parse()
            .map_err(|_| Error::Config(format!("{} has an invalid value: {:?}", name, raw))),
        Err(_) => Ok(default),
    }
}
