use axum_extra::extract::cookie::Key;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use figment::Figment;
use figment::providers::{Env, Serialized};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub port: u16,
    pub database_url: String,
    pub loglevel: String,
    pub cookie_key: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 3000,
            database_url: "sqlite://users.db".to_string(),
            loglevel: "info".to_string(),
            cookie_key: None,
        }
    }
}

impl Config {
    /// Defaults overridden by the `PORT`, `DATABASE_URL`, `LOGLEVEL` and
    /// `COOKIE_KEY` environment variables.
    pub fn load() -> Result<Self, AppError> {
        let config = Figment::from(Serialized::defaults(Config::default()))
            .merge(Env::raw().only(&["port", "database_url", "loglevel", "cookie_key"]))
            .extract()?;
        Ok(config)
    }

    /// Master key for the private cookie jar: decoded from `COOKIE_KEY` when
    /// set, otherwise generated fresh for this process. With a generated key
    /// CSRF pairs do not survive a restart.
    pub fn cookie_key(&self) -> Result<Key, AppError> {
        match self.cookie_key.as_deref() {
            Some(encoded) => {
                let bytes = STANDARD
                    .decode(encoded)
                    .map_err(|e| AppError::CookieKey(e.to_string()))?;
                Key::try_from(bytes.as_slice()).map_err(|e| AppError::CookieKey(e.to_string()))
            }
            None => Ok(Key::generate()),
        }
    }
}
