//! Runtime configuration read from the environment.
//!
//! `main` loads a `.env` file (if present) with dotenvy before calling
//! [`AppConfig::from_env`], so every setting can live in either place.
//!
//! | variable         | default                 |
//! |------------------|-------------------------|
//! | `DATABASE_URL`   | `sqlite:finance.db`     |
//! | `BIND_ADDR`      | `127.0.0.1:5000`        |
//! | `JWT_SECRET`     | required in release builds |
//! | `TOKEN_TTL_SECS` | `3600`                  |
//! | `CORS_ORIGIN`    | `http://localhost:8080` |
//! | `STATIC_DIR`     | `../frontend/dist`      |

use std::net::SocketAddr;
use std::path::PathBuf;

use axum::http::HeaderValue;

const DEFAULT_DATABASE_URL: &str = "sqlite:finance.db";
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5000";
const DEFAULT_TOKEN_TTL_SECS: i64 = 3600;
const DEFAULT_CORS_ORIGIN: &str = "http://localhost:8080";
const DEFAULT_STATIC_DIR: &str = "../frontend/dist";
const DEV_JWT_SECRET: &str = "finance-tracker-dev-secret";

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("Invalid value for {name}: {value}")]
    Invalid { name: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    pub jwt_secret: String,
    pub token_ttl_secs: i64,
    pub cors_origin: HeaderValue,
    pub static_dir: PathBuf,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build the configuration from any variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let bind_addr_raw = get("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr: SocketAddr = bind_addr_raw.parse().map_err(|_| ConfigError::Invalid {
            name: "BIND_ADDR",
            value: bind_addr_raw.clone(),
        })?;

        let token_ttl_secs = match get("TOKEN_TTL_SECS") {
            Some(raw) => match raw.parse::<i64>() {
                Ok(secs) if secs > 0 => secs,
                _ => {
                    return Err(ConfigError::Invalid {
                        name: "TOKEN_TTL_SECS",
                        value: raw,
                    })
                }
            },
            None => DEFAULT_TOKEN_TTL_SECS,
        };

        let cors_origin_raw = get("CORS_ORIGIN").unwrap_or_else(|| DEFAULT_CORS_ORIGIN.to_string());
        let cors_origin = cors_origin_raw.parse::<HeaderValue>().map_err(|_| ConfigError::Invalid {
            name: "CORS_ORIGIN",
            value: cors_origin_raw.clone(),
        })?;

        let jwt_secret = match get("JWT_SECRET") {
            Some(secret) => secret,
            None if cfg!(debug_assertions) => DEV_JWT_SECRET.to_string(),
            None => return Err(ConfigError::Missing("JWT_SECRET")),
        };

        Ok(Self {
            database_url: get("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            bind_addr,
            jwt_secret,
            token_ttl_secs,
            cors_origin,
            static_dir: PathBuf::from(get("STATIC_DIR").unwrap_or_else(|| DEFAULT_STATIC_DIR.to_string())),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[("JWT_SECRET", "s")]).unwrap();

        assert_eq!(config.database_url, "sqlite:finance.db");
        assert_eq!(config.bind_addr, "127.0.0.1:5000".parse().unwrap());
        assert_eq!(config.token_ttl_secs, 3600);
        assert_eq!(config.cors_origin, "http://localhost:8080");
        assert_eq!(config.static_dir, PathBuf::from("../frontend/dist"));
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("JWT_SECRET", "top-secret"),
            ("DATABASE_URL", "sqlite::memory:"),
            ("BIND_ADDR", "0.0.0.0:8000"),
            ("TOKEN_TTL_SECS", "60"),
        ])
        .unwrap();

        assert_eq!(config.jwt_secret, "top-secret");
        assert_eq!(config.database_url, "sqlite::memory:");
        assert_eq!(config.bind_addr.port(), 8000);
        assert_eq!(config.token_ttl_secs, 60);
    }

    #[test]
    fn test_invalid_values() {
        assert_eq!(
            config_from(&[("JWT_SECRET", "s"), ("BIND_ADDR", "localhost")]).unwrap_err(),
            ConfigError::Invalid {
                name: "BIND_ADDR",
                value: "localhost".to_string()
            }
        );
        assert!(matches!(
            config_from(&[("JWT_SECRET", "s"), ("TOKEN_TTL_SECS", "-5")]),
            Err(ConfigError::Invalid { name: "TOKEN_TTL_SECS", .. })
        ));
    }

    #[test]
    fn test_dev_secret_in_debug_builds() {
        let result = config_from(&[]);
        if cfg!(debug_assertions) {
            assert_eq!(result.unwrap().jwt_secret, DEV_JWT_SECRET);
        } else {
            assert_eq!(result.unwrap_err(), ConfigError::Missing("JWT_SECRET"));
        }
    }
}
