use axum::http::HeaderValue;
use std::net::SocketAddr;
use std::path::PathBuf;
use thiserror::Error;

pub const BIND_ADDR_VAR: &str = "TIME_TRACKING_BIND_ADDR";
pub const DATA_FILE_VAR: &str = "TIME_TRACKING_DATA_FILE";
pub const ALLOWED_ORIGIN_VAR: &str = "TIME_TRACKING_ALLOWED_ORIGIN";

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:5000";
const DEFAULT_DATA_FILE: &str = "time_tracking.json";
const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:3000";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {name}: {value:?}")]
    Invalid { name: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub data_file: PathBuf,
    /// The only origin allowed to call the API from a browser.
    pub allowed_origin: HeaderValue,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let bind_addr = lookup(BIND_ADDR_VAR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr: SocketAddr = bind_addr.parse().map_err(|_| ConfigError::Invalid {
            name: BIND_ADDR_VAR,
            value: bind_addr.clone(),
        })?;

        let data_file = lookup(DATA_FILE_VAR)
            .filter(|path| !path.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_DATA_FILE.to_string());

        let allowed_origin =
            lookup(ALLOWED_ORIGIN_VAR).unwrap_or_else(|| DEFAULT_ALLOWED_ORIGIN.to_string());
        // A single concrete origin is allowed; wildcards are not.
        let allowed_origin = HeaderValue::from_str(&allowed_origin)
            .ok()
            .filter(|origin| origin != "*")
            .ok_or_else(|| ConfigError::Invalid {
                name: ALLOWED_ORIGIN_VAR,
                value: allowed_origin.clone(),
            })?;

        Ok(Self {
            bind_addr,
            data_file: PathBuf::from(data_file),
            allowed_origin,
        })
    }
}
