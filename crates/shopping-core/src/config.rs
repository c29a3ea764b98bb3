//! Gateway Configuration
//!
//! Selects the persistence backend and the remote endpoint settings.

use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

use reqwest::Url;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::gateway::{InMemoryGateway, PersistenceGateway, RecordSchema, RemoteGateway};

/// Public demo endpoint the list was originally kept on
pub const DEFAULT_BASE_URL: &str = "https://retoolapi.dev/1AFf5s/data";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid endpoint URL {url:?}: {reason}")]
    InvalidUrl { url: String, reason: String },
    #[error("unknown backend {0:?} (expected \"remote\" or \"memory\")")]
    UnknownBackend(String),
    #[error("{0}")]
    UnknownSchema(String),
    #[error("malformed configuration: {0}")]
    Malformed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    #[default]
    Remote,
    Memory,
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Backend::Remote => write!(f, "remote"),
            Backend::Memory => write!(f, "memory"),
        }
    }
}

impl FromStr for Backend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "remote" | "rest" | "http" => Ok(Backend::Remote),
            "memory" | "in-memory" | "local" => Ok(Backend::Memory),
            other => Err(ConfigError::UnknownBackend(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GatewayConfig {
    pub backend: Backend,
    pub base_url: String,
    pub schema: RecordSchema,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            backend: Backend::Remote,
            base_url: DEFAULT_BASE_URL.to_string(),
            schema: RecordSchema::LocalizedV1,
        }
    }
}

impl GatewayConfig {
    /// Parse a JSON object; missing keys keep their defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::Malformed(e.to_string()))
    }

    /// Apply a single `key=value` override
    ///
    /// Unknown keys are ignored so unrelated query parameters pass through.
    pub fn apply_override(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        match key {
            "backend" => self.backend = value.parse()?,
            "api" | "base_url" => self.base_url = value.trim().to_string(),
            "schema" => self.schema = value.parse().map_err(ConfigError::UnknownSchema)?,
            _ => {}
        }
        Ok(())
    }

    pub fn parsed_url(&self) -> Result<Url, ConfigError> {
        let url = Url::parse(&self.base_url).map_err(|e| ConfigError::InvalidUrl {
            url: self.base_url.clone(),
            reason: e.to_string(),
        })?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(ConfigError::InvalidUrl {
                url: self.base_url.clone(),
                reason: format!("unsupported scheme {:?}", other),
            }),
        }
    }

    /// Construct the configured gateway
    pub fn build(&self) -> Result<Rc<dyn PersistenceGateway>, ConfigError> {
        match self.backend {
            Backend::Memory => {
                log::info!("[CONFIG] Using in-memory persistence");
                Ok(Rc::new(InMemoryGateway::new()))
            }
            Backend::Remote => {
                let url = self.parsed_url()?;
                log::info!("[CONFIG] Using remote persistence at {} (schema {})", url, self.schema);
                Ok(Rc::new(RemoteGateway::new(url, self.schema)))
            }
        }
    }
}
