use std::env;

use tracing::{error, info};

pub const API_KEY_VAR: &str = "API_KEY_SEARCH_GOOGLE";
pub const SEARCH_ENGINE_ID_VAR: &str = "SEARCH_ENGINE_ID";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} not set. Add it to the environment or to a .env file")]
    Missing(&'static str),
}

#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("[REDACTED]")
    }
}

/// API key and search engine id for the Custom Search JSON API.
/// Either both are present and non-empty, or there are no credentials at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    api_key: ApiKey,
    search_engine_id: String,
}

impl Credentials {
    pub fn new(api_key: impl Into<String>, search_engine_id: impl Into<String>) -> Self {
        Self {
            api_key: ApiKey(api_key.into()),
            search_engine_id: search_engine_id.into(),
        }
    }

    /// Values are taken verbatim; only absence and emptiness are rejected.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &'static str| {
            lookup(name)
                .filter(|v| !v.is_empty())
                .ok_or(ConfigError::Missing(name))
        };
        let api_key = required(API_KEY_VAR)?;
        let search_engine_id = required(SEARCH_ENGINE_ID_VAR)?;
        Ok(Self::new(api_key, search_engine_id))
    }

    pub fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    pub fn search_engine_id(&self) -> &str {
        &self.search_engine_id
    }
}

/// Reads credentials from the process environment, logging one line either way.
pub fn load_credentials() -> Option<Credentials> {
    match Credentials::from_lookup(|name| env::var(name).ok()) {
        Ok(credentials) => {
            info!("API key and search engine id loaded");
            Some(credentials)
        }
        Err(e) => {
            error!("{e}");
            None
        }
    }
}
