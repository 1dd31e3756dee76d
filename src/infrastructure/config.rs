use crate::domain::value_objects::Url;
use anyhow::{Context, Result};

pub const DEFAULT_TODOS_ENDPOINT: &str = "http://jsonplaceholder.typicode.com/todos";
pub const ENDPOINT_ENV: &str = "TODOS_ENDPOINT";

/// Runtime settings for the todos tool
#[derive(Debug, Clone)]
pub struct Config {
    pub endpoint: Url,
    pub default_page: u64,
    pub default_limit: u64,
}

impl Config {
    /// Reads overrides from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw = lookup(ENDPOINT_ENV)
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_TODOS_ENDPOINT.to_string());
        let endpoint = Url::new(raw.trim())
            .with_context(|| format!("{} is not a usable endpoint", ENDPOINT_ENV))?;

        Ok(Self {
            endpoint,
            default_page: 1,
            default_limit: 200,
        })
    }
}
