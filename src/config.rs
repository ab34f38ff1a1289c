// src/config.rs
//! Process-wide configuration, resolved once at startup and injected.

use anyhow::{Context, Result};
use tracing::info;

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8080/api";
pub const DEFAULT_PAGE_SIZE: usize = 21;
pub const DEFAULT_FETCH_LIMIT: usize = 100;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL of the people-search backend, without a trailing slash.
    pub backend_url: String,
    /// Results shown per page; paging is client-side over one fetch.
    pub page_size: usize,
    /// Upper bound of results requested from the backend per search.
    pub fetch_limit: usize,
    pub timeout_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            fetch_limit: DEFAULT_FETCH_LIMIT,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl AppConfig {
    /// Load configuration from the environment. Unset variables fall back
    /// to defaults; set-but-invalid values fail startup instead of being
    /// silently ignored.
    pub fn load() -> Result<Self> {
        let backend_url = std::env::var("TALENTLENS_BACKEND_URL")
            .map(|v| v.trim_end_matches('/').to_string())
            .unwrap_or_else(|_| DEFAULT_BACKEND_URL.to_string());

        let page_size = parse_env("TALENTLENS_PAGE_SIZE", DEFAULT_PAGE_SIZE)?;
        if page_size == 0 {
            anyhow::bail!("TALENTLENS_PAGE_SIZE must be greater than zero");
        }

        let fetch_limit = parse_env("TALENTLENS_FETCH_LIMIT", DEFAULT_FETCH_LIMIT)?;
        if fetch_limit == 0 {
            anyhow::bail!("TALENTLENS_FETCH_LIMIT must be greater than zero");
        }

        let timeout_secs = parse_env("TALENTLENS_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS)?;

        info!(
            "Loaded configuration: backend={}, page_size={}, fetch_limit={}",
            backend_url, page_size, fetch_limit
        );

        Ok(Self {
            backend_url,
            page_size,
            fetch_limit,
            timeout_secs,
        })
    }
}

fn parse_env<T>(name: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{} is not a valid value: {:?}", name, raw)),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_backend_contract() {
        let config = AppConfig::default();
        assert_eq!(config.backend_url, "http://localhost:8080/api");
        assert_eq!(config.page_size, 21);
        assert_eq!(config.fetch_limit, 100);
    }

    #[test]
    fn parse_env_falls_back_when_unset() {
        // Variable name chosen to never exist in a test environment.
        let value: usize = parse_env("TALENTLENS_TEST_UNSET_VARIABLE", 7).unwrap();
        assert_eq!(value, 7);
    }
}
