//! Config - Application Configuration

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::{
    CATALOG_URL_ENV, DEFAULT_CATALOG_BASE_URL, EAGER_FETCH_CONCURRENCY, REQUEST_TIMEOUT_SECS,
};

/// Main application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Catalog endpoint configuration
    pub catalog: CatalogConfig,
    /// Selection behaviour
    pub selection: SelectionConfig,
    /// UI preferences
    pub ui: UiConfig,
}

/// Catalog endpoint configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// API root, `/artworks` is appended
    pub base_url: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_CATALOG_BASE_URL.to_string(),
            timeout_secs: REQUEST_TIMEOUT_SECS,
        }
    }
}

impl CatalogConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(1))
    }
}

/// Selection behaviour
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectionConfig {
    /// Pages fetched concurrently by an eager selection
    pub concurrency: usize,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            concurrency: EAGER_FETCH_CONCURRENCY,
        }
    }
}

/// UI preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// "en" or "zh"
    pub locale: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            locale: "en".to_string(),
        }
    }
}

impl AppConfig {
    /// Apply environment overrides
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(url) = std::env::var(CATALOG_URL_ENV) {
            self.apply_catalog_url(&url);
        }
        self
    }

    fn apply_catalog_url(&mut self, url: &str) {
        let url = url.trim();
        if !url.is_empty() {
            self.catalog.base_url = url.trim_end_matches('/').to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [selection]
            concurrency = 2
            "#,
        )
        .expect("parse");

        assert_eq!(config.selection.concurrency, 2);
        assert_eq!(config.catalog.base_url, DEFAULT_CATALOG_BASE_URL);
        assert_eq!(config.catalog.timeout_secs, REQUEST_TIMEOUT_SECS);
        assert_eq!(config.ui.locale, "en");
    }

    #[test]
    fn test_catalog_url_override_trims_slash() {
        let mut config = AppConfig::default();
        config.apply_catalog_url("http://localhost:8080/api/v1/ ");
        assert_eq!(config.catalog.base_url, "http://localhost:8080/api/v1");

        config.apply_catalog_url("   ");
        assert_eq!(config.catalog.base_url, "http://localhost:8080/api/v1");
    }

    #[test]
    fn test_zero_timeout_is_clamped() {
        let config = CatalogConfig {
            timeout_secs: 0,
            ..Default::default()
        };
        assert_eq!(config.timeout(), Duration::from_secs(1));
    }
}
