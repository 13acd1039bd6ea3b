use serde::{Deserialize, Serialize};
use std::path::PathBuf;

fn default_page_size() -> usize {
    10
}

fn default_catalog_size() -> usize {
    100
}

fn default_fetch_delay_ms() -> u64 {
    750
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Number of products returned per page.
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    /// Total number of products the built-in catalog generates.
    #[serde(default = "default_catalog_size")]
    pub catalog_size: usize,
    /// Simulated latency of a page fetch, in milliseconds.
    #[serde(default = "default_fetch_delay_ms")]
    pub fetch_delay_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            catalog_size: default_catalog_size(),
            fetch_delay_ms: default_fetch_delay_ms(),
        }
    }
}

impl AppConfig {
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(target_os = "macos")]
        {
            dirs::home_dir().map(|home| home.join(".config/shopfeed/config.toml"))
        }
        #[cfg(target_os = "linux")]
        {
            dirs::config_dir().map(|config| config.join("shopfeed/config.toml"))
        }
        #[cfg(target_os = "windows")]
        {
            dirs::config_dir().map(|config| config.join("shopfeed\\config.toml"))
        }
        #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
        {
            None
        }
    }

    pub fn load() -> Self {
        if let Some(config_path) = Self::config_path() {
            if config_path.exists() {
                if let Ok(content) = std::fs::read_to_string(&config_path) {
                    if let Ok(config) = toml::from_str(&content) {
                        return config;
                    }
                }
            }
        }
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.page_size, 10);
        assert_eq!(config.catalog_size, 100);
        assert_eq!(config.fetch_delay_ms, 750);
    }

    #[test]
    fn test_partial_toml_falls_back_to_defaults() {
        let config: AppConfig = toml::from_str("page_size = 25").unwrap();
        assert_eq!(config.page_size, 25);
        assert_eq!(config.catalog_size, 100);
        assert_eq!(config.fetch_delay_ms, 750);
    }
}
