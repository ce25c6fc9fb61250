use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Prefix for environment overrides, e.g. `STOREFRONT__LATENCY__FETCH_MS=0`.
pub const ENV_PREFIX: &str = "STOREFRONT";

/// Storefront configuration, loaded from TOML with environment overrides
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    pub catalog: CatalogSection,
    pub latency: LatencySection,
}

/// Catalog listing behaviour
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogSection {
    pub page_size: usize,
    pub related_limit: usize,
    /// External JSON seed; the embedded catalog is used when unset.
    pub seed_path: Option<String>,
}

/// Simulated network delay in front of the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LatencySection {
    pub fetch_ms: u64,
}

impl Default for CatalogSection {
    fn default() -> Self {
        Self {
            page_size: 12,
            related_limit: 4,
            seed_path: None,
        }
    }
}

impl Default for LatencySection {
    fn default() -> Self {
        Self { fetch_ms: 500 }
    }
}

impl StoreConfig {
    /// Load configuration from a TOML file only
    pub fn from_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read storefront config file: {}", path))?;

        let config: StoreConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse storefront config file: {}", path))?;

        Ok(config)
    }

    /// Layered load: optional TOML file, then `STOREFRONT__*` environment variables
    pub fn load(path: &str) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .with_context(|| format!("Failed to build storefront config from {}", path))?;

        settings
            .try_deserialize()
            .context("Failed to deserialize storefront config")
    }

    pub fn validate(&self) -> Result<()> {
        if self.catalog.page_size == 0 {
            return Err(anyhow::anyhow!("Catalog page size must be greater than zero"));
        }

        if let Some(path) = &self.catalog.seed_path {
            if path.trim().is_empty() {
                return Err(anyhow::anyhow!("Catalog seed path cannot be empty"));
            }
        }

        Ok(())
    }

    pub fn fetch_latency(&self) -> Duration {
        Duration::from_millis(self.latency.fetch_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::io::Write;

    fn write_temp(name: &str, content: &str) -> String {
        let path = env::temp_dir().join(format!("{}-{}.toml", name, std::process::id()));
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn test_default_config() {
        let config = StoreConfig::default();
        assert_eq!(config.catalog.page_size, 12);
        assert_eq!(config.catalog.related_limit, 4);
        assert!(config.catalog.seed_path.is_none());
        assert_eq!(config.fetch_latency(), Duration::from_millis(500));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_file_fills_missing_keys() {
        let path = write_temp("storefront-partial", "[latency]\nfetch_ms = 25\n");
        let config = StoreConfig::from_file(&path).unwrap();
        assert_eq!(config.latency.fetch_ms, 25);
        assert_eq!(config.catalog.page_size, 12);
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_from_file_missing() {
        let err = StoreConfig::from_file("/nonexistent/storefront.toml").unwrap_err();
        assert!(err.to_string().contains("Failed to read storefront config file"));
    }

    #[test]
    fn test_validation() {
        let mut config = StoreConfig::default();
        config.catalog.page_size = 0;
        assert!(config.validate().is_err());

        let mut config = StoreConfig::default();
        config.catalog.seed_path = Some("  ".to_string());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_layered_load_with_env_override() {
        let path = write_temp(
            "storefront-layered",
            "[catalog]\npage_size = 8\n\n[latency]\nfetch_ms = 300\n",
        );

        unsafe {
            env::set_var("STOREFRONT__LATENCY__FETCH_MS", "0");
        }

        let config = StoreConfig::load(&path).unwrap();
        assert_eq!(config.catalog.page_size, 8);
        assert_eq!(config.latency.fetch_ms, 0);
        assert_eq!(config.catalog.related_limit, 4);

        // Clean up
        unsafe {
            env::remove_var("STOREFRONT__LATENCY__FETCH_MS");
        }
        std::fs::remove_file(path).ok();
    }
}
