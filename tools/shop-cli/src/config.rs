//! CLI configuration.

use std::path::Path;

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use shop_commerce::cart::DEFAULT_NAMESPACE;
use shop_commerce::search::DEFAULT_PAGE_SIZE;
use shop_commerce::Currency;
use shop_observability::{LogFormat, LogLevel};
use shop_service::ServiceConfig;

/// CLI configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShopConfig {
    /// Catalog and cart tables.
    #[serde(default)]
    pub store: StoreConfig,

    /// Image bucket.
    #[serde(default)]
    pub assets: AssetsConfig,

    /// Recommendation paging.
    #[serde(default)]
    pub search: SearchConfig,

    /// Request logging.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Catalog settings.
    #[serde(default)]
    pub catalog: CatalogConfig,
}

impl ShopConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        if path.ends_with(".json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }

    /// Save config to a file.
    pub fn save(&self, path: &str) -> Result<()> {
        let content = if path.ends_with(".json") {
            serde_json::to_string_pretty(self)?
        } else {
            toml::to_string_pretty(self)?
        };

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path))
    }

    /// Catalog currency.
    pub fn currency(&self) -> Result<Currency> {
        Currency::from_code(&self.catalog.currency)
            .ok_or_else(|| anyhow!("Unknown currency in catalog.currency: {}", self.catalog.currency))
    }

    /// Settings for the shop service.
    pub fn service_config(&self) -> Result<ServiceConfig> {
        Ok(ServiceConfig::default()
            .with_currency(self.currency()?)
            .with_namespace(self.assets.namespace.clone())
            .with_page_size(self.search.page_size)
            .with_log_level(self.logging.level)
            .with_log_format(self.logging.format))
    }

    /// Problems that make the config unusable, then ones worth a warning.
    pub fn check(&self) -> (Vec<String>, Vec<String>) {
        let mut errors = Vec::new();
        let mut warnings = Vec::new();

        if self.currency().is_err() {
            errors.push(format!("catalog.currency '{}' is not supported", self.catalog.currency));
        }
        if self.search.page_size == 0 {
            errors.push("search.page_size must be at least 1".to_string());
        }
        let namespace = &self.assets.namespace;
        if namespace.is_empty() || namespace.contains('/') || namespace.starts_with('.') {
            errors.push(format!("assets.namespace '{}' must be a single path segment", namespace));
        }
        if self.store.path.is_empty() {
            errors.push("store.path is required".to_string());
        } else if !Path::new(&self.store.path).extension().is_some_and(|e| e == "json") {
            warnings.push(format!("store.path '{}' is a JSON snapshot; a .json extension is expected", self.store.path));
        }
        if self.search.page_size > 50 {
            warnings.push(format!("search.page_size {} is unusually large", self.search.page_size));
        }

        (errors, warnings)
    }
}

/// Where the catalog and cart tables are persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Snapshot file, relative to the config file.
    #[serde(default = "default_store_path")]
    pub path: String,
}

fn default_store_path() -> String {
    "data/shop.json".to_string()
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: default_store_path(),
        }
    }
}

/// Image bucket location and key namespace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetsConfig {
    /// Bucket root directory, relative to the config file.
    #[serde(default = "default_assets_root")]
    pub root: String,

    /// Key prefix for this application's objects.
    #[serde(default = "default_namespace")]
    pub namespace: String,
}

fn default_assets_root() -> String {
    "data/bucket".to_string()
}

fn default_namespace() -> String {
    DEFAULT_NAMESPACE.to_string()
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            root: default_assets_root(),
            namespace: default_namespace(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Recommendations shown per page.
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Minimum level written to stderr.
    #[serde(default = "default_log_level")]
    pub level: LogLevel,

    #[serde(default = "default_log_format")]
    pub format: LogFormat,
}

fn default_log_level() -> LogLevel {
    LogLevel::Warn
}

fn default_log_format() -> LogFormat {
    LogFormat::Human
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Currency code of catalog prices and budgets.
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_currency() -> String {
    "USD".to_string()
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            currency: default_currency(),
        }
    }
}

/// Generate a default shop.toml config file.
pub fn generate_default_config() -> String {
    format!(
        r#"# shopcart configuration

[store]
path = "{store}"

[assets]
root = "{root}"
namespace = "{namespace}"

[search]
page_size = {page_size}

[logging]
# trace, debug, info, warn, error
level = "warn"
# human or json
format = "human"

[catalog]
currency = "USD"
"#,
        store = default_store_path(),
        root = default_assets_root(),
        namespace = DEFAULT_NAMESPACE,
        page_size = DEFAULT_PAGE_SIZE,
    )
}
