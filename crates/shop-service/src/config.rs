//! Service configuration.

use serde::{Deserialize, Serialize};
use shop_commerce::cart::DEFAULT_NAMESPACE;
use shop_commerce::search::DEFAULT_PAGE_SIZE;
use shop_commerce::Currency;
use shop_observability::{LogFormat, LogLevel};

/// Settings the service is constructed with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Currency of the catalog; budgets are read in it.
    pub currency: Currency,
    /// Bucket namespace for cart images.
    pub namespace: String,
    /// Results per page for clients that page.
    pub page_size: usize,
    pub log_level: LogLevel,
    pub log_format: LogFormat,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            currency: Currency::USD,
            namespace: DEFAULT_NAMESPACE.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            log_level: LogLevel::Info,
            log_format: LogFormat::Json,
        }
    }
}

impl ServiceConfig {
    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }

    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn with_log_level(mut self, level: LogLevel) -> Self {
        self.log_level = level;
        self
    }

    pub fn with_log_format(mut self, format: LogFormat) -> Self {
        self.log_format = format;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_config_default() {
        let config = ServiceConfig::default();
        assert_eq!(config.currency, Currency::USD);
        assert_eq!(config.namespace, "shopcart");
        assert_eq!(config.page_size, 5);
    }

    #[test]
    fn test_service_config_builder() {
        let config = ServiceConfig::default()
            .with_namespace("store")
            .with_page_size(10)
            .with_log_level(LogLevel::Debug);
        assert_eq!(config.namespace, "store");
        assert_eq!(config.page_size, 10);
        assert_eq!(config.log_level, LogLevel::Debug);
    }
}
