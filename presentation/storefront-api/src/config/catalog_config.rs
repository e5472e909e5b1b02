use std::env;
use std::time::Duration;

use business::application::storefront::service::DEFAULT_DIALOG_CLOSE_DELAY;
use business::domain::catalog::pagination::DEFAULT_PAGE_SIZE;
use fakestore::client::DEFAULT_CATALOG_ENDPOINT;

/// Remote catalog and storefront session settings
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogConfig {
    pub endpoint: String,
    pub page_size: usize,
    pub initial_cart_items: u32,
    pub dialog_close_delay: Duration,
}

impl CatalogConfig {
    /// Load catalog configuration from environment variables
    ///
    /// Environment variables:
    /// - CATALOG_ENDPOINT: Products endpoint (default: "https://fakestoreapi.com/products")
    /// - CATALOG_PAGE_SIZE: Products per page, at least 1 (default: 8)
    /// - CART_INITIAL_ITEMS: Cart counter at startup (default: 0)
    /// - PRODUCT_FORM_CLOSE_DELAY_MS: Delay before the add-product dialog
    ///   closes after a successful submission (default: 2000)
    ///
    /// Unparseable values fall back to their defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let endpoint = lookup("CATALOG_ENDPOINT")
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_CATALOG_ENDPOINT.to_string());
        let page_size = lookup("CATALOG_PAGE_SIZE")
            .and_then(|value| value.trim().parse::<usize>().ok())
            .filter(|size| *size > 0)
            .unwrap_or(DEFAULT_PAGE_SIZE);
        let initial_cart_items = lookup("CART_INITIAL_ITEMS")
            .and_then(|value| value.trim().parse::<u32>().ok())
            .unwrap_or(0);
        let dialog_close_delay = lookup("PRODUCT_FORM_CLOSE_DELAY_MS")
            .and_then(|value| value.trim().parse::<u64>().ok())
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_DIALOG_CLOSE_DELAY);

        Self {
            endpoint,
            page_size,
            initial_cart_items,
            dialog_close_delay,
        }
    }
}
