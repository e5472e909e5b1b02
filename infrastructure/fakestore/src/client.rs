use reqwest::Client;

pub const DEFAULT_CATALOG_ENDPOINT: &str = "https://fakestoreapi.com/products";

/// Shared HTTP client for the remote catalog.
///
/// No request timeout is set: both catalog calls run until the remote side
/// answers or the connection drops.
pub struct FakeStoreClient {
    pub client: Client,
    pub catalog_endpoint: String,
}

impl FakeStoreClient {
    pub fn new(catalog_endpoint: impl Into<String>) -> Self {
        let client = Client::builder()
            .user_agent(concat!("storefront/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_default();

        Self {
            client,
            catalog_endpoint: catalog_endpoint.into(),
        }
    }

    /// Endpoint used for both listing and creating products.
    pub fn products_url(&self) -> &str {
        &self.catalog_endpoint
    }
}
