use async_trait::async_trait;

use crate::domain::errors::GatewayError;

use super::model::{CreatedProduct, NewProduct, Product};

/// Port to the remote catalog endpoint.
#[async_trait]
pub trait CatalogGateway: Send + Sync {
    /// Fetches the full catalog in one request.
    async fn fetch_products(&self) -> Result<Vec<Product>, GatewayError>;
    async fn create_product(&self, product: &NewProduct) -> Result<CreatedProduct, GatewayError>;
}
