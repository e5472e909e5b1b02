use async_trait::async_trait;
use serde::Deserialize;

use business::domain::errors::GatewayError;
use business::domain::product::gateway::CatalogGateway;
use business::domain::product::model::{CreatedProduct, NewProduct, Product};

use crate::client::FakeStoreClient;

/// The remote answer only reliably carries the assigned id; the rest is
/// taken from what was sent.
#[derive(Debug, Deserialize)]
struct CreatedProductPayload {
    id: u64,
}

pub struct CatalogGatewayHttp {
    client: FakeStoreClient,
}

impl CatalogGatewayHttp {
    pub fn new(client: FakeStoreClient) -> Self {
        Self { client }
    }

    fn parse_catalog(body: &str) -> Result<Vec<Product>, GatewayError> {
        serde_json::from_str(body).map_err(|_| GatewayError::decode())
    }

    fn parse_created(body: &str, product: &NewProduct) -> Result<CreatedProduct, GatewayError> {
        let payload: CreatedProductPayload =
            serde_json::from_str(body).map_err(|_| GatewayError::decode())?;
        Ok(CreatedProduct::from_new(payload.id, product.clone()))
    }
}

#[async_trait]
impl CatalogGateway for CatalogGatewayHttp {
    async fn fetch_products(&self) -> Result<Vec<Product>, GatewayError> {
        let response = self
            .client
            .client
            .get(self.client.products_url())
            .send()
            .await
            .map_err(|_| GatewayError::network())?;

        if !response.status().is_success() {
            return Err(GatewayError::unexpected_status(response.status().as_u16()));
        }

        let body = response.text().await.map_err(|_| GatewayError::network())?;

        Self::parse_catalog(&body)
    }

    async fn create_product(&self, product: &NewProduct) -> Result<CreatedProduct, GatewayError> {
        let response = self
            .client
            .client
            .post(self.client.products_url())
            .header("Content-Type", "application/json")
            .json(product)
            .send()
            .await
            .map_err(|_| GatewayError::network())?;

        if !response.status().is_success() {
            return Err(GatewayError::unexpected_status(response.status().as_u16()));
        }

        let body = response.text().await.map_err(|_| GatewayError::network())?;

        Self::parse_created(&body, product)
    }
}
