use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::gateway::CatalogGateway;
use crate::domain::product::model::Product;
use crate::domain::product::use_cases::load_catalog::LoadCatalogUseCase;

pub struct LoadCatalogUseCaseImpl {
    pub gateway: Arc<dyn CatalogGateway>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl LoadCatalogUseCase for LoadCatalogUseCaseImpl {
    async fn execute(&self) -> Result<Vec<Product>, ProductError> {
        self.logger.info("Fetching product catalog");
        let products = self.gateway.fetch_products().await.map_err(|err| {
            self.logger
                .error(&format!("Catalog fetch failed: {:?}", err));
            ProductError::FetchFailed
        })?;
        self.logger
            .info(&format!("Loaded {} products", products.len()));
        Ok(products)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::GatewayError;
    use crate::domain::product::model::{CreatedProduct, NewProduct, Rating};
    use mockall::mock;

    mock! {
        pub Gateway {}

        #[async_trait]
        impl CatalogGateway for Gateway {
            async fn fetch_products(&self) -> Result<Vec<Product>, GatewayError>;
            async fn create_product(&self, product: &NewProduct) -> Result<CreatedProduct, GatewayError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    #[tokio::test]
    async fn should_return_catalog_when_fetch_succeeds() {
        let mut gateway = MockGateway::new();
        gateway.expect_fetch_products().times(1).returning(|| {
            Ok(vec![Product {
                id: 9,
                title: "WD 2TB Elements Portable Hard Drive".to_string(),
                price: 64.0,
                description: "USB 3.0 and USB 2.0 compatibility".to_string(),
                category: "electronics".to_string(),
                image: "https://fakestoreapi.com/img/61IBBVJvSDL._AC_SY879_.jpg".to_string(),
                rating: Rating {
                    rate: 3.3,
                    count: 203,
                },
            }])
        });

        let use_case = LoadCatalogUseCaseImpl {
            gateway: Arc::new(gateway),
            logger: mock_logger(),
        };

        let result = use_case.execute().await;

        assert!(result.is_ok());
        let products = result.unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].category, "electronics");
    }

    #[tokio::test]
    async fn should_report_generic_failure_when_status_not_success() {
        let mut gateway = MockGateway::new();
        gateway
            .expect_fetch_products()
            .times(1)
            .returning(|| Err(GatewayError::unexpected_status(503)));

        let use_case = LoadCatalogUseCaseImpl {
            gateway: Arc::new(gateway),
            logger: mock_logger(),
        };

        let result = use_case.execute().await;

        assert!(matches!(result, Err(ProductError::FetchFailed)));
    }

    #[tokio::test]
    async fn should_report_generic_failure_when_network_down() {
        let mut gateway = MockGateway::new();
        gateway
            .expect_fetch_products()
            .returning(|| Err(GatewayError::network()));

        let use_case = LoadCatalogUseCaseImpl {
            gateway: Arc::new(gateway),
            logger: mock_logger(),
        };

        let err = use_case.execute().await.unwrap_err();

        assert_eq!(err.user_message(), "Failed to fetch products");
    }
}
