use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::gateway::CatalogGateway;
use crate::domain::product::model::CreatedProduct;
use crate::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};

pub struct CreateProductUseCaseImpl {
    pub gateway: Arc<dyn CatalogGateway>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateProductUseCase for CreateProductUseCaseImpl {
    async fn execute(&self, params: CreateProductParams) -> Result<CreatedProduct, ProductError> {
        let product = params.form.validate().map_err(|errors| {
            self.logger.debug(&format!(
                "Product form rejected with {} invalid field(s)",
                errors.len()
            ));
            ProductError::InvalidForm(errors)
        })?;

        self.logger
            .info(&format!("Submitting product: {}", product.title));

        let created = self
            .gateway
            .create_product(&product)
            .await
            .map_err(|err| {
                self.logger
                    .error(&format!("Error adding product: {:?}", err));
                ProductError::CreateFailed
            })?;

        self.logger
            .info(&format!("Product added with id: {}", created.id));
        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::GatewayError;
    use crate::domain::product::form::{FormField, ProductForm};
    use crate::domain::product::model::{NewProduct, Product};
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

    fn valid_form() -> ProductForm {
        ProductForm {
            title: "Canvas tote bag".to_string(),
            price: "14.50".to_string(),
            description: "Roomy bag for groceries and books".to_string(),
            category: "women's clothing".to_string(),
            image: "https://example.com/tote.png".to_string(),
        }
    }

    #[tokio::test]
    async fn should_submit_product_when_form_valid() {
        let mut gateway = MockGateway::new();
        gateway
            .expect_create_product()
            .withf(|product| product.title == "Canvas tote bag" && product.price == 14.5)
            .times(1)
            .returning(|product| Ok(CreatedProduct::from_new(21, product.clone())));

        let use_case = CreateProductUseCaseImpl {
            gateway: Arc::new(gateway),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(CreateProductParams { form: valid_form() })
            .await;

        assert!(result.is_ok());
        let created = result.unwrap();
        assert_eq!(created.id, 21);
        assert_eq!(created.category, "women's clothing");
    }

    #[tokio::test]
    async fn should_not_call_gateway_when_form_invalid() {
        let mut gateway = MockGateway::new();
        gateway.expect_create_product().times(0);

        let use_case = CreateProductUseCaseImpl {
            gateway: Arc::new(gateway),
            logger: mock_logger(),
        };

        let mut form = valid_form();
        form.image = "not-a-url".to_string();
        let result = use_case.execute(CreateProductParams { form }).await;

        match result {
            Err(ProductError::InvalidForm(errors)) => {
                assert_eq!(errors.len(), 1);
                assert!(errors.get(FormField::Image).is_some());
            }
            other => panic!("expected invalid form, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn should_report_generic_failure_when_gateway_fails() {
        let mut gateway = MockGateway::new();
        gateway
            .expect_create_product()
            .returning(|_| Err(GatewayError::unexpected_status(500)));

        let use_case = CreateProductUseCaseImpl {
            gateway: Arc::new(gateway),
            logger: mock_logger(),
        };

        let err = use_case
            .execute(CreateProductParams { form: valid_form() })
            .await
            .unwrap_err();

        assert!(matches!(err, ProductError::CreateFailed));
        assert_eq!(err.user_message(), "Failed to add product. Please try again.");
    }
}
