use std::sync::Arc;

use logger::TracingLogger;

use fakestore::catalog_gateway::CatalogGatewayHttp;
use fakestore::client::FakeStoreClient;

use business::application::product::create::CreateProductUseCaseImpl;
use business::application::product::load_catalog::LoadCatalogUseCaseImpl;
use business::application::storefront::service::StorefrontService;
use business::domain::cart::model::Cart;
use business::domain::storefront::model::Storefront;

use crate::config::catalog_config::CatalogConfig;

pub struct DependencyContainer {
    pub storefront: Arc<StorefrontService>,
    pub health_api: crate::api::health::routes::Api,
    pub storefront_api: crate::api::storefront::routes::StorefrontApi,
    pub product_form_api: crate::api::product_form::routes::ProductFormApi,
}

impl DependencyContainer {
    pub fn new(config: &CatalogConfig) -> Self {
        let logger = Arc::new(TracingLogger);
        let health_api = crate::api::health::routes::Api::new();

        // Infrastructure adapters
        let gateway = Arc::new(CatalogGatewayHttp::new(FakeStoreClient::new(
            config.endpoint.clone(),
        )));

        // Product use cases
        let load_catalog_use_case = Arc::new(LoadCatalogUseCaseImpl {
            gateway: gateway.clone(),
            logger: logger.clone(),
        });
        let create_product_use_case = Arc::new(CreateProductUseCaseImpl {
            gateway,
            logger: logger.clone(),
        });

        // Session
        let storefront = Arc::new(StorefrontService::new(
            Storefront::new(config.page_size, Cart::with_items(config.initial_cart_items)),
            load_catalog_use_case,
            create_product_use_case,
            logger,
            config.dialog_close_delay,
        ));

        let storefront_api = crate::api::storefront::routes::StorefrontApi::new(storefront.clone());
        let product_form_api =
            crate::api::product_form::routes::ProductFormApi::new(storefront.clone());

        Self {
            storefront,
            health_api,
            storefront_api,
            product_form_api,
        }
    }
}
