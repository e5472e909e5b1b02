use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::application::storefront::service::StorefrontService;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::storefront::dto::{
    ApplyPricePresetRequest, CartResponse, ChangePageRequest, ProductResponse, StorefrontResponse,
    UpdateFiltersRequest,
};
use crate::api::tags::ApiTags;

pub struct StorefrontApi {
    service: Arc<StorefrontService>,
}

impl StorefrontApi {
    pub fn new(service: Arc<StorefrontService>) -> Self {
        Self { service }
    }

    async fn snapshot(&self) -> Json<StorefrontResponse> {
        Json(self.service.read(StorefrontResponse::from_storefront).await)
    }
}

/// Storefront session API
///
/// Browse the catalog: filter, paginate, open product detail and count cart items.
#[OpenApi]
impl StorefrontApi {
    /// Current storefront view
    ///
    /// Load status, active filters, the products of the current page and the
    /// pagination controls when more than one page exists.
    #[oai(path = "/storefront", method = "get", tag = "ApiTags::Storefront")]
    async fn get_storefront(&self) -> Json<StorefrontResponse> {
        self.snapshot().await
    }

    /// Update filters
    ///
    /// Applies any subset of category, search term and price bounds. Always
    /// returns to the first page.
    #[oai(path = "/storefront/filters", method = "put", tag = "ApiTags::Storefront")]
    async fn update_filters(&self, body: Json<UpdateFiltersRequest>) -> Json<StorefrontResponse> {
        self.service
            .update(|storefront| body.0.apply_to(storefront.view_mut()))
            .await;
        self.snapshot().await
    }

    /// Apply a quick price filter
    ///
    /// Replaces both price bounds with the preset range and returns to the first page.
    #[oai(
        path = "/storefront/filters/price-preset",
        method = "put",
        tag = "ApiTags::Storefront"
    )]
    async fn apply_price_preset(
        &self,
        body: Json<ApplyPricePresetRequest>,
    ) -> Json<StorefrontResponse> {
        let preset = body.0.preset.into();
        self.service
            .update(|storefront| storefront.view_mut().apply_price_preset(preset))
            .await;
        self.snapshot().await
    }

    /// Jump to a page
    #[oai(path = "/storefront/page", method = "put", tag = "ApiTags::Storefront")]
    async fn change_page(&self, body: Json<ChangePageRequest>) -> Json<StorefrontResponse> {
        let page = usize::try_from(body.0.page).unwrap_or(usize::MAX);
        self.service
            .update(|storefront| storefront.view_mut().go_to_page(page))
            .await;
        self.snapshot().await
    }

    /// Next page
    #[oai(path = "/storefront/page/next", method = "post", tag = "ApiTags::Storefront")]
    async fn next_page(&self) -> Json<StorefrontResponse> {
        self.service
            .update(|storefront| storefront.view_mut().next_page())
            .await;
        self.snapshot().await
    }

    /// Previous page
    #[oai(path = "/storefront/page/previous", method = "post", tag = "ApiTags::Storefront")]
    async fn previous_page(&self) -> Json<StorefrontResponse> {
        self.service
            .update(|storefront| storefront.view_mut().previous_page())
            .await;
        self.snapshot().await
    }

    /// Reload the catalog
    ///
    /// Fetches the catalog again. Products created through the form only show
    /// up after this.
    #[oai(path = "/storefront/catalog/reload", method = "post", tag = "ApiTags::Storefront")]
    async fn reload_catalog(&self) -> ReloadCatalogResponse {
        match self.service.load_catalog().await {
            Ok(_) => ReloadCatalogResponse::Ok(self.snapshot().await),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                ReloadCatalogResponse::BadGateway(json)
            }
        }
    }

    /// Open product detail
    ///
    /// Selects a product of the catalog, regardless of the active filters.
    #[oai(path = "/storefront/products/:id", method = "get", tag = "ApiTags::Storefront")]
    async fn get_product_detail(&self, id: Path<u64>) -> ProductDetailResponse {
        let result = self
            .service
            .update(|storefront| storefront.select_product(id.0).map(ProductResponse::from))
            .await;

        match result {
            Ok(product) => ProductDetailResponse::Ok(Json(product)),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                ProductDetailResponse::NotFound(json)
            }
        }
    }

    /// Close product detail
    #[oai(path = "/storefront/selection", method = "delete", tag = "ApiTags::Storefront")]
    async fn close_product_detail(&self) -> Json<StorefrontResponse> {
        self.service
            .update(|storefront| storefront.close_detail())
            .await;
        self.snapshot().await
    }

    /// Add to cart
    ///
    /// Increments the cart counter. The cart does not track which product was added.
    #[oai(path = "/storefront/cart/items", method = "post", tag = "ApiTags::Storefront")]
    async fn add_to_cart(&self) -> Json<CartResponse> {
        let cart_items = self
            .service
            .update(|storefront| storefront.add_to_cart())
            .await;
        Json(CartResponse { cart_items })
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum ReloadCatalogResponse {
    #[oai(status = 200)]
    Ok(Json<StorefrontResponse>),
    #[oai(status = 502)]
    BadGateway(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum ProductDetailResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
}
