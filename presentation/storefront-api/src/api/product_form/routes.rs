use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::application::storefront::service::StorefrontService;
use business::domain::product::errors::ProductError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::product_form::dto::{
    CreatedProductResponse, EditFieldRequest, ProductFormResponse,
};
use crate::api::tags::ApiTags;

pub struct ProductFormApi {
    service: Arc<StorefrontService>,
}

impl ProductFormApi {
    pub fn new(service: Arc<StorefrontService>) -> Self {
        Self { service }
    }

    async fn snapshot(&self) -> ProductFormResponse {
        self.service
            .read(|storefront| ProductFormResponse::from_dialog(storefront.dialog()))
            .await
    }
}

/// Add-product form API
///
/// Drives the dialog used to submit a new product to the remote catalog.
#[OpenApi]
impl ProductFormApi {
    /// Current form state
    #[oai(path = "/product-form", method = "get", tag = "ApiTags::ProductForm")]
    async fn get_form(&self) -> Json<ProductFormResponse> {
        Json(self.snapshot().await)
    }

    /// Open the form
    #[oai(path = "/product-form/open", method = "post", tag = "ApiTags::ProductForm")]
    async fn open_form(&self) -> Json<ProductFormResponse> {
        self.service
            .update(|storefront| storefront.dialog_mut().open())
            .await;
        Json(self.snapshot().await)
    }

    /// Close the form
    ///
    /// Discards the input, the errors and the success flag.
    #[oai(path = "/product-form", method = "delete", tag = "ApiTags::ProductForm")]
    async fn close_form(&self) -> Json<ProductFormResponse> {
        self.service
            .update(|storefront| storefront.dialog_mut().close())
            .await;
        Json(self.snapshot().await)
    }

    /// Edit one field
    ///
    /// Clears the validation error of that field only.
    #[oai(path = "/product-form", method = "patch", tag = "ApiTags::ProductForm")]
    async fn edit_field(&self, body: Json<EditFieldRequest>) -> EditFieldResponse {
        let EditFieldRequest { field, value } = body.0;
        match self.service.edit_form_field(field.into(), value).await {
            Ok(()) => EditFieldResponse::Ok(Json(self.snapshot().await)),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                EditFieldResponse::Conflict(json)
            }
        }
    }

    /// Submit the form
    ///
    /// Validates the input and posts it to the remote catalog. The created
    /// product is not added to the local catalog.
    #[oai(path = "/product-form/submit", method = "post", tag = "ApiTags::ProductForm")]
    async fn submit_form(&self) -> SubmitProductResponse {
        match self.service.submit_product().await {
            Ok(created) => SubmitProductResponse::Created(Json(created.into())),
            Err(err @ ProductError::InvalidForm(_)) => {
                let form = self.snapshot().await.with_message(err.user_message());
                SubmitProductResponse::BadRequest(Json(form))
            }
            Err(err @ ProductError::FormClosed) => {
                let (_status, json) = err.into_error_response();
                SubmitProductResponse::Conflict(json)
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                SubmitProductResponse::BadGateway(json)
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum SubmitProductResponse {
    #[oai(status = 201)]
    Created(Json<CreatedProductResponse>),
    /// Field-scoped validation errors
    #[oai(status = 400)]
    BadRequest(Json<ProductFormResponse>),
    /// The form is not open
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 502)]
    BadGateway(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum EditFieldResponse {
    #[oai(status = 200)]
    Ok(Json<ProductFormResponse>),
    /// The form is not open
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
}
