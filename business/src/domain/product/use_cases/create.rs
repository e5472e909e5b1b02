use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::form::ProductForm;
use crate::domain::product::model::CreatedProduct;

pub struct CreateProductParams {
    pub form: ProductForm,
}

#[async_trait]
pub trait CreateProductUseCase: Send + Sync {
    async fn execute(&self, params: CreateProductParams) -> Result<CreatedProduct, ProductError>;
}
