use super::form::FormErrors;

#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("catalog.fetch_failed")]
    FetchFailed,
    #[error("product.create_failed")]
    CreateFailed,
    #[error("product.invalid_form")]
    InvalidForm(FormErrors),
    #[error("product.not_found")]
    NotFound,
    #[error("product.form_closed")]
    FormClosed,
}

impl ProductError {
    /// Message shown to the user. Gateway details never leak into it.
    pub fn user_message(&self) -> &'static str {
        match self {
            ProductError::FetchFailed => "Failed to fetch products",
            ProductError::CreateFailed => "Failed to add product. Please try again.",
            ProductError::InvalidForm(_) => "Please correct the highlighted fields",
            ProductError::NotFound => "Product not found",
            ProductError::FormClosed => "The add-product form is not open",
        }
    }
}
