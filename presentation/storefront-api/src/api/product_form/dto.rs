use poem_openapi::{Enum, Object};

use business::domain::product::form::FormField;
use business::domain::product::model::CreatedProduct;
use business::domain::storefront::dialog::AddProductDialog;

#[derive(Debug, Clone, Copy, PartialEq, Enum)]
pub enum FormFieldDto {
    #[oai(rename = "title")]
    Title,
    #[oai(rename = "price")]
    Price,
    #[oai(rename = "description")]
    Description,
    #[oai(rename = "category")]
    Category,
    #[oai(rename = "image")]
    Image,
}

impl From<FormField> for FormFieldDto {
    fn from(field: FormField) -> Self {
        match field {
            FormField::Title => FormFieldDto::Title,
            FormField::Price => FormFieldDto::Price,
            FormField::Description => FormFieldDto::Description,
            FormField::Category => FormFieldDto::Category,
            FormField::Image => FormFieldDto::Image,
        }
    }
}

impl From<FormFieldDto> for FormField {
    fn from(dto: FormFieldDto) -> Self {
        match dto {
            FormFieldDto::Title => FormField::Title,
            FormFieldDto::Price => FormField::Price,
            FormFieldDto::Description => FormField::Description,
            FormFieldDto::Category => FormField::Category,
            FormFieldDto::Image => FormField::Image,
        }
    }
}

/// Form input exactly as typed
#[derive(Debug, Clone, Object)]
pub struct ProductFormFieldsResponse {
    pub title: String,
    pub price: String,
    pub description: String,
    pub category: String,
    pub image: String,
}

#[derive(Debug, Clone, Object)]
pub struct FieldErrorResponse {
    pub field: FormFieldDto,
    pub message: String,
}

#[derive(Debug, Clone, Object)]
pub struct ProductFormResponse {
    pub open: bool,
    pub submitting: bool,
    /// Raised after a successful submission until the dialog closes itself
    pub submit_succeeded: bool,
    pub fields: ProductFormFieldsResponse,
    pub errors: Vec<FieldErrorResponse>,
    /// Summary shown above the fields after a rejected submission
    #[oai(skip_serializing_if_is_none)]
    pub message: Option<String>,
}

impl ProductFormResponse {
    pub fn from_dialog(dialog: &AddProductDialog) -> Self {
        let form = dialog.form();
        Self {
            open: dialog.is_open(),
            submitting: dialog.is_submitting(),
            submit_succeeded: dialog.has_succeeded(),
            fields: ProductFormFieldsResponse {
                title: form.title.clone(),
                price: form.price.clone(),
                description: form.description.clone(),
                category: form.category.clone(),
                image: form.image.clone(),
            },
            errors: dialog
                .errors()
                .iter()
                .map(|(field, message)| FieldErrorResponse {
                    field: field.into(),
                    message: message.to_string(),
                })
                .collect(),
            message: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

/// Replaces the value of one form field
#[derive(Debug, Clone, Object)]
pub struct EditFieldRequest {
    pub field: FormFieldDto,
    pub value: String,
}

#[derive(Debug, Clone, Object)]
pub struct CreatedProductResponse {
    /// Identifier assigned by the remote catalog
    pub id: u64,
    pub title: String,
    pub price: f64,
    pub description: String,
    pub image: String,
    pub category: String,
}

impl From<CreatedProduct> for CreatedProductResponse {
    fn from(product: CreatedProduct) -> Self {
        Self {
            id: product.id,
            title: product.title,
            price: product.price,
            description: product.description,
            image: product.image,
            category: product.category,
        }
    }
}
