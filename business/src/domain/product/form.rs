use std::collections::BTreeMap;

use url::Url;

use super::model::NewProduct;

const MIN_TITLE_LENGTH: usize = 3;
const MIN_DESCRIPTION_LENGTH: usize = 10;

/// Fields of the add-product form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormField {
    Title,
    Price,
    Description,
    Category,
    Image,
}

impl FormField {
    pub const ALL: [FormField; 5] = [
        FormField::Title,
        FormField::Price,
        FormField::Description,
        FormField::Category,
        FormField::Image,
    ];
}

/// Field-scoped validation messages, at most one per field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormErrors(BTreeMap<FormField, String>);

impl FormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: FormField, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn get(&self, field: FormField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    /// Drops the message of one field, leaving the others untouched.
    pub fn clear(&mut self, field: FormField) {
        self.0.remove(&field);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FormField, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }
}

/// Raw text of the add-product form, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductForm {
    pub title: String,
    pub price: String,
    pub description: String,
    pub category: String,
    pub image: String,
}

impl ProductForm {
    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Title => &self.title,
            FormField::Price => &self.price,
            FormField::Description => &self.description,
            FormField::Category => &self.category,
            FormField::Image => &self.image,
        }
    }

    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FormField::Title => self.title = value,
            FormField::Price => self.price = value,
            FormField::Description => self.description = value,
            FormField::Category => self.category = value,
            FormField::Image => self.image = value,
        }
    }

    /// Validates every field and builds the creation payload.
    ///
    /// All failing fields are reported at once.
    pub fn validate(&self) -> Result<NewProduct, FormErrors> {
        let mut errors = FormErrors::new();

        if self.title.trim().is_empty() {
            errors.insert(FormField::Title, "Product title is required");
        } else if text_length(&self.title) < MIN_TITLE_LENGTH {
            errors.insert(
                FormField::Title,
                "Title must be at least 3 characters long",
            );
        }

        let price = if self.price.trim().is_empty() {
            errors.insert(FormField::Price, "Price is required");
            None
        } else {
            match parse_price(&self.price) {
                Some(price) => Some(price),
                None => {
                    errors.insert(
                        FormField::Price,
                        "Please enter a valid price greater than 0",
                    );
                    None
                }
            }
        };

        if self.description.trim().is_empty() {
            errors.insert(FormField::Description, "Description is required");
        } else if text_length(&self.description) < MIN_DESCRIPTION_LENGTH {
            errors.insert(
                FormField::Description,
                "Description must be at least 10 characters long",
            );
        }

        if self.category.trim().is_empty() {
            errors.insert(FormField::Category, "Category is required");
        }

        if self.image.trim().is_empty() {
            errors.insert(FormField::Image, "Image URL is required");
        } else if Url::parse(&self.image).is_err() {
            errors.insert(FormField::Image, "Please enter a valid image URL");
        }

        match price {
            Some(price) if errors.is_empty() => Ok(NewProduct {
                title: self.title.clone(),
                price,
                description: self.description.clone(),
                image: self.image.clone(),
                category: self.category.clone(),
            }),
            _ => Err(errors),
        }
    }
}

/// Length as browsers report it for form input, in UTF-16 code units.
fn text_length(value: &str) -> usize {
    value.encode_utf16().count()
}

fn parse_price(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|price| price.is_finite() && *price > 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> ProductForm {
        ProductForm {
            title: "Mechanical keyboard".to_string(),
            price: "89.90".to_string(),
            description: "Tactile switches and a sturdy aluminium case".to_string(),
            category: "electronics".to_string(),
            image: "https://example.com/keyboard.png".to_string(),
        }
    }

    fn error_for(form: &ProductForm, field: FormField) -> Option<String> {
        form.validate()
            .err()
            .and_then(|errors| errors.get(field).map(str::to_string))
    }

    #[test]
    fn should_build_payload_when_form_valid() {
        let product = valid_form().validate().unwrap();

        assert_eq!(product.title, "Mechanical keyboard");
        assert_eq!(product.price, 89.90);
        assert_eq!(product.category, "electronics");
        assert_eq!(product.image, "https://example.com/keyboard.png");
    }

    #[test]
    fn should_reject_title_shorter_than_three_characters() {
        let mut form = valid_form();
        form.title = "ab".to_string();

        assert_eq!(
            error_for(&form, FormField::Title).as_deref(),
            Some("Title must be at least 3 characters long")
        );
    }

    #[test]
    fn should_accept_title_of_three_characters() {
        let mut form = valid_form();
        form.title = "abc".to_string();

        assert!(form.validate().is_ok());
    }

    #[test]
    fn should_count_title_length_in_utf16_units() {
        // Arrange
        let mut form = valid_form();
        form.title = "\u{1F600}\u{1F600}".to_string();

        // Act
        let result = form.validate();

        // Assert
        assert!(result.is_ok());
    }

    #[test]
    fn should_require_title_when_only_whitespace() {
        let mut form = valid_form();
        form.title = "   ".to_string();

        assert_eq!(
            error_for(&form, FormField::Title).as_deref(),
            Some("Product title is required")
        );
    }

    #[test]
    fn should_reject_zero_price() {
        let mut form = valid_form();
        form.price = "0".to_string();

        assert_eq!(
            error_for(&form, FormField::Price).as_deref(),
            Some("Please enter a valid price greater than 0")
        );
    }

    #[test]
    fn should_reject_non_numeric_price() {
        let mut form = valid_form();
        form.price = "cheap".to_string();

        assert!(error_for(&form, FormField::Price).is_some());
    }

    #[test]
    fn should_accept_decimal_price() {
        let mut form = valid_form();
        form.price = "9.99".to_string();

        let product = form.validate().unwrap();
        assert_eq!(product.price, 9.99);
    }

    #[test]
    fn should_reject_short_description() {
        let mut form = valid_form();
        form.description = "Too short".to_string();

        assert_eq!(
            error_for(&form, FormField::Description).as_deref(),
            Some("Description must be at least 10 characters long")
        );
    }

    #[test]
    fn should_require_category() {
        let mut form = valid_form();
        form.category = String::new();

        assert_eq!(
            error_for(&form, FormField::Category).as_deref(),
            Some("Category is required")
        );
    }

    #[test]
    fn should_reject_image_that_is_not_a_url() {
        let mut form = valid_form();
        form.image = "not-a-url".to_string();

        assert_eq!(
            error_for(&form, FormField::Image).as_deref(),
            Some("Please enter a valid image URL")
        );
    }

    #[test]
    fn should_report_every_failing_field_at_once() {
        let errors = ProductForm::default().validate().unwrap_err();

        assert_eq!(errors.len(), FormField::ALL.len());
        assert_eq!(errors.get(FormField::Image), Some("Image URL is required"));
    }

    #[test]
    fn should_clear_only_the_given_field() {
        let mut errors = ProductForm::default().validate().unwrap_err();

        errors.clear(FormField::Price);

        assert!(errors.get(FormField::Price).is_none());
        assert!(errors.get(FormField::Title).is_some());
    }
}
