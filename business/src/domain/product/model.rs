use serde::{Deserialize, Serialize};

/// Aggregated customer rating of a product.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Rating {
    /// Average score between 0 and 5.
    pub rate: f64,
    pub count: u32,
}

/// A catalog entry as fetched from the remote catalog. Immutable once fetched.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Product {
    pub id: u64,
    pub title: String,
    pub price: f64,
    pub description: String,
    pub category: String,
    pub image: String,
    pub rating: Rating,
}

/// Payload of a product creation, only built from a validated form.
///
/// Serializes to the JSON body the remote catalog expects.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewProduct {
    pub title: String,
    pub price: f64,
    pub description: String,
    pub image: String,
    pub category: String,
}

/// The remote catalog's answer to a creation.
///
/// It is never merged back into the local catalog; the product only shows up
/// after the catalog is fetched again.
#[derive(Debug, Clone, PartialEq)]
pub struct CreatedProduct {
    pub id: u64,
    pub title: String,
    pub price: f64,
    pub description: String,
    pub image: String,
    pub category: String,
}

impl CreatedProduct {
    pub fn from_new(id: u64, product: NewProduct) -> Self {
        Self {
            id,
            title: product.title,
            price: product.price,
            description: product.description,
            image: product.image,
            category: product.category,
        }
    }
}

impl Product {
    /// Case-insensitive substring match over the title.
    pub fn title_contains(&self, term: &str) -> bool {
        self.title.to_lowercase().contains(&term.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn backpack() -> Product {
        Product {
            id: 1,
            title: "Fjallraven - Foldsack No. 1 Backpack".to_string(),
            price: 109.95,
            description: "Your perfect pack for everyday use".to_string(),
            category: "men's clothing".to_string(),
            image: "https://fakestoreapi.com/img/81fPKd-2AYL._AC_SL1500_.jpg".to_string(),
            rating: Rating {
                rate: 3.9,
                count: 120,
            },
        }
    }

    #[test]
    fn should_match_title_ignoring_case() {
        let product = backpack();

        assert!(product.title_contains("BACKPACK"));
        assert!(product.title_contains("foldsack"));
    }

    #[test]
    fn should_not_match_when_term_absent_from_title() {
        let product = backpack();

        assert!(!product.title_contains("everyday"));
    }

    #[test]
    fn should_match_any_title_when_term_empty() {
        assert!(backpack().title_contains(""));
    }

    #[test]
    fn should_keep_payload_fields_when_created() {
        let created = CreatedProduct::from_new(
            21,
            NewProduct {
                title: "Desk lamp".to_string(),
                price: 19.5,
                description: "Warm light for late nights".to_string(),
                image: "https://example.com/lamp.png".to_string(),
                category: "electronics".to_string(),
            },
        );

        assert_eq!(created.id, 21);
        assert_eq!(created.title, "Desk lamp");
        assert_eq!(created.category, "electronics");
    }
}
