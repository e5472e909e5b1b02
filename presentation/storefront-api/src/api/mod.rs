pub mod error;
pub mod health;
pub mod product_form;
pub mod storefront;
pub mod tags;
