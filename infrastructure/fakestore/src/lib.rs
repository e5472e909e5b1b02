pub mod catalog_gateway;
pub mod client;
