//! Resource services.
//!
//! Each service maps typed operations onto the REST paths of one resource
//! and delegates the HTTP exchange to [`ShopifyClient`](crate::client::ShopifyClient).

pub mod risk;

pub use risk::RiskService;
