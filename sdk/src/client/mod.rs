//! HTTP client for the Shopify Admin REST API.
//!
//! This module provides the shared, type-safe HTTP client that resource
//! services delegate to.
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_sdk::client::{ClientConfig, ShopifyClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ClientConfig::for_shop("fooshop").with_access_token("shpat_...");
//!     let client = ShopifyClient::new(config)?;
//!
//!     let risks = client.risks().list(450789469, None).await?;
//!     println!("Found {} risks", risks.len());
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod http;
pub mod options;

pub use config::ClientConfig;
pub use error::ClientError;
pub use http::ShopifyClient;
pub use options::QueryOptions;
