//! Shopify SDK - typed Rust client for the Shopify Admin REST API.
//!
//! This crate binds the order risk resource (`orders/{order_id}/risks`)
//! on top of a small shared HTTP client.
//!
//! # Modules
//!
//! - [`client`] — Shared HTTP client, configuration, query options and errors
//! - [`services`] — Resource services ([`RiskService`])
//! - [`types`] — Resource records ([`Risk`]) and their JSON envelopes
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_sdk::{QueryOptions, Risk, ShopifyClient};
//!
//! let client = ShopifyClient::for_shop("fooshop", "shpat_...")?;
//! let risks = client.risks();
//!
//! let listed = risks
//!     .list(450789469, Some(&QueryOptions::new().with_fields(&["id", "score"])))
//!     .await?;
//!
//! let created = risks
//!     .create(
//!         450789469,
//!         Risk::new()
//!             .with_message("This order came from an anonymous proxy")
//!             .with_recommendation("cancel")
//!             .with_score("1.0")
//!             .with_source("External"),
//!     )
//!     .await?;
//! ```

pub mod client;
pub mod services;
pub mod types;

pub use client::{ClientConfig, ClientError, QueryOptions, ShopifyClient};
pub use services::RiskService;
pub use types::{Risk, RiskResource, RisksResource};
