//! Resource types for the Shopify SDK.
//!
//! This module provides the resource records and the JSON envelopes the
//! Admin API wraps them in.

pub mod risk;

pub use risk::{Risk, RiskResource, RisksResource};
