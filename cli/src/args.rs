//! Command line arguments.
//!
//! Connection options fall back to `SHOPIFY_*` environment variables.

use std::time::Duration;

use anyhow::bail;
use clap::{Args, Parser, Subcommand};
use shopify_sdk::client::config::DEFAULT_TIMEOUT_SECS;
use shopify_sdk::{ClientConfig, QueryOptions, Risk};

/// Manage order risks through the Shopify Admin API.
#[derive(Debug, Parser)]
#[command(name = "shopify-risks", version)]
pub struct Cli {
    /// Connection options.
    #[command(flatten)]
    pub connection: ConnectionArgs,

    /// Operation to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Where and how to connect.
#[derive(Debug, Args)]
pub struct ConnectionArgs {
    /// Shop name, e.g. `fooshop` or `fooshop.myshopify.com`.
    #[arg(long, env = "SHOPIFY_SHOP", global = true)]
    pub shop: Option<String>,

    /// Explicit base URL, used instead of a shop name.
    #[arg(long, env = "SHOPIFY_BASE_URL", global = true)]
    pub base_url: Option<String>,

    /// Admin API access token.
    #[arg(long, env = "SHOPIFY_ACCESS_TOKEN", hide_env_values = true, global = true)]
    pub access_token: Option<String>,

    /// Admin API version, e.g. `2024-07`.
    #[arg(long, env = "SHOPIFY_API_VERSION", global = true)]
    pub api_version: Option<String>,

    /// Request timeout in seconds.
    #[arg(long, env = "SHOPIFY_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS, global = true)]
    pub timeout_secs: u64,
}

impl ConnectionArgs {
    /// Builds the client configuration.
    pub fn client_config(&self) -> anyhow::Result<ClientConfig> {
        let mut config = match (&self.shop, &self.base_url) {
            (Some(shop), None) => ClientConfig::for_shop(shop),
            (None, Some(url)) => ClientConfig::new(url.as_str()),
            (Some(_), Some(_)) => bail!("use either --shop or --base-url, not both"),
            (None, None) => bail!("one of --shop or --base-url is required"),
        };

        if let Some(ref version) = self.api_version {
            config = config.with_api_version(version.as_str());
        }
        if let Some(ref token) = self.access_token {
            config = config.with_access_token(token.as_str());
        }

        Ok(config.with_timeout(Duration::from_secs(self.timeout_secs)))
    }
}

/// Risk operations.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the risks of an order.
    List {
        /// Order identifier.
        order_id: u64,

        /// Query options.
        #[command(flatten)]
        query: ListArgs,
    },

    /// Show a single risk.
    Get {
        /// Order identifier.
        order_id: u64,

        /// Risk identifier.
        risk_id: u64,

        /// Only return these fields.
        #[arg(long, value_delimiter = ',')]
        fields: Vec<String>,
    },

    /// Create a risk on an order.
    Create {
        /// Order identifier.
        order_id: u64,

        /// Risk fields.
        #[command(flatten)]
        risk: RiskArgs,
    },

    /// Replace the fields of an existing risk.
    Update {
        /// Order identifier.
        order_id: u64,

        /// Risk identifier.
        risk_id: u64,

        /// Risk fields.
        #[command(flatten)]
        risk: RiskArgs,
    },

    /// Delete a risk.
    Delete {
        /// Order identifier.
        order_id: u64,

        /// Risk identifier.
        risk_id: u64,
    },
}

/// Query options for listing.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Maximum number of results.
    #[arg(long)]
    pub limit: Option<u32>,

    /// Only return risks after this identifier.
    #[arg(long)]
    pub since_id: Option<u64>,

    /// Only return these fields.
    #[arg(long, value_delimiter = ',')]
    pub fields: Vec<String>,

    /// Extra query parameter as `key=value`. May be repeated.
    #[arg(long = "param", value_parser = parse_param)]
    pub params: Vec<(String, String)>,
}

impl ListArgs {
    /// Converts the arguments into query options, or `None` when empty.
    pub fn options(&self) -> Option<QueryOptions> {
        let mut options: QueryOptions = self.params.iter().cloned().collect();
        if let Some(limit) = self.limit {
            options.insert("limit", limit);
        }
        if let Some(since_id) = self.since_id {
            options.insert("since_id", since_id);
        }
        if !self.fields.is_empty() {
            options.insert("fields", self.fields.join(","));
        }
        (!options.is_empty()).then_some(options)
    }
}

/// Fields of a risk record.
#[derive(Debug, Args)]
pub struct RiskArgs {
    /// Origin of the assessment.
    #[arg(long)]
    pub source: Option<String>,

    /// Score between 0.0 and 1.0, sent as text.
    #[arg(long)]
    pub score: Option<String>,

    /// Recommended action, e.g. `cancel`, `investigate`, `accept`.
    #[arg(long)]
    pub recommendation: Option<String>,

    /// Explanation shown to staff.
    #[arg(long)]
    pub message: Option<String>,

    /// Explanation shown to the merchant.
    #[arg(long)]
    pub merchant_message: Option<String>,

    /// Checkout identifier.
    #[arg(long)]
    pub checkout_id: Option<u64>,

    /// Show the risk to the merchant.
    #[arg(long)]
    pub display: bool,

    /// Mark the risk as the cause of cancellation.
    #[arg(long)]
    pub cause_cancel: bool,
}

impl RiskArgs {
    /// Converts the arguments into a risk record.
    pub fn into_risk(self) -> Risk {
        Risk {
            id: None,
            order_id: None,
            checkout_id: self.checkout_id,
            source: self.source,
            score: self.score,
            recommendation: self.recommendation,
            display: self.display,
            cause_cancel: self.cause_cancel,
            message: self.message,
            merchant_message: self.merchant_message,
        }
    }
}

/// Parses `key=value`.
fn parse_param(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("expected key=value, got `{}`", raw)),
    }
}
