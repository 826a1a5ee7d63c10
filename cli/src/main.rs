//! Shopify order risk CLI binary.
//!
//! Entry point for listing, inspecting, creating, updating and deleting
//! order risks from the command line.

mod args;

use anyhow::Context;
use clap::Parser;
use serde::Serialize;
use shopify_sdk::{QueryOptions, ShopifyClient};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::args::{Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout stays valid JSON
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,shopify_sdk=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = cli.connection.client_config()?;
    tracing::debug!(?config, "loaded configuration");

    let client = ShopifyClient::new(config).context("failed to create client")?;
    let risks = client.risks();

    match cli.command {
        Command::List { order_id, query } => {
            let options = query.options();
            let listed = risks
                .list(order_id, options.as_ref())
                .await
                .with_context(|| format!("failed to list risks of order {}", order_id))?;
            print_json(&listed)?;
        }
        Command::Get {
            order_id,
            risk_id,
            fields,
        } => {
            let options = (!fields.is_empty())
                .then(|| QueryOptions::new().with("fields", fields.join(",")));
            let risk = risks
                .get(order_id, risk_id, options.as_ref())
                .await
                .with_context(|| format!("failed to get risk {} of order {}", risk_id, order_id))?;
            print_json(&risk)?;
        }
        Command::Create { order_id, risk } => {
            let created = risks
                .create(order_id, risk.into_risk())
                .await
                .with_context(|| format!("failed to create risk on order {}", order_id))?;
            tracing::info!(order_id, risk_id = ?created.id, "created risk");
            print_json(&created)?;
        }
        Command::Update {
            order_id,
            risk_id,
            risk,
        } => {
            let updated = risks
                .update(order_id, risk.into_risk().with_id(risk_id))
                .await
                .with_context(|| {
                    format!("failed to update risk {} of order {}", risk_id, order_id)
                })?;
            print_json(&updated)?;
        }
        Command::Delete { order_id, risk_id } => {
            risks.delete(order_id, risk_id).await.with_context(|| {
                format!("failed to delete risk {} of order {}", risk_id, order_id)
            })?;
            tracing::info!(order_id, risk_id, "deleted risk");
        }
    }

    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
