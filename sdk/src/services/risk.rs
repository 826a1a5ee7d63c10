//! Order risk service.
//!
//! CRUD operations against `orders/{order_id}/risks`.

use tracing::{debug, instrument};

use crate::client::{ClientError, QueryOptions, ShopifyClient};
use crate::types::{Risk, RiskResource, RisksResource};

const ORDERS_BASE_PATH: &str = "orders";

fn risks_path(order_id: u64) -> String {
    format!("{}/{}/risks.json", ORDERS_BASE_PATH, order_id)
}

fn risk_path(order_id: u64, risk_id: u64) -> String {
    format!("{}/{}/risks/{}.json", ORDERS_BASE_PATH, order_id, risk_id)
}

/// Order risk operations.
///
/// Borrows the shared client; every call is a single request with no retries.
#[derive(Debug, Clone, Copy)]
pub struct RiskService<'a> {
    client: &'a ShopifyClient,
}

impl<'a> RiskService<'a> {
    /// Creates a service that issues requests through `client`.
    #[must_use]
    pub fn new(client: &'a ShopifyClient) -> Self {
        Self { client }
    }

    /// Lists the risks of an order.
    ///
    /// # Arguments
    ///
    /// * `order_id` - The owning order
    /// * `options` - Optional query parameters, passed through verbatim
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response is malformed.
    #[instrument(skip(self, options), level = "debug")]
    pub async fn list(
        &self,
        order_id: u64,
        options: Option<&QueryOptions>,
    ) -> Result<Vec<Risk>, ClientError> {
        let resource: RisksResource = self.client.get(&risks_path(order_id), options).await?;
        debug!(count = resource.risks.len(), "listed risks");
        Ok(resource.risks)
    }

    /// Gets a single risk.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the risk does not exist or the
    /// response is malformed.
    #[instrument(skip(self, options), level = "debug")]
    pub async fn get(
        &self,
        order_id: u64,
        risk_id: u64,
        options: Option<&QueryOptions>,
    ) -> Result<Risk, ClientError> {
        let resource: RiskResource = self
            .client
            .get(&risk_path(order_id, risk_id), options)
            .await?;
        Ok(resource.risk)
    }

    /// Creates a risk on an order and returns the stored record.
    ///
    /// Leave `risk.id` unset; the platform assigns it.
    ///
    /// # Errors
    ///
    /// Returns an error if the platform rejects the risk or the request fails.
    #[instrument(skip(self, risk), level = "debug")]
    pub async fn create(&self, order_id: u64, risk: Risk) -> Result<Risk, ClientError> {
        let body = RiskResource { risk };
        let resource: RiskResource = self.client.post(&risks_path(order_id), &body).await?;
        debug!(risk_id = ?resource.risk.id, "created risk");
        Ok(resource.risk)
    }

    /// Updates an existing risk.
    ///
    /// The risk is addressed by `risk.id`, which must be set.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidRequest`] if `risk.id` is missing, or an
    /// error if the platform rejects the update or the request fails.
    #[instrument(skip(self, risk), fields(risk_id = ?risk.id), level = "debug")]
    pub async fn update(&self, order_id: u64, risk: Risk) -> Result<Risk, ClientError> {
        let risk_id = risk.id.ok_or_else(|| {
            ClientError::InvalidRequest("risk id is required to update a risk".to_string())
        })?;

        let body = RiskResource { risk };
        let resource: RiskResource = self
            .client
            .put(&risk_path(order_id, risk_id), &body)
            .await?;
        Ok(resource.risk)
    }

    /// Deletes a risk.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self), level = "debug")]
    pub async fn delete(&self, order_id: u64, risk_id: u64) -> Result<(), ClientError> {
        self.client.delete(&risk_path(order_id, risk_id)).await
    }
}
