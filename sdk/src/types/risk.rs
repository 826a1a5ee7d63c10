//! Order risk types.
//!
//! Provides the order risk record and the JSON envelopes the Admin API wraps
//! it in.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Assessment of the fraud or chargeback likelihood of an order.
///
/// The `id` is assigned by the platform; leave it unset when creating a risk.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Risk {
    /// Risk identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// Identifier of the order the risk belongs to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_id: Option<u64>,

    /// Identifier of the checkout the order came from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checkout_id: Option<u64>,

    /// Origin of the assessment (e.g. "External").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    /// Probability of fraud between 0.0 and 1.0, kept as sent by the API.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<String>,

    /// Recommended action (e.g. "cancel", "investigate", "accept").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<String>,

    /// Whether the risk is shown to the merchant.
    #[serde(default)]
    pub display: bool,

    /// Whether the risk caused the order to be cancelled.
    #[serde(default)]
    pub cause_cancel: bool,

    /// Explanation shown to staff.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Explanation shown to the merchant.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub merchant_message: Option<String>,
}

impl Risk {
    /// Creates an empty risk.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the identifier of an existing risk, as required by updates.
    #[must_use]
    pub fn with_id(mut self, id: u64) -> Self {
        self.id = Some(id);
        self
    }

    /// Sets the checkout identifier.
    #[must_use]
    pub fn with_checkout_id(mut self, checkout_id: u64) -> Self {
        self.checkout_id = Some(checkout_id);
        self
    }

    /// Sets the source.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Sets the score text.
    #[must_use]
    pub fn with_score(mut self, score: impl Into<String>) -> Self {
        self.score = Some(score.into());
        self
    }

    /// Sets the recommendation.
    #[must_use]
    pub fn with_recommendation(mut self, recommendation: impl Into<String>) -> Self {
        self.recommendation = Some(recommendation.into());
        self
    }

    /// Sets whether the risk is displayed to the merchant.
    #[must_use]
    pub fn with_display(mut self, display: bool) -> Self {
        self.display = display;
        self
    }

    /// Sets whether the risk cancels the order.
    #[must_use]
    pub fn with_cause_cancel(mut self, cause_cancel: bool) -> Self {
        self.cause_cancel = cause_cancel;
        self
    }

    /// Sets the staff message.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Sets the merchant message.
    #[must_use]
    pub fn with_merchant_message(mut self, message: impl Into<String>) -> Self {
        self.merchant_message = Some(message.into());
        self
    }

    /// Parses the score as an exact decimal.
    ///
    /// Returns `None` when the score is missing or not a number. The stored
    /// text is left untouched.
    #[must_use]
    pub fn score_value(&self) -> Option<Decimal> {
        self.score
            .as_deref()
            .and_then(|s| Decimal::from_str(s.trim()).ok())
    }
}

impl fmt::Display for Risk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.id {
            Some(id) => write!(f, "risk {}", id)?,
            None => write!(f, "new risk")?,
        }
        if let Some(order_id) = self.order_id {
            write!(f, " on order {}", order_id)?;
        }
        if let Some(ref score) = self.score {
            write!(f, " (score {})", score)?;
        }
        Ok(())
    }
}

/// Singular envelope: `{"risk": {...}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskResource {
    /// Wrapped risk.
    pub risk: Risk,
}

/// Collection envelope: `{"risks": [...]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RisksResource {
    /// Wrapped risks.
    pub risks: Vec<Risk>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const RISK_JSON: &str = r#"{
        "id": 284138680,
        "order_id": 450789469,
        "checkout_id": null,
        "source": "External",
        "score": "1.0",
        "recommendation": "cancel",
        "display": true,
        "cause_cancel": true,
        "message": "This order was placed from a proxy IP",
        "merchant_message": "This order was placed from a proxy IP"
    }"#;

    #[test]
    fn test_risk_deserialize() {
        let risk: Risk = serde_json::from_str(RISK_JSON).expect("deserialize");
        assert_eq!(risk.id, Some(284138680));
        assert_eq!(risk.order_id, Some(450789469));
        assert_eq!(risk.checkout_id, None);
        assert_eq!(risk.source.as_deref(), Some("External"));
        assert_eq!(risk.score.as_deref(), Some("1.0"));
        assert_eq!(risk.recommendation.as_deref(), Some("cancel"));
        assert!(risk.display);
        assert!(risk.cause_cancel);
        assert_eq!(risk.message, risk.merchant_message);
    }

    #[test]
    fn test_risk_checkout_id_present() {
        let risk: Risk =
            serde_json::from_str(r#"{"id":1,"order_id":2,"checkout_id":0}"#).expect("deserialize");
        assert_eq!(risk.checkout_id, Some(0));
        assert!(!risk.display);
    }

    #[test]
    fn test_risk_ignores_unknown_fields() {
        let risk: Risk =
            serde_json::from_str(r#"{"id":1,"admin_graphql_api_id":"gid://x"}"#).expect("deserialize");
        assert_eq!(risk.id, Some(1));
    }

    #[test]
    fn test_new_risk_omits_server_fields() {
        let risk = Risk::new()
            .with_message("This order came from an anonymous proxy")
            .with_recommendation("cancel")
            .with_score("1.0")
            .with_source("External")
            .with_cause_cancel(true)
            .with_display(true);

        let value = serde_json::to_value(&risk).expect("serialize");
        let object = value.as_object().expect("object");
        assert!(!object.contains_key("id"));
        assert!(!object.contains_key("order_id"));
        assert!(!object.contains_key("checkout_id"));
        assert!(!object.contains_key("merchant_message"));
        assert_eq!(object.get("score"), Some(&serde_json::json!("1.0")));
        assert_eq!(object.get("display"), Some(&serde_json::json!(true)));
    }

    #[test]
    fn test_false_flags_are_sent() {
        let value = serde_json::to_value(Risk::new().with_id(7)).expect("serialize");
        assert_eq!(value.get("display"), Some(&serde_json::json!(false)));
        assert_eq!(value.get("cause_cancel"), Some(&serde_json::json!(false)));
    }

    #[test]
    fn test_score_text_is_preserved() {
        let risk: Risk = serde_json::from_str(r#"{"score":"0.50"}"#).expect("deserialize");
        assert_eq!(risk.score.as_deref(), Some("0.50"));
        assert_eq!(risk.score_value(), Some(Decimal::new(50, 2)));

        let out = serde_json::to_string(&risk).expect("serialize");
        assert!(out.contains(r#""score":"0.50""#));
    }

    #[test]
    fn test_score_value_invalid() {
        assert_eq!(Risk::new().score_value(), None);
        assert_eq!(Risk::new().with_score("high").score_value(), None);
    }

    #[test]
    fn test_envelope_requires_risk() {
        assert!(serde_json::from_str::<RiskResource>("{}").is_err());
        assert!(serde_json::from_str::<RiskResource>(r#"{"risk":null}"#).is_err());
        assert!(serde_json::from_str::<RisksResource>("{}").is_err());

        let empty: RisksResource = serde_json::from_str(r#"{"risks":[]}"#).expect("deserialize");
        assert!(empty.risks.is_empty());
    }

    #[test]
    fn test_envelope_serialize() {
        let body = RiskResource {
            risk: Risk::new().with_source("External"),
        };
        let value = serde_json::to_value(&body).expect("serialize");
        assert_eq!(value["risk"]["source"], "External");
    }

    #[test]
    fn test_risk_display() {
        let risk: Risk = serde_json::from_str(RISK_JSON).expect("deserialize");
        assert_eq!(risk.to_string(), "risk 284138680 on order 450789469 (score 1.0)");
        assert_eq!(Risk::new().to_string(), "new risk");
    }
}
