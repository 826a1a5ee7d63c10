//! HTTP client implementation.
//!
//! Provides the shared client every resource service delegates to. It owns
//! transport, the versioned path prefix, authentication headers and the
//! normalization of error responses.

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE, RETRY_AFTER};
use reqwest::{RequestBuilder, Response, StatusCode, Url};
use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, warn};

use super::config::ClientConfig;
use super::error::{error_message_from_body, ClientError};
use super::options::QueryOptions;
use crate::services::RiskService;

/// Header carrying the Admin API access token.
pub const ACCESS_TOKEN_HEADER: &str = "X-Shopify-Access-Token";

/// HTTP client for the Shopify Admin REST API.
#[derive(Debug, Clone)]
pub struct ShopifyClient {
    config: ClientConfig,
    http: reqwest::Client,
}

impl ShopifyClient {
    /// Creates a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be created.
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        config.validate()?;

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        if let Some(ref token) = config.access_token {
            let mut value = HeaderValue::from_str(token).map_err(|_| {
                ClientError::InvalidConfig("access token is not a valid header value".to_string())
            })?;
            value.set_sensitive(true);
            headers.insert(ACCESS_TOKEN_HEADER, value);
        }

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .default_headers(headers)
            .user_agent(&config.user_agent)
            .build()
            .map_err(ClientError::Request)?;

        Ok(Self { config, http })
    }

    /// Creates a client for the named shop using an access token.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn for_shop(shop_name: &str, access_token: impl Into<String>) -> Result<Self, ClientError> {
        Self::new(ClientConfig::for_shop(shop_name).with_access_token(access_token))
    }

    /// Creates a new client with the given base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, ClientError> {
        Self::new(ClientConfig::new(base_url))
    }

    /// Returns the client configuration.
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Returns the order risk service bound to this client.
    #[must_use]
    pub fn risks(&self) -> RiskService<'_> {
        RiskService::new(self)
    }

    /// Resolves a resource path against the base URL and path prefix.
    ///
    /// # Errors
    ///
    /// Returns an error if the resulting URL cannot be parsed.
    pub fn endpoint(&self, path: &str, options: Option<&QueryOptions>) -> Result<Url, ClientError> {
        let raw = format!(
            "{}/{}/{}",
            self.config.base_url.trim_end_matches('/'),
            self.config.path_prefix(),
            path.trim_start_matches('/')
        );
        let mut url = Url::parse(&raw)
            .map_err(|e| ClientError::InvalidRequest(format!("invalid URL {}: {}", raw, e)))?;

        if let Some(options) = options.filter(|o| !o.is_empty()) {
            url.query_pairs_mut().extend_pairs(options.iter());
        }

        Ok(url)
    }

    /// Makes a GET request and decodes the response body.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body cannot be decoded.
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        options: Option<&QueryOptions>,
    ) -> Result<T, ClientError> {
        let url = self.endpoint(path, options)?;
        let response = self.send(self.http.get(url)).await?;
        decode(response).await
    }

    /// Makes a POST request with a JSON body and decodes the response body.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body cannot be decoded.
    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.endpoint(path, None)?;
        let response = self.send(self.http.post(url).json(body)).await?;
        decode(response).await
    }

    /// Makes a PUT request with a JSON body and decodes the response body.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body cannot be decoded.
    pub async fn put<B, T>(&self, path: &str, body: &B) -> Result<T, ClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.endpoint(path, None)?;
        let response = self.send(self.http.put(url).json(body)).await?;
        decode(response).await
    }

    /// Makes a DELETE request. Any response body is ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn delete(&self, path: &str) -> Result<(), ClientError> {
        let url = self.endpoint(path, None)?;
        self.send(self.http.delete(url)).await?;
        Ok(())
    }

    /// Sends a request once and maps non-success statuses to errors.
    async fn send(&self, request: RequestBuilder) -> Result<Response, ClientError> {
        let request = request.build()?;
        debug!(method = %request.method(), url = %request.url(), "sending request");

        let response = self.http.execute(request).await?;
        let status = response.status();
        debug!(status = status.as_u16(), "received response");

        if status.is_success() {
            return Ok(response);
        }

        Err(error_from_response(response).await)
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    let body = response.text().await?;

    serde_json::from_str(&body).map_err(|e| ClientError::Deserialization(e.to_string()))
}

async fn error_from_response(response: Response) -> ClientError {
    let status = response.status();
    let retry_after = response
        .headers()
        .get(RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.trim().parse::<f64>().ok())
        .map(|secs| secs.max(0.0).ceil() as u64);

    let body = response.text().await.unwrap_or_default();
    let message = error_message_from_body(&body)
        .or_else(|| {
            let trimmed = body.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        })
        .unwrap_or_else(|| status.canonical_reason().unwrap_or("unknown error").to_string());

    warn!(status = status.as_u16(), %message, "API request failed");

    match status {
        StatusCode::TOO_MANY_REQUESTS => ClientError::RateLimited { retry_after },
        StatusCode::NOT_FOUND => ClientError::NotFound(message),
        StatusCode::UNAUTHORIZED => ClientError::Unauthorized(message),
        _ => ClientError::Api {
            status: status.as_u16(),
            message,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_new() {
        let config = ClientConfig::new("https://fooshop.myshopify.com");
        let client = ShopifyClient::new(config);
        assert!(client.is_ok());
    }

    #[test]
    fn test_client_for_shop() {
        let client = ShopifyClient::for_shop("fooshop", "shpat_abc").expect("client creation");
        assert_eq!(client.config().base_url, "https://fooshop.myshopify.com");
        assert_eq!(client.config().access_token.as_deref(), Some("shpat_abc"));
    }

    #[test]
    fn test_client_invalid_config() {
        let config = ClientConfig::new("");
        let client = ShopifyClient::new(config);
        assert!(client.is_err());
    }

    #[test]
    fn test_client_invalid_token() {
        let config = ClientConfig::for_shop("fooshop").with_access_token("bad\ntoken");
        let client = ShopifyClient::new(config);
        assert!(matches!(client, Err(ClientError::InvalidConfig(_))));
    }

    #[test]
    fn test_endpoint_versioned() {
        let client = ShopifyClient::with_base_url("https://fooshop.myshopify.com/")
            .expect("client creation");
        let url = client
            .endpoint("/orders/1/risks.json", None)
            .expect("endpoint");
        assert_eq!(
            url.as_str(),
            "https://fooshop.myshopify.com/admin/api/2024-07/orders/1/risks.json"
        );
    }

    #[test]
    fn test_endpoint_unversioned() {
        let config = ClientConfig::for_shop("fooshop").without_api_version();
        let client = ShopifyClient::new(config).expect("client creation");
        let url = client
            .endpoint("orders/1/risks/2.json", None)
            .expect("endpoint");
        assert_eq!(
            url.as_str(),
            "https://fooshop.myshopify.com/admin/orders/1/risks/2.json"
        );
    }

    #[test]
    fn test_endpoint_with_options() {
        let client = ShopifyClient::for_shop("fooshop", "token").expect("client creation");
        let options = QueryOptions::new().with_limit(5).with_fields(&["id", "score"]);
        let url = client
            .endpoint("orders/1/risks.json", Some(&options))
            .expect("endpoint");
        assert_eq!(url.query(), Some("fields=id%2Cscore&limit=5"));
    }

    #[test]
    fn test_endpoint_with_empty_options() {
        let client = ShopifyClient::for_shop("fooshop", "token").expect("client creation");
        let url = client
            .endpoint("orders/1/risks.json", Some(&QueryOptions::new()))
            .expect("endpoint");
        assert_eq!(url.query(), None);
    }
}
