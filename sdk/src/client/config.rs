//! Client configuration.
//!
//! Provides configuration options for the Shopify Admin API client.

use std::time::Duration;

use super::error::ClientError;

/// Default Admin API version used when building the path prefix.
pub const DEFAULT_API_VERSION: &str = "2024-07";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Domain suffix shared by every shop.
pub const SHOP_DOMAIN_SUFFIX: &str = "myshopify.com";

/// Client configuration.
#[derive(Clone)]
pub struct ClientConfig {
    /// Base URL of the shop (e.g. `https://fooshop.myshopify.com`).
    pub base_url: String,

    /// Admin API version. `None` targets the unversioned `admin/` prefix.
    pub api_version: Option<String>,

    /// Access token sent as `X-Shopify-Access-Token`.
    pub access_token: Option<String>,

    /// Request timeout.
    pub timeout: Duration,

    /// User agent string.
    pub user_agent: String,
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("api_version", &self.api_version)
            .field("access_token", &self.access_token.as_ref().map(|_| "<redacted>"))
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            api_version: Some(DEFAULT_API_VERSION.to_string()),
            access_token: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: format!("shopify-sdk/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientConfig {
    /// Creates a new configuration with the given base URL.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Creates a configuration for a shop name such as `fooshop` or
    /// `fooshop.myshopify.com`.
    #[must_use]
    pub fn for_shop(shop_name: &str) -> Self {
        Self::new(format!("https://{}", shop_full_name(shop_name)))
    }

    /// Sets the Admin API version.
    #[must_use]
    pub fn with_api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = Some(version.into());
        self
    }

    /// Targets the unversioned `admin/` prefix.
    #[must_use]
    pub fn without_api_version(mut self) -> Self {
        self.api_version = None;
        self
    }

    /// Sets the access token.
    #[must_use]
    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the user agent.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Returns the path prefix every resource path is resolved against.
    #[must_use]
    pub fn path_prefix(&self) -> String {
        match &self.api_version {
            Some(version) => format!("admin/api/{}", version),
            None => "admin".to_string(),
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), ClientError> {
        if self.base_url.is_empty() {
            return Err(ClientError::InvalidConfig(
                "base_url cannot be empty".to_string(),
            ));
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ClientError::InvalidConfig(
                "base_url must start with http:// or https://".to_string(),
            ));
        }

        if matches!(&self.api_version, Some(v) if v.trim().is_empty()) {
            return Err(ClientError::InvalidConfig(
                "api_version cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}

/// Returns the fully qualified shop domain, e.g. `fooshop.myshopify.com`.
#[must_use]
pub fn shop_full_name(name: &str) -> String {
    let name = name.trim().trim_end_matches('.');
    if name.ends_with(SHOP_DOMAIN_SUFFIX) {
        name.to_string()
    } else {
        format!("{}.{}", name, SHOP_DOMAIN_SUFFIX)
    }
}

/// Returns the bare shop handle, e.g. `fooshop`.
#[must_use]
pub fn shop_short_name(name: &str) -> String {
    let full = shop_full_name(name);
    full.strip_suffix(SHOP_DOMAIN_SUFFIX)
        .map(|s| s.trim_end_matches('.').to_string())
        .unwrap_or(full)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = ClientConfig::default();
        assert!(config.base_url.is_empty());
        assert_eq!(config.api_version.as_deref(), Some(DEFAULT_API_VERSION));
        assert_eq!(config.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        assert!(config.access_token.is_none());
    }

    #[test]
    fn test_config_for_shop() {
        let config = ClientConfig::for_shop("fooshop");
        assert_eq!(config.base_url, "https://fooshop.myshopify.com");

        let config = ClientConfig::for_shop("fooshop.myshopify.com");
        assert_eq!(config.base_url, "https://fooshop.myshopify.com");
    }

    #[test]
    fn test_config_builder() {
        let config = ClientConfig::new("https://shop.example.com")
            .with_api_version("2023-10")
            .with_access_token("shpat_123")
            .with_timeout(Duration::from_secs(5))
            .with_user_agent("my-app/1.0");

        assert_eq!(config.base_url, "https://shop.example.com");
        assert_eq!(config.api_version.as_deref(), Some("2023-10"));
        assert_eq!(config.access_token.as_deref(), Some("shpat_123"));
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.user_agent, "my-app/1.0");
    }

    #[test]
    fn test_path_prefix() {
        let config = ClientConfig::new("https://a.example.com").with_api_version("2024-01");
        assert_eq!(config.path_prefix(), "admin/api/2024-01");

        let config = config.without_api_version();
        assert_eq!(config.path_prefix(), "admin");
    }

    #[test]
    fn test_debug_redacts_token() {
        let config = ClientConfig::for_shop("fooshop").with_access_token("secret-token");
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("secret-token"));
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn test_shop_names() {
        assert_eq!(shop_full_name("  fooshop. "), "fooshop.myshopify.com");
        assert_eq!(shop_full_name("fooshop.myshopify.com."), "fooshop.myshopify.com");
        assert_eq!(shop_short_name("fooshop.myshopify.com"), "fooshop");
        assert_eq!(shop_short_name("fooshop"), "fooshop");
    }

    #[test]
    fn test_shop_name_with_embedded_suffix() {
        assert_eq!(
            shop_full_name("myshopify.com-store"),
            "myshopify.com-store.myshopify.com"
        );
        assert_eq!(shop_short_name("myshopify.com-store"), "myshopify.com-store");
    }

    #[test]
    fn test_config_validate_valid() {
        let config = ClientConfig::for_shop("fooshop");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validate_empty_url() {
        let config = ClientConfig::new("");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validate_invalid_scheme() {
        let config = ClientConfig::new("ftp://fooshop.myshopify.com");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validate_blank_version() {
        let config = ClientConfig::for_shop("fooshop").with_api_version(" ");
        assert!(config.validate().is_err());
    }
}
