//! Client configuration.
//!
//! Provides [`ClientConfig`] for pointing the codec at a DynamoDB endpoint.
//! Values can be loaded from environment variables, matching the conventions
//! of local DynamoDB emulators.

use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

/// Region used when none is configured.
pub const DEFAULT_REGION: &str = "us-east-1";

/// DynamoDB client configuration.
///
/// # Examples
///
/// ```
/// use dynastack_http::config::ClientConfig;
///
/// let config = ClientConfig::builder()
///     .region("eu-west-1".to_owned())
///     .build();
/// assert_eq!(config.endpoint_url(), "https://dynamodb.eu-west-1.amazonaws.com");
///
/// let local = ClientConfig::builder()
///     .endpoint(Some("http://localhost:4566".to_owned()))
///     .build();
/// assert_eq!(local.endpoint_url(), "http://localhost:4566");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "camelCase")]
pub struct ClientConfig {
    /// Explicit endpoint URL. When unset, the regional AWS endpoint is used.
    #[builder(default)]
    #[serde(default)]
    pub endpoint: Option<String>,

    /// AWS region of the target service.
    #[builder(default = String::from(DEFAULT_REGION))]
    pub region: String,

    /// Whether to check the `x-amz-crc32` header of responses.
    #[builder(default = true)]
    pub verify_crc32: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            region: String::from(DEFAULT_REGION),
            verify_crc32: true,
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables.
    ///
    /// | Variable | Default |
    /// |----------|---------|
    /// | `DYNAMODB_ENDPOINT` | regional AWS endpoint |
    /// | `DEFAULT_REGION`, then `AWS_REGION` | `us-east-1` |
    /// | `DYNAMODB_VERIFY_CRC32` | `true` |
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(v) = std::env::var("DYNAMODB_ENDPOINT") {
            if !v.is_empty() {
                config.endpoint = Some(v);
            }
        }
        if let Ok(v) = std::env::var("DEFAULT_REGION").or_else(|_| std::env::var("AWS_REGION")) {
            config.region = v;
        }
        if let Ok(v) = std::env::var("DYNAMODB_VERIFY_CRC32") {
            config.verify_crc32 = parse_bool(&v);
        }

        config
    }

    /// The endpoint requests are sent to, without a trailing slash.
    #[must_use]
    pub fn endpoint_url(&self) -> String {
        match &self.endpoint {
            Some(endpoint) => endpoint.trim_end_matches('/').to_owned(),
            None => format!("https://dynamodb.{}.amazonaws.com", self.region),
        }
    }
}

fn parse_bool(value: &str) -> bool {
    matches!(
        value.to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
