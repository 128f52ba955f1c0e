//! Client configuration and defaults.

use crate::error::{ArmError, Result};
use std::fmt;

/// Default ARM api-version used for subscription and resource group calls.
pub const DEFAULT_API_VERSION: &str = "2015-01-01";
/// OAuth2 grant used against the token endpoint.
pub const DEFAULT_GRANT_TYPE: &str = "client_credentials";
/// Resource Manager endpoint. Also the default token `resource`.
pub const DEFAULT_BASE_URL: &str = "https://management.azure.com/";
/// Entra ID login authority.
pub const DEFAULT_AUTHORITY: &str = "https://login.microsoftonline.com";
/// Content type sent with every request.
pub const CONTENT_TYPE: &str = "application/json";

pub const HTTP_TIMEOUT_SEC: u64 = 30;
pub const HTTP_CONNECT_TIMEOUT_SEC: u64 = 10;
pub const USER_AGENT: &str = concat!("azure-arm-client/", env!("CARGO_PKG_VERSION"));

/// Immutable service principal credentials.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub client_id: String,
    pub client_key: String,
    pub tenant_id: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_key", &"***")
            .field("tenant_id", &self.tenant_id)
            .finish()
    }
}

/// Construction-time settings for [`crate::ArmClient`].
///
/// Credentials are optional here so a partially filled config can be
/// validated in one place; see [`ClientConfig::credentials`].
#[derive(Clone)]
pub struct ClientConfig {
    pub client_id: Option<String>,
    pub client_key: Option<String>,
    pub tenant_id: Option<String>,
    /// Defaults to the first subscription the API returns.
    pub subscription_id: Option<String>,
    pub resource_group: Option<String>,
    pub api_version: String,
    pub grant_type: String,
    pub base_url: String,
    pub authority: String,
    /// Token audience. Defaults to `base_url`.
    pub resource: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            client_id: None,
            client_key: None,
            tenant_id: None,
            subscription_id: None,
            resource_group: None,
            api_version: DEFAULT_API_VERSION.to_string(),
            grant_type: DEFAULT_GRANT_TYPE.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            authority: DEFAULT_AUTHORITY.to_string(),
            resource: None,
        }
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("client_id", &self.client_id)
            .field("client_key", &self.client_key.as_ref().map(|_| "***"))
            .field("tenant_id", &self.tenant_id)
            .field("subscription_id", &self.subscription_id)
            .field("resource_group", &self.resource_group)
            .field("api_version", &self.api_version)
            .field("grant_type", &self.grant_type)
            .field("base_url", &self.base_url)
            .field("authority", &self.authority)
            .field("resource", &self.resource)
            .finish()
    }
}

impl ClientConfig {
    pub fn new(
        client_id: impl Into<String>,
        client_key: impl Into<String>,
        tenant_id: impl Into<String>,
    ) -> Self {
        ClientConfig {
            client_id: Some(client_id.into()),
            client_key: Some(client_key.into()),
            tenant_id: Some(tenant_id.into()),
            ..Default::default()
        }
    }

    /// Read settings from the process environment, loading `.env` first.
    ///
    /// Missing credentials are not an error here; they surface when the
    /// config is handed to [`crate::ArmClient::new`].
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();
        let mut config = ClientConfig {
            client_id: env_var("AZURE_CLIENT_ID"),
            client_key: env_var("AZURE_CLIENT_SECRET"),
            tenant_id: env_var("AZURE_TENANT_ID"),
            subscription_id: env_var("AZURE_SUBSCRIPTION_ID"),
            resource_group: env_var("AZURE_RESOURCE_GROUP"),
            ..Default::default()
        };
        if let Some(v) = env_var("AZURE_API_VERSION") {
            config.api_version = v;
        }
        if let Some(v) = env_var("AZURE_BASE_URL") {
            config.base_url = v;
        }
        if let Some(v) = env_var("AZURE_AUTHORITY") {
            config.authority = v;
        }
        log::debug!(
            "Loaded config from env: client_id={:?} tenant_id={:?} subscription_id={:?}",
            config.client_id,
            config.tenant_id,
            config.subscription_id
        );
        config
    }

    pub fn with_subscription(mut self, subscription_id: impl Into<String>) -> Self {
        self.subscription_id = Some(subscription_id.into());
        self
    }

    pub fn with_resource_group(mut self, resource_group: impl Into<String>) -> Self {
        self.resource_group = Some(resource_group.into());
        self
    }

    pub fn with_api_version(mut self, api_version: impl Into<String>) -> Self {
        self.api_version = api_version.into();
        self
    }

    pub fn with_grant_type(mut self, grant_type: impl Into<String>) -> Self {
        self.grant_type = grant_type.into();
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_authority(mut self, authority: impl Into<String>) -> Self {
        self.authority = authority.into();
        self
    }

    pub fn with_resource(mut self, resource: impl Into<String>) -> Self {
        self.resource = Some(resource.into());
        self
    }

    /// Extract the mandatory credentials. Empty strings count as absent.
    pub fn credentials(&self) -> Result<Credentials> {
        Ok(Credentials {
            client_id: required(&self.client_id, "client_id")?,
            client_key: required(&self.client_key, "client_key")?,
            tenant_id: required(&self.tenant_id, "tenant_id")?,
        })
    }

    /// `base_url` with exactly one trailing slash, so paths append directly.
    pub(crate) fn normalized_base_url(&self) -> String {
        format!("{}/", self.base_url.trim_end_matches('/'))
    }

    pub(crate) fn token_url(&self, tenant_id: &str) -> String {
        format!(
            "{}/{tenant_id}/oauth2/token",
            self.authority.trim_end_matches('/')
        )
    }

    pub(crate) fn token_resource(&self) -> String {
        self.resource
            .clone()
            .unwrap_or_else(|| self.normalized_base_url())
    }
}

fn required(value: &Option<String>, name: &str) -> Result<String> {
    match value.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v.to_string()),
        _ => Err(ArmError::Configuration(format!("{name} is required"))),
    }
}

fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}
