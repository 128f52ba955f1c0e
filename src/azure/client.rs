//! Unauthenticated client: validated credentials waiting for a token.

use super::auth::request_token;
use super::session::Session;
use crate::config::{self, ClientConfig, Credentials};
use crate::error::{ArmError, Result};
use serde_json::Value;
use std::time::Duration;

/// First phase of the client. Holds credentials and scoping defaults but
/// cannot issue REST calls; [`ArmClient::authenticate`] turns it into a
/// [`Session`].
///
/// ```compile_fail
/// # async fn f(client: azure_arm_client::ArmClient) {
/// client.list_subscriptions().await;
/// # }
/// ```
#[derive(Debug)]
pub struct ArmClient {
    credentials: Credentials,
    config: ClientConfig,
    http: reqwest::Client,
}

impl ArmClient {
    /// Validate `config` and prepare the HTTP client.
    ///
    /// # Errors
    /// * `ArmError::Configuration` if client_id, client_key or tenant_id is missing
    pub fn new(config: ClientConfig) -> Result<Self> {
        let credentials = config.credentials()?;
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config::HTTP_TIMEOUT_SEC))
            .connect_timeout(Duration::from_secs(config::HTTP_CONNECT_TIMEOUT_SEC))
            .user_agent(config::USER_AGENT)
            .build()
            .map_err(|e| ArmError::Configuration(format!("cannot build HTTP client: {e}")))?;
        Ok(Self::with_http_client(credentials, config, http))
    }

    /// Use a caller supplied `reqwest::Client`, e.g. with a proxy configured.
    pub fn with_http_client(
        credentials: Credentials,
        config: ClientConfig,
        http: reqwest::Client,
    ) -> Self {
        ArmClient {
            credentials,
            config,
            http,
        }
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Acquire a token and return a ready [`Session`].
    ///
    /// When no subscription was configured, the first subscription listed by
    /// the API becomes the session default.
    ///
    /// # Errors
    /// * `ArmError::Authentication` if the token request fails or has no token
    /// * `ArmError::Decoding` if the subscription default cannot be resolved
    /// * Any error from the subscription listing
    pub async fn authenticate(self) -> Result<Session> {
        let token = request_token(&self.http, &self.config, &self.credentials).await?;
        let subscription_id = self.config.subscription_id.clone();
        let mut session = Session::new(
            self.credentials,
            &self.config,
            self.http,
            token,
            subscription_id.clone().unwrap_or_default(),
        );

        if subscription_id.is_none() {
            let subscriptions = session.list_subscriptions().await?;
            let first = subscriptions
                .first()
                .and_then(|s| s.get("subscriptionId"))
                .and_then(Value::as_str)
                .map(str::to_string)
                .ok_or_else(|| ArmError::missing_field("subscription list", "[0].subscriptionId"))?;
            log::info!(
                "Defaulting subscription_id={first} (1 of {})",
                subscriptions.len()
            );
            session.set_default_subscription(first);
        }

        Ok(session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_requires_credentials() {
        let cases = [
            ClientConfig::new("", "key", "tenant"),
            ClientConfig::new("id", "", "tenant"),
            ClientConfig::new("id", "key", ""),
            ClientConfig::default(),
        ];
        for config in cases {
            let err = ArmClient::new(config).expect_err("missing credential");
            assert!(matches!(err, ArmError::Configuration(_)), "{err}");
        }
    }

    #[test]
    fn test_new_keeps_config() {
        let client = ArmClient::new(
            ClientConfig::new("id", "key", "tenant")
                .with_resource_group("rg1")
                .with_api_version("2021-04-01"),
        )
        .expect("client");
        assert_eq!(client.credentials().client_id, "id");
        assert_eq!(client.config().resource_group.as_deref(), Some("rg1"));
        assert_eq!(client.config().api_version, "2021-04-01");
        assert_eq!(client.config().grant_type, "client_credentials");
    }
}
