//! Authenticated session: REST verb helpers and discovery calls.

use super::auth::AccessToken;
use super::decode::{decode_body, decode_value};
use crate::config::{self, ClientConfig, Credentials};
use crate::error::{ArmError, Result};
use crate::models::{ResourceGroup, Subscription};
use colored::Colorize;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::Method;
use serde_json::Value;

/// A client holding exactly one access token.
///
/// Only [`crate::ArmClient::authenticate`] creates one, so every request made
/// through a session carries a token.
#[derive(Debug)]
pub struct Session {
    credentials: Credentials,
    http: reqwest::Client,
    token: AccessToken,
    subscription_id: String,
    resource_group: Option<String>,
    api_version: String,
    base_url: String,
}

impl Session {
    pub(crate) fn new(
        credentials: Credentials,
        config: &ClientConfig,
        http: reqwest::Client,
        token: AccessToken,
        subscription_id: String,
    ) -> Self {
        Session {
            credentials,
            http,
            token,
            subscription_id,
            resource_group: config.resource_group.clone(),
            api_version: config.api_version.clone(),
            base_url: config.normalized_base_url(),
        }
    }

    /// Only called once, while authenticating without a configured subscription.
    pub(crate) fn set_default_subscription(&mut self, subscription_id: String) {
        self.subscription_id = subscription_id;
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn token(&self) -> &AccessToken {
        &self.token
    }

    pub fn subscription_id(&self) -> &str {
        &self.subscription_id
    }

    pub fn resource_group(&self) -> Option<&str> {
        self.resource_group.as_deref()
    }

    pub fn api_version(&self) -> &str {
        &self.api_version
    }

    /// Always ends with `/`.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `{base_url}{path}?api-version={api_version}`, interpolated literally.
    pub fn endpoint(&self, path: &str, api_version: &str) -> String {
        format!("{}{path}?api-version={api_version}", self.base_url)
    }

    /// `GET /subscriptions`, returning the `value` array as sent.
    pub async fn list_subscriptions(&self) -> Result<Vec<Value>> {
        let url = self.endpoint("subscriptions", &self.api_version);
        let body = self.get(&url).await?;
        let value = match body {
            Value::Object(mut map) => map.remove("value"),
            _ => None,
        }
        .ok_or_else(|| ArmError::missing_field("subscription list", "value"))?;
        decode_value(value, "subscription list")
    }

    /// [`Session::list_subscriptions`] decoded into typed models.
    pub async fn subscriptions(&self) -> Result<Vec<Subscription>> {
        let documents = self.list_subscriptions().await?;
        decode_value(Value::Array(documents), "subscription list")
    }

    /// `GET /subscriptions/{id}`, defaulting to the session subscription.
    pub async fn subscription_info(&self, subscription_id: Option<&str>) -> Result<Subscription> {
        let id = subscription_id.unwrap_or(&self.subscription_id);
        let url = self.endpoint(&format!("subscriptions/{id}"), &self.api_version);
        decode_value(self.get(&url).await?, "subscription")
    }

    /// `GET /subscriptions/{sub}/resourcegroups`.
    ///
    /// Returns the whole body, `value` and any paging fields included,
    /// unlike [`Session::list_subscriptions`].
    pub async fn list_resource_groups(&self) -> Result<Value> {
        let url = self.endpoint(
            &format!("subscriptions/{}/resourcegroups", self.subscription_id),
            &self.api_version,
        );
        self.get(&url).await
    }

    /// `GET /subscriptions/{sub}/resourcegroups/{name}`, defaulting to the
    /// session resource group.
    pub async fn resource_group_info(&self, name: Option<&str>) -> Result<ResourceGroup> {
        let name = name
            .or(self.resource_group.as_deref())
            .ok_or_else(|| ArmError::Configuration("resource_group is required".into()))?;
        let url = self.endpoint(
            &format!("subscriptions/{}/resourcegroups/{name}", self.subscription_id),
            &self.api_version,
        );
        decode_value(self.get(&url).await?, "resource group")
    }

    pub async fn get(&self, url: &str) -> Result<Value> {
        self.send(Method::GET, url, None).await
    }

    pub async fn put(&self, url: &str, body: Option<&Value>) -> Result<Value> {
        self.send(Method::PUT, url, body).await
    }

    pub async fn post(&self, url: &str, body: Option<&Value>) -> Result<Value> {
        self.send(Method::POST, url, body).await
    }

    pub async fn delete(&self, url: &str) -> Result<Value> {
        self.send(Method::DELETE, url, None).await
    }

    async fn send(&self, method: Method, url: &str, body: Option<&Value>) -> Result<Value> {
        log::debug!("{method} {url}", method = method.as_str().on_blue());

        let mut request = self
            .http
            .request(method.clone(), url)
            .header(CONTENT_TYPE, config::CONTENT_TYPE)
            .header(AUTHORIZATION, self.token.as_header());
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            log::warn!(
                "{failed} {method} {url} status={status}",
                failed = "failed".on_red()
            );
            log::trace!("error body={text}");
            return Err(ArmError::Http {
                status: status.as_u16(),
                url: url.to_string(),
                body: text,
            });
        }

        log::debug!("{method} {url} status={status} len={}", text.len());
        decode_body(&text, url)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// A session that never talked to a token endpoint, for URL tests.
    pub(crate) fn session_for(base_url: &str, resource_group: Option<&str>) -> Session {
        let mut config = ClientConfig::new("id", "key", "tenant").with_base_url(base_url);
        config.resource_group = resource_group.map(str::to_string);
        let credentials = config.credentials().expect("credentials");
        Session::new(
            credentials,
            &config,
            reqwest::Client::new(),
            AccessToken::bearer("test-token"),
            "sub1".to_string(),
        )
    }

    #[test]
    fn test_endpoint() {
        let session = session_for("https://management.azure.com", None);
        assert_eq!(session.base_url(), "https://management.azure.com/");
        assert_eq!(
            session.endpoint("subscriptions", session.api_version()),
            "https://management.azure.com/subscriptions?api-version=2015-01-01"
        );
    }

    #[test]
    fn test_accessors() {
        let session = session_for("http://localhost/", Some("rg1"));
        assert_eq!(session.subscription_id(), "sub1");
        assert_eq!(session.resource_group(), Some("rg1"));
        assert_eq!(session.token().as_header(), "Bearer test-token");
        assert_eq!(session.credentials().tenant_id, "tenant");
    }

    #[tokio::test]
    async fn test_resource_group_info_needs_a_name() {
        let session = session_for("http://localhost/", None);
        let err = session
            .resource_group_info(None)
            .await
            .expect_err("no resource group");
        assert!(matches!(err, ArmError::Configuration(_)), "{err}");
    }
}
