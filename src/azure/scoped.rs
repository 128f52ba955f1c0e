//! CRUD access to a nested resource type under a resource group.

use super::session::Session;
use crate::error::{ArmError, Result};
use serde_json::Value;

/// Per-service overrides of the session defaults.
#[derive(Clone, Debug, Default)]
pub struct ScopeOptions {
    pub resource_group: Option<String>,
    /// Provider namespaces version independently of the subscription API.
    pub api_version: Option<String>,
}

impl ScopeOptions {
    pub fn resource_group(mut self, resource_group: impl Into<String>) -> Self {
        self.resource_group = Some(resource_group.into());
        self
    }

    pub fn api_version(mut self, api_version: impl Into<String>) -> Self {
        self.api_version = Some(api_version.into());
        self
    }
}

/// Request builder for
/// `.../resourceGroups/{rg}/providers/{provider}/{collection}/{name}/{sub_collection}`.
///
/// Borrows the session; it never owns or refreshes the token.
#[derive(Debug)]
pub struct ScopedService<'a> {
    session: &'a Session,
    collection: String,
    sub_collection: String,
    provider: String,
    resource_group: String,
    api_version: String,
}

impl<'a> ScopedService<'a> {
    /// # Errors
    /// * `ArmError::Configuration` if neither `options` nor the session name a resource group
    pub fn new(
        session: &'a Session,
        collection: impl Into<String>,
        sub_collection: impl Into<String>,
        provider: impl Into<String>,
        options: ScopeOptions,
    ) -> Result<Self> {
        let resource_group = options
            .resource_group
            .or_else(|| session.resource_group().map(str::to_string))
            .ok_or_else(|| ArmError::Configuration("resource_group is required".into()))?;
        let api_version = options
            .api_version
            .unwrap_or_else(|| session.api_version().to_string());
        Ok(ScopedService {
            session,
            collection: collection.into(),
            sub_collection: sub_collection.into(),
            provider: provider.into(),
            resource_group,
            api_version,
        })
    }

    pub fn session(&self) -> &'a Session {
        self.session
    }

    pub fn resource_group(&self) -> &str {
        &self.resource_group
    }

    pub fn api_version(&self) -> &str {
        &self.api_version
    }

    fn collection_path(&self, collection_name: &str) -> String {
        format!(
            "subscriptions/{}/resourceGroups/{}/providers/{}/{}/{collection_name}/{}",
            self.session.subscription_id(),
            self.resource_group,
            self.provider,
            self.collection,
            self.sub_collection
        )
    }

    /// URL listing every sub-resource of `collection_name`.
    pub fn list_url(&self, collection_name: &str) -> String {
        self.session
            .endpoint(&self.collection_path(collection_name), &self.api_version)
    }

    /// URL of a single sub-resource.
    pub fn item_url(&self, collection_name: &str, item: &str) -> String {
        let path = format!("{}/{item}", self.collection_path(collection_name));
        self.session.endpoint(&path, &self.api_version)
    }

    pub async fn list(&self, collection_name: &str) -> Result<Value> {
        self.session.get(&self.list_url(collection_name)).await
    }

    pub async fn get(&self, collection_name: &str, item: &str) -> Result<Value> {
        self.session.get(&self.item_url(collection_name, item)).await
    }

    pub async fn create(&self, collection_name: &str, item: &str, body: &Value) -> Result<Value> {
        self.session
            .put(&self.item_url(collection_name, item), Some(body))
            .await
    }

    /// ARM updates are full replacements through the same PUT as create.
    pub async fn update(&self, collection_name: &str, item: &str, body: &Value) -> Result<Value> {
        self.create(collection_name, item, body).await
    }

    pub async fn delete(&self, collection_name: &str, item: &str) -> Result<Value> {
        self.session
            .delete(&self.item_url(collection_name, item))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::azure::session::tests::session_for;

    #[test]
    fn test_list_url_shape() {
        let session = session_for("https://management.azure.com/", None);
        let service = ScopedService::new(
            &session,
            "routeTables",
            "routes",
            "Microsoft.Network",
            ScopeOptions::default().resource_group("rg1"),
        )
        .expect("service");
        let url = service.list_url("table1");
        assert!(
            url.contains("providers/Microsoft.Network/routeTables/table1/routes"),
            "{url}"
        );
        assert_eq!(
            url,
            "https://management.azure.com/subscriptions/sub1/resourceGroups/rg1/providers/Microsoft.Network/routeTables/table1/routes?api-version=2015-01-01"
        );
    }

    #[test]
    fn test_item_url_with_api_version_override() {
        let session = session_for("https://management.azure.com/", Some("rg-session"));
        let service = ScopedService::new(
            &session,
            "routeTables",
            "routes",
            "Microsoft.Network",
            ScopeOptions::default().api_version("2023-09-01"),
        )
        .expect("service");
        assert_eq!(service.resource_group(), "rg-session");
        assert_eq!(
            service.item_url("table1", "r1"),
            "https://management.azure.com/subscriptions/sub1/resourceGroups/rg-session/providers/Microsoft.Network/routeTables/table1/routes/r1?api-version=2023-09-01"
        );
    }

    #[test]
    fn test_resource_group_required() {
        let session = session_for("https://management.azure.com/", None);
        let err = ScopedService::new(
            &session,
            "routeTables",
            "routes",
            "Microsoft.Network",
            ScopeOptions::default(),
        )
        .expect_err("no resource group");
        assert!(matches!(err, ArmError::Configuration(_)), "{err}");
    }

    #[test]
    fn test_option_overrides_session_group() {
        let session = session_for("https://management.azure.com/", Some("rg-session"));
        let service = ScopedService::new(
            &session,
            "virtualNetworks",
            "subnets",
            "Microsoft.Network",
            ScopeOptions::default().resource_group("rg-other"),
        )
        .expect("service");
        assert_eq!(service.resource_group(), "rg-other");
        assert_eq!(service.api_version(), "2015-01-01");
    }
}
