//! Azure subscription document.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A subscription as returned by `GET /subscriptions`.
///
/// Only the fields the client relies on are named; everything else is kept
/// in `extra` so newer API versions round-trip unchanged.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    /// Full resource id, `/subscriptions/{subscriptionId}`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscription_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// e.g. `Enabled`, `Disabled`, `Warned`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tenant_id: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_keeps_unknown_fields() {
        let doc = json!({
            "id": "/subscriptions/sub1",
            "subscriptionId": "sub1",
            "displayName": "Prod",
            "state": "Enabled",
            "subscriptionPolicies": {"spendingLimit": "Off"}
        });
        let sub: Subscription = serde_json::from_value(doc.clone()).expect("decode");
        assert_eq!(sub.subscription_id.as_deref(), Some("sub1"));
        assert_eq!(sub.display_name.as_deref(), Some("Prod"));
        assert!(sub.tenant_id.is_none());
        assert!(sub.extra.contains_key("subscriptionPolicies"));
        assert_eq!(serde_json::to_value(&sub).expect("encode"), doc);
    }
}
