//! Typed views of ARM documents.
//!
//! - [`Subscription`] - entry of the subscription list
//! - [`ResourceGroup`] - a resource group and its provisioning state
//!
//! Anything without a known schema stays a `serde_json::Value`.

mod resource_group;
mod subscription;

pub use resource_group::{ResourceGroup, ResourceGroupProperties};
pub use subscription::Subscription;
