//! Client for the Azure Resource Manager REST API.
//!
//! Authentication is two-phase: an [`ArmClient`] holds validated credentials,
//! and [`ArmClient::authenticate`] exchanges them for a [`Session`] that can
//! issue requests.
//!
//! ```no_run
//! use azure_arm_client::{ArmClient, ClientConfig, RouteService, ScopeOptions};
//!
//! # async fn run() -> Result<(), azure_arm_client::ArmError> {
//! let config = ClientConfig::new("client-id", "client-key", "tenant-id")
//!     .with_resource_group("rg1");
//! let session = ArmClient::new(config)?.authenticate().await?;
//! let subscriptions = session.list_subscriptions().await?;
//! let routes = RouteService::new(&session, ScopeOptions::default())?
//!     .list_routes("rt-hub")
//!     .await?;
//! # let _ = (subscriptions, routes);
//! # Ok(())
//! # }
//! ```

pub mod azure;
pub mod config;
pub mod error;
pub mod models;
pub mod output;

pub use azure::{
    AccessToken, ArmClient, RouteService, ScopeOptions, ScopedService, Session,
    NETWORK_PROVIDER,
};
pub use config::{ClientConfig, Credentials};
pub use error::{ArmError, Result};
pub use models::{ResourceGroup, Subscription};
