//! Azure Resource Manager REST access.
//!
//! - [`client`] - credentials waiting for a token
//! - [`auth`] - OAuth2 client-credentials flow
//! - [`session`] - authenticated verb helpers and discovery calls
//! - [`scoped`] - resource-group scoped sub-resource services
//! - [`routes`] - network routes, the concrete scoped service

mod auth;
mod client;
mod decode;
mod routes;
mod scoped;
mod session;

// Re-export public types and functions
pub use auth::AccessToken;
pub use client::ArmClient;
pub use routes::{RouteService, NETWORK_PROVIDER, ROUTES, ROUTE_TABLES};
pub use scoped::{ScopeOptions, ScopedService};
pub use session::Session;
