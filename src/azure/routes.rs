//! Routes under network route tables.

use super::scoped::{ScopeOptions, ScopedService};
use super::session::Session;
use crate::error::Result;
use serde_json::Value;

pub const NETWORK_PROVIDER: &str = "Microsoft.Network";
pub const ROUTE_TABLES: &str = "routeTables";
pub const ROUTES: &str = "routes";

/// `Microsoft.Network/routeTables/{table}/routes`.
#[derive(Debug)]
pub struct RouteService<'a> {
    scope: ScopedService<'a>,
}

impl<'a> RouteService<'a> {
    pub fn new(session: &'a Session, options: ScopeOptions) -> Result<Self> {
        let scope = ScopedService::new(session, ROUTE_TABLES, ROUTES, NETWORK_PROVIDER, options)?;
        Ok(RouteService { scope })
    }

    pub fn scope(&self) -> &ScopedService<'a> {
        &self.scope
    }

    pub async fn list_routes(&self, route_table: &str) -> Result<Value> {
        self.scope.list(route_table).await
    }

    pub async fn get_route(&self, route_table: &str, route: &str) -> Result<Value> {
        self.scope.get(route_table, route).await
    }

    pub async fn create_route(&self, route_table: &str, route: &str, body: &Value) -> Result<Value> {
        self.scope.create(route_table, route, body).await
    }

    pub async fn update_route(&self, route_table: &str, route: &str, body: &Value) -> Result<Value> {
        self.scope.update(route_table, route, body).await
    }

    pub async fn delete_route(&self, route_table: &str, route: &str) -> Result<Value> {
        self.scope.delete(route_table, route).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::azure::session::tests::session_for;

    #[test]
    fn test_route_urls() {
        let session = session_for("https://management.azure.com/", Some("rg1"));
        let routes = RouteService::new(&session, ScopeOptions::default()).expect("routes");
        let url = routes.scope().list_url("rt-hub");
        assert!(
            url.ends_with("/resourceGroups/rg1/providers/Microsoft.Network/routeTables/rt-hub/routes?api-version=2015-01-01"),
            "{url}"
        );
    }
}
