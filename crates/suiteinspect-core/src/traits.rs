//! Core traits that define the inspector and service abstraction layer.
//!
//! Checks never touch ambient session state: every service connection is
//! an explicit handle on the [`ServiceContext`] passed into each run.

use crate::error::{Result, SuiteInspectError};
use crate::finding::AffectedObject;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

/// Well-known service names within the suite
pub mod services {
    /// Directory / identity service (users, roles, conditional access)
    pub const DIRECTORY: &str = "directory";
    /// Email service (mailboxes, transport, auth policies)
    pub const EXCHANGE: &str = "exchange";
    /// File sharing and collaboration service
    pub const SHAREPOINT: &str = "sharepoint";
    /// Chat and meetings service
    pub const TEAMS: &str = "teams";
}

/// A read-only query connection to one cloud service.
///
/// Implementations wrap whatever transport the deployment uses (live API
/// session, exported tenant snapshot); checks only see `query`.
pub trait ServiceClient: Send + Sync {
    /// Service name this client answers for (see [`services`])
    fn service(&self) -> &str;

    /// Run a read-only query and return its result document
    fn query(&self, request: &str) -> Result<serde_json::Value>;
}

/// Connection state shared by every inspector in a run.
///
/// Constructed once, before any inspector runs, and passed by reference
/// into each check invocation.
pub struct ServiceContext {
    organization: String,
    clients: HashMap<String, Arc<dyn ServiceClient>>,
    query_timeout: Option<Duration>,
}

impl ServiceContext {
    /// Create a context for the named organization with no connections yet
    pub fn new(organization: impl Into<String>) -> Self {
        Self {
            organization: organization.into(),
            clients: HashMap::new(),
            query_timeout: None,
        }
    }

    /// Attach a service client, keyed by its reported service name
    pub fn with_client(mut self, client: Arc<dyn ServiceClient>) -> Self {
        self.clients.insert(client.service().to_string(), client);
        self
    }

    /// Advisory per-query timeout for clients that support one
    pub fn with_query_timeout(mut self, timeout: Duration) -> Self {
        self.query_timeout = Some(timeout);
        self
    }

    /// Organization (tenant) display name
    pub fn organization(&self) -> &str {
        &self.organization
    }

    /// Look up a connected service, failing if it was never attached
    pub fn client(&self, service: &str) -> Result<&dyn ServiceClient> {
        self.clients
            .get(service)
            .map(|c| c.as_ref())
            .ok_or_else(|| SuiteInspectError::ServiceUnavailable(service.to_string()))
    }

    pub fn query_timeout(&self) -> Option<Duration> {
        self.query_timeout
    }
}

/// One inspector's executable check body.
///
/// Checks are independent, side-effect-free read-only queries; a returned
/// empty list means the inspector did not trigger.
pub trait InspectorCheck: Send + Sync {
    /// Run the check against live (or snapshotted) tenant state
    fn run(&self, ctx: &ServiceContext) -> Result<Vec<AffectedObject>>;
}

struct FnCheck<F>(F);

impl<F> InspectorCheck for FnCheck<F>
where
    F: Fn(&ServiceContext) -> Result<Vec<AffectedObject>> + Send + Sync,
{
    fn run(&self, ctx: &ServiceContext) -> Result<Vec<AffectedObject>> {
        (self.0)(ctx)
    }
}

/// Wrap a closure as a check handle
pub fn check_fn<F>(f: F) -> Arc<dyn InspectorCheck>
where
    F: Fn(&ServiceContext) -> Result<Vec<AffectedObject>> + Send + Sync + 'static,
{
    Arc::new(FnCheck(f))
}

/// Static registry mapping inspector id to its check body, populated once
/// at startup.
#[derive(Default, Clone)]
pub struct CheckSet {
    checks: HashMap<String, Arc<dyn InspectorCheck>>,
}

impl CheckSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a check under an inspector id; the id must match the stem
    /// of the inspector's descriptor document
    pub fn register(&mut self, id: impl Into<String>, check: Arc<dyn InspectorCheck>) {
        self.checks.insert(id.into(), check);
    }

    pub fn get(&self, id: &str) -> Option<Arc<dyn InspectorCheck>> {
        self.checks.get(id).cloned()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.checks.contains_key(id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.checks.keys().map(|s| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.checks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closures_register_as_checks() {
        let mut checks = CheckSet::new();
        checks.register("always_empty", check_fn(|_ctx| Ok(Vec::new())));

        let ctx = ServiceContext::new("Contoso");
        let result = checks.get("always_empty").unwrap().run(&ctx).unwrap();
        assert!(result.is_empty());
        assert!(!checks.contains("missing"));
    }

    #[test]
    fn missing_service_is_reported_by_name() {
        let ctx = ServiceContext::new("Contoso");
        let err = ctx.client(services::EXCHANGE).err().unwrap();
        assert!(err.to_string().contains("exchange"));
    }
}
