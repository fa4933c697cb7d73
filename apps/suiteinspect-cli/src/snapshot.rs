//! Snapshot-backed service clients
//!
//! Live authenticated sessions are outside this tool's scope; assessments
//! run against exported tenant state instead. A snapshot directory holds
//! one JSON document per service (`directory.json`, `exchange.json`, ...),
//! each an object mapping query requests to their result documents.

use serde_json::Value;
use std::path::Path;
use std::sync::Arc;
use suiteinspect_core::{
    services, Result, ServiceClient, ServiceContext, SuiteInspectError,
};
use tracing::{debug, warn};

/// Serves recorded query results for one service
pub struct SnapshotClient {
    service: String,
    responses: serde_json::Map<String, Value>,
}

impl SnapshotClient {
    pub fn load(service: &str, path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let document: Value = serde_json::from_str(&content)?;

        let responses = match document {
            Value::Object(map) => map,
            _ => {
                return Err(SuiteInspectError::Config(format!(
                    "{}: snapshot must be an object of request -> response",
                    path.display()
                )))
            }
        };

        Ok(Self {
            service: service.to_string(),
            responses,
        })
    }
}

impl ServiceClient for SnapshotClient {
    fn service(&self) -> &str {
        &self.service
    }

    fn query(&self, request: &str) -> Result<Value> {
        self.responses.get(request).cloned().ok_or_else(|| {
            SuiteInspectError::Query(format!(
                "{}: no recorded response for {request}",
                self.service
            ))
        })
    }
}

/// Build a service context from a snapshot directory, attaching a client
/// for every service the snapshot covers.
pub fn connect(organization: &str, snapshot_dir: &Path) -> Result<ServiceContext> {
    let mut ctx = ServiceContext::new(organization);

    for service in [
        services::DIRECTORY,
        services::EXCHANGE,
        services::SHAREPOINT,
        services::TEAMS,
    ] {
        let path = snapshot_dir.join(format!("{service}.json"));
        if !path.exists() {
            warn!(service = %service, "No snapshot for service, checks needing it will fail");
            continue;
        }
        debug!(service = %service, path = %path.display(), "Loading service snapshot");
        ctx = ctx.with_client(Arc::new(SnapshotClient::load(service, &path)?));
    }

    Ok(ctx)
}
