//! Inspector runner with per-inspector failure isolation
//!
//! A failing check or malformed descriptor never aborts the run: the
//! failure is logged, recorded in the outcome, and the remaining
//! inspectors continue. The executed statistics keep failed inspectors in
//! the denominator.

use crate::registry::InspectorRegistry;
use rayon::prelude::*;
use suiteinspect_core::{Finding, Result, ServiceContext, SuiteInspectError};
use tracing::{info, warn};

/// Configuration for the inspector runner
#[derive(Debug, Clone, Default)]
pub struct RunnerConfig {
    /// Run inspectors on a rayon worker pool instead of sequentially.
    /// Isolation and final ordering are identical in both modes.
    pub parallel: bool,
}

/// A per-inspector failure captured during a run
#[derive(Debug, Clone)]
pub struct RunError {
    pub inspector: String,
    pub message: String,
}

/// Everything a run produced: findings, the ids that were attempted, and
/// any isolated failures.
#[derive(Debug, Default)]
pub struct RunOutcome {
    pub findings: Vec<Finding>,
    pub executed: Vec<String>,
    pub errors: Vec<RunError>,
}

impl RunOutcome {
    /// Denominator for "N out of M" reporting; includes failed inspectors
    pub fn executed_count(&self) -> usize {
        self.executed.len()
    }
}

/// Runs selected inspectors against a service context
pub struct InspectorRunner<'a> {
    registry: &'a InspectorRegistry,
    ctx: &'a ServiceContext,
    config: RunnerConfig,
}

impl<'a> InspectorRunner<'a> {
    pub fn new(registry: &'a InspectorRegistry, ctx: &'a ServiceContext) -> Self {
        Self {
            registry,
            ctx,
            config: RunnerConfig::default(),
        }
    }

    pub fn with_config(mut self, config: RunnerConfig) -> Self {
        self.config = config;
        self
    }

    /// Run every inspector in `selection` (empty means all discovered),
    /// in discovery-then-selection order.
    pub fn run(&self, selection: &[String]) -> RunOutcome {
        let ids = self.registry.select(selection);
        info!("Running {} inspectors", ids.len());

        let results: Vec<(String, Result<Finding>)> = if self.config.parallel {
            ids.par_iter()
                .map(|id| (id.clone(), self.run_one(id)))
                .collect()
        } else {
            ids.iter()
                .map(|id| (id.clone(), self.run_one(id)))
                .collect()
        };

        let mut outcome = RunOutcome {
            executed: ids,
            ..Default::default()
        };

        for (id, result) in results {
            match result {
                Ok(finding) => outcome.findings.push(finding),
                Err(e) => {
                    let message = e.to_string();
                    warn!(inspector = %id, "{}", message);
                    outcome.errors.push(RunError {
                        inspector: id,
                        message,
                    });
                }
            }
        }

        info!(
            "Run complete: {} triggered, {} errors out of {} inspectors",
            outcome.findings.iter().filter(|f| f.is_triggered()).count(),
            outcome.errors.len(),
            outcome.executed_count()
        );

        outcome
    }

    fn run_one(&self, id: &str) -> Result<Finding> {
        info!(inspector = %id, "Invoking inspector");

        let descriptor = self.registry.load_descriptor(id)?;
        let check = self.registry.check(id)?;

        let affected = check
            .run(self.ctx)
            .map_err(|e| SuiteInspectError::ExecutionFailure {
                inspector: id.to_string(),
                message: e.to_string(),
            })?;

        Ok(Finding::new(descriptor, affected))
    }
}
