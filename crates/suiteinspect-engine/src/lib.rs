//! SuiteInspect Engine
//!
//! Inspector discovery, execution with per-inspector failure isolation,
//! and finding aggregation.

pub mod aggregate;
pub mod registry;
pub mod runner;

pub use aggregate::{aggregate, AggregatedRun, AssessmentSummary};
pub use registry::InspectorRegistry;
pub use runner::{InspectorRunner, RunError, RunOutcome, RunnerConfig};
