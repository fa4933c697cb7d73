//! Finding aggregation: filter, order, summarize

use crate::runner::RunOutcome;
use suiteinspect_core::Finding;

/// Summary statistics for an assessment run
#[derive(Debug, Clone, Default)]
pub struct AssessmentSummary {
    /// Inspectors whose check returned at least one affected object
    pub triggered: usize,

    /// Inspectors that were attempted, including ones that failed
    pub executed: usize,

    /// Ids of the attempted inspectors, in execution order
    pub executed_ids: Vec<String>,
}

/// A run reduced to report input: triggered findings in severity order
/// plus the summary statistics.
#[derive(Debug, Default)]
pub struct AggregatedRun {
    pub findings: Vec<Finding>,
    pub summary: AssessmentSummary,
}

/// Filter to triggered findings and stably sort them by severity bucket
/// (Critical first, unknown labels last). Non-triggered findings drop out
/// of the report but stay in the executed statistics.
pub fn aggregate(outcome: RunOutcome) -> AggregatedRun {
    let mut findings: Vec<Finding> = outcome
        .findings
        .into_iter()
        .filter(Finding::is_triggered)
        .collect();

    // Vec::sort_by_key is stable, so ties keep discovery order
    findings.sort_by_key(Finding::severity);

    let summary = AssessmentSummary {
        triggered: findings.len(),
        executed: outcome.executed.len(),
        executed_ids: outcome.executed,
    };

    AggregatedRun { findings, summary }
}
