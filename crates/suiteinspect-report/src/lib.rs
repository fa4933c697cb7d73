//! SuiteInspect Report
//!
//! Template region parsing, report assembly and output writing.

pub mod assemble;
pub mod template;
pub mod writer;

pub use assemble::{
    assemble, ReportArtifacts, ReportMetadata, AFFECTED_OBJECTS_INLINE_MAX,
    REMEDIATION_INLINE_MAX,
};
pub use template::{fill, Region, TemplateSet};
pub use writer::write_report;
