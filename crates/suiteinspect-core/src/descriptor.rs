//! Inspector descriptor documents
//!
//! Each inspector ships a sidecar metadata document (YAML or JSON) holding
//! the static text that ends up in the report: display name, severity,
//! description, remediation guidance and references.

use crate::error::{Result, SuiteInspectError};
use crate::finding::Severity;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A reference entry attached to a finding (documentation link, benchmark
/// section, advisory)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reference {
    /// Link target
    #[serde(rename = "Url")]
    pub url: String,

    /// Link label shown in the report
    #[serde(rename = "Text")]
    pub text: String,
}

/// Static metadata for one inspector, immutable once loaded.
///
/// The identifier is derived from the descriptor file name, not stored in
/// the document itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InspectorDescriptor {
    /// Unique identifier within a run (descriptor file stem, case-sensitive)
    #[serde(skip)]
    pub id: String,

    /// Display name used as the finding title
    #[serde(rename = "FindingName")]
    pub name: String,

    /// Severity bucket
    #[serde(rename = "Severity")]
    pub severity: Severity,

    /// What the check verifies and why it matters
    #[serde(rename = "Description")]
    pub description: String,

    /// How to fix the finding
    #[serde(rename = "Remediation")]
    pub remediation: String,

    /// Ordered reference entries
    #[serde(rename = "References", default)]
    pub references: Vec<Reference>,
}

impl InspectorDescriptor {
    /// Load and parse the descriptor document for `id` from `path`.
    ///
    /// Missing required fields or an unparsable document fail with
    /// `MalformedDescriptor`; the inspector is then excluded from the run
    /// but stays in the executed statistics.
    pub fn from_file(id: &str, path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;

        let malformed = |e: String| SuiteInspectError::MalformedDescriptor {
            path: path.display().to_string(),
            message: e,
        };

        let mut descriptor: InspectorDescriptor =
            if path.extension().map(|e| e == "json").unwrap_or(false) {
                serde_json::from_str(&content).map_err(|e| malformed(e.to_string()))?
            } else {
                serde_yaml::from_str(&content).map_err(|e| malformed(e.to_string()))?
            };

        descriptor.id = id.to_string();
        Ok(descriptor)
    }
}
