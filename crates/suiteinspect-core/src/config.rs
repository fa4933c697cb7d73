//! Run configuration for SuiteInspect

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for one assessment run.
///
/// Loadable from a YAML or JSON file; CLI flags override individual
/// fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    /// Organization (tenant) display name shown in the report
    pub organization: String,

    /// Directory holding one descriptor document per inspector
    pub inspector_dir: PathBuf,

    /// Report template document
    pub template_path: PathBuf,

    /// Directory the report and sidecar files are written to
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Inspector ids to run; empty means all discovered inspectors
    #[serde(default)]
    pub selection: Vec<String>,

    /// Run inspectors on a worker pool instead of sequentially
    #[serde(default)]
    pub parallel: bool,

    /// Advisory per-inspector query timeout in seconds
    #[serde(default)]
    pub query_timeout_secs: Option<u64>,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("reports")
}

impl RunConfig {
    /// Load configuration from a file (JSON by extension, YAML otherwise)
    pub fn from_file(path: &std::path::Path) -> crate::error::Result<Self> {
        let content = std::fs::read_to_string(path)?;

        if path.extension().map(|e| e == "json").unwrap_or(false) {
            serde_json::from_str(&content).map_err(|e| {
                crate::error::SuiteInspectError::Config(format!("{}: {}", path.display(), e))
            })
        } else {
            serde_yaml::from_str(&content).map_err(|e| {
                crate::error::SuiteInspectError::Config(format!("{}: {}", path.display(), e))
            })
        }
    }
}
