//! Persisting the report and sidecar files
//!
//! Outputs are write-once per run: the report name carries the run
//! timestamp, sidecars are named by finding identifier, and an existing
//! file is never overwritten.

use crate::assemble::ReportArtifacts;
use chrono::{DateTime, Utc};
use std::io;
use std::path::{Path, PathBuf};
use suiteinspect_core::{Result, SuiteInspectError};
use tracing::info;

/// Write the report and all staged sidecar files into `out_dir`,
/// returning the report path.
pub fn write_report(
    out_dir: &Path,
    artifacts: &ReportArtifacts,
    generated_at: DateTime<Utc>,
) -> Result<PathBuf> {
    std::fs::create_dir_all(out_dir).map_err(|e| write_failure(out_dir, e))?;

    let report_path = out_dir.join(format!(
        "assessment_{}.html",
        generated_at.format("%Y%m%d_%H%M%S")
    ));
    write_once(&report_path, &artifacts.html)?;

    for (name, content) in &artifacts.sidecars {
        write_once(&out_dir.join(name), content)?;
    }

    info!(
        "Wrote report {} and {} sidecar files",
        report_path.display(),
        artifacts.sidecars.len()
    );
    Ok(report_path)
}

fn write_once(path: &Path, content: &str) -> Result<()> {
    if path.exists() {
        return Err(write_failure(
            path,
            io::Error::new(io::ErrorKind::AlreadyExists, "refusing to overwrite"),
        ));
    }
    std::fs::write(path, content).map_err(|e| write_failure(path, e))
}

fn write_failure(path: &Path, source: io::Error) -> SuiteInspectError {
    SuiteInspectError::OutputWrite {
        path: path.display().to_string(),
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn artifacts() -> ReportArtifacts {
        let mut sidecars = BTreeMap::new();
        sidecars.insert("alpha.txt".to_string(), "user@contoso.com\n".to_string());
        ReportArtifacts {
            html: "<html></html>".to_string(),
            sidecars,
        }
    }

    fn run_timestamp() -> DateTime<Utc> {
        DateTime::from_timestamp(1_700_000_000, 0).unwrap()
    }

    #[test]
    fn writes_report_and_sidecars() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("reports");

        let report_path = write_report(&out, &artifacts(), run_timestamp()).unwrap();
        assert!(report_path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap()
            .starts_with("assessment_"));
        assert_eq!(
            std::fs::read_to_string(out.join("alpha.txt")).unwrap(),
            "user@contoso.com\n"
        );
    }

    #[test]
    fn refuses_to_overwrite_existing_output() {
        let dir = tempfile::tempdir().unwrap();

        write_report(dir.path(), &artifacts(), run_timestamp()).unwrap();
        let err = write_report(dir.path(), &artifacts(), run_timestamp()).unwrap_err();
        match err {
            SuiteInspectError::OutputWrite { path, .. } => {
                assert!(path.contains("assessment_"))
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
