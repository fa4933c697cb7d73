//! Inspector discovery and descriptor loading
//!
//! The registry scans a directory of descriptor documents and pairs each
//! one with a statically registered check body. Inspector ids are the
//! descriptor file stems, case-sensitive.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use suiteinspect_core::{
    CheckSet, InspectorCheck, InspectorDescriptor, Result, SuiteInspectError,
};
use tracing::debug;
use walkdir::WalkDir;

const DESCRIPTOR_EXTENSIONS: &[&str] = &["yaml", "yml", "json"];

/// Registry of available inspectors: descriptor documents on disk joined
/// with the check bodies registered in a [`CheckSet`].
pub struct InspectorRegistry {
    checks: CheckSet,
    descriptors: BTreeMap<String, PathBuf>,
    discovered: Vec<String>,
}

impl InspectorRegistry {
    /// Scan `dir` for descriptor documents and join them with `checks`.
    ///
    /// Descriptor files whose stem has no matching check body are skipped
    /// (they cannot be executed); duplicate stems keep the
    /// lexicographically first path. Discovery order is sorted stem order,
    /// which is stable across platforms where raw directory order is not.
    pub fn open(dir: &Path, checks: CheckSet) -> Result<Self> {
        if !dir.is_dir() {
            return Err(SuiteInspectError::Config(format!(
                "inspector directory {} does not exist",
                dir.display()
            )));
        }

        let mut paths: Vec<PathBuf> = WalkDir::new(dir)
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .map(|entry| entry.into_path())
            .filter(|path| {
                path.extension()
                    .and_then(|e| e.to_str())
                    .map(|e| DESCRIPTOR_EXTENSIONS.contains(&e))
                    .unwrap_or(false)
            })
            .collect();
        paths.sort();

        let mut descriptors: BTreeMap<String, PathBuf> = BTreeMap::new();
        for path in paths {
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            if descriptors.contains_key(stem) {
                debug!(inspector = %stem, path = %path.display(), "Duplicate descriptor ignored");
                continue;
            }
            descriptors.insert(stem.to_string(), path);
        }

        let discovered: Vec<String> = descriptors
            .keys()
            .filter(|id| {
                let known = checks.contains(id);
                if !known {
                    debug!(inspector = %id, "Descriptor has no registered check, skipping");
                }
                known
            })
            .cloned()
            .collect();

        Ok(Self {
            checks,
            descriptors,
            discovered,
        })
    }

    /// Ids of all executable inspectors, in discovery order
    pub fn discover(&self) -> &[String] {
        &self.discovered
    }

    /// Apply the caller's selection policy: an empty subset means "all";
    /// a non-empty subset intersects with the discovered ids, preserving
    /// discovery order. Ids not found are silently skipped.
    pub fn select(&self, subset: &[String]) -> Vec<String> {
        if subset.is_empty() {
            return self.discovered.clone();
        }
        self.discovered
            .iter()
            .filter(|id| subset.iter().any(|s| s == *id))
            .cloned()
            .collect()
    }

    /// Load and parse the descriptor document for `id`
    pub fn load_descriptor(&self, id: &str) -> Result<InspectorDescriptor> {
        let path = self
            .descriptors
            .get(id)
            .ok_or_else(|| SuiteInspectError::UnknownInspector(id.to_string()))?;
        InspectorDescriptor::from_file(id, path)
    }

    /// Return the executable check body for `id`
    pub fn check(&self, id: &str) -> Result<Arc<dyn InspectorCheck>> {
        self.checks
            .get(id)
            .ok_or_else(|| SuiteInspectError::UnknownInspector(id.to_string()))
    }
}
