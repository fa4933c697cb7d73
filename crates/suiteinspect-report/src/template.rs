//! Report template parsing
//!
//! The report template is a single human-editable HTML document with five
//! named regions bounded by paired comment markers
//! (`<!-- BEGIN <NAME> -->` / `<!-- END <NAME> -->`). Parsing extracts
//! each region body once into a [`TemplateSet`]; the assembler then
//! multiplies repeating regions per finding/object/reference and splices
//! the results back between the markers.

use std::collections::HashMap;
use suiteinspect_core::{Result, SuiteInspectError};

/// The five named template regions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    /// One row per finding in the summary table
    FindingShort,
    /// One block per finding in the detailed section
    FindingLong,
    /// One instance per affected object, nested in the long region
    AffectedObjects,
    /// One instance per reference entry, nested in the long region
    References,
    /// The executive summary block
    ExecutiveSummary,
}

impl Region {
    pub const ALL: [Region; 5] = [
        Region::FindingShort,
        Region::FindingLong,
        Region::AffectedObjects,
        Region::References,
        Region::ExecutiveSummary,
    ];

    /// Marker name as written in the template document
    pub fn name(&self) -> &'static str {
        match self {
            Region::FindingShort => "FINDING_SHORT_REPEATER",
            Region::FindingLong => "FINDING_LONG_REPEATER",
            Region::AffectedObjects => "AFFECTED_OBJECTS_REPEATER",
            Region::References => "REFERENCES_REPEATER",
            Region::ExecutiveSummary => "EXECUTIVE_SUMMARY",
        }
    }

    fn begin_marker(&self) -> String {
        format!("<!-- BEGIN {} -->", self.name())
    }

    fn end_marker(&self) -> String {
        format!("<!-- END {} -->", self.name())
    }
}

/// A parsed template: the raw document plus each region body
#[derive(Debug, Clone)]
pub struct TemplateSet {
    raw: String,
    regions: HashMap<Region, String>,
}

impl TemplateSet {
    /// Extract all five regions from a raw template document.
    ///
    /// Fails with `TemplateRegionMissing` when any marker pair is absent
    /// or the end marker does not follow its begin marker.
    pub fn parse(raw: &str) -> Result<Self> {
        let mut regions = HashMap::new();
        for region in Region::ALL {
            regions.insert(region, extract(raw, region)?.to_string());
        }
        Ok(Self {
            raw: raw.to_string(),
            regions,
        })
    }

    /// The unmodified template document
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Body of a region as extracted at parse time
    pub fn region(&self, region: Region) -> &str {
        // Every variant is inserted by parse
        self.regions.get(&region).map(String::as_str).unwrap_or("")
    }

    /// Replace the text between a region's markers inside `fragment`,
    /// keeping the markers. Splicing a region with its own extracted body
    /// reproduces the fragment byte-for-byte.
    pub fn splice(fragment: &str, region: Region, content: &str) -> Result<String> {
        let begin = region.begin_marker();
        let end = region.end_marker();

        let missing = || SuiteInspectError::TemplateRegionMissing(region.name().to_string());

        let begin_at = fragment.find(&begin).ok_or_else(missing)?;
        let body_start = begin_at + begin.len();
        let body_len = fragment[body_start..].find(&end).ok_or_else(missing)?;

        let mut out = String::with_capacity(fragment.len() + content.len());
        out.push_str(&fragment[..body_start]);
        out.push_str(content);
        out.push_str(&fragment[body_start + body_len..]);
        Ok(out)
    }
}

fn extract(text: &str, region: Region) -> Result<&str> {
    let begin = region.begin_marker();
    let end = region.end_marker();

    let missing = || SuiteInspectError::TemplateRegionMissing(region.name().to_string());

    let begin_at = text.find(&begin).ok_or_else(missing)?;
    let body_start = begin_at + begin.len();
    let body_len = text[body_start..].find(&end).ok_or_else(missing)?;

    Ok(&text[body_start..body_start + body_len])
}

/// Literal placeholder replacement.
///
/// Placeholders are fixed `{{TOKEN}}` strings; placeholders with no
/// matching substitution stay verbatim, since not every finding supplies
/// every placeholder value.
pub fn fill(template: &str, substitutions: &[(&str, &str)]) -> String {
    let mut out = template.to_string();
    for (token, value) in substitutions {
        out = out.replace(token, value);
    }
    out
}
