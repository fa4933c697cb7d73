//! Report assembly
//!
//! Drives aggregated findings through the template engine to produce the
//! final HTML document plus any sidecar files for oversized
//! affected-object lists. Output is byte-deterministic for identical
//! inputs, apart from the embedded generation timestamp.

use crate::template::{fill, Region, TemplateSet};
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use suiteinspect_core::{Finding, Result};

/// Remediation text longer than this is replaced by a pointer sentence in
/// the short region; the long region always carries the full text.
pub const REMEDIATION_INLINE_MAX: usize = 300;

/// Affected-object lists longer than this spill to a sidecar file instead
/// of being inlined.
pub const AFFECTED_OBJECTS_INLINE_MAX: usize = 15;

const REMEDIATION_POINTER: &str =
    "Refer to the detailed findings section for complete remediation guidance.";

/// Run-level metadata substituted into the report
#[derive(Debug, Clone)]
pub struct ReportMetadata {
    /// Organization (tenant) display name
    pub organization: String,

    /// Ids of every inspector that was attempted, in execution order
    pub executed_ids: Vec<String>,

    /// Report generation time, embedded in the document and used for the
    /// report file name
    pub generated_at: DateTime<Utc>,
}

/// The assembled report plus staged sidecar files (name → content)
#[derive(Debug)]
pub struct ReportArtifacts {
    pub html: String,
    pub sidecars: BTreeMap<String, String>,
}

/// Assemble the report from findings already filtered and sorted by the
/// aggregator. Sequence numbers are 1-based and assigned in this order,
/// so finding #1 is always the highest-severity triggered finding.
pub fn assemble(
    findings: &[Finding],
    templates: &TemplateSet,
    meta: &ReportMetadata,
) -> Result<ReportArtifacts> {
    let mut short_sections = String::new();
    let mut long_sections = String::new();
    let mut sidecars = BTreeMap::new();

    for (index, finding) in findings.iter().enumerate() {
        let number = (index + 1).to_string();
        let descriptor = &finding.descriptor;

        let short_remediation =
            if descriptor.remediation.chars().count() > REMEDIATION_INLINE_MAX {
                REMEDIATION_POINTER
            } else {
                descriptor.remediation.as_str()
            };
        short_sections.push_str(&fill(
            templates.region(Region::FindingShort),
            &[
                ("{{FINDING_NUMBER}}", &number),
                ("{{FINDING_NAME}}", &descriptor.name),
                ("{{REMEDIATION}}", short_remediation),
            ],
        ));

        let objects_html = render_affected_objects(finding, templates, &mut sidecars);

        let references_html: String = descriptor
            .references
            .iter()
            .map(|reference| {
                fill(
                    templates.region(Region::References),
                    &[
                        ("{{REFERENCE_URL}}", reference.url.as_str()),
                        ("{{REFERENCE_TEXT}}", reference.text.as_str()),
                    ],
                )
            })
            .collect();

        let long_body = templates.region(Region::FindingLong);
        let long_body = TemplateSet::splice(long_body, Region::AffectedObjects, &objects_html)?;
        let long_body = TemplateSet::splice(&long_body, Region::References, &references_html)?;
        long_sections.push_str(&fill(
            &long_body,
            &[
                ("{{FINDING_NUMBER}}", &number),
                ("{{FINDING_NAME}}", &descriptor.name),
                ("{{SEVERITY}}", descriptor.severity.label()),
                ("{{DESCRIPTION}}", &descriptor.description),
                ("{{REMEDIATION}}", &descriptor.remediation),
            ],
        ));
    }

    let issue_summary = format!(
        "{} out of {} executed inspector modules identified possible opportunities for improvement.",
        findings.len(),
        meta.executed_ids.len()
    );
    let executive_summary = fill(
        templates.region(Region::ExecutiveSummary),
        &[
            ("{{ORG_NAME}}", meta.organization.as_str()),
            ("{{ISSUE_SUMMARY}}", issue_summary.as_str()),
            ("{{EXECUTED_INSPECTORS}}", meta.executed_ids.join(", ").as_str()),
        ],
    );

    let html = TemplateSet::splice(templates.raw(), Region::FindingShort, &short_sections)?;
    let html = TemplateSet::splice(&html, Region::FindingLong, &long_sections)?;
    let html = TemplateSet::splice(&html, Region::ExecutiveSummary, &executive_summary)?;
    let html = fill(
        &html,
        &[(
            "{{REPORT_TIMESTAMP}}",
            &meta.generated_at.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        )],
    );

    Ok(ReportArtifacts { html, sidecars })
}

/// Inline each object, or stage a sidecar file and emit a single link
/// instance when the list is over the threshold.
fn render_affected_objects(
    finding: &Finding,
    templates: &TemplateSet,
    sidecars: &mut BTreeMap<String, String>,
) -> String {
    let template = templates.region(Region::AffectedObjects);

    if finding.affected_objects.len() > AFFECTED_OBJECTS_INLINE_MAX {
        let sidecar_name = format!("{}.txt", finding.id());
        let mut content = finding
            .affected_objects
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n");
        content.push('\n');
        sidecars.insert(sidecar_name.clone(), content);

        let link = format!(
            "<a href=\"{}\">See attached list of {} affected objects</a>",
            sidecar_name,
            finding.affected_objects.len()
        );
        fill(template, &[("{{AFFECTED_OBJECT}}", &link)])
    } else {
        finding
            .affected_objects
            .iter()
            .map(|object| fill(template, &[("{{AFFECTED_OBJECT}}", &object.to_string())]))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use suiteinspect_core::{AffectedObject, InspectorDescriptor, Reference, Severity};

    const TEMPLATE: &str = "<html>\n\
        <!-- BEGIN EXECUTIVE_SUMMARY -->{{ORG_NAME}}|{{ISSUE_SUMMARY}}|{{EXECUTED_INSPECTORS}}<!-- END EXECUTIVE_SUMMARY -->\n\
        <!-- BEGIN FINDING_SHORT_REPEATER -->[{{FINDING_NUMBER}}:{{FINDING_NAME}}:{{REMEDIATION}}]<!-- END FINDING_SHORT_REPEATER -->\n\
        <!-- BEGIN FINDING_LONG_REPEATER -->({{FINDING_NUMBER}}:{{FINDING_NAME}}:{{SEVERITY}}:{{DESCRIPTION}}:{{REMEDIATION}}\
        <!-- BEGIN AFFECTED_OBJECTS_REPEATER --><{{AFFECTED_OBJECT}}><!-- END AFFECTED_OBJECTS_REPEATER -->\
        <!-- BEGIN REFERENCES_REPEATER -->[{{REFERENCE_TEXT}}@{{REFERENCE_URL}}]<!-- END REFERENCES_REPEATER -->)<!-- END FINDING_LONG_REPEATER -->\n\
        {{REPORT_TIMESTAMP}}</html>\n";

    fn finding(id: &str, severity: Severity, remediation: &str, objects: usize) -> Finding {
        let descriptor = InspectorDescriptor {
            id: id.to_string(),
            name: format!("Finding {id}"),
            severity,
            description: format!("Description of {id}"),
            remediation: remediation.to_string(),
            references: vec![Reference {
                url: "https://example.test/doc".to_string(),
                text: "Guidance".to_string(),
            }],
        };
        let affected = (0..objects)
            .map(|i| AffectedObject::text(format!("object-{i}")))
            .collect();
        Finding::new(descriptor, affected)
    }

    fn meta(executed: &[&str]) -> ReportMetadata {
        ReportMetadata {
            organization: "Contoso".to_string(),
            executed_ids: executed.iter().map(|s| s.to_string()).collect(),
            generated_at: DateTime::from_timestamp(1_700_000_000, 0).unwrap(),
        }
    }

    fn templates() -> TemplateSet {
        TemplateSet::parse(TEMPLATE).unwrap()
    }

    #[test]
    fn fifteen_objects_inline_sixteen_spill() {
        let meta = meta(&["alpha"]);

        let inline = assemble(&[finding("alpha", Severity::High, "r", 15)], &templates(), &meta)
            .unwrap();
        assert!(inline.sidecars.is_empty());
        assert!(inline.html.contains("<object-14>"));

        let spilled = assemble(&[finding("alpha", Severity::High, "r", 16)], &templates(), &meta)
            .unwrap();
        assert_eq!(spilled.sidecars.len(), 1);
        let content = spilled.sidecars.get("alpha.txt").unwrap();
        assert_eq!(content.lines().count(), 16);
        assert!(spilled.html.contains("alpha.txt"));
        assert!(!spilled.html.contains("<object-14>"));
    }

    #[test]
    fn remediation_over_300_chars_becomes_pointer_in_short_region_only() {
        let exactly = "r".repeat(300);
        let over = "r".repeat(301);
        let meta = meta(&["alpha"]);

        let full = assemble(
            &[finding("alpha", Severity::Low, &exactly, 1)],
            &templates(),
            &meta,
        )
        .unwrap();
        assert!(full.html.contains(&format!("[1:Finding alpha:{exactly}]")));

        let pointed = assemble(
            &[finding("alpha", Severity::Low, &over, 1)],
            &templates(),
            &meta,
        )
        .unwrap();
        assert!(pointed
            .html
            .contains("[1:Finding alpha:Refer to the detailed findings section"));
        // long region keeps the full text
        assert!(pointed.html.contains(&over));
    }

    #[test]
    fn sequence_numbers_follow_sorted_order() {
        let meta = meta(&["low", "crit"]);
        let report = assemble(
            &[
                finding("crit", Severity::Critical, "r", 1),
                finding("low", Severity::Low, "r", 1),
            ],
            &templates(),
            &meta,
        )
        .unwrap();

        assert!(report.html.contains("[1:Finding crit:r]"));
        assert!(report.html.contains("[2:Finding low:r]"));
    }

    #[test]
    fn references_render_in_declared_order() {
        let mut f = finding("alpha", Severity::Medium, "r", 1);
        f.descriptor.references = vec![
            Reference {
                url: "https://example.test/a".to_string(),
                text: "First".to_string(),
            },
            Reference {
                url: "https://example.test/b".to_string(),
                text: "Second".to_string(),
            },
        ];

        let report = assemble(&[f], &templates(), &meta(&["alpha"])).unwrap();
        let first = report.html.find("[First@").unwrap();
        let second = report.html.find("[Second@").unwrap();
        assert!(first < second);
    }

    #[test]
    fn output_is_deterministic_for_identical_input() {
        let meta = meta(&["alpha", "beta"]);
        let findings = vec![finding("alpha", Severity::High, "r", 20)];

        let a = assemble(&findings, &templates(), &meta).unwrap();
        let b = assemble(&findings, &templates(), &meta).unwrap();
        assert_eq!(a.html, b.html);
        assert_eq!(a.sidecars, b.sidecars);
    }
}
