//! Finding model shared by every inspector

use crate::descriptor::InspectorDescriptor;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Severity bucket of a finding.
///
/// Declared from most to least severe so the derived total order is the
/// report sort order: an ascending sort puts `Critical` first and
/// `Unknown` last. Unrecognized severity labels always parse to
/// `Unknown` rather than failing the descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    /// Requires immediate action
    Critical,
    /// Requires prompt attention
    High,
    /// Should be addressed
    Medium,
    /// Should be reviewed
    Low,
    /// Informational, no immediate action required
    Informational,
    /// Label not recognized; sorts after every known bucket
    Unknown,
}

impl Severity {
    /// Human-readable label as printed in reports
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Critical => "Critical",
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
            Severity::Informational => "Informational",
            Severity::Unknown => "Unknown",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for Severity {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s.to_ascii_lowercase().as_str() {
            "critical" => Severity::Critical,
            "high" => Severity::High,
            "medium" => Severity::Medium,
            "low" => Severity::Low,
            "informational" | "info" => Severity::Informational,
            _ => Severity::Unknown,
        })
    }
}

impl Serialize for Severity {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for Severity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        // Infallible: anything unrecognized becomes Unknown
        Ok(label.parse().unwrap_or(Severity::Unknown))
    }
}

/// One tenant entity found to be non-compliant by a check.
///
/// Checks return either bare strings (user principal names, policy names)
/// or small records; both render as a single line in sidecar files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AffectedObject {
    /// Plain identifier
    Text(String),
    /// Structured entity description
    Record(serde_json::Map<String, serde_json::Value>),
}

impl AffectedObject {
    pub fn text(value: impl Into<String>) -> Self {
        AffectedObject::Text(value.into())
    }
}

impl std::fmt::Display for AffectedObject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AffectedObject::Text(s) => f.write_str(s),
            AffectedObject::Record(map) => {
                let json = serde_json::to_string(map).map_err(|_| std::fmt::Error)?;
                f.write_str(&json)
            }
        }
    }
}

/// The result of running one inspector: its static metadata plus the
/// dynamic list of affected objects. An empty list means "not triggered".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Finding {
    /// Static metadata loaded from the inspector's descriptor document
    pub descriptor: InspectorDescriptor,

    /// Objects the check found to be non-compliant
    pub affected_objects: Vec<AffectedObject>,
}

impl Finding {
    /// Create a finding from a descriptor and a check result
    pub fn new(descriptor: InspectorDescriptor, affected_objects: Vec<AffectedObject>) -> Self {
        Self {
            descriptor,
            affected_objects,
        }
    }

    /// Identity of the finding: its inspector identifier
    pub fn id(&self) -> &str {
        &self.descriptor.id
    }

    /// Whether the check found anything worth reporting
    pub fn is_triggered(&self) -> bool {
        !self.affected_objects.is_empty()
    }

    pub fn severity(&self) -> Severity {
        self.descriptor.severity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_orders_critical_first_unknown_last() {
        let mut buckets = vec![
            Severity::Unknown,
            Severity::Low,
            Severity::Critical,
            Severity::Informational,
            Severity::Medium,
            Severity::High,
        ];
        buckets.sort();
        assert_eq!(
            buckets,
            vec![
                Severity::Critical,
                Severity::High,
                Severity::Medium,
                Severity::Low,
                Severity::Informational,
                Severity::Unknown,
            ]
        );
    }

    #[test]
    fn severity_parses_case_insensitively() {
        assert_eq!("CRITICAL".parse(), Ok(Severity::Critical));
        assert_eq!("informational".parse(), Ok(Severity::Informational));
        assert_eq!("Moderate".parse(), Ok(Severity::Unknown));
    }

    #[test]
    fn affected_object_renders_records_as_compact_json() {
        let mut map = serde_json::Map::new();
        map.insert("user".to_string(), serde_json::json!("alice@contoso.com"));
        assert_eq!(
            AffectedObject::Record(map).to_string(),
            r#"{"user":"alice@contoso.com"}"#
        );
        assert_eq!(AffectedObject::text("alice").to_string(), "alice");
    }
}
