//! Document tree types for the on-disk JSON format.
//!
//! These types map directly to the plan document files and are serialized
//! via `serde` + `serde_json`. Optional scalar fields are omitted from the
//! output when absent; list fields default to empty on read so sparse
//! hand-authored documents load cleanly. Unknown fields are ignored.

use serde::{Deserialize, Serialize};

/// Top-level structure of a plan document file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlanDocument {
    /// Plan title shown above the stage navigation.
    pub title: String,
    /// Optional long-form "how to use this playbook" text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intro: Option<String>,
    /// Ordered stages. A usable document has at least one; the store does
    /// not enforce this, callers do.
    #[serde(default)]
    pub stages: Vec<Stage>,
}

/// A top-level phase within a plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Stage {
    /// Optional stable identifier. When absent, the title is the effective
    /// lookup key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Stage title. Expected unique within a document; duplicates resolve
    /// to the first occurrence.
    pub title: String,
    /// Optional descriptive text shown above the step content.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Ordered steps. Position is display order only.
    #[serde(default)]
    pub steps: Vec<Step>,
}

/// A single actionable unit within a stage.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Step {
    /// Optional stable identifier, same semantics as [`Stage::id`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Step title.
    pub title: String,
    /// What this step is trying to achieve.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal: Option<String>,
    /// Why the step matters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub why: Option<String>,
    /// SOP line items, one per entry. Never contains blank entries after an
    /// edit operation.
    #[serde(default)]
    pub how: Vec<String>,
    /// KPI line items.
    #[serde(default)]
    pub kpis: Vec<String>,
    /// Deliverable line items.
    #[serde(default)]
    pub deliverables: Vec<String>,
    /// Linked external tools.
    #[serde(default)]
    pub toolbox: Vec<ToolRef>,
}

/// Reference to an external tool. No identity beyond name + url; duplicate
/// entries are permitted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ToolRef {
    pub name: String,
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_minimal_document() {
        let json = r#"{"title": "Launch playbook"}"#;
        let doc: PlanDocument = serde_json::from_str(json).expect("should parse");
        assert_eq!(doc.title, "Launch playbook");
        assert_eq!(doc.intro, None);
        assert!(doc.stages.is_empty());
    }

    #[test]
    fn deserialize_full_step() {
        let json = r#"{
            "title": "Keyword research",
            "goal": "Find 50 target keywords",
            "why": "Search drives the funnel",
            "how": ["Seed list", "Expand with tools"],
            "kpis": ["50 keywords shortlisted"],
            "deliverables": ["Keyword sheet"],
            "toolbox": [{"name": "Ahrefs", "url": "https://ahrefs.com"}]
        }"#;
        let step: Step = serde_json::from_str(json).expect("should parse");
        assert_eq!(step.how.len(), 2);
        assert_eq!(step.toolbox[0].name, "Ahrefs");
        assert_eq!(step.id, None);
    }

    #[test]
    fn absent_optionals_are_not_serialized() {
        let step = Step {
            id: None,
            title: "Bare step".to_owned(),
            goal: None,
            why: None,
            how: vec![],
            kpis: vec![],
            deliverables: vec![],
            toolbox: vec![],
        };
        let json = serde_json::to_string(&step).expect("should serialize");
        assert!(!json.contains("\"goal\""), "unexpected goal field: {json}");
        assert!(!json.contains("\"id\""), "unexpected id field: {json}");
        // List fields stay present even when empty.
        assert!(json.contains("\"how\""), "missing how field: {json}");
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let json = r#"{"title": "X", "stages": [], "legacy_field": 42}"#;
        let doc: PlanDocument = serde_json::from_str(json).expect("should parse");
        assert_eq!(doc.title, "X");
    }

    #[test]
    fn roundtrip_serialize_deserialize() {
        let doc = PlanDocument {
            title: "Roundtrip".to_owned(),
            intro: Some("Read the stages in order.".to_owned()),
            stages: vec![Stage {
                id: Some("s1".to_owned()),
                title: "Foundation".to_owned(),
                description: None,
                steps: vec![Step {
                    id: None,
                    title: "Positioning".to_owned(),
                    goal: Some("One-sentence value prop".to_owned()),
                    why: None,
                    how: vec!["Interview 5 customers".to_owned()],
                    kpis: vec![],
                    deliverables: vec!["Positioning doc".to_owned()],
                    toolbox: vec![ToolRef {
                        name: "Notion".to_owned(),
                        url: "https://notion.so".to_owned(),
                    }],
                }],
            }],
        };

        let serialized = serde_json::to_string_pretty(&doc).expect("should serialize");
        let deserialized: PlanDocument =
            serde_json::from_str(&serialized).expect("should deserialize");
        assert_eq!(doc, deserialized);
    }

    #[test]
    fn rejects_non_object_document() {
        let result = serde_json::from_str::<PlanDocument>("[1, 2, 3]");
        assert!(result.is_err());
    }
}
