use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

// ============================================================================
// Semantic bundle — the output document of the annotation pipeline
// ============================================================================

/// Root aggregate written to `semantic.json`.
///
/// `regions`, `patterns`, and `warnings` are omitted from the JSON entirely
/// when nothing was detected, rather than emitted as empty arrays.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SemanticBundle {
    #[serde(rename = "semanticVersion")]
    pub semantic_version: String,

    /// Echo of the input bundle's `schemaVersion`.
    #[serde(rename = "sourceSchemaVersion")]
    pub source_schema_version: String,

    pub form: FormInfo,

    /// One annotation per normalized node, in normalization order.
    pub annotations: Vec<Annotation>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub regions: Option<Vec<SemanticRegion>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub patterns: Option<Vec<SemanticPattern>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub warnings: Option<Vec<String>>,
}

/// Form descriptor, same shape in the input dump and the semantic output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormInfo {
    #[serde(default)]
    pub name: String,

    #[serde(rename = "type", default)]
    pub form_type: String,

    #[serde(default)]
    pub width: i64,

    #[serde(default)]
    pub height: i64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub dpi: Option<i64>,
}

// ============================================================================
// Annotations
// ============================================================================

/// Semantic roles assigned to one node.
///
/// `roles` is kept sorted by descending confidence; downstream stages read
/// `roles[0]` as the working role without re-sorting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Annotation {
    #[serde(rename = "nodeId")]
    pub node_id: String,

    pub roles: Vec<RoleConfidence>,

    /// Reserved for future heuristics.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hints: Option<BTreeMap<String, serde_json::Value>>,

    /// Reserved for future heuristics.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl Annotation {
    pub fn new(node_id: impl Into<String>, role: RoleConfidence) -> Self {
        Self {
            node_id: node_id.into(),
            roles: vec![role],
            hints: None,
            tags: None,
        }
    }

    /// The working role under the descending-confidence convention.
    pub fn top_role(&self) -> Option<&RoleConfidence> {
        self.roles.first()
    }
}

/// One ranked role hypothesis with its justification trail.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleConfidence {
    pub role: String,

    /// Always within [0.0, 1.0].
    pub confidence: f64,

    #[serde(default)]
    pub evidence: Vec<Evidence>,
}

impl RoleConfidence {
    pub fn new(role: impl Into<String>, confidence: f64, evidence: Evidence) -> Self {
        Self {
            role: role.into(),
            confidence,
            evidence: vec![evidence],
        }
    }
}

// ============================================================================
// Evidence — structured in memory, a display string on the wire
// ============================================================================

/// A (code, detail) justification pair.
///
/// Kept structured so tests can match on `code` instead of substring-matching
/// display strings; serialized as `"<code>=<detail>"` at the document
/// boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evidence {
    pub code: String,
    pub detail: String,
}

impl Evidence {
    pub fn new(code: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            detail: detail.into(),
        }
    }

    /// Boundary rendering, e.g. `vendor.kind=GridControl`.
    pub fn rendered(&self) -> String {
        format!("{}={}", self.code, self.detail)
    }

    /// Inverse of `rendered`. Strings without a separator keep their full
    /// text as the detail under the `note` code.
    pub fn from_rendered(rendered: &str) -> Self {
        match rendered.split_once('=') {
            Some((code, detail)) => Evidence::new(code, detail),
            None => Evidence::new("note", rendered),
        }
    }
}

impl Serialize for Evidence {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.rendered())
    }
}

impl<'de> Deserialize<'de> for Evidence {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let rendered = String::deserialize(deserializer)?;
        Ok(Evidence::from_rendered(&rendered))
    }
}

// ============================================================================
// Regions and patterns
// ============================================================================

/// A coarse layout region inferred from node positions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SemanticRegion {
    pub name: String,

    pub bounds: SemanticRect,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,

    /// Ids of the nodes whose union bounds formed the region.
    #[serde(rename = "nodeIds", skip_serializing_if = "Option::is_none")]
    pub node_ids: Option<Vec<String>>,
}

/// Axis-aligned rectangle in form-space coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SemanticRect {
    pub x: i64,
    pub y: i64,
    pub w: i64,
    pub h: i64,
}

/// A detected multi-node interaction relationship.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SemanticPattern {
    pub name: String,

    pub confidence: f64,

    #[serde(rename = "nodeIds", skip_serializing_if = "Option::is_none")]
    pub node_ids: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub evidence: Option<Vec<Evidence>>,
}
