use serde_json::Value;

use crate::pipeline::warnings::PipelineWarnings;
use crate::semantic::semantic_model::FormInfo;

// ============================================================================
// Typed intermediate representation of the captured UI dump
// ============================================================================

/// A parsed UI dump bundle, ready for normalization.
#[derive(Debug, Clone)]
pub struct UiDumpBundle {
    pub schema_version: String,
    pub form: FormInfo,
    pub nodes: Vec<UiNode>,
}

/// One captured widget with parent-relative bounds and child widgets.
///
/// Built from the raw JSON in a single pass with explicit default filling:
/// absent bounds fields become 0, absent `visible`/`enabled` become true,
/// absent `text` stays `None` (not an empty string).
#[derive(Debug, Clone)]
pub struct UiNode {
    pub id: String,
    pub node_type: String,
    pub name: String,
    pub text: Option<String>,
    pub visible: bool,
    pub enabled: bool,
    pub bounds: NodeBounds,
    pub vendor_kind: Option<String>,
    pub children: Vec<UiNode>,
}

/// Parent-relative rectangle as captured.
#[derive(Debug, Clone, Copy, Default)]
pub struct NodeBounds {
    pub x: i64,
    pub y: i64,
    pub w: i64,
    pub h: i64,
}

/// Convert a raw node array into typed nodes.
///
/// Non-object array members are skipped silently per the leniency policy;
/// each skip is recorded as a diagnostic, never an error.
pub fn parse_nodes(values: &[Value], warnings: &mut PipelineWarnings) -> Vec<UiNode> {
    let mut nodes = Vec::new();
    for value in values {
        match UiNode::from_value(value, warnings) {
            Some(node) => nodes.push(node),
            None => warnings.add_warning(
                "node-skipped",
                format!("non-object entry in node array: {}", json_kind(value)),
            ),
        }
    }
    nodes
}

impl UiNode {
    fn from_value(value: &Value, warnings: &mut PipelineWarnings) -> Option<UiNode> {
        let obj = value.as_object()?;

        let bounds_obj = obj.get("bounds").and_then(Value::as_object);
        let bound = |key: &str| {
            bounds_obj
                .and_then(|b| b.get(key))
                .and_then(Value::as_i64)
                .unwrap_or(0)
        };

        let children = obj
            .get("children")
            .and_then(Value::as_array)
            .map(|array| parse_nodes(array, warnings))
            .unwrap_or_default();

        Some(UiNode {
            id: string_field(obj, "id"),
            node_type: string_field(obj, "type"),
            name: string_field(obj, "name"),
            text: obj.get("text").and_then(Value::as_str).map(str::to_string),
            visible: obj.get("visible").and_then(Value::as_bool).unwrap_or(true),
            enabled: obj.get("enabled").and_then(Value::as_bool).unwrap_or(true),
            bounds: NodeBounds {
                x: bound("x"),
                y: bound("y"),
                w: bound("w"),
                h: bound("h"),
            },
            vendor_kind: vendor_kind_of(obj),
            children,
        })
    }
}

fn string_field(obj: &serde_json::Map<String, Value>, key: &str) -> String {
    obj.get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

/// Extract the vendor-specific classification hint.
///
/// `metadata` holds one object per vendor namespace; the hint is the first
/// namespace carrying a string `kind`.
fn vendor_kind_of(obj: &serde_json::Map<String, Value>) -> Option<String> {
    let metadata = obj.get("metadata")?.as_object()?;
    metadata.values().find_map(|namespace| {
        namespace
            .as_object()
            .and_then(|ns| ns.get("kind"))
            .and_then(Value::as_str)
            .map(str::to_string)
    })
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
