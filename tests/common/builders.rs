use form_semantics::bundle::dump_model::{NodeBounds, UiNode};
use form_semantics::normalize::normalizer::NormalizedNode;
use form_semantics::semantic::semantic_model::{Annotation, Evidence, RoleConfidence};

// ============================================================================
// Shared test builders
// ============================================================================

/// A visible, enabled dump node with no text, children, or vendor hint.
pub fn ui_node(id: &str, node_type: &str, x: i64, y: i64, w: i64, h: i64) -> UiNode {
    UiNode {
        id: id.to_string(),
        node_type: node_type.to_string(),
        name: id.to_string(),
        text: None,
        visible: true,
        enabled: true,
        bounds: NodeBounds { x, y, w, h },
        vendor_kind: None,
        children: Vec::new(),
    }
}

pub fn with_children(mut node: UiNode, children: Vec<UiNode>) -> UiNode {
    node.children = children;
    node
}

pub fn with_text(mut node: UiNode, text: &str) -> UiNode {
    node.text = Some(text.to_string());
    node
}

pub fn with_vendor_kind(mut node: UiNode, kind: &str) -> UiNode {
    node.vendor_kind = Some(kind.to_string());
    node
}

/// A normalized node at an absolute position.
pub fn normalized(id: &str, node_type: &str, abs_x: i64, abs_y: i64, w: i64, h: i64) -> NormalizedNode {
    NormalizedNode {
        id: id.to_string(),
        node_type: node_type.to_string(),
        name: id.to_string(),
        text: None,
        visible: true,
        enabled: true,
        abs_x,
        abs_y,
        w,
        h,
        vendor_kind: None,
    }
}

pub fn with_vendor_kind_normalized(mut node: NormalizedNode, kind: &str) -> NormalizedNode {
    node.vendor_kind = Some(kind.to_string());
    node
}

pub fn normalized_with_text(
    id: &str,
    node_type: &str,
    abs_x: i64,
    abs_y: i64,
    w: i64,
    h: i64,
    text: &str,
) -> NormalizedNode {
    let mut node = normalized(id, node_type, abs_x, abs_y, w, h);
    node.text = Some(text.to_string());
    node
}

/// An annotation with a single role, the way the classifier emits them.
pub fn annotation(node_id: &str, role: &str, confidence: f64) -> Annotation {
    Annotation::new(
        node_id,
        RoleConfidence::new(role, confidence, Evidence::new("type", "test")),
    )
}

pub fn action_annotation(node_id: &str, confidence: f64) -> Annotation {
    annotation(node_id, "Action", confidence)
}
