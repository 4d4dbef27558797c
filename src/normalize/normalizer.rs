use crate::bundle::dump_model::UiNode;

// ============================================================================
// Tree normalizer — absolute bounds + depth-first flattening
// ============================================================================

/// One node with form-space absolute coordinates, ready for classification.
/// Created once here; immutable afterward.
#[derive(Debug, Clone)]
pub struct NormalizedNode {
    pub id: String,
    pub node_type: String,
    pub name: String,
    pub text: Option<String>,
    pub visible: bool,
    pub enabled: bool,
    pub abs_x: i64,
    pub abs_y: i64,
    pub w: i64,
    pub h: i64,
    pub vendor_kind: Option<String>,
}

/// Flatten a node tree into depth-first order, resolving parent-relative
/// bounds into absolute form-space coordinates.
pub fn normalize(nodes: &[UiNode]) -> Vec<NormalizedNode> {
    let mut flattened = Vec::new();
    walk(nodes, 0, 0, &mut flattened);
    flattened
}

fn walk(nodes: &[UiNode], parent_x: i64, parent_y: i64, out: &mut Vec<NormalizedNode>) {
    for node in nodes {
        let abs_x = parent_x + node.bounds.x;
        let abs_y = parent_y + node.bounds.y;

        out.push(NormalizedNode {
            id: node.id.clone(),
            node_type: node.node_type.clone(),
            name: node.name.clone(),
            text: node.text.clone(),
            visible: node.visible,
            enabled: node.enabled,
            abs_x,
            abs_y,
            w: node.bounds.w,
            h: node.bounds.h,
            vendor_kind: node.vendor_kind.clone(),
        });

        // Children resolve against this node's computed absolute position,
        // not its relative one.
        walk(&node.children, abs_x, abs_y, out);
    }
}
