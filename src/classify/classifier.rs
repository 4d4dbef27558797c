use crate::classify::role_tables::RoleTables;
use crate::normalize::normalizer::NormalizedNode;
use crate::semantic::semantic_model::{Annotation, Evidence, RoleConfidence};

/// Role and confidence for nodes no table recognizes.
const UNKNOWN_ROLE: &str = "Unknown";
const UNKNOWN_CONFIDENCE: f64 = 0.10;

// ============================================================================
// Type role classifier — table-driven initial role per node
// ============================================================================

/// Assign one initial role to every normalized node.
///
/// Resolution order, first match wins: vendor-kind table, then the generic
/// widget-type table on the short type name, then `Unknown`. Always returns
/// exactly one annotation per input node.
pub fn classify(nodes: &[NormalizedNode], tables: &RoleTables) -> Vec<Annotation> {
    nodes.iter().map(|node| annotate(node, tables)).collect()
}

fn annotate(node: &NormalizedNode, tables: &RoleTables) -> Annotation {
    let vendor_match = node
        .vendor_kind
        .as_deref()
        .filter(|kind| !kind.is_empty())
        .and_then(|kind| {
            tables
                .vendor_role(kind)
                .map(|(role, confidence)| (kind, role, confidence))
        });

    let role = if let Some((kind, role, confidence)) = vendor_match {
        RoleConfidence::new(role, confidence, Evidence::new("vendor.kind", kind))
    } else if let Some((role, confidence)) = tables.widget_role(short_type_name(&node.node_type)) {
        RoleConfidence::new(role, confidence, Evidence::new("type", &node.node_type))
    } else {
        RoleConfidence::new(
            UNKNOWN_ROLE,
            UNKNOWN_CONFIDENCE,
            Evidence::new("type", &node.node_type),
        )
    };

    Annotation::new(&node.id, role)
}

/// Last `.`-separated segment of a fully-qualified type name.
pub fn short_type_name(full_type: &str) -> &str {
    full_type.rsplit('.').next().unwrap_or(full_type)
}
