use std::cmp::Ordering;
use std::collections::HashMap;

use crate::normalize::normalizer::NormalizedNode;
use crate::semantic::semantic_model::{Annotation, Evidence};

// Text content associated with action buttons.
const ACTION_KEYWORDS: &[&str] = &[
    "OK", "Cancel", "Save", "Close", "Submit", "Apply", "Delete", "Add", "Remove", "Edit", "New",
    "Open", "Exit", "Yes", "No", "Next", "Back", "Finish", "Refresh", "Search", "Find", "Export",
    "Import", "Print", "Help",
];

// Affirmative/confirming subset that marks the likely primary action.
const PRIMARY_ACTION_KEYWORDS: &[&str] = &["OK", "Save", "Submit", "Apply", "Finish", "Next"];

const PRIMARY_CONFIDENCE_BOOST: f64 = 0.03;

// Compact-bounds thresholds for typical pushbuttons.
const BUTTON_MAX_HEIGHT: i64 = 40;
const BUTTON_MAX_WIDTH: i64 = 200;

// ============================================================================
// Heuristic role scorer — corroborating text and layout evidence
// ============================================================================

/// Refine classifier output with text and layout heuristics.
///
/// Pure transform: returns a new annotation list, leaving the input
/// untouched. Roles are never changed and confidence never drops below its
/// classifier-assigned floor; heuristics only append evidence and nudge
/// confidence upward. Roles are re-sorted by descending confidence after any
/// adjustment so `roles[0]` stays authoritative.
pub fn score(annotations: &[Annotation], nodes: &[NormalizedNode]) -> Vec<Annotation> {
    let node_map: HashMap<&str, &NormalizedNode> =
        nodes.iter().map(|node| (node.id.as_str(), node)).collect();

    annotations
        .iter()
        .map(|annotation| match node_map.get(annotation.node_id.as_str()) {
            Some(node) => rescore(annotation, node),
            // Defensive: classification guarantees a matching node exists
            None => annotation.clone(),
        })
        .collect()
}

fn rescore(annotation: &Annotation, node: &NormalizedNode) -> Annotation {
    let mut refined = annotation.clone();
    apply_text_heuristic(&mut refined, node);
    apply_layout_heuristic(&mut refined, node);
    refined.roles.sort_by(|a, b| {
        b.confidence
            .partial_cmp(&a.confidence)
            .unwrap_or(Ordering::Equal)
    });
    refined
}

fn apply_text_heuristic(annotation: &mut Annotation, node: &NormalizedNode) {
    let Some(text) = node.text.as_deref().map(str::trim) else {
        return;
    };
    if text.is_empty() {
        return;
    }

    let Some(role) = annotation.roles.first_mut() else {
        return;
    };
    if role.role != "Action" || !matches_keyword(ACTION_KEYWORDS, text) {
        return;
    }

    if matches_keyword(PRIMARY_ACTION_KEYWORDS, text) {
        role.confidence = (role.confidence + PRIMARY_CONFIDENCE_BOOST).min(1.0);
        role.evidence.push(Evidence::new(
            "text",
            format!("'{}' matches primary action keyword", text),
        ));
    } else {
        role.evidence.push(Evidence::new(
            "text",
            format!("'{}' matches action keyword", text),
        ));
    }
}

fn apply_layout_heuristic(annotation: &mut Annotation, node: &NormalizedNode) {
    // Compact nodes below the form origin line tend to be pushbuttons
    if node.w <= 0 || node.h <= 0 || node.abs_y <= 0 {
        return;
    }

    let Some(role) = annotation.roles.first_mut() else {
        return;
    };
    if role.role == "Action" && node.h <= BUTTON_MAX_HEIGHT && node.w <= BUTTON_MAX_WIDTH {
        role.evidence
            .push(Evidence::new("bounds", "compact-button-region"));
    }
}

fn matches_keyword(keywords: &[&str], text: &str) -> bool {
    keywords
        .iter()
        .any(|keyword| keyword.eq_ignore_ascii_case(text))
}
