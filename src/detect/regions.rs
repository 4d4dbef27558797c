use crate::normalize::normalizer::NormalizedNode;
use crate::semantic::semantic_model::{SemanticRect, SemanticRegion};

const ACTION_BAR_CONFIDENCE: f64 = 0.75;
const CONTENT_AREA_CONFIDENCE: f64 = 0.80;

// Action bar candidates: short nodes in the bottom fifth of the form.
const ACTION_BAR_MAX_HEIGHT: i64 = 50;
const ACTION_BAR_MIN_Y_RATIO: f64 = 0.8;

// Content area candidates must span most of the form.
const CONTENT_MIN_WIDTH_RATIO: f64 = 0.5;
const CONTENT_MIN_HEIGHT_RATIO: f64 = 0.3;

// ============================================================================
// Region detection — coarse layout structure from node positions
// ============================================================================

/// Detect layout regions from the normalized node set.
///
/// Read-only over its input; empty input yields empty output.
pub fn detect_regions(
    nodes: &[NormalizedNode],
    form_width: i64,
    form_height: i64,
) -> Vec<SemanticRegion> {
    let mut regions = Vec::new();
    if nodes.is_empty() {
        return regions;
    }

    if let Some(action_bar) = detect_action_bar(nodes, form_height) {
        regions.push(action_bar);
    }
    if let Some(content_area) = detect_content_area(nodes, form_width, form_height) {
        regions.push(content_area);
    }

    regions
}

/// Bottom strip holding the form's action buttons. Bounds are the union of
/// all candidate rectangles.
fn detect_action_bar(nodes: &[NormalizedNode], form_height: i64) -> Option<SemanticRegion> {
    let threshold_y = form_height as f64 * ACTION_BAR_MIN_Y_RATIO;
    let candidates: Vec<&NormalizedNode> = nodes
        .iter()
        .filter(|node| node.h <= ACTION_BAR_MAX_HEIGHT && node.abs_y as f64 > threshold_y)
        .collect();

    let first = candidates.first()?;

    let mut min_x = first.abs_x;
    let mut min_y = first.abs_y;
    let mut max_x = first.abs_x + first.w;
    let mut max_y = first.abs_y + first.h;
    for node in &candidates[1..] {
        min_x = min_x.min(node.abs_x);
        min_y = min_y.min(node.abs_y);
        max_x = max_x.max(node.abs_x + node.w);
        max_y = max_y.max(node.abs_y + node.h);
    }

    Some(SemanticRegion {
        name: "ActionBar".to_string(),
        bounds: SemanticRect {
            x: min_x,
            y: min_y,
            w: max_x - min_x,
            h: max_y - min_y,
        },
        confidence: Some(ACTION_BAR_CONFIDENCE),
        node_ids: Some(candidates.iter().map(|node| node.id.clone()).collect()),
    })
}

/// Single largest node spanning most of the form. Ties break in input order;
/// the first encountered wins.
fn detect_content_area(
    nodes: &[NormalizedNode],
    form_width: i64,
    form_height: i64,
) -> Option<SemanticRegion> {
    let min_w = form_width as f64 * CONTENT_MIN_WIDTH_RATIO;
    let min_h = form_height as f64 * CONTENT_MIN_HEIGHT_RATIO;

    let mut best: Option<&NormalizedNode> = None;
    for node in nodes {
        if node.w as f64 > min_w && node.h as f64 > min_h {
            let is_larger = match best {
                Some(current) => node.w * node.h > current.w * current.h,
                None => true,
            };
            if is_larger {
                best = Some(node);
            }
        }
    }

    let content = best?;
    Some(SemanticRegion {
        name: "ContentArea".to_string(),
        bounds: SemanticRect {
            x: content.abs_x,
            y: content.abs_y,
            w: content.w,
            h: content.h,
        },
        confidence: Some(CONTENT_AREA_CONFIDENCE),
        node_ids: Some(vec![content.id.clone()]),
    })
}
