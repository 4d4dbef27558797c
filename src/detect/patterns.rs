use crate::semantic::semantic_model::{Annotation, Evidence, SemanticPattern};

const PRIMARY_SECONDARY_CONFIDENCE: f64 = 0.75;

// ============================================================================
// Pattern detection — cross-node interaction relationships
// ============================================================================

/// Detect multi-node interaction patterns from the refined annotations.
///
/// Annotations arrive with roles sorted by descending confidence, so the
/// top role is the working role. Read-only; fewer than two action-role
/// annotations yields no pattern.
pub fn detect_patterns(annotations: &[Annotation]) -> Vec<SemanticPattern> {
    let mut patterns = Vec::new();

    let action_candidates: Vec<(&str, f64)> = annotations
        .iter()
        .filter_map(|annotation| {
            annotation
                .top_role()
                .filter(|role| role.role == "Action")
                .map(|role| (annotation.node_id.as_str(), role.confidence))
        })
        .collect();

    if action_candidates.len() >= 2 {
        let primary = highest_confidence(&action_candidates, None);
        let secondary =
            primary.and_then(|(primary_id, _)| highest_confidence(&action_candidates, Some(primary_id)));

        // The pair must reference two distinct node ids
        if let (Some((primary_id, _)), Some((secondary_id, _))) = (primary, secondary) {
            patterns.push(SemanticPattern {
                name: "PrimarySecondaryActions".to_string(),
                confidence: PRIMARY_SECONDARY_CONFIDENCE,
                node_ids: Some(vec![primary_id.to_string(), secondary_id.to_string()]),
                evidence: Some(vec![Evidence::new(
                    "actions",
                    format!("{} action-role candidates", action_candidates.len()),
                )]),
            });
        }
    }

    patterns
}

/// Highest-confidence candidate, ties broken by input order. Candidates
/// sharing the excluded node id are skipped.
fn highest_confidence<'a>(
    candidates: &[(&'a str, f64)],
    exclude_id: Option<&str>,
) -> Option<(&'a str, f64)> {
    let mut best: Option<(&str, f64)> = None;
    for (node_id, confidence) in candidates {
        if exclude_id == Some(*node_id) {
            continue;
        }
        let is_better = match best {
            Some((_, best_confidence)) => *confidence > best_confidence,
            None => true,
        };
        if is_better {
            best = Some((*node_id, *confidence));
        }
    }
    best
}
