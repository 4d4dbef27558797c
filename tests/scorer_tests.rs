use form_semantics::classify::classifier::classify;
use form_semantics::classify::role_tables::RoleTables;
use form_semantics::classify::scorer::score;
use form_semantics::semantic::semantic_model::{Annotation, Evidence, RoleConfidence};

use crate::common::builders::{action_annotation, annotation, normalized, normalized_with_text};

mod common;

// ============================================================================
// Text heuristic
// ============================================================================

#[test]
fn primary_keyword_bumps_confidence_by_increment() {
    let nodes = vec![normalized_with_text("ok", "System.Windows.Forms.Button", 600, 500, 80, 25, "OK")];
    let annotations = classify(&nodes, &RoleTables::builtin());

    let refined = score(&annotations, &nodes);

    let role = refined[0].top_role().unwrap();
    assert!((role.confidence - 0.98).abs() < 1e-9, "0.95 + 0.03 for a primary keyword");
    assert!(
        role.evidence.iter().any(|e| e.code == "text" && e.detail.contains("primary action keyword")),
        "Primary match is recorded as evidence"
    );
}

#[test]
fn confidence_bump_is_capped_at_one() {
    let annotations = vec![Annotation::new(
        "save",
        RoleConfidence::new("Action", 0.99, Evidence::new("type", "Button")),
    )];
    let nodes = vec![normalized_with_text("save", "Button", 10, 10, 80, 25, "Save")];

    let refined = score(&annotations, &nodes);

    assert!((refined[0].top_role().unwrap().confidence - 1.0).abs() < f64::EPSILON);
}

#[test]
fn plain_action_keyword_adds_evidence_without_bump() {
    let nodes = vec![normalized_with_text("c", "System.Windows.Forms.Button", 700, 500, 80, 25, "Cancel")];
    let annotations = classify(&nodes, &RoleTables::builtin());

    let refined = score(&annotations, &nodes);

    let role = refined[0].top_role().unwrap();
    assert!((role.confidence - 0.95).abs() < f64::EPSILON, "Cancel is not a primary keyword");
    assert!(
        role.evidence.iter().any(|e| e.code == "text" && e.detail.contains("matches action keyword")),
        "Keyword match still appends evidence"
    );
}

#[test]
fn keyword_match_ignores_case_and_surrounding_whitespace() {
    let nodes = vec![normalized_with_text("ok", "Button", 10, 10, 80, 25, "  ok  ")];
    let annotations = classify(&nodes, &RoleTables::builtin());

    let refined = score(&annotations, &nodes);

    assert!((refined[0].top_role().unwrap().confidence - 0.98).abs() < 1e-9);
}

#[test]
fn keyword_on_non_action_role_is_ignored() {
    let nodes = vec![normalized_with_text("l", "System.Windows.Forms.Label", 10, 10, 80, 25, "OK")];
    let annotations = classify(&nodes, &RoleTables::builtin());

    let refined = score(&annotations, &nodes);

    let role = refined[0].top_role().unwrap();
    assert_eq!(role.role, "Label");
    assert!((role.confidence - 0.90).abs() < f64::EPSILON, "Text heuristic only corroborates actions");
    assert!(!role.evidence.iter().any(|e| e.code == "text"));
}

#[test]
fn non_keyword_text_adds_nothing() {
    let nodes = vec![normalized_with_text("b", "Button", 10, 10, 80, 25, "Hello world")];
    let annotations = classify(&nodes, &RoleTables::builtin());

    let refined = score(&annotations, &nodes);

    assert!(!refined[0].top_role().unwrap().evidence.iter().any(|e| e.code == "text"));
}

// ============================================================================
// Layout heuristic
// ============================================================================

#[test]
fn compact_action_gets_bounds_evidence() {
    let nodes = vec![normalized("b", "System.Windows.Forms.Button", 300, 400, 80, 30)];
    let annotations = classify(&nodes, &RoleTables::builtin());

    let refined = score(&annotations, &nodes);

    let role = refined[0].top_role().unwrap();
    assert!(
        role.evidence.iter().any(|e| e.rendered() == "bounds=compact-button-region"),
        "Compact bounds in a positive position look like a pushbutton"
    );
    assert!((role.confidence - 0.95).abs() < f64::EPSILON, "Layout evidence does not change confidence");
}

#[test]
fn zero_position_gets_no_bounds_evidence() {
    let nodes = vec![normalized("b", "Button", 0, 0, 80, 30)];
    let annotations = classify(&nodes, &RoleTables::builtin());

    let refined = score(&annotations, &nodes);

    assert!(!refined[0].top_role().unwrap().evidence.iter().any(|e| e.code == "bounds"));
}

#[test]
fn oversized_action_gets_no_bounds_evidence() {
    let nodes = vec![normalized("wide", "Button", 10, 10, 300, 30)];
    let annotations = classify(&nodes, &RoleTables::builtin());

    let refined = score(&annotations, &nodes);

    assert!(!refined[0].top_role().unwrap().evidence.iter().any(|e| e.code == "bounds"));
}

// ============================================================================
// Purity and invariants
// ============================================================================

#[test]
fn score_returns_new_list_and_leaves_input_untouched() {
    let nodes = vec![normalized_with_text("ok", "Button", 600, 500, 80, 25, "OK")];
    let annotations = classify(&nodes, &RoleTables::builtin());
    let before_confidence = annotations[0].top_role().unwrap().confidence;
    let before_evidence = annotations[0].top_role().unwrap().evidence.len();

    let refined = score(&annotations, &nodes);

    assert!((annotations[0].top_role().unwrap().confidence - before_confidence).abs() < f64::EPSILON);
    assert_eq!(annotations[0].top_role().unwrap().evidence.len(), before_evidence);
    assert!(refined[0].top_role().unwrap().confidence > before_confidence);
}

#[test]
fn confidence_never_decreases() {
    let nodes = vec![
        normalized_with_text("ok", "Button", 600, 500, 80, 25, "OK"),
        normalized_with_text("cancel", "Button", 700, 500, 80, 25, "Cancel"),
        normalized("panel", "Panel", 0, 0, 800, 500),
        normalized("mystery", "Exotic.Widget", 5, 5, 10, 10),
    ];
    let annotations = classify(&nodes, &RoleTables::builtin());

    let refined = score(&annotations, &nodes);

    for (before, after) in annotations.iter().zip(&refined) {
        assert_eq!(before.roles.len(), after.roles.len(), "Roles are never added or removed");
        assert!(
            after.top_role().unwrap().confidence >= before.top_role().unwrap().confidence,
            "Heuristics only raise confidence"
        );
    }
}

#[test]
fn node_absent_from_map_passes_through_unchanged() {
    let annotations = vec![action_annotation("ghost", 0.95)];

    let refined = score(&annotations, &[]);

    assert_eq!(refined.len(), 1);
    assert_eq!(refined[0].node_id, "ghost");
    assert!((refined[0].top_role().unwrap().confidence - 0.95).abs() < f64::EPSILON);
}

#[test]
fn roles_are_resorted_by_descending_confidence() {
    // Mis-ordered multi-role input: the scorer must re-establish the
    // descending-confidence convention after adjusting.
    let mut multi = annotation("m", "Action", 0.90);
    multi.roles.push(RoleConfidence::new(
        "Label",
        0.95,
        Evidence::new("type", "test"),
    ));
    let nodes = vec![normalized("m", "Button", 10, 10, 500, 300)];

    let refined = score(&[multi], &nodes);

    let confidences: Vec<f64> = refined[0].roles.iter().map(|r| r.confidence).collect();
    assert_eq!(confidences, vec![0.95, 0.90], "roles[0] is the highest confidence after scoring");
    assert_eq!(refined[0].top_role().unwrap().role, "Label");
}
