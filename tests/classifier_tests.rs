use form_semantics::classify::classifier::{classify, short_type_name};
use form_semantics::classify::role_tables::RoleTables;

use crate::common::builders::{normalized, with_vendor_kind_normalized};

mod common;

// ============================================================================
// Resolution order: vendor kind, then widget type, then Unknown
// ============================================================================

#[test]
fn button_type_classifies_as_action() {
    let nodes = vec![normalized("b1", "System.Windows.Forms.Button", 0, 0, 80, 25)];

    let annotations = classify(&nodes, &RoleTables::builtin());

    let role = annotations[0].top_role().expect("role assigned");
    assert_eq!(role.role, "Action");
    assert!(role.confidence >= 0.90, "Button is a high-confidence type");
    assert_eq!(role.evidence[0].code, "type");
    assert_eq!(
        role.evidence[0].rendered(),
        "type=System.Windows.Forms.Button",
        "Evidence carries the full type name"
    );
}

#[test]
fn vendor_kind_takes_precedence_over_widget_type() {
    let node = with_vendor_kind_normalized(
        normalized("g1", "System.Windows.Forms.Button", 0, 0, 400, 300),
        "GridControl",
    );

    let annotations = classify(&[node], &RoleTables::builtin());

    let role = annotations[0].top_role().expect("role assigned");
    assert_eq!(role.role, "DataGrid", "Vendor table wins over the type table");
    assert!(role.confidence >= 0.90);
    assert_eq!(role.evidence[0].code, "vendor.kind");
    assert!(
        role.evidence[0].rendered().contains("GridControl"),
        "Evidence names the vendor kind"
    );
}

#[test]
fn unrecognized_vendor_kind_falls_back_to_type_table() {
    let node = with_vendor_kind_normalized(
        normalized("w1", "App.Controls.Button", 0, 0, 80, 25),
        "FancySlider",
    );

    let annotations = classify(&[node], &RoleTables::builtin());

    let role = annotations[0].top_role().expect("role assigned");
    assert_eq!(role.role, "Action", "Vendor miss is not an error");
    assert_eq!(role.evidence[0].code, "type");
}

#[test]
fn unmatched_type_classifies_as_unknown() {
    let nodes = vec![normalized("x1", "ThirdParty.Exotic.Widget", 0, 0, 10, 10)];

    let annotations = classify(&nodes, &RoleTables::builtin());

    let role = annotations[0].top_role().expect("role assigned");
    assert_eq!(role.role, "Unknown");
    assert!((role.confidence - 0.10).abs() < f64::EPSILON);
    assert_eq!(role.evidence[0].rendered(), "type=ThirdParty.Exotic.Widget");
}

#[test]
fn lookups_are_case_insensitive() {
    let nodes = vec![
        normalized("a", "Some.Namespace.BUTTON", 0, 0, 10, 10),
        with_vendor_kind_normalized(normalized("b", "X", 0, 0, 10, 10), "gridcontrol"),
    ];

    let annotations = classify(&nodes, &RoleTables::builtin());

    assert_eq!(annotations[0].top_role().unwrap().role, "Action");
    assert_eq!(annotations[1].top_role().unwrap().role, "DataGrid");
}

#[test]
fn unqualified_type_names_match_directly() {
    let nodes = vec![normalized("f", "Form", 0, 0, 800, 600)];

    let annotations = classify(&nodes, &RoleTables::builtin());

    let role = annotations[0].top_role().unwrap();
    assert_eq!(role.role, "FormRoot");
    assert!(role.confidence >= 0.99, "The form root type is unambiguous");
}

// ============================================================================
// Structural invariants
// ============================================================================

#[test]
fn every_node_gets_exactly_one_annotation() {
    let nodes = vec![
        normalized("a", "System.Windows.Forms.Button", 0, 0, 10, 10),
        normalized("b", "NoSuch.Type", 0, 0, 10, 10),
        normalized("c", "", 0, 0, 0, 0),
        normalized("d", "System.Windows.Forms.Panel", 0, 0, 10, 10),
    ];

    let annotations = classify(&nodes, &RoleTables::builtin());

    assert_eq!(annotations.len(), nodes.len(), "Cardinality is 1:1, Unknown included");
    for (node, annotation) in nodes.iter().zip(&annotations) {
        assert_eq!(annotation.node_id, node.id);
        assert_eq!(annotation.roles.len(), 1, "Classifier assigns exactly one role");
    }
}

#[test]
fn classifier_confidences_are_in_range_and_evidence_nonempty() {
    let nodes = vec![
        normalized("a", "System.Windows.Forms.Button", 0, 0, 10, 10),
        normalized("b", "System.Windows.Forms.Panel", 0, 0, 10, 10),
        normalized("c", "Mystery.Widget", 0, 0, 10, 10),
        with_vendor_kind_normalized(normalized("d", "X", 0, 0, 10, 10), "RibbonControl"),
    ];

    for annotation in classify(&nodes, &RoleTables::builtin()) {
        for role in &annotation.roles {
            assert!((0.0..=1.0).contains(&role.confidence), "Confidence in [0,1]");
            assert!(!role.evidence.is_empty(), "Classifier roles always carry evidence");
        }
    }
}

#[test]
fn short_type_name_takes_last_path_segment() {
    assert_eq!(short_type_name("System.Windows.Forms.Button"), "Button");
    assert_eq!(short_type_name("Button"), "Button");
    assert_eq!(short_type_name(""), "");
}

// ============================================================================
// Table extension
// ============================================================================

#[test]
fn tables_accept_new_entries() {
    let mut tables = RoleTables::builtin();
    tables.extend_vendor("SchedulerControl", "Scheduler", 0.92);
    tables.extend_widget("TrackBar", "SliderInput", 0.85);

    let nodes = vec![
        with_vendor_kind_normalized(normalized("s", "X", 0, 0, 10, 10), "SchedulerControl"),
        normalized("t", "System.Windows.Forms.TrackBar", 0, 0, 10, 10),
    ];

    let annotations = classify(&nodes, &tables);

    assert_eq!(annotations[0].top_role().unwrap().role, "Scheduler");
    assert_eq!(annotations[1].top_role().unwrap().role, "SliderInput");
}

#[test]
fn table_overrides_replace_builtin_entries() {
    let mut tables = RoleTables::builtin();
    tables.extend_widget("panel", "CustomContainer", 0.72);

    let nodes = vec![normalized("p", "System.Windows.Forms.Panel", 0, 0, 10, 10)];
    let annotations = classify(&nodes, &tables);

    let role = annotations[0].top_role().unwrap();
    assert_eq!(role.role, "CustomContainer", "Same-key entry is replaced, not shadowed");
    assert!((role.confidence - 0.72).abs() < f64::EPSILON);
}
