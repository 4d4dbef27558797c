use crate::{
    bundle::dump_model::UiDumpBundle,
    classify::{classifier::classify, role_tables::RoleTables, scorer::score},
    detect::{patterns::detect_patterns, regions::detect_regions},
    normalize::normalizer::{NormalizedNode, normalize},
    pipeline::warnings::PipelineWarnings,
    semantic::semantic_model::{Annotation, SemanticBundle, SemanticPattern, SemanticRegion},
    trace::{logger::TraceLogger, trace::TraceEvent},
};

pub mod bundle;
pub mod classify;
pub mod cli;
pub mod detect;
pub mod normalize;
pub mod pipeline;
pub mod semantic;
pub mod trace;

/// Version of the semantic bundle document this pipeline emits.
pub const SEMANTIC_VERSION: &str = "1.0";

/// Run the full annotation pipeline over a parsed dump bundle.
///
/// Normalize, classify, refine, detect, assemble. Every node gets exactly
/// one annotation; lenient conditions accumulate as warnings instead of
/// failing the run.
pub fn run_pipeline(
    dump: &UiDumpBundle,
    tables: &RoleTables,
    warnings: &mut PipelineWarnings,
    tracer: &TraceLogger,
) -> SemanticBundle {
    let normalized = normalize(&dump.nodes);
    check_node_ids(&normalized, warnings);
    tracer.log(&TraceEvent::now("normalize").with_node_count(normalized.len()));

    let annotations = classify(&normalized, tables);
    let annotations = score(&annotations, &normalized);
    tracer.log(&TraceEvent::now("classify").with_annotation_count(annotations.len()));

    let regions = detect_regions(&normalized, dump.form.width, dump.form.height);
    let patterns = detect_patterns(&annotations);
    tracer.log(
        &TraceEvent::now("detect")
            .with_region_count(regions.len())
            .with_pattern_count(patterns.len()),
    );

    assemble(dump, annotations, regions, patterns, warnings)
}

/// Combine pipeline outputs into the semantic bundle document. Empty
/// region/pattern/warning lists are omitted, not emitted as empty arrays.
pub fn assemble(
    dump: &UiDumpBundle,
    annotations: Vec<Annotation>,
    regions: Vec<SemanticRegion>,
    patterns: Vec<SemanticPattern>,
    warnings: &PipelineWarnings,
) -> SemanticBundle {
    SemanticBundle {
        semantic_version: SEMANTIC_VERSION.to_string(),
        source_schema_version: dump.schema_version.clone(),
        form: dump.form.clone(),
        annotations,
        regions: if regions.is_empty() {
            None
        } else {
            Some(regions)
        },
        patterns: if patterns.is_empty() {
            None
        } else {
            Some(patterns)
        },
        warnings: if warnings.is_empty() {
            None
        } else {
            Some(warnings.to_string_list())
        },
    }
}

/// Node ids are expected unique and non-empty; annotation and detection
/// join on them. Violations degrade to diagnostics.
fn check_node_ids(nodes: &[NormalizedNode], warnings: &mut PipelineWarnings) {
    let mut seen = std::collections::HashSet::new();
    for node in nodes {
        if node.id.is_empty() {
            warnings.add_warning(
                "node-id-empty",
                format!("node of type '{}' has no id", node.node_type),
            );
        } else if !seen.insert(node.id.as_str()) {
            warnings.add_warning(
                "node-id-duplicate",
                format!("node id '{}' appears more than once", node.id),
            );
        }
    }
}
