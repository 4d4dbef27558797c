use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::bundle::dump_model::{UiDumpBundle, parse_nodes};
use crate::bundle::version;
use crate::pipeline::error::SemanticError;
use crate::pipeline::warnings::PipelineWarnings;
use crate::semantic::semantic_model::FormInfo;

// ============================================================================
// UI dump bundle reader
// ============================================================================

/// Read and parse a UI dump bundle from `form.json`.
pub fn read_bundle_file(
    path: &Path,
    allow_higher_major: bool,
    warnings: &mut PipelineWarnings,
) -> Result<UiDumpBundle, SemanticError> {
    let text = fs::read_to_string(path).map_err(|source| SemanticError::BundleRead {
        path: path.display().to_string(),
        source,
    })?;
    read_bundle_text(&text, allow_higher_major, warnings)
}

/// Parse bundle JSON text into the typed representation.
///
/// Fails fast when `form` is absent; a missing `schemaVersion` defaults to
/// the current version, and a missing `nodes` array yields an empty tree.
pub fn read_bundle_text(
    text: &str,
    allow_higher_major: bool,
    warnings: &mut PipelineWarnings,
) -> Result<UiDumpBundle, SemanticError> {
    if text.trim().is_empty() {
        return Err(SemanticError::EmptyBundle);
    }

    let root: Value = serde_json::from_str(text).map_err(|source| SemanticError::JsonParse {
        context: "ui dump bundle".to_string(),
        source,
    })?;
    let root_obj = root
        .as_object()
        .ok_or_else(|| SemanticError::MissingField("form".to_string()))?;

    let schema_version = root_obj
        .get("schemaVersion")
        .and_then(Value::as_str)
        .unwrap_or(version::CURRENT_SCHEMA_VERSION)
        .to_string();
    version::check(&schema_version, allow_higher_major)?;

    let form_value = root_obj
        .get("form")
        .ok_or_else(|| SemanticError::MissingField("form".to_string()))?;
    let form: FormInfo =
        serde_json::from_value(form_value.clone()).map_err(|source| SemanticError::JsonParse {
            context: "form descriptor".to_string(),
            source,
        })?;

    let nodes = match root_obj.get("nodes").and_then(Value::as_array) {
        Some(array) => parse_nodes(array, warnings),
        None => Vec::new(),
    };

    Ok(UiDumpBundle {
        schema_version,
        form,
        nodes,
    })
}
