use std::fs;
use std::path::{Path, PathBuf};

use crate::pipeline::error::SemanticError;
use crate::semantic::semantic_model::SemanticBundle;

/// File name of the output document inside the output directory.
pub const OUTPUT_FILE_NAME: &str = "semantic.json";

// ============================================================================
// Semantic bundle writer
// ============================================================================

/// Write the bundle as pretty-printed `semantic.json` in the given directory,
/// creating the directory if needed. Returns the output path.
pub fn write_bundle(
    bundle: &SemanticBundle,
    output_directory: &Path,
) -> Result<PathBuf, SemanticError> {
    fs::create_dir_all(output_directory).map_err(|source| SemanticError::BundleWrite {
        path: output_directory.display().to_string(),
        source,
    })?;

    let json =
        serde_json::to_string_pretty(bundle).map_err(|source| SemanticError::JsonSerialize {
            context: "semantic bundle".to_string(),
            source,
        })?;

    let output_path = output_directory.join(OUTPUT_FILE_NAME);
    fs::write(&output_path, json).map_err(|source| SemanticError::BundleWrite {
        path: output_path.display().to_string(),
        source,
    })?;

    Ok(output_path)
}
