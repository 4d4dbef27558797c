use std::path::{Path, PathBuf};

use crate::bundle::reader::read_bundle_text;
use crate::bundle::writer::write_bundle;
use crate::cli::config::{AppConfig, Cli, build_role_tables};
use crate::pipeline::error::SemanticError;
use crate::pipeline::warnings::PipelineWarnings;
use crate::run_pipeline;
use crate::trace::logger::TraceLogger;
use crate::trace::trace::{TraceEvent, input_digest};

// ============================================================================
// annotate — the single pipeline run
// ============================================================================

/// Read a UI dump bundle, run the annotation pipeline, and write
/// `semantic.json`. Returns the output path.
pub fn cmd_annotate(cli: &Cli, config: &AppConfig) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let input_path = Path::new(&cli.input);
    let output_dir = resolve_output_dir(input_path, cli.output_dir.as_deref());
    let allow_higher_major = cli.allow_higher_major || config.bundle.allow_higher_major;

    let tracer = match cli.trace.as_deref().or(config.trace.path.as_deref()) {
        Some(path) => TraceLogger::new(path),
        None => TraceLogger::disabled(),
    };

    if cli.verbose > 0 {
        eprintln!("Annotating {}...", cli.input);
    }

    let text = std::fs::read_to_string(input_path).map_err(|source| SemanticError::BundleRead {
        path: input_path.display().to_string(),
        source,
    })?;
    tracer.log(&TraceEvent::now("read").with_digest(input_digest(&text)));

    let mut warnings = PipelineWarnings::new();
    let dump = read_bundle_text(&text, allow_higher_major, &mut warnings)?;

    let tables = build_role_tables(config);
    let semantic = run_pipeline(&dump, &tables, &mut warnings, &tracer);

    if cli.verbose > 0 {
        eprintln!(
            "  {} annotations, {} regions, {} patterns, {} warnings",
            semantic.annotations.len(),
            semantic.regions.as_ref().map_or(0, Vec::len),
            semantic.patterns.as_ref().map_or(0, Vec::len),
            warnings.len()
        );
        if cli.verbose > 1 {
            for warning in warnings.items() {
                eprintln!("  {}", warning);
            }
        }
    }

    let output_path = write_bundle(&semantic, &output_dir)?;
    tracer.log(
        &TraceEvent::now("write")
            .with_annotation_count(semantic.annotations.len())
            .with_warning_count(warnings.len())
            .with_detail(output_path.display().to_string()),
    );

    Ok(output_path)
}

/// Default the output directory to the input file's parent.
fn resolve_output_dir(input_path: &Path, output_dir: Option<&str>) -> PathBuf {
    match output_dir {
        Some(dir) => PathBuf::from(dir),
        None => {
            let parent = input_path.parent().unwrap_or(Path::new("."));
            if parent.as_os_str().is_empty() {
                PathBuf::from(".")
            } else {
                parent.to_path_buf()
            }
        }
    }
}
