use std::collections::BTreeMap;

use clap::Parser;
use serde::{Deserialize, Serialize};

use crate::classify::role_tables::RoleTables;

// ============================================================================
// CLI Argument Parsing (clap derive)
// ============================================================================

#[derive(Parser, Debug)]
#[command(
    name = "form-semantics",
    version,
    about = "Semantic role annotation for captured UI form dumps"
)]
pub struct Cli {
    /// Path to the captured UI dump bundle (form.json)
    pub input: String,

    /// Output directory for semantic.json (default: the input file's directory)
    pub output_dir: Option<String>,

    /// Accept bundles whose schema MAJOR version is higher than this consumer's
    #[arg(long)]
    pub allow_higher_major: bool,

    /// Append a JSONL trace of pipeline stages to this file
    #[arg(long)]
    pub trace: Option<String>,

    /// Path to config file (default: form-semantics.yaml in current dir)
    #[arg(long)]
    pub config: Option<String>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

// ============================================================================
// Config File Model (optional YAML)
// ============================================================================

/// Optional YAML config file: `form-semantics.yaml`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub tables: TableConfig,
    #[serde(default)]
    pub bundle: BundleConfig,
    #[serde(default)]
    pub trace: TraceConfig,
}

/// Role-table extensions; entries add to or override the builtin data.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TableConfig {
    #[serde(default)]
    pub vendor_kinds: BTreeMap<String, RoleEntry>,

    #[serde(default)]
    pub widget_types: BTreeMap<String, RoleEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleEntry {
    pub role: String,
    pub confidence: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct BundleConfig {
    #[serde(default)]
    pub allow_higher_major: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TraceConfig {
    pub path: Option<String>,
}

// ============================================================================
// Config File Loading
// ============================================================================

/// Load config from a YAML file. Returns defaults if file is missing or malformed.
pub fn load_config(path: Option<&str>) -> AppConfig {
    let config_path = path.unwrap_or("form-semantics.yaml");
    match std::fs::read_to_string(config_path) {
        Ok(content) => serde_yaml::from_str(&content).unwrap_or_default(),
        Err(_) => AppConfig::default(),
    }
}

/// Assemble the role tables: builtin data plus config extensions.
pub fn build_role_tables(config: &AppConfig) -> RoleTables {
    let mut tables = RoleTables::builtin();
    for (kind, entry) in &config.tables.vendor_kinds {
        tables.extend_vendor(kind, &entry.role, entry.confidence);
    }
    for (short_type, entry) in &config.tables.widget_types {
        tables.extend_widget(short_type, &entry.role, entry.confidence);
    }
    tables
}
