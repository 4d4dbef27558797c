use std::fmt;

// ============================================================================
// Pipeline diagnostics — non-fatal conditions collected during a run
// ============================================================================

/// Severity of a pipeline diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningSeverity {
    Info,
    Warning,
    Error,
}

impl fmt::Display for WarningSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WarningSeverity::Info => write!(f, "Info"),
            WarningSeverity::Warning => write!(f, "Warning"),
            WarningSeverity::Error => write!(f, "Error"),
        }
    }
}

/// Single diagnostic entry with a stable code and a human-readable message.
#[derive(Debug, Clone)]
pub struct PipelineWarning {
    pub severity: WarningSeverity,
    pub code: String,
    pub message: String,
}

impl fmt::Display for PipelineWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.severity, self.code, self.message)
    }
}

/// Accumulates diagnostics across pipeline stages.
///
/// Stages degrade gracefully and record what they skipped or found suspect
/// rather than failing the run.
#[derive(Debug, Default)]
pub struct PipelineWarnings {
    items: Vec<PipelineWarning>,
    has_errors: bool,
}

impl PipelineWarnings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_info(&mut self, code: &str, message: impl Into<String>) {
        self.push(WarningSeverity::Info, code, message);
    }

    pub fn add_warning(&mut self, code: &str, message: impl Into<String>) {
        self.push(WarningSeverity::Warning, code, message);
    }

    pub fn add_error(&mut self, code: &str, message: impl Into<String>) {
        self.push(WarningSeverity::Error, code, message);
        self.has_errors = true;
    }

    fn push(&mut self, severity: WarningSeverity, code: &str, message: impl Into<String>) {
        self.items.push(PipelineWarning {
            severity,
            code: code.to_string(),
            message: message.into(),
        });
    }

    pub fn items(&self) -> &[PipelineWarning] {
        &self.items
    }

    pub fn has_errors(&self) -> bool {
        self.has_errors
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Display strings for the output bundle's `warnings` list.
    pub fn to_string_list(&self) -> Vec<String> {
        self.items.iter().map(|w| w.to_string()).collect()
    }
}
