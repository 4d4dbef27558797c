use serde::Serialize;
use sha1::{Digest, Sha1};
use std::time::{SystemTime, UNIX_EPOCH};

// ============================================================================
// Trace events — one JSONL record per pipeline stage
// ============================================================================

#[derive(Debug, Serialize)]
pub struct TraceEvent {
    pub timestamp_ms: u128,

    pub stage: String,

    /// Digest of the input text, so a semantic bundle can be correlated
    /// with the exact dump that produced it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_digest: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_count: Option<usize>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub annotation_count: Option<usize>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub region_count: Option<usize>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern_count: Option<usize>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning_count: Option<usize>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl TraceEvent {
    pub fn now(stage: &str) -> Self {
        Self {
            timestamp_ms: SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap()
                .as_millis(),
            stage: stage.to_string(),
            input_digest: None,
            node_count: None,
            annotation_count: None,
            region_count: None,
            pattern_count: None,
            warning_count: None,
            detail: None,
        }
    }

    pub fn with_digest(mut self, digest: impl ToString) -> Self {
        self.input_digest = Some(digest.to_string());
        self
    }

    pub fn with_node_count(mut self, count: usize) -> Self {
        self.node_count = Some(count);
        self
    }

    pub fn with_annotation_count(mut self, count: usize) -> Self {
        self.annotation_count = Some(count);
        self
    }

    pub fn with_region_count(mut self, count: usize) -> Self {
        self.region_count = Some(count);
        self
    }

    pub fn with_pattern_count(mut self, count: usize) -> Self {
        self.pattern_count = Some(count);
        self
    }

    pub fn with_warning_count(mut self, count: usize) -> Self {
        self.warning_count = Some(count);
        self
    }

    pub fn with_detail(mut self, detail: impl ToString) -> Self {
        self.detail = Some(detail.to_string());
        self
    }
}

/// Hex SHA-1 fingerprint of the raw input text.
pub fn input_digest(text: &str) -> String {
    let mut hasher = Sha1::new();
    hasher.update(text.as_bytes());
    format!("{:x}", hasher.finalize())
}
