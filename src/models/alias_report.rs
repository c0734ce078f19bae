use crate::models::{Diagnostic, ExecutionSummary};

/// Everything a completed run has to say: the anomalies it skipped over and
/// the counts it printed.
#[derive(Debug, Default)]
pub struct AliasReport {
    pub diagnostics: Vec<Diagnostic>,
    pub summary: ExecutionSummary,
}
