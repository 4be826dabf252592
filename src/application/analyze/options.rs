//! Analyze Options

use std::path::PathBuf;

use crate::domain::policies::AnalysisPolicy;

/// Options for the analyze operation
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyzeOptions {
    /// Employee record source (CSV file)
    pub source: PathBuf,
    /// Thresholds to analyze against
    pub policy: AnalysisPolicy,
}

impl AnalyzeOptions {
    pub fn new(source: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            policy: AnalysisPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: AnalysisPolicy) -> Self {
        self.policy = policy;
        self
    }
}
