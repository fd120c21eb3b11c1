use serde::{Deserialize, Serialize};

/// Configuration for insight sentence filtering
#[derive(Debug, Clone)]
pub struct InsightConfig {
    /// Sentences must be strictly longer than this (characters, trimmed)
    pub min_chars: usize,
    /// Sentences must be strictly shorter than this (characters, trimmed)
    pub max_chars: usize,
}

impl Default for InsightConfig {
    fn default() -> Self {
        Self {
            min_chars: 30,
            max_chars: 500,
        }
    }
}

/// A sentence flagged as advice, kept as a raw curation candidate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    pub text: String,
    pub episode_id: String,
    pub guest: String,
    /// Label of the first advice phrase that matched
    pub signal: String,
}
