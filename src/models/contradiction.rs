use serde::{Deserialize, Serialize};

/// Configuration for the contradiction finder
#[derive(Debug, Clone)]
pub struct ContradictionConfig {
    /// Evidence sentences kept per (transcript, position)
    pub max_evidence_per_transcript: usize,
    /// Guests and evidence items listed per side in the output
    pub max_listed: usize,
    /// Sample quote must be strictly longer than this
    pub quote_min_chars: usize,
    /// Sample quote must be strictly shorter than this
    pub quote_max_chars: usize,
}

impl Default for ContradictionConfig {
    fn default() -> Self {
        Self {
            max_evidence_per_transcript: 5,
            max_listed: 5,
            quote_min_chars: 30,
            quote_max_chars: 200,
        }
    }
}

/// A single matched sentence supporting one side of a theme
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evidence {
    pub text: String,
    pub guest: String,
    pub episode_id: String,
    pub episode_title: String,
}

/// Output view of one side of a contradiction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionSummary {
    pub stance: String,
    pub typical_advice: String,
    pub sample_quote: String,
    /// Distinct guests across the whole corpus
    pub guest_count: usize,
    /// Total evidence sentences across the whole corpus
    pub quote_count: usize,
    pub guests: Vec<String>,
    pub evidence: Vec<Evidence>,
}

/// A theme where both opposing stances have supporting quotes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContradictionRecord {
    pub id: String,
    pub topic: String,
    pub position_a: PositionSummary,
    pub position_b: PositionSummary,
    pub resolution: String,
}
