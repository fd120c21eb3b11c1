use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Corpus-level counters written alongside the segments
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorpusStats {
    pub total_episodes: usize,
    pub total_segments: usize,
    pub total_words: usize,
    pub average_words_per_episode: usize,
    /// Topic name -> number of episodes tagged with it
    pub topics: BTreeMap<String, usize>,
    pub guests: Vec<String>,
    /// RFC 3339 wall-clock time of the run; excluded from equality checks
    pub processed_at: String,
}

impl CorpusStats {
    /// Compare everything except `processed_at`
    pub fn same_counts(&self, other: &CorpusStats) -> bool {
        self.total_episodes == other.total_episodes
            && self.total_segments == other.total_segments
            && self.total_words == other.total_words
            && self.average_words_per_episode == other.average_words_per_episode
            && self.topics == other.topics
            && self.guests == other.guests
    }
}
