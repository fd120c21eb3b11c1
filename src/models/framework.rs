use serde::{Deserialize, Serialize};

/// Configuration for framework context capture
#[derive(Debug, Clone)]
pub struct FrameworkConfig {
    /// Maximum excerpts kept per (framework, transcript)
    pub max_contexts: usize,
    /// Excerpts must be strictly longer than this (characters)
    pub min_context_chars: usize,
    /// Sentences included before the matching sentence
    pub sentences_before: usize,
    /// Sentences included after the matching sentence
    pub sentences_after: usize,
}

impl Default for FrameworkConfig {
    fn default() -> Self {
        Self {
            max_contexts: 3,
            min_context_chars: 50,
            sentences_before: 1,
            sentences_after: 2,
        }
    }
}

/// Matches of one framework rule inside one transcript
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameworkOccurrence {
    pub name: String,
    pub creator: String,
    pub description: String,
    pub episode_id: String,
    pub guest: String,
    pub title: String,
    /// Raw match count of the winning pattern over the whole transcript
    pub mentions: usize,
    /// Up to three surrounding-sentence excerpts
    pub contexts: Vec<String>,
}

/// One contributing episode inside a framework summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpisodeMention {
    pub episode_id: String,
    pub guest: String,
    pub title: String,
    pub mentions: usize,
    pub contexts: Vec<String>,
}

/// Corpus-wide aggregate for one framework
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameworkSummary {
    pub name: String,
    pub creator: String,
    pub description: String,
    pub total_mentions: usize,
    pub episodes: Vec<EpisodeMention>,
}

impl FrameworkSummary {
    /// Start a summary from the first occurrence seen for a framework
    pub fn from_occurrence(occurrence: &FrameworkOccurrence) -> Self {
        Self {
            name: occurrence.name.clone(),
            creator: occurrence.creator.clone(),
            description: occurrence.description.clone(),
            total_mentions: 0,
            episodes: Vec::new(),
        }
    }

    /// Fold another transcript's occurrence into this summary
    pub fn absorb(&mut self, occurrence: FrameworkOccurrence) {
        self.total_mentions += occurrence.mentions;
        self.episodes.push(EpisodeMention {
            episode_id: occurrence.episode_id,
            guest: occurrence.guest,
            title: occurrence.title,
            mentions: occurrence.mentions,
            contexts: occurrence.contexts,
        });
    }

    pub fn guest_names(&self) -> Vec<&str> {
        self.episodes.iter().map(|e| e.guest.as_str()).collect()
    }
}
