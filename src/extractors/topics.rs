use crate::rules::TOPICS;

/// Configuration for topic tagging
#[derive(Debug, Clone)]
pub struct TopicConfig {
    /// Minimum keyword hits for a topic to count
    pub min_matches: usize,
    /// Maximum number of topics kept
    pub max_topics: usize,
}

impl Default for TopicConfig {
    fn default() -> Self {
        Self {
            min_matches: 3,
            max_topics: 5,
        }
    }
}

/// Top topics for a transcript, most keyword hits first.
///
/// Ties keep table order.
pub fn tag_topics(text: &str, config: &TopicConfig) -> Vec<String> {
    let mut scored: Vec<(&str, usize)> = TOPICS
        .iter()
        .map(|topic| (topic.name, topic.matcher.count(text)))
        .filter(|(_, count)| *count >= config.min_matches)
        .collect();

    scored.sort_by(|a, b| b.1.cmp(&a.1));

    scored
        .into_iter()
        .take(config.max_topics)
        .map(|(name, _)| name.to_string())
        .collect()
}
