use std::collections::HashMap;

use tracing::debug;

use crate::models::{FrameworkConfig, FrameworkOccurrence, FrameworkSummary, Transcript};
use crate::rules::{FrameworkRule, TextMatcher, FRAMEWORKS};
use crate::text::{char_len, split_sentences};

/// Detect every framework mentioned in one transcript, in rule table order
pub fn detect_frameworks(transcript: &Transcript, config: &FrameworkConfig) -> Vec<FrameworkOccurrence> {
    let text = transcript.transcript.as_str();
    let sentences = split_sentences(text);

    FRAMEWORKS
        .iter()
        .filter_map(|rule| detect_rule(rule, transcript, &sentences, config))
        .collect()
}

fn detect_rule(
    rule: &FrameworkRule,
    transcript: &Transcript,
    sentences: &[&str],
    config: &FrameworkConfig,
) -> Option<FrameworkOccurrence> {
    let text = transcript.transcript.as_str();
    let pattern = rule.first_matching_pattern(text)?;

    let mentions = pattern.count(text);
    if mentions == 0 {
        return None;
    }

    let contexts = capture_contexts(pattern, sentences, config);
    debug!(
        "{}: {} mentions of {} ({} contexts)",
        transcript.id,
        mentions,
        rule.name,
        contexts.len()
    );

    Some(FrameworkOccurrence {
        name: rule.name.to_string(),
        creator: rule.creator.to_string(),
        description: rule.description.to_string(),
        episode_id: transcript.id.clone(),
        guest: transcript.guest.clone(),
        title: transcript.title.clone(),
        mentions,
        contexts,
    })
}

/// Surrounding-sentence excerpts for each sentence the pattern matches
fn capture_contexts(
    pattern: &dyn TextMatcher,
    sentences: &[&str],
    config: &FrameworkConfig,
) -> Vec<String> {
    let mut contexts = Vec::new();

    for (i, sentence) in sentences.iter().enumerate() {
        if contexts.len() >= config.max_contexts {
            break;
        }
        if !pattern.is_match(sentence) {
            continue;
        }

        let start = i.saturating_sub(config.sentences_before);
        let end = (i + config.sentences_after + 1).min(sentences.len());
        let context = sentences[start..end].join(" ");

        if char_len(&context) > config.min_context_chars {
            contexts.push(context);
        }
    }

    contexts
}

/// Group occurrences by framework name.
///
/// Summaries keep the first-seen metadata and are sorted by total mentions,
/// highest first. Equal totals keep first-seen order.
pub fn aggregate_frameworks(occurrences: Vec<FrameworkOccurrence>) -> Vec<FrameworkSummary> {
    let mut summaries: Vec<FrameworkSummary> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for occurrence in occurrences {
        let slot = match index.get(&occurrence.name) {
            Some(&slot) => slot,
            None => {
                summaries.push(FrameworkSummary::from_occurrence(&occurrence));
                index.insert(occurrence.name.clone(), summaries.len() - 1);
                summaries.len() - 1
            }
        };
        summaries[slot].absorb(occurrence);
    }

    summaries.sort_by(|a, b| b.total_mentions.cmp(&a.total_mentions));
    summaries
}

/// Detect and aggregate frameworks across the whole corpus
pub fn extract_frameworks(transcripts: &[Transcript], config: &FrameworkConfig) -> Vec<FrameworkSummary> {
    let occurrences = transcripts
        .iter()
        .flat_map(|t| detect_frameworks(t, config))
        .collect();
    aggregate_frameworks(occurrences)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transcript(id: &str, guest: &str, text: &str) -> Transcript {
        Transcript {
            id: id.to_string(),
            guest: guest.to_string(),
            title: format!("{} episode", guest),
            transcript: text.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_lno_framework_detected_with_context() {
        let t = transcript(
            "shreyas",
            "Shreyas Doshi",
            "I was drowning in work last year. Then the LNO framework helped me prioritize. \
             Now I spend my best hours on leverage tasks.",
        );

        let occurrences = detect_frameworks(&t, &FrameworkConfig::default());
        let lno = occurrences.iter().find(|o| o.name == "LNO Framework").unwrap();

        assert_eq!(lno.mentions, 1);
        assert_eq!(lno.creator, "Shreyas Doshi");
        assert!(lno.contexts.iter().any(|c| c.contains("LNO")));
    }

    #[test]
    fn test_context_window_is_one_before_two_after() {
        let t = transcript(
            "ep",
            "Guest",
            "Zero sentence here. One sentence here. We ran a pre-mortem on it. \
             Three sentence here. Four sentence here. Five sentence here.",
        );

        let occurrences = detect_frameworks(&t, &FrameworkConfig::default());
        let premortem = occurrences.iter().find(|o| o.name == "Pre-mortem").unwrap();

        assert_eq!(
            premortem.contexts,
            vec!["One sentence here. We ran a pre-mortem on it. Three sentence here. Four sentence here."]
        );
    }

    #[test]
    fn test_short_contexts_dropped_but_mentions_counted() {
        let t = transcript("ep", "Guest", "Pre-mortem.");

        let occurrences = detect_frameworks(&t, &FrameworkConfig::default());
        let premortem = occurrences.iter().find(|o| o.name == "Pre-mortem").unwrap();

        assert_eq!(premortem.mentions, 1);
        assert!(premortem.contexts.is_empty());
    }

    #[test]
    fn test_mentions_use_raw_match_count_and_contexts_capped() {
        let sentence = "Founder mode is about founder mode, and honestly founder mode is everything to us. ";
        let t = transcript("ep", "Brian Chesky", &sentence.repeat(5));

        let occurrences = detect_frameworks(&t, &FrameworkConfig::default());
        let founder = occurrences.iter().find(|o| o.name == "Founder Mode").unwrap();

        assert_eq!(founder.mentions, 15);
        assert_eq!(founder.contexts.len(), 3);
    }

    #[test]
    fn test_first_pattern_wins() {
        // Both 11-star patterns appear; only the first is counted
        let t = transcript(
            "ep",
            "Brian Chesky",
            "Think about an 11-star experience. A seven-star experience is also fun to imagine.",
        );

        let occurrences = detect_frameworks(&t, &FrameworkConfig::default());
        let eleven = occurrences.iter().find(|o| o.name == "11-Star Experience").unwrap();

        assert_eq!(eleven.mentions, 1);
    }

    #[test]
    fn test_aggregation_sorted_with_stable_ties() {
        let corpus = vec![
            transcript("a", "Guest A", "We use a north star. Also we do a pre-mortem every launch."),
            transcript("b", "Guest B", "Our PLG motion works. Pre-mortem again. And a pre-mortem later."),
        ];

        let summaries = extract_frameworks(&corpus, &FrameworkConfig::default());
        let names: Vec<&str> = summaries.iter().map(|s| s.name.as_str()).collect();

        // Pre-mortem: 3. Then the ties at 1 in first-seen order:
        // North Star (a), Product-Led Growth (b).
        assert_eq!(names, vec!["Pre-mortem", "North Star Metric", "Product-Led Growth"]);
        assert_eq!(summaries[0].total_mentions, 3);
        assert_eq!(summaries[0].guest_names(), vec!["Guest A", "Guest B"]);
        assert_eq!(summaries[0].episodes[1].mentions, 2);
    }

    #[test]
    fn test_aggregation_is_deterministic() {
        let corpus = vec![
            transcript("a", "Guest A", "Jobs to be done matters. We use a north star metric daily."),
            transcript("b", "Guest B", "JTBD interviews every week help. Our north star is retention."),
        ];
        let config = FrameworkConfig::default();

        let first = serde_json::to_string(&extract_frameworks(&corpus, &config)).unwrap();
        let second = serde_json::to_string(&extract_frameworks(&corpus, &config)).unwrap();

        assert_eq!(first, second);
    }
}
