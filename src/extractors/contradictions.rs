use std::collections::HashSet;

use tracing::debug;

use crate::models::{ContradictionConfig, ContradictionRecord, Evidence, PositionSummary, Transcript};
use crate::rules::{resolution_for, Position, Theme, THEMES};
use crate::text::{char_len, length_within, split_sentences};

/// Sentences from one transcript that support a position, capped per transcript
pub fn collect_evidence(
    position: &Position,
    transcript: &Transcript,
    sentences: &[&str],
    limit: usize,
) -> Vec<Evidence> {
    sentences
        .iter()
        .filter(|sentence| position.matches(sentence))
        .take(limit)
        .map(|sentence| Evidence {
            text: sentence.to_string(),
            guest: transcript.guest.clone(),
            episode_id: transcript.id.clone(),
            episode_title: transcript.title.clone(),
        })
        .collect()
}

/// Build contradiction records for every theme with evidence on both sides
pub fn find_contradictions(
    transcripts: &[Transcript],
    config: &ContradictionConfig,
) -> Vec<ContradictionRecord> {
    let corpus: Vec<(&Transcript, Vec<&str>)> = transcripts
        .iter()
        .map(|t| (t, split_sentences(&t.transcript)))
        .collect();

    THEMES
        .iter()
        .filter_map(|theme| evaluate_theme(theme, &corpus, config))
        .collect()
}

fn evaluate_theme(
    theme: &Theme,
    corpus: &[(&Transcript, Vec<&str>)],
    config: &ContradictionConfig,
) -> Option<ContradictionRecord> {
    let mut evidence_a = Vec::new();
    let mut evidence_b = Vec::new();

    for (transcript, sentences) in corpus {
        evidence_a.extend(collect_evidence(
            &theme.position_a,
            transcript,
            sentences,
            config.max_evidence_per_transcript,
        ));
        evidence_b.extend(collect_evidence(
            &theme.position_b,
            transcript,
            sentences,
            config.max_evidence_per_transcript,
        ));
    }

    debug!(
        "Theme {}: {} quotes for '{}', {} quotes for '{}'",
        theme.id,
        evidence_a.len(),
        theme.position_a.stance,
        evidence_b.len(),
        theme.position_b.stance
    );

    if evidence_a.is_empty() || evidence_b.is_empty() {
        return None;
    }

    Some(ContradictionRecord {
        id: theme.id.to_string(),
        topic: theme.topic.to_string(),
        position_a: summarize_position(&theme.position_a, evidence_a, config),
        position_b: summarize_position(&theme.position_b, evidence_b, config),
        resolution: resolution_for(theme.id).to_string(),
    })
}

fn summarize_position(
    position: &Position,
    evidence: Vec<Evidence>,
    config: &ContradictionConfig,
) -> PositionSummary {
    let mut seen = HashSet::new();
    let distinct_guests: Vec<String> = evidence
        .iter()
        .filter(|e| seen.insert(e.guest.as_str()))
        .map(|e| e.guest.clone())
        .collect();

    PositionSummary {
        stance: position.stance.to_string(),
        typical_advice: position.typical_advice.to_string(),
        sample_quote: sample_quote(position, &evidence, config),
        guest_count: distinct_guests.len(),
        quote_count: evidence.len(),
        guests: distinct_guests.into_iter().take(config.max_listed).collect(),
        evidence: evidence.into_iter().take(config.max_listed).collect(),
    }
}

/// Longest evidence sentence within the quote length bounds, else the canned advice.
///
/// Ties in length keep evidence order.
fn sample_quote(position: &Position, evidence: &[Evidence], config: &ContradictionConfig) -> String {
    let mut ranked: Vec<&Evidence> = evidence.iter().collect();
    ranked.sort_by_key(|e| std::cmp::Reverse(char_len(&e.text)));

    ranked
        .into_iter()
        .find(|e| length_within(&e.text, config.quote_min_chars, config.quote_max_chars))
        .map(|e| e.text.clone())
        .unwrap_or_else(|| position.typical_advice.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transcript(id: &str, guest: &str, text: &str) -> Transcript {
        Transcript {
            id: id.to_string(),
            guest: guest.to_string(),
            title: format!("{} on product", guest),
            transcript: text.to_string(),
            ..Default::default()
        }
    }

    fn delegation(records: &[ContradictionRecord]) -> Option<&ContradictionRecord> {
        records.iter().find(|r| r.id == "delegation")
    }

    #[test]
    fn test_theme_with_one_side_is_dropped() {
        let corpus = vec![transcript(
            "a",
            "Guest A",
            "We empowered every team we had. Delegation is the whole job of a leader.",
        )];

        let records = find_contradictions(&corpus, &ContradictionConfig::default());

        assert!(delegation(&records).is_none());
    }

    #[test]
    fn test_both_sides_produce_record() {
        let corpus = vec![
            transcript("a", "Guest A", "We empowered every team we had, and it worked out well."),
            transcript("b", "Guest B", "I went back into founder mode and reviewed every single screen."),
        ];

        let records = find_contradictions(&corpus, &ContradictionConfig::default());
        let record = delegation(&records).unwrap();

        assert_eq!(record.topic, "Delegation vs. Founder Involvement");
        assert_eq!(record.position_a.guests, vec!["Guest A"]);
        assert_eq!(record.position_b.guests, vec!["Guest B"]);
        assert_eq!(record.position_b.evidence[0].episode_title, "Guest B on product");
        assert_eq!(record.resolution, resolution_for("delegation"));
    }

    #[test]
    fn test_per_transcript_cap_and_corpus_counts() {
        let many = "We delegate hiring. ".repeat(8);
        let corpus = vec![
            transcript("a", "Guest A", &many),
            transcript("b", "Guest B", &many),
            transcript("c", "Guest A", "We delegate planning too."),
            transcript("d", "Guest D", "Micromanaging is underrated."),
        ];

        let records = find_contradictions(&corpus, &ContradictionConfig::default());
        let side = &delegation(&records).unwrap().position_a;

        // 5 + 5 + 1, uncapped across the corpus
        assert_eq!(side.quote_count, 11);
        assert_eq!(side.guest_count, 2);
        assert_eq!(side.guests, vec!["Guest A", "Guest B"]);
        // Listed evidence is the first five
        assert_eq!(side.evidence.len(), 5);
        assert!(side.evidence.iter().all(|e| e.episode_id == "a"));
    }

    #[test]
    fn test_sample_quote_uses_evidence_text() {
        // Evidence objects carry `text`; the quote is picked from it rather than
        // always falling back to the canned advice.
        let corpus = vec![
            transcript(
                "a",
                "Guest A",
                "Delegate. We learned to delegate the roadmap to the teams closest to customers.",
            ),
            transcript("b", "Guest B", "Founder mode."),
        ];

        let records = find_contradictions(&corpus, &ContradictionConfig::default());
        let record = delegation(&records).unwrap();

        assert_eq!(
            record.position_a.sample_quote,
            "We learned to delegate the roadmap to the teams closest to customers."
        );
        // Only a too-short quote on side b, so the canned advice is used
        assert_eq!(record.position_b.sample_quote, record.position_b.typical_advice);
    }

    #[test]
    fn test_sample_quote_skips_overlong_sentences() {
        let long = format!("We delegate {} everything.", "really ".repeat(40));
        let medium = "We delegate most decisions to the product teams now.";
        let corpus = vec![
            transcript("a", "Guest A", &format!("{} {}", long, medium)),
            transcript("b", "Guest B", "We stayed close to the details on every launch."),
        ];

        let records = find_contradictions(&corpus, &ContradictionConfig::default());
        let record = delegation(&records).unwrap();

        assert_eq!(record.position_a.sample_quote, medium);
    }
}
