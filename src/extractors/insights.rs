use crate::models::{Insight, InsightConfig, Transcript};
use crate::rules::INSIGHT_SIGNALS;
use crate::text::{length_within, split_sentences};

/// Advice-like sentences from one transcript, in sentence order
pub fn detect_insights(transcript: &Transcript, config: &InsightConfig) -> Vec<Insight> {
    split_sentences(&transcript.transcript)
        .into_iter()
        .filter(|sentence| length_within(sentence, config.min_chars, config.max_chars))
        .filter_map(|sentence| {
            let signal = INSIGHT_SIGNALS.iter().find(|s| s.matcher.is_match(sentence))?;
            Some(Insight {
                text: sentence.to_string(),
                episode_id: transcript.id.clone(),
                guest: transcript.guest.clone(),
                signal: signal.label.to_string(),
            })
        })
        .collect()
}

/// Flat candidate list across the corpus, transcript then sentence order
pub fn extract_insights(transcripts: &[Transcript], config: &InsightConfig) -> Vec<Insight> {
    transcripts
        .iter()
        .flat_map(|t| detect_insights(t, config))
        .collect()
}
