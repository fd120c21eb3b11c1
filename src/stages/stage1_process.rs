use std::collections::BTreeMap;

use anyhow::Result;
use tracing::info;

use crate::config::DataPaths;
use crate::extractors::segment_transcript;
use crate::io::{read_transcripts, write_json};
use crate::models::{CorpusStats, Segment, SegmentConfig, Transcript};

/// Configuration for the process stage
#[derive(Debug, Clone, Default)]
pub struct ProcessConfig {
    pub segment: SegmentConfig,
}

/// Result of the process stage
#[derive(Debug)]
pub struct ProcessResult {
    pub segments: Vec<Segment>,
    pub stats: CorpusStats,
}

/// Segment every transcript, preserving transcript then ordinal order
pub fn build_segments(transcripts: &[Transcript], config: &SegmentConfig) -> Vec<Segment> {
    transcripts
        .iter()
        .flat_map(|t| segment_transcript(t, config))
        .collect()
}

/// Corpus-level counters. `processed_at` is the only wall-clock field.
pub fn compute_stats(
    transcripts: &[Transcript],
    segments: &[Segment],
    processed_at: String,
) -> CorpusStats {
    let total_words: usize = transcripts.iter().map(|t| t.word_count()).sum();

    let mut topics: BTreeMap<String, usize> = BTreeMap::new();
    for topic in transcripts.iter().flat_map(|t| t.topics.iter()) {
        *topics.entry(topic.clone()).or_insert(0) += 1;
    }

    CorpusStats {
        total_episodes: transcripts.len(),
        total_segments: segments.len(),
        total_words,
        average_words_per_episode: total_words / transcripts.len().max(1),
        topics,
        guests: transcripts.iter().map(|t| t.guest.clone()).collect(),
        processed_at,
    }
}

/// Execute the process stage: `transcripts.json` -> `segments.json`, `stats.json`
pub fn execute_process(paths: &DataPaths, config: &ProcessConfig) -> Result<ProcessResult> {
    let input = paths.transcripts();
    DataPaths::require("process", &[&input])?;

    let transcripts = read_transcripts(&input)?;
    info!("Process: loaded {} transcripts", transcripts.len());

    let segments = build_segments(&transcripts, &config.segment);
    let stats = compute_stats(&transcripts, &segments, chrono::Utc::now().to_rfc3339());

    write_json(&paths.segments(), &segments)?;
    write_json(&paths.stats(), &stats)?;
    info!(
        "Process: {} segments, {} words across {} episodes",
        stats.total_segments, stats.total_words, stats.total_episodes
    );

    Ok(ProcessResult { segments, stats })
}
