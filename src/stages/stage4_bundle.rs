use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::DataPaths;
use crate::io::{read_json, read_transcripts, write_json};
use crate::models::{
    ContradictionRecord, CorpusStats, Episode, FrameworkSummary, Insight, Segment,
};

/// Everything the static viewer needs, in one document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bundle {
    pub generated_at: String,
    pub stats: CorpusStats,
    pub episodes: Vec<Episode>,
    pub segments: Vec<Segment>,
    pub frameworks: Vec<FrameworkSummary>,
    pub insights: Vec<Insight>,
    pub contradictions: Vec<ContradictionRecord>,
}

/// Execute the bundle stage: all stage outputs -> `bundle.json`.
///
/// Every input is checked before anything is read or written.
pub fn execute_bundle(paths: &DataPaths) -> Result<Bundle> {
    let transcripts_path = paths.transcripts();
    let segments_path = paths.segments();
    let stats_path = paths.stats();
    let frameworks_path = paths.frameworks();
    let insights_path = paths.insights();
    let contradictions_path = paths.contradictions();

    DataPaths::require(
        "bundle",
        &[
            &transcripts_path,
            &segments_path,
            &stats_path,
            &frameworks_path,
            &insights_path,
            &contradictions_path,
        ],
    )?;

    let transcripts = read_transcripts(&transcripts_path)?;
    let bundle = Bundle {
        generated_at: chrono::Utc::now().to_rfc3339(),
        stats: read_json(&stats_path)?,
        episodes: transcripts.iter().map(Episode::from).collect(),
        segments: read_json(&segments_path)?,
        frameworks: read_json(&frameworks_path)?,
        insights: read_json(&insights_path)?,
        contradictions: read_json(&contradictions_path)?,
    };

    write_json(&paths.bundle(), &bundle)?;
    info!(
        "Bundle: {} episodes, {} segments, {} frameworks, {} insights, {} contradictions -> {:?}",
        bundle.episodes.len(),
        bundle.segments.len(),
        bundle.frameworks.len(),
        bundle.insights.len(),
        bundle.contradictions.len(),
        paths.bundle()
    );

    Ok(bundle)
}
