use anyhow::Result;
use tracing::info;

use crate::config::DataPaths;
use crate::extractors::{extract_frameworks, extract_insights};
use crate::io::{read_transcripts, write_json};
use crate::models::{FrameworkConfig, FrameworkSummary, Insight, InsightConfig};

/// Configuration for the extract stage
#[derive(Debug, Clone, Default)]
pub struct ExtractConfig {
    pub frameworks: FrameworkConfig,
    pub insights: InsightConfig,
}

/// Result of the extract stage
#[derive(Debug)]
pub struct ExtractResult {
    pub frameworks: Vec<FrameworkSummary>,
    pub insights: Vec<Insight>,
}

/// Execute the extract stage: `transcripts.json` -> `frameworks.json`, `insights.json`
pub fn execute_extract(paths: &DataPaths, config: &ExtractConfig) -> Result<ExtractResult> {
    let input = paths.transcripts();
    DataPaths::require("extract", &[&input])?;

    let transcripts = read_transcripts(&input)?;
    info!("Extract: scanning {} transcripts", transcripts.len());

    let frameworks = extract_frameworks(&transcripts, &config.frameworks);
    let insights = extract_insights(&transcripts, &config.insights);

    write_json(&paths.frameworks(), &frameworks)?;
    write_json(&paths.insights(), &insights)?;
    info!(
        "Extract: {} frameworks, {} insight candidates",
        frameworks.len(),
        insights.len()
    );

    Ok(ExtractResult {
        frameworks,
        insights,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::sample_transcripts;

    fn frameworks_for<'a>(summaries: &'a [FrameworkSummary], guest: &str) -> Vec<&'a str> {
        summaries
            .iter()
            .filter(|s| s.episodes.iter().any(|e| e.guest == guest))
            .map(|s| s.name.as_str())
            .collect()
    }

    #[test]
    fn test_sample_corpus_frameworks() {
        let summaries = extract_frameworks(&sample_transcripts(), &FrameworkConfig::default());

        let chesky = frameworks_for(&summaries, "Brian Chesky");
        assert!(chesky.contains(&"Founder Mode"));
        assert!(chesky.contains(&"11-Star Experience"));

        let shreyas = frameworks_for(&summaries, "Shreyas Doshi");
        assert!(shreyas.contains(&"LNO Framework"));
        assert!(shreyas.contains(&"Pre-mortem"));

        for pair in summaries.windows(2) {
            assert!(pair[0].total_mentions >= pair[1].total_mentions);
        }
    }

    #[test]
    fn test_sample_corpus_insights() {
        let insights = extract_insights(&sample_transcripts(), &InsightConfig::default());

        assert!(!insights.is_empty());
        assert!(insights.iter().any(|i| i.guest == "Marty Cagan" && i.signal == "my advice"));
        // Transcript order is preserved
        assert_eq!(insights[0].episode_id, "april-dunford");
    }

    #[test]
    fn test_extract_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let paths = DataPaths::new(dir.path());
        write_json(&paths.transcripts(), &sample_transcripts()).unwrap();

        execute_extract(&paths, &ExtractConfig::default()).unwrap();
        let first = std::fs::read(paths.frameworks()).unwrap();
        let first_insights = std::fs::read(paths.insights()).unwrap();

        execute_extract(&paths, &ExtractConfig::default()).unwrap();
        assert_eq!(std::fs::read(paths.frameworks()).unwrap(), first);
        assert_eq!(std::fs::read(paths.insights()).unwrap(), first_insights);
    }

    #[test]
    fn test_missing_transcripts_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let paths = DataPaths::new(dir.path());

        assert!(execute_extract(&paths, &ExtractConfig::default()).is_err());
        assert!(!paths.frameworks().exists());
        assert!(!paths.insights().exists());
    }
}
