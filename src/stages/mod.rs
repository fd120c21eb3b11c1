pub mod stage0_ingest;
pub mod stage1_process;
pub mod stage2_extract;
pub mod stage3_contradictions;
pub mod stage4_bundle;

pub use stage0_ingest::*;
pub use stage1_process::*;
pub use stage2_extract::*;
pub use stage3_contradictions::*;
pub use stage4_bundle::*;

use anyhow::Result;
use tracing::info;

use crate::config::DataPaths;
use crate::models::ContradictionConfig;

/// Configuration for a full pipeline run
#[derive(Debug, Clone, Default)]
pub struct PipelineConfig {
    pub ingest: IngestConfig,
    pub process: ProcessConfig,
    pub extract: ExtractConfig,
    pub contradictions: ContradictionConfig,
}

/// Run every stage in order, stopping at the first fatal error
pub fn run_pipeline(paths: &DataPaths, config: &PipelineConfig) -> Result<Bundle> {
    info!("Stage 0: ingest");
    execute_ingest(paths, &config.ingest)?;

    info!("Stage 1: segments and stats");
    execute_process(paths, &config.process)?;

    info!("Stage 2: frameworks and insights");
    execute_extract(paths, &config.extract)?;

    info!("Stage 3: contradictions");
    execute_contradictions(paths, &config.contradictions)?;

    info!("Stage 4: bundle");
    execute_bundle(paths)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::read_json;
    use crate::models::{CorpusStats, FrameworkSummary};
    use crate::sample::write_sample_corpus;

    #[test]
    fn test_full_run_over_sample_corpus() {
        let dir = tempfile::tempdir().unwrap();
        let paths = DataPaths::new(dir.path());
        write_sample_corpus(&paths).unwrap();

        let bundle = run_pipeline(&paths, &PipelineConfig::default()).unwrap();

        assert_eq!(bundle.episodes.len(), 5);
        assert_eq!(bundle.stats.total_episodes, 5);
        assert_eq!(bundle.stats.total_segments, bundle.segments.len());
        assert!(bundle.contradictions.iter().any(|c| c.id == "delegation"));
        assert!(bundle.frameworks.iter().any(|f| f.name == "Founder Mode"));
        assert!(paths.bundle().exists());
    }

    #[test]
    fn test_rerun_is_idempotent_apart_from_timestamps() {
        let dir = tempfile::tempdir().unwrap();
        let paths = DataPaths::new(dir.path());
        write_sample_corpus(&paths).unwrap();
        let config = PipelineConfig::default();

        run_pipeline(&paths, &config).unwrap();
        let transcripts = std::fs::read(paths.transcripts()).unwrap();
        let segments = std::fs::read(paths.segments()).unwrap();
        let frameworks: Vec<FrameworkSummary> = read_json(&paths.frameworks()).unwrap();
        let contradictions = std::fs::read(paths.contradictions()).unwrap();
        let stats: CorpusStats = read_json(&paths.stats()).unwrap();

        run_pipeline(&paths, &config).unwrap();
        assert_eq!(std::fs::read(paths.transcripts()).unwrap(), transcripts);
        assert_eq!(std::fs::read(paths.segments()).unwrap(), segments);
        assert_eq!(read_json::<Vec<FrameworkSummary>>(&paths.frameworks()).unwrap(), frameworks);
        assert_eq!(std::fs::read(paths.contradictions()).unwrap(), contradictions);
        assert!(read_json::<CorpusStats>(&paths.stats()).unwrap().same_counts(&stats));
    }
}
