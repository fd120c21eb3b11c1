use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use crate::config::DataPaths;
use crate::error::PipelineError;
use crate::extractors::{tag_topics, TopicConfig};
use crate::io::{parse_raw_transcript_file, write_json};
use crate::models::Transcript;

const RAW_FILE_NAME: &str = "transcript.md";

/// Configuration for the ingest stage
#[derive(Debug, Clone, Default)]
pub struct IngestConfig {
    pub topics: TopicConfig,
}

/// Result of the ingest stage
#[derive(Debug)]
pub struct IngestResult {
    /// Transcripts successfully ingested
    pub transcripts: Vec<Transcript>,
    /// Raw records that were skipped, with the reason
    pub skipped: Vec<PipelineError>,
}

/// Parse every `<folder>/transcript.md` under `raw_dir`, in folder name order.
///
/// A record that fails to parse is skipped and reported in the result; only a
/// missing or unreadable directory is fatal.
pub fn ingest_directory(raw_dir: &Path, config: &IngestConfig) -> Result<IngestResult> {
    DataPaths::require("ingest", &[raw_dir])?;

    let mut folders: Vec<(String, PathBuf)> = std::fs::read_dir(raw_dir)
        .with_context(|| format!("Failed to read directory: {:?}", raw_dir))?
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.path().is_dir())
        .map(|entry| (entry.file_name().to_string_lossy().into_owned(), entry.path()))
        .collect();
    folders.sort_by(|a, b| a.0.cmp(&b.0));

    let mut transcripts = Vec::new();
    let mut skipped = Vec::new();

    for (folder, dir) in folders {
        let path = dir.join(RAW_FILE_NAME);
        if !path.is_file() {
            let err = PipelineError::invalid(&path, "no transcript file");
            warn!("Skipping {}: {}", folder, err);
            skipped.push(err);
            continue;
        }

        match parse_raw_transcript_file(&path, &folder) {
            Ok(mut transcript) => {
                transcript.topics = tag_topics(&transcript.transcript, &config.topics);
                debug!(
                    "Ingested {} ({} words, topics {:?})",
                    transcript.id,
                    transcript.word_count(),
                    transcript.topics
                );
                transcripts.push(transcript);
            }
            Err(err) => {
                warn!("Skipping {}: {}", folder, err);
                skipped.push(err);
            }
        }
    }

    Ok(IngestResult {
        transcripts,
        skipped,
    })
}

/// Execute the ingest stage: raw transcripts -> `transcripts.json`
pub fn execute_ingest(paths: &DataPaths, config: &IngestConfig) -> Result<IngestResult> {
    info!("Ingesting raw transcripts from {:?}", paths.raw_dir());
    let result = ingest_directory(&paths.raw_dir(), config)?;

    write_json(&paths.transcripts(), &result.transcripts)?;
    info!(
        "Ingest: {} transcripts written to {:?}, {} skipped",
        result.transcripts.len(),
        paths.transcripts(),
        result.skipped.len()
    );

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::read_transcripts;
    use crate::sample::write_sample_corpus;

    #[test]
    fn test_missing_raw_dir_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let paths = DataPaths::new(dir.path());

        let err = execute_ingest(&paths, &IngestConfig::default()).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<PipelineError>(),
            Some(PipelineError::MissingInput { stage: "ingest", .. })
        ));
        assert!(!paths.transcripts().exists());
    }

    #[test]
    fn test_bad_records_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let paths = DataPaths::new(dir.path());
        write_sample_corpus(&paths).unwrap();

        let broken = paths.raw_dir().join("aaa-broken");
        std::fs::create_dir_all(&broken).unwrap();
        std::fs::write(broken.join(RAW_FILE_NAME), "no front matter here").unwrap();
        std::fs::create_dir_all(paths.raw_dir().join("zzz-empty")).unwrap();

        let result = execute_ingest(&paths, &IngestConfig::default()).unwrap();

        assert_eq!(result.transcripts.len(), 5);
        assert_eq!(result.skipped.len(), 2);

        let written = read_transcripts(&paths.transcripts()).unwrap();
        let ids: Vec<&str> = written.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["april-dunford", "brian-chesky", "elena-verna", "marty-cagan", "shreyas-doshi"]
        );
    }

    #[test]
    fn test_ingest_tags_topics_and_derives_fields() {
        let dir = tempfile::tempdir().unwrap();
        let paths = DataPaths::new(dir.path());
        write_sample_corpus(&paths).unwrap();

        let result = execute_ingest(&paths, &IngestConfig::default()).unwrap();
        let elena = result.transcripts.iter().find(|t| t.id == "elena-verna").unwrap();

        assert_eq!(elena.video_id, "hyQu3E2hqGk");
        assert_eq!(elena.duration, "1:23:00");
        assert!(elena.topics.contains(&"growth".to_string()));
        assert!(elena.topics.len() <= 5);
    }
}
