pub mod config;
pub mod error;
pub mod extractors;
pub mod io;
pub mod models;
pub mod rules;
pub mod sample;
pub mod stages;
pub mod text;

pub use config::DataPaths;
pub use error::PipelineError;
pub use extractors::{
    extract_frameworks, extract_insights, extract_timestamps, find_contradictions,
    segment_transcript, tag_topics, TopicConfig,
};
pub use io::{parse_raw_transcript, read_transcripts};
pub use models::{
    ContradictionConfig, ContradictionRecord, FrameworkConfig, FrameworkSummary, Insight,
    InsightConfig, Segment, SegmentConfig, TimestampMarker, Transcript,
};
pub use stages::{
    execute_bundle, execute_contradictions, execute_extract, execute_ingest, execute_process,
    run_pipeline, ExtractConfig, IngestConfig, PipelineConfig, ProcessConfig,
};
