use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use podlens::sample::write_sample_corpus;
use podlens::{
    execute_bundle, execute_contradictions, execute_extract, execute_ingest, execute_process,
    run_pipeline, ContradictionConfig, DataPaths, ExtractConfig, IngestConfig, PipelineConfig,
    ProcessConfig,
};

#[derive(Parser)]
#[command(name = "podlens")]
#[command(author, version, about = "Podcast transcript mining pipeline", long_about = None)]
struct Cli {
    /// Directory holding raw transcripts and every stage output
    #[arg(long, global = true, default_value = "data")]
    data_dir: PathBuf,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the bundled development transcripts into the raw directory
    Sample,

    /// Parse raw transcripts and tag topics (raw/ -> transcripts.json)
    Ingest,

    /// Segment transcripts and compute corpus stats
    Process,

    /// Extract frameworks and insight candidates
    Extract,

    /// Find themes where guests give opposing advice
    Contradictions,

    /// Merge every stage output into bundle.json for the viewer
    Bundle,

    /// Run ingest, process, extract, contradictions and bundle in order
    Run,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let paths = DataPaths::new(cli.data_dir);

    match cli.command {
        Commands::Sample => {
            write_sample_corpus(&paths)?;
        }
        Commands::Ingest => {
            let result = execute_ingest(&paths, &IngestConfig::default())?;
            if !result.skipped.is_empty() {
                info!("{} raw transcripts skipped", result.skipped.len());
            }
        }
        Commands::Process => {
            execute_process(&paths, &ProcessConfig::default())?;
        }
        Commands::Extract => {
            execute_extract(&paths, &ExtractConfig::default())?;
        }
        Commands::Contradictions => {
            execute_contradictions(&paths, &ContradictionConfig::default())?;
        }
        Commands::Bundle => {
            execute_bundle(&paths)?;
        }
        Commands::Run => {
            let bundle = run_pipeline(&paths, &PipelineConfig::default())?;
            info!(
                "Complete: {} episodes, {} frameworks, {} contradictions",
                bundle.episodes.len(),
                bundle.frameworks.len(),
                bundle.contradictions.len()
            );
        }
    }

    Ok(())
}

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber).ok();
}
