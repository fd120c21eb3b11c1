use anyhow::Result;
use tracing::info;

use crate::config::DataPaths;
use crate::extractors::find_contradictions;
use crate::io::{read_transcripts, write_json};
use crate::models::{ContradictionConfig, ContradictionRecord};

/// Execute the contradictions stage: `transcripts.json` -> `contradictions.json`
pub fn execute_contradictions(
    paths: &DataPaths,
    config: &ContradictionConfig,
) -> Result<Vec<ContradictionRecord>> {
    let input = paths.transcripts();
    DataPaths::require("contradictions", &[&input])?;

    let transcripts = read_transcripts(&input)?;
    info!("Contradictions: scanning {} transcripts", transcripts.len());

    let records = find_contradictions(&transcripts, config);

    write_json(&paths.contradictions(), &records)?;
    info!(
        "Contradictions: {} themes with evidence on both sides",
        records.len()
    );

    Ok(records)
}
