use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;

use crate::models::FrontMatter;

/// Write a value as pretty-printed JSON, creating parent directories
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {:?}", parent))?;
    }
    let file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create file: {:?}", path))?;
    serde_json::to_writer_pretty(file, value).context("Failed to write JSON")?;
    Ok(())
}

/// Write `<raw_dir>/<folder>/transcript.md` with YAML front matter
pub fn write_raw_transcript(
    raw_dir: &Path,
    folder: &str,
    meta: &FrontMatter,
    body: &str,
) -> Result<PathBuf> {
    let dir = raw_dir.join(folder);
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create directory: {:?}", dir))?;

    let path = dir.join("transcript.md");
    let header = serde_yaml::to_string(meta).context("Failed to serialize front matter")?;

    let mut file = std::fs::File::create(&path)
        .with_context(|| format!("Failed to create file: {:?}", path))?;
    write!(file, "---\n{}---\n{}\n", header, body.trim())
        .with_context(|| format!("Failed to write file: {:?}", path))?;

    Ok(path)
}
