use std::path::Path;

use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::de::DeserializeOwned;

use crate::error::PipelineError;
use crate::models::{FrontMatter, Transcript};

static VIDEO_ID: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:[?&]v=|youtu\.be/)([A-Za-z0-9_-]{6,})").unwrap());

/// Read and deserialize a JSON file
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content =
        std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {:?}", path))?;
    serde_json::from_str(&content).with_context(|| format!("Failed to parse JSON: {:?}", path))
}

/// Read the ingested transcript list
pub fn read_transcripts(path: &Path) -> Result<Vec<Transcript>> {
    read_json(path)
}

/// Parse a raw `transcript.md` file into a Transcript
pub fn parse_raw_transcript_file(path: &Path, folder: &str) -> Result<Transcript, PipelineError> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| PipelineError::invalid(path, format!("unreadable: {}", e)))?;
    parse_raw_transcript(&content, folder).map_err(|reason| PipelineError::invalid(path, reason))
}

/// Parse raw transcript content: YAML front matter between `---` lines, then the body
pub fn parse_raw_transcript(content: &str, folder: &str) -> Result<Transcript, String> {
    let (header, body) = split_front_matter(content).ok_or("missing front matter")?;

    let meta: FrontMatter =
        serde_yaml::from_str(header).map_err(|e| format!("bad front matter: {}", e))?;

    let guest = meta
        .guest
        .filter(|g| !g.trim().is_empty())
        .ok_or("front matter has no guest")?;

    let body = body.trim();
    if body.is_empty() {
        return Err("transcript body is empty".to_string());
    }

    let youtube_url = meta.youtube_url.unwrap_or_default();
    let video_id = meta
        .video_id
        .or_else(|| video_id_from_url(&youtube_url))
        .unwrap_or_default();
    let duration_seconds = meta.duration_seconds.unwrap_or(0);
    let duration = meta
        .duration
        .unwrap_or_else(|| format_duration(duration_seconds));

    Ok(Transcript {
        id: folder.to_string(),
        guest,
        title: meta.title.unwrap_or_default(),
        youtube_url,
        video_id,
        description: meta.description.unwrap_or_default(),
        duration_seconds,
        duration,
        view_count: meta.view_count.unwrap_or(0),
        channel: meta.channel.unwrap_or_default(),
        transcript: body.to_string(),
        folder: folder.to_string(),
        topics: Vec::new(),
    })
}

/// Split `---\n<yaml>\n---\n<body>` into its header and body
fn split_front_matter(content: &str) -> Option<(&str, &str)> {
    let content = content.trim_start_matches('\u{feff}');
    let rest = content
        .strip_prefix("---\n")
        .or_else(|| content.strip_prefix("---\r\n"))?;

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == "---" {
            return Some((&rest[..offset], &rest[offset + line.len()..]));
        }
        offset += line.len();
    }
    None
}

/// Extract the video id from a YouTube watch or short URL
pub fn video_id_from_url(url: &str) -> Option<String> {
    VIDEO_ID
        .captures(url)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

/// Format seconds as H:MM:SS, or M:SS under an hour
pub fn format_duration(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;
    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, secs)
    } else {
        format!("{}:{:02}", minutes, secs)
    }
}
