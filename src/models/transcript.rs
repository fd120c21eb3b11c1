use serde::{Deserialize, Serialize};

/// One ingested podcast episode. Immutable after ingestion.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Transcript {
    /// Stable identifier (the raw folder name)
    pub id: String,
    pub guest: String,
    pub title: String,
    pub youtube_url: String,
    pub video_id: String,
    pub description: String,
    pub duration_seconds: u64,
    /// Human-readable duration, e.g. "1:05:12"
    pub duration: String,
    pub view_count: u64,
    pub channel: String,
    /// Full transcript body
    pub transcript: String,
    pub folder: String,
    /// Top topics assigned by the topic tagger
    pub topics: Vec<String>,
}

impl Transcript {
    /// Number of whitespace-delimited words in the body
    pub fn word_count(&self) -> usize {
        self.transcript.split_whitespace().count()
    }
}

/// YAML front matter at the top of a raw `transcript.md` file
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct FrontMatter {
    pub guest: Option<String>,
    pub title: Option<String>,
    pub youtube_url: Option<String>,
    pub video_id: Option<String>,
    pub description: Option<String>,
    pub duration_seconds: Option<u64>,
    pub duration: Option<String>,
    pub view_count: Option<u64>,
    pub channel: Option<String>,
}

/// Transcript metadata without the body, as shipped in the bundle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Episode {
    pub id: String,
    pub guest: String,
    pub title: String,
    pub youtube_url: String,
    pub video_id: String,
    pub description: String,
    pub duration_seconds: u64,
    pub duration: String,
    pub view_count: u64,
    pub channel: String,
    pub folder: String,
    pub topics: Vec<String>,
    pub word_count: usize,
}

impl From<&Transcript> for Episode {
    fn from(t: &Transcript) -> Self {
        Self {
            id: t.id.clone(),
            guest: t.guest.clone(),
            title: t.title.clone(),
            youtube_url: t.youtube_url.clone(),
            video_id: t.video_id.clone(),
            description: t.description.clone(),
            duration_seconds: t.duration_seconds,
            duration: t.duration.clone(),
            view_count: t.view_count,
            channel: t.channel.clone(),
            folder: t.folder.clone(),
            topics: t.topics.clone(),
            word_count: t.word_count(),
        }
    }
}
