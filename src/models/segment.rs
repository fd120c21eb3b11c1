use serde::{Deserialize, Serialize};

/// Configuration for word-window segmentation
#[derive(Debug, Clone)]
pub struct SegmentConfig {
    /// Words per window
    pub window_words: usize,
    /// Words shared between consecutive windows
    pub overlap_words: usize,
}

impl Default for SegmentConfig {
    fn default() -> Self {
        Self {
            window_words: 500,
            overlap_words: 50,
        }
    }
}

impl SegmentConfig {
    /// Distance in words between consecutive window starts
    pub fn stride(&self) -> usize {
        self.window_words.saturating_sub(self.overlap_words).max(1)
    }
}

/// An inline time marker found in transcript text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimestampMarker {
    /// Byte offset of the match in the source text
    pub position: usize,
    /// Elapsed seconds since the start of the episode
    pub seconds: u64,
    /// The raw matched text, e.g. "[00:01:30]"
    pub text: String,
}

/// A fixed-size, overlapping slice of a transcript's words
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// `<episode_id>_<ordinal>`
    pub id: String,
    pub episode_id: String,
    pub guest: String,
    pub title: String,
    pub text: String,
    /// Approximate start time in seconds
    pub start_time: u64,
    /// `start_time` rendered as HH:MM:SS
    pub timestamp: String,
    /// First word index (inclusive)
    pub word_start: usize,
    /// Last word index (exclusive)
    pub word_end: usize,
}

impl Segment {
    pub fn word_count(&self) -> usize {
        self.word_end.saturating_sub(self.word_start)
    }
}

/// Format seconds as HH:MM:SS
pub fn format_timestamp(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, secs)
}
