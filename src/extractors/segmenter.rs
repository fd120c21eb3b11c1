use crate::models::{format_timestamp, Segment, SegmentConfig, TimestampMarker, Transcript};
use crate::text::split_words;

use super::timestamps::extract_timestamps;

/// Word-range boundaries of each window, `[start, end)`.
///
/// Windows start every `stride` words and stop after the first window that
/// reaches the end of the text.
pub fn window_bounds(word_count: usize, config: &SegmentConfig) -> Vec<(usize, usize)> {
    let mut bounds = Vec::new();
    let stride = config.stride();
    let mut start = 0;

    while start < word_count {
        let end = (start + config.window_words).min(word_count);
        bounds.push((start, end));
        if end == word_count {
            break;
        }
        start += stride;
    }

    bounds
}

/// Split a transcript into overlapping word windows with approximate start times
pub fn segment_transcript(transcript: &Transcript, config: &SegmentConfig) -> Vec<Segment> {
    let text = transcript.transcript.as_str();
    let words = split_words(text);
    let markers = extract_timestamps(text);

    window_bounds(words.len(), config)
        .into_iter()
        .enumerate()
        .map(|(ordinal, (start, end))| {
            let start_time = approximate_start_time(text, words[start], &markers);
            Segment {
                id: format!("{}_{}", transcript.id, ordinal),
                episode_id: transcript.id.clone(),
                guest: transcript.guest.clone(),
                title: transcript.title.clone(),
                text: words[start..end].join(" "),
                start_time,
                timestamp: format_timestamp(start_time),
                word_start: start,
                word_end: end,
            }
        })
        .collect()
}

/// Start time for a window beginning with `first_word`.
///
/// Uses the first occurrence of the word in the text, so a word repeated
/// earlier in the transcript maps to that earlier position. The time is the
/// first marker at or after that position, else the first marker overall,
/// else zero.
fn approximate_start_time(text: &str, first_word: &str, markers: &[TimestampMarker]) -> u64 {
    let position = text.find(first_word).unwrap_or(0);

    markers
        .iter()
        .find(|m| m.position >= position)
        .or_else(|| markers.first())
        .map(|m| m.seconds)
        .unwrap_or(0)
}
