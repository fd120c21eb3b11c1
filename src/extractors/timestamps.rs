use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::models::TimestampMarker;

/// An inline time notation. Two-field notations are minutes:seconds.
struct MarkerPattern {
    regex: Regex,
    has_hours: bool,
}

static MARKER_PATTERNS: Lazy<Vec<MarkerPattern>> = Lazy::new(|| {
    [
        (r"\[(\d{1,2}):(\d{2}):(\d{2})\]", true),
        (r"\((\d{1,2}):(\d{2}):(\d{2})\)", true),
        (r"\[(\d{1,2}):(\d{2})\]", false),
        (r"(?m)^(\d{1,2}):(\d{2}):(\d{2})", true),
    ]
    .into_iter()
    .map(|(pattern, has_hours)| MarkerPattern {
        regex: Regex::new(pattern).unwrap(),
        has_hours,
    })
    .collect()
});

/// Find every inline time marker, ordered by position in the text.
///
/// Markers from all notations are merged. When two notations match the same
/// span both markers are kept; the sort is stable so they stay in notation
/// order.
pub fn extract_timestamps(text: &str) -> Vec<TimestampMarker> {
    let mut markers = Vec::new();

    for pattern in MARKER_PATTERNS.iter() {
        for caps in pattern.regex.captures_iter(text) {
            let Some(seconds) = elapsed_seconds(&caps, pattern.has_hours) else {
                continue;
            };
            let whole = &caps[0];
            markers.push(TimestampMarker {
                position: caps.get(0).map(|m| m.start()).unwrap_or(0),
                seconds,
                text: whole.to_string(),
            });
        }
    }

    markers.sort_by_key(|m| m.position);
    markers
}

fn elapsed_seconds(caps: &Captures, has_hours: bool) -> Option<u64> {
    let field = |i: usize| -> Option<u64> { caps.get(i)?.as_str().parse().ok() };

    let (hours, minutes, seconds) = if has_hours {
        (field(1)?, field(2)?, field(3)?)
    } else {
        (0, field(1)?, field(2)?)
    };

    Some(hours * 3600 + minutes * 60 + seconds)
}
