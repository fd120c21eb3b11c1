use once_cell::sync::Lazy;
use regex::Regex;

/// Sentence terminator followed by whitespace
static SENTENCE_BREAK: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]\s+").unwrap());

/// Split text into trimmed, non-empty sentences.
///
/// A sentence ends at `.`, `!` or `?` followed by whitespace; the terminator
/// stays with the sentence it closes.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;

    for m in SENTENCE_BREAK.find_iter(text) {
        // Terminators are single-byte ASCII
        let end = m.start() + 1;
        push_trimmed(&mut sentences, &text[start..end]);
        start = m.end();
    }
    push_trimmed(&mut sentences, &text[start..]);

    sentences
}

fn push_trimmed<'a>(sentences: &mut Vec<&'a str>, piece: &'a str) {
    let piece = piece.trim();
    if !piece.is_empty() {
        sentences.push(piece);
    }
}

/// Whitespace-delimited words
pub fn split_words(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

/// Length in characters, not bytes
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Whether a trimmed length lies strictly between `min` and `max`
pub fn length_within(text: &str, min: usize, max: usize) -> bool {
    let len = char_len(text);
    len > min && len < max
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_sentences() {
        let text = "First one. Second one!  Third one? Trailing";
        assert_eq!(
            split_sentences(text),
            vec!["First one.", "Second one!", "Third one?", "Trailing"]
        );
    }

    #[test]
    fn test_split_sentences_keeps_inline_punctuation() {
        let text = "Version 2.0 shipped. It was great...\nReally.";
        assert_eq!(
            split_sentences(text),
            vec!["Version 2.0 shipped.", "It was great...", "Really."]
        );
    }

    #[test]
    fn test_split_sentences_empty() {
        assert!(split_sentences("").is_empty());
        assert!(split_sentences("   \n ").is_empty());
    }

    #[test]
    fn test_length_within_is_exclusive() {
        assert!(!length_within("abc", 3, 10));
        assert!(length_within("abcd", 3, 10));
        assert!(!length_within("abcdefghij", 3, 10));
        // Multi-byte characters count once
        assert!(length_within("éééé", 3, 5));
    }
}
