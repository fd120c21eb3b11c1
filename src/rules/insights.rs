use once_cell::sync::Lazy;

use super::matcher::{phrase, re, TextMatcher};

/// A phrase that signals a sentence is giving advice
pub struct InsightSignal {
    pub label: &'static str,
    pub matcher: Box<dyn TextMatcher>,
}

/// Advice-signaling phrases, in declaration order
pub static INSIGHT_SIGNALS: Lazy<Vec<InsightSignal>> = Lazy::new(|| {
    vec![
        InsightSignal { label: "my advice", matcher: phrase("my advice") },
        InsightSignal { label: "the key is", matcher: re(r"\bthe (key|trick|secret) (is|was)\b") },
        InsightSignal { label: "most important", matcher: re(r"\bthe (most important|biggest) (thing|lesson|mistake)\b") },
        InsightSignal { label: "what i learned", matcher: re(r"\bwhat (i|we)('ve)? learned\b") },
        InsightSignal { label: "you should", matcher: re(r"\byou (should|need to|have to|must)\b") },
        InsightSignal { label: "never", matcher: re(r"\b(never|always) (ever )?(hire|ship|launch|build|start|skip)\b") },
        InsightSignal { label: "rule of thumb", matcher: phrase("rule of thumb") },
        InsightSignal { label: "counterintuitive", matcher: re(r"\bcounter-?intuitive\b") },
        InsightSignal { label: "mistake", matcher: re(r"\b(common|biggest) mistakes?\b") },
        InsightSignal { label: "i believe", matcher: re(r"\bi (really |strongly )?believe\b") },
    ]
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signal_labels_are_unique() {
        let mut labels: Vec<&str> = INSIGHT_SIGNALS.iter().map(|s| s.label).collect();
        let total = labels.len();
        labels.sort();
        labels.dedup();
        assert_eq!(labels.len(), total);
    }

    #[test]
    fn test_signals_match_case_insensitively() {
        let text = "The Key Is to talk to customers every single week.";
        assert!(INSIGHT_SIGNALS.iter().any(|s| s.matcher.is_match(text)));
    }
}
