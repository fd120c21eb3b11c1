use regex::Regex;

/// Anything that can test and count pattern hits in a piece of text.
///
/// Rule tables hold matchers behind this trait so a rule can mix literal
/// phrases and regular expressions.
pub trait TextMatcher: Send + Sync {
    /// Whether the text contains at least one match
    fn is_match(&self, text: &str) -> bool;

    /// Number of non-overlapping matches in the text
    fn count(&self, text: &str) -> usize;

    /// Human-readable form of the pattern
    fn pattern(&self) -> &str;
}

/// Regular expression matcher
#[derive(Debug, Clone)]
pub struct RegexMatcher {
    regex: Regex,
}

impl RegexMatcher {
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            regex: Regex::new(pattern)?,
        })
    }

    /// Compile a case-insensitive matcher
    pub fn case_insensitive(pattern: &str) -> Result<Self, regex::Error> {
        Self::new(&format!("(?i){}", pattern))
    }
}

impl TextMatcher for RegexMatcher {
    fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    fn count(&self, text: &str) -> usize {
        self.regex.find_iter(text).count()
    }

    fn pattern(&self) -> &str {
        self.regex.as_str()
    }
}

/// Case-insensitive literal phrase matcher
#[derive(Debug, Clone)]
pub struct PhraseMatcher {
    phrase: String,
}

impl PhraseMatcher {
    pub fn new(phrase: &str) -> Self {
        Self {
            phrase: phrase.to_lowercase(),
        }
    }
}

impl TextMatcher for PhraseMatcher {
    fn is_match(&self, text: &str) -> bool {
        text.to_lowercase().contains(&self.phrase)
    }

    fn count(&self, text: &str) -> usize {
        if self.phrase.is_empty() {
            return 0;
        }
        text.to_lowercase().matches(self.phrase.as_str()).count()
    }

    fn pattern(&self) -> &str {
        &self.phrase
    }
}

/// Build a boxed case-insensitive regex matcher for a static rule table.
///
/// Panics on an invalid pattern; table patterns are constants covered by tests.
pub(crate) fn re(pattern: &str) -> Box<dyn TextMatcher> {
    Box::new(RegexMatcher::case_insensitive(pattern).unwrap())
}

/// Build a boxed literal phrase matcher for a static rule table
pub(crate) fn phrase(text: &str) -> Box<dyn TextMatcher> {
    Box::new(PhraseMatcher::new(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regex_matcher_counts_all_matches() {
        let matcher = RegexMatcher::case_insensitive(r"\bfounder mode\b").unwrap();

        assert!(matcher.is_match("Founder Mode is back"));
        assert_eq!(matcher.count("founder mode, FOUNDER MODE, founder-mode"), 2);
    }

    #[test]
    fn test_phrase_matcher_ignores_case() {
        let matcher = PhraseMatcher::new("My advice");

        assert!(matcher.is_match("and my ADVICE is simple"));
        assert_eq!(matcher.count("my advice, my advice"), 2);
        assert!(!matcher.is_match("advice from me"));
    }

    #[test]
    fn test_invalid_pattern_is_an_error() {
        assert!(RegexMatcher::new(r"(unclosed").is_err());
    }

    #[test]
    fn test_pattern_reports_source() {
        assert_eq!(PhraseMatcher::new("Rule Of Thumb").pattern(), "rule of thumb");
        assert_eq!(RegexMatcher::new("abc").unwrap().pattern(), "abc");
    }
}
