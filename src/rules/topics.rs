use once_cell::sync::Lazy;

use super::matcher::{re, TextMatcher};

/// A named topic and the keyword pattern that signals it
pub struct TopicRule {
    pub name: &'static str,
    pub matcher: Box<dyn TextMatcher>,
}

/// Topic keyword table, in declaration order
pub static TOPICS: Lazy<Vec<TopicRule>> = Lazy::new(|| {
    [
        ("product management", r"\b(product managers?|pms?|product management|prioritiz\w*)\b"),
        ("growth", r"\b(growth|retention|activation|acquisition|churn)\b"),
        ("leadership", r"\b(leaders?|leadership|managers?|manage|delegat\w*)\b"),
        ("hiring", r"\b(hir(e|es|ed|ing)|recruit\w*|interview\w*|candidates?)\b"),
        ("strategy", r"\b(strateg(y|ic|ies)|vision|competitive advantage|moats?)\b"),
        ("pricing", r"\b(pric(e|es|ed|ing)|monetiz\w*|revenue|paywall)\b"),
        ("design", r"\b(design\w*|craft|user experience|ux)\b"),
        ("positioning", r"\b(position(ing)?|messaging|category|differentiat\w*)\b"),
        ("startups", r"\b(startups?|founders?|fundrais\w*|seed|series [a-d])\b"),
        ("metrics", r"\b(metrics?|data|a/b tests?|experiment\w*|dashboards?)\b"),
        ("customers", r"\b(customers?|users?|user research|feedback)\b"),
        ("career", r"\b(careers?|promot(ed|ion)|mentors?|coach\w*)\b"),
        ("ai", r"\b(ai|artificial intelligence|machine learning|llms?|gpt)\b"),
    ]
    .into_iter()
    .map(|(name, pattern)| TopicRule {
        name,
        matcher: re(pattern),
    })
    .collect()
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topic_table_compiles() {
        assert!(TOPICS.len() >= 10);
        assert!(TOPICS.iter().all(|t| !t.name.is_empty()));
    }
}
