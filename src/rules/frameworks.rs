use once_cell::sync::Lazy;

use super::matcher::{re, TextMatcher};

/// A named framework and the patterns that detect a mention of it.
///
/// Patterns are tried in declaration order; the first one that matches a
/// transcript is used for counting and context capture.
pub struct FrameworkRule {
    pub name: &'static str,
    pub creator: &'static str,
    pub description: &'static str,
    pub patterns: Vec<Box<dyn TextMatcher>>,
}

impl FrameworkRule {
    /// First pattern that matches anywhere in the text
    pub fn first_matching_pattern(&self, text: &str) -> Option<&dyn TextMatcher> {
        self.patterns
            .iter()
            .map(|p| p.as_ref())
            .find(|p| p.is_match(text))
    }
}

fn rule(
    name: &'static str,
    creator: &'static str,
    description: &'static str,
    patterns: &[&str],
) -> FrameworkRule {
    FrameworkRule {
        name,
        creator,
        description,
        patterns: patterns.iter().map(|p| re(p)).collect(),
    }
}

/// Framework detection table, in declaration order
pub static FRAMEWORKS: Lazy<Vec<FrameworkRule>> = Lazy::new(|| {
    vec![
        rule(
            "Founder Mode",
            "Brian Chesky",
            "Founders stay deeply involved in the details instead of delegating everything to managers",
            &[r"\bfounder mode\b"],
        ),
        rule(
            "11-Star Experience",
            "Brian Chesky",
            "Imagine the experience at 5, 6, 7 ... 11 stars, then work back to something buildable that delights",
            &[r"\b(11|eleven)[- ]star\b", r"\b(seven|7)[- ]star experience\b"],
        ),
        rule(
            "LNO Framework",
            "Shreyas Doshi",
            "Classify tasks as Leverage, Neutral or Overhead and spend effort accordingly",
            &[r"\bLNO\b", r"\bleverage,? neutral,? (and |or )?overhead\b"],
        ),
        rule(
            "Pre-mortem",
            "Shreyas Doshi (popularized), Gary Klein",
            "Before a launch, imagine it failed and list the reasons why",
            &[r"\bpre-?mortems?\b"],
        ),
        rule(
            "Three Levels of Product Work",
            "Shreyas Doshi",
            "Impact, execution and optics: know which level a discussion is happening at",
            &[
                r"\b(three|3) levels of product work\b",
                r"\bimpact,? execution,? (and )?optics\b",
            ],
        ),
        rule(
            "Jobs to Be Done",
            "Clayton Christensen",
            "Customers hire products to make progress on a job in their lives",
            &[r"\bjobs[- ]to[- ]be[- ]done\b", r"\bJTBD\b"],
        ),
        rule(
            "Obviously Awesome Positioning",
            "April Dunford",
            "Start from competitive alternatives and unique attributes, then pick the market frame that makes value obvious",
            &[
                r"\bobviously awesome\b",
                r"\bpositioning (framework|process|exercise)\b",
            ],
        ),
        rule(
            "Best-Fit Customers",
            "April Dunford",
            "Define the customers who care most about your differentiated value and target them first",
            &[r"\bbest[- ]fit customers?\b"],
        ),
        rule(
            "Reverse Trial",
            "Elena Verna",
            "Give new users the premium tier for a limited time, then downgrade them to free",
            &[r"\breverse trials?\b"],
        ),
        rule(
            "Growth Loops",
            "Reforge",
            "Model growth as closed loops where output of one cycle feeds the next, instead of funnels",
            &[r"\bgrowth loops?\b", r"\b(viral|content|paid) loops?\b"],
        ),
        rule(
            "Product-Led Growth",
            "OpenView",
            "Use the product itself as the main driver of acquisition, conversion and expansion",
            &[r"\bproduct[- ]led growth\b", r"\bPLG\b"],
        ),
        rule(
            "Four Big Risks",
            "Marty Cagan",
            "Discovery tackles value, usability, feasibility and business viability risk before building",
            &[
                r"\b(four|4) (big )?risks\b",
                r"\bvalue,? usability,? feasibility,? (and )?(business )?viability\b",
            ],
        ),
        rule(
            "Empowered Product Teams",
            "Marty Cagan",
            "Give teams problems to solve rather than features to build, and hold them accountable for outcomes",
            &[r"\bempowered (product )?teams?\b"],
        ),
        rule(
            "North Star Metric",
            "Sean Ellis",
            "A single metric that captures the core value the product delivers to customers",
            &[r"\bnorth star metric\b", r"\bnorth star\b"],
        ),
        rule(
            "RICE Prioritization",
            "Intercom",
            "Score ideas by Reach, Impact, Confidence and Effort",
            &[r"\bRICE (score|framework|prioriti[sz]ation)\b"],
        ),
        rule(
            "Working Backwards",
            "Amazon",
            "Write the press release and FAQ before building anything",
            &[r"\bworking backwards\b", r"\bPR/?FAQs?\b"],
        ),
        rule(
            "Disagree and Commit",
            "Amazon",
            "Voice disagreement, then fully commit once a decision is made",
            &[r"\bdisagree and commit\b"],
        ),
        rule(
            "One-Way and Two-Way Doors",
            "Jeff Bezos",
            "Move fast on reversible decisions, slow down on irreversible ones",
            &[r"\b(one|two)[- ]way doors?\b"],
        ),
        rule(
            "Opportunity Solution Tree",
            "Teresa Torres",
            "Map a desired outcome to opportunities and then to candidate solutions and experiments",
            &[r"\bopportunity solution trees?\b"],
        ),
    ]
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_framework_names_are_unique() {
        let mut names: Vec<&str> = FRAMEWORKS.iter().map(|r| r.name).collect();
        let total = names.len();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), total);
    }

    #[test]
    fn test_first_matching_pattern_respects_declaration_order() {
        let lno = FRAMEWORKS.iter().find(|r| r.name == "LNO Framework").unwrap();

        let text = "Use leverage, neutral and overhead. LNO is short for that.";
        let pattern = lno.first_matching_pattern(text).unwrap();
        assert_eq!(pattern.pattern(), "(?i)\\bLNO\\b");

        let text = "Use leverage, neutral and overhead tasks wisely.";
        let pattern = lno.first_matching_pattern(text).unwrap();
        assert!(pattern.pattern().contains("leverage"));
    }

    #[test]
    fn test_no_rule_matches_unrelated_text() {
        let text = "We talked about the weather and lunch.";
        assert!(FRAMEWORKS.iter().all(|r| r.first_matching_pattern(text).is_none()));
    }
}
