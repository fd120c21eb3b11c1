use once_cell::sync::Lazy;

use super::matcher::{re, TextMatcher};

/// One side of a contradiction theme
pub struct Position {
    pub stance: &'static str,
    pub typical_advice: &'static str,
    pub patterns: Vec<Box<dyn TextMatcher>>,
}

impl Position {
    pub fn matches(&self, sentence: &str) -> bool {
        self.patterns.iter().any(|p| p.is_match(sentence))
    }
}

/// A topic where guests give opposing advice
pub struct Theme {
    pub id: &'static str,
    pub topic: &'static str,
    pub position_a: Position,
    pub position_b: Position,
}

fn position(stance: &'static str, typical_advice: &'static str, patterns: &[&str]) -> Position {
    Position {
        stance,
        typical_advice,
        patterns: patterns.iter().map(|p| re(p)).collect(),
    }
}

pub const GENERIC_RESOLUTION: &str =
    "Both approaches can work. The right choice depends on your stage, team and market.";

static RESOLUTIONS: &[(&str, &str)] = &[
    (
        "delegation",
        "Stay in the details on the few things that define the product; delegate the rest to people you trust and review outcomes.",
    ),
    (
        "data_vs_intuition",
        "Use intuition to choose bets and data to check them. Early products lack data, mature products lack taste.",
    ),
    (
        "speed_vs_quality",
        "Move fast on reversible decisions and invest in craft where customers actually feel it.",
    ),
    (
        "niche_vs_broad",
        "Start with a niche you can win, then expand once you dominate it.",
    ),
    (
        "growth_motion",
        "Product-led and sales-led motions combine well: self-serve for adoption, sales for expansion into larger accounts.",
    ),
];

/// Resolution hint for a theme, falling back to a generic note
pub fn resolution_for(theme_id: &str) -> &'static str {
    RESOLUTIONS
        .iter()
        .find(|(id, _)| *id == theme_id)
        .map(|(_, hint)| *hint)
        .unwrap_or(GENERIC_RESOLUTION)
}

/// Contradiction themes, in declaration order
pub static THEMES: Lazy<Vec<Theme>> = Lazy::new(|| {
    vec![
        Theme {
            id: "delegation",
            topic: "Delegation vs. Founder Involvement",
            position_a: position(
                "Delegate and empower",
                "Hire great people, give them context and get out of their way.",
                &[
                    r"\bempower(ed|ing|ment)?\b",
                    r"\bdelegat(e|es|ed|ing|ion)\b",
                    r"\btrust (your|the) (team|people)\b",
                    r"\bget out of (their|the) way\b",
                ],
            ),
            position_b: position(
                "Stay in the details",
                "Great founders stay in the details and review the work closely.",
                &[
                    r"\bfounder mode\b",
                    r"\bstay(ed|ing|s)?\b.{0,40}\bdetails?\b",
                    r"\bin the details\b",
                    r"\bmicromanag\w*\b",
                ],
            ),
        },
        Theme {
            id: "data_vs_intuition",
            topic: "Data-Driven vs. Intuition",
            position_a: position(
                "Trust the data",
                "Instrument everything, run experiments and let the numbers decide.",
                &[
                    r"\bdata[- ]driven\b",
                    r"\ba/b tests?\b",
                    r"\bexperiment(s|ation)?\b",
                ],
            ),
            position_b: position(
                "Trust your intuition",
                "Data can't tell you what to build next; rely on taste and conviction.",
                &[
                    r"\bintuition\b",
                    r"\bgut (feel|feeling|instinct)\b",
                    r"\btaste\b",
                    r"\bconviction\b",
                ],
            ),
        },
        Theme {
            id: "speed_vs_quality",
            topic: "Speed vs. Quality",
            position_a: position(
                "Ship fast",
                "Speed is a competitive advantage. Ship, learn and iterate.",
                &[
                    r"\bship(ping)? (fast|quickly|early)\b",
                    r"\bmove fast\b",
                    r"\bspeed\b",
                ],
            ),
            position_b: position(
                "Obsess over quality",
                "Take the time to get it right; quality compounds.",
                &[r"\bcraft\b", r"\bquality\b", r"\bpolish(ed)?\b"],
            ),
        },
        Theme {
            id: "niche_vs_broad",
            topic: "Niche vs. Broad Market",
            position_a: position(
                "Go narrow",
                "Win a specific segment that loves you before expanding.",
                &[
                    r"\bniche\b",
                    r"\bnarrow(er)? (market|segment|focus)\b",
                    r"\bbest[- ]fit customers?\b",
                ],
            ),
            position_b: position(
                "Go broad",
                "Build for a large market from day one.",
                &[
                    r"\bmass market\b",
                    r"\bbroad(er)? (audience|market)\b",
                    r"\bfor everyone\b",
                ],
            ),
        },
        Theme {
            id: "growth_motion",
            topic: "Product-Led vs. Sales-Led Growth",
            position_a: position(
                "Product-led",
                "Let the product drive acquisition and conversion through self-serve.",
                &[
                    r"\bproduct[- ]led\b",
                    r"\bself[- ]serve\b",
                    r"\bfreemium\b",
                    r"\bfree trials?\b",
                ],
            ),
            position_b: position(
                "Sales-led",
                "Complex products need a sales team to land and expand accounts.",
                &[
                    r"\bsales[- ]led\b",
                    r"\bsales (team|reps?|people)\b",
                    r"\benterprise sales\b",
                ],
            ),
        },
        Theme {
            id: "roadmaps",
            topic: "Roadmaps vs. Outcomes",
            position_a: position(
                "Commit to a roadmap",
                "A clear roadmap aligns the company and sets expectations.",
                &[r"\broadmaps?\b.{0,40}\b(align|commit|plan)\w*\b", r"\bquarterly plan\w*\b"],
            ),
            position_b: position(
                "Focus on outcomes",
                "Roadmaps of features are a trap; give teams outcomes to achieve.",
                &[r"\boutcomes? over outputs?\b", r"\bfeature factor(y|ies)\b"],
            ),
        },
    ]
});
