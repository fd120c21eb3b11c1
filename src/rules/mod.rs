pub mod contradictions;
pub mod frameworks;
pub mod insights;
pub mod matcher;
pub mod topics;

pub use contradictions::{resolution_for, Position, Theme, GENERIC_RESOLUTION, THEMES};
pub use frameworks::{FrameworkRule, FRAMEWORKS};
pub use insights::{InsightSignal, INSIGHT_SIGNALS};
pub use matcher::{PhraseMatcher, RegexMatcher, TextMatcher};
pub use topics::{TopicRule, TOPICS};
