pub mod contradiction;
pub mod framework;
pub mod insight;
pub mod segment;
pub mod stats;
pub mod transcript;

pub use contradiction::*;
pub use framework::*;
pub use insight::*;
pub use segment::*;
pub use stats::*;
pub use transcript::*;
