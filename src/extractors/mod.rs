pub mod contradictions;
pub mod frameworks;
pub mod insights;
pub mod segmenter;
pub mod timestamps;
pub mod topics;

pub use contradictions::*;
pub use frameworks::*;
pub use insights::*;
pub use segmenter::*;
pub use timestamps::*;
pub use topics::*;
