pub mod profile;
pub mod recommendations;

pub use profile::ProfileBuilder;
pub use recommendations::{RecommendationEngine, MAX_RECOMMENDATIONS};
