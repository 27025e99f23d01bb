mod activity;
mod audience;
mod filters;
mod profile;
mod recommendation;
mod video;

pub use activity::ActivityRecord;
pub use audience::{AgeBand, MAX_AGE};
pub use filters::RecommendationFilters;
pub use profile::UserProfile;
pub use recommendation::{Notice, Recommendations};
pub use video::VideoRecord;
