use serde::{Deserialize, Serialize};

/// One watch event from the user activity dataset
///
/// A user has one row per watched video, so `user_id` is not unique.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActivityRecord {
    pub user_id: u64,
    /// References `VideoRecord::video_id`; may point at a video missing from the catalog
    pub video_id: u64,
    /// The user's own rating; empty cells load as `None`
    #[serde(default)]
    pub rating: Option<f64>,
    /// Free-form label describing the watch event
    #[serde(default)]
    pub watch_history: String,
}
