use serde::{Deserialize, Serialize};

/// Preference summary derived from a user's activity rows
///
/// Rebuilt on every request; never cached or persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    pub user_id: u64,
    /// Mean of the user's non-missing ratings, `None` when every rating is missing
    pub average_rating: Option<f64>,
    /// Most frequent genre among watched videos found in the catalog
    pub most_watched_genre: Option<String>,
    /// `watch_history` values in original row order, duplicates kept
    pub watch_history: Vec<String>,
}
