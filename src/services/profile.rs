use std::collections::HashMap;

use crate::{
    data::{UserActivity, VideoCatalog},
    models::UserProfile,
};

/// Derives a user's implicit preferences from their activity rows
pub struct ProfileBuilder<'a> {
    catalog: &'a VideoCatalog,
    activity: &'a UserActivity,
}

impl<'a> ProfileBuilder<'a> {
    pub fn new(catalog: &'a VideoCatalog, activity: &'a UserActivity) -> Self {
        Self { catalog, activity }
    }

    /// Builds the profile for `user_id`, or `None` when the user has no activity rows
    ///
    /// Missing or NaN ratings are left out of the mean. Rows whose video is not in
    /// the catalog are skipped for the genre count but still appear in the watch
    /// history.
    pub fn build_profile(&self, user_id: u64) -> Option<UserProfile> {
        let mut rating_sum = 0.0;
        let mut rating_count = 0usize;
        let mut genres = Vec::new();
        let mut watch_history = Vec::new();

        for record in self.activity.for_user(user_id) {
            if let Some(rating) = record.rating.filter(|r| !r.is_nan()) {
                rating_sum += rating;
                rating_count += 1;
            }

            match self.catalog.genre_of(record.video_id) {
                Some(genre) => genres.push(genre),
                None => tracing::debug!(
                    user_id,
                    video_id = record.video_id,
                    "Activity references a video missing from the catalog"
                ),
            }

            watch_history.push(record.watch_history.clone());
        }

        if watch_history.is_empty() {
            return None;
        }

        let average_rating = (rating_count > 0).then(|| rating_sum / rating_count as f64);
        if average_rating.is_none() {
            tracing::warn!(user_id, "User has activity but no usable ratings");
        }

        Some(UserProfile {
            user_id,
            average_rating,
            most_watched_genre: most_frequent(&genres).map(str::to_string),
            watch_history,
        })
    }
}

/// Most frequent value, ties going to whichever value was seen first
fn most_frequent<'v>(values: &[&'v str]) -> Option<&'v str> {
    // value -> (count, first index)
    let mut counts: HashMap<&'v str, (usize, usize)> = HashMap::new();
    for (index, &value) in values.iter().enumerate() {
        counts.entry(value).or_insert((0, index)).0 += 1;
    }

    counts
        .into_iter()
        .max_by(|(_, (count_a, first_a)), (_, (count_b, first_b))| {
            count_a.cmp(count_b).then(first_b.cmp(first_a))
        })
        .map(|(value, _)| value)
}
