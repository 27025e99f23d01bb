use crate::{
    data::Datasets,
    models::{AgeBand, RecommendationFilters, Recommendations, UserProfile, VideoRecord},
    services::ProfileBuilder,
};

/// Upper bound on rows returned by either recommendation mode
pub const MAX_RECOMMENDATIONS: usize = 10;

/// Rule-based recommender over the loaded datasets
///
/// Stateless: every call reads the shared tables and recomputes whatever it
/// needs, so one engine can serve any number of concurrent readers.
pub struct RecommendationEngine<'a> {
    datasets: &'a Datasets,
}

impl<'a> RecommendationEngine<'a> {
    pub fn new(datasets: &'a Datasets) -> Self {
        Self { datasets }
    }

    /// Stage 1: videos offered in `location` that suit the viewer's age band
    ///
    /// `location` is compared exactly (case-sensitive). Rows keep catalog order.
    pub fn recommend_by_demographics(&self, age: u32, location: &str) -> Recommendations {
        let band = AgeBand::from_age(age);

        let videos = take_first(
            self.datasets
                .catalog
                .iter()
                .filter(|video| video.country == location)
                .filter(|video| band.permits(&video.video_genre)),
        );

        tracing::info!(
            age,
            location,
            age_band = ?band,
            count = videos.len(),
            "Demographic recommendations computed"
        );

        Recommendations::from_videos(videos)
    }

    /// Stage 2: videos matching the user's history, narrowed by explicit filters
    ///
    /// A video passes the base filter when its genre is the user's most watched
    /// genre or its rating is at least the user's average rating. Unrated videos
    /// only pass on genre. Users with no
    /// activity, or no usable ratings, get an empty result flagged `NoHistory`.
    pub fn recommend_by_user_data(
        &self,
        user_id: u64,
        filters: &RecommendationFilters,
    ) -> Recommendations {
        let Some(profile) = self.profile(user_id) else {
            tracing::info!(user_id, "No watch history for user");
            return Recommendations::no_history();
        };
        let Some(average_rating) = profile.average_rating else {
            tracing::info!(user_id, "No ratings recorded for user");
            return Recommendations::no_history();
        };
        let favourite_genre = profile.most_watched_genre.as_deref();

        let videos = take_first(
            self.datasets
                .catalog
                .iter()
                .filter(|video| {
                    favourite_genre == Some(video.video_genre.as_str())
                        || video.video_rating.is_some_and(|rating| rating >= average_rating)
                })
                .filter(|video| filters.matches(video)),
        );

        tracing::info!(
            user_id,
            average_rating,
            most_watched_genre = ?favourite_genre,
            filters = ?filters,
            count = videos.len(),
            "Personalized recommendations computed"
        );

        Recommendations::from_videos(videos)
    }

    /// Current preference profile for a user
    pub fn profile(&self, user_id: u64) -> Option<UserProfile> {
        ProfileBuilder::new(&self.datasets.catalog, &self.datasets.activity).build_profile(user_id)
    }
}

fn take_first<'v>(videos: impl Iterator<Item = &'v VideoRecord>) -> Vec<VideoRecord> {
    videos.take(MAX_RECOMMENDATIONS).cloned().collect()
}
