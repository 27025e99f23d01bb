use super::VideoRecord;

/// Optional explicit preferences layered on top of the history-based base filter
///
/// Each field is independent; present fields are combined with logical AND.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecommendationFilters {
    /// Exact match on `video_genre`
    pub genre: Option<String>,
    /// Exact match on `resolution`
    pub resolution: Option<String>,
    /// Case-insensitive substring of `video_name`
    pub title: Option<String>,
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

impl RecommendationFilters {
    /// Builds filters from raw form values, where an empty string means "no filter"
    pub fn from_form(genre: &str, resolution: &str, title: &str) -> Self {
        Self {
            genre: non_empty(genre),
            resolution: non_empty(resolution),
            title: non_empty(title),
        }
    }

    /// Checks a video against every present filter
    pub fn matches(&self, video: &VideoRecord) -> bool {
        if let Some(genre) = &self.genre {
            if video.video_genre != *genre {
                return false;
            }
        }
        if let Some(resolution) = &self.resolution {
            if video.resolution != *resolution {
                return false;
            }
        }
        if let Some(title) = &self.title {
            if !video.title_contains(title) {
                return false;
            }
        }
        true
    }
}
