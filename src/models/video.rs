use serde::{Deserialize, Serialize};

/// A single row of the video catalog
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VideoRecord {
    /// Unique identifier for the video
    pub video_id: u64,
    /// Display title (e.g., "Spider-Man")
    pub video_name: String,
    /// Genre label (e.g., "Animation", "Drama")
    pub video_genre: String,
    /// Catalog rating, typically on a 0-10 scale; empty cells load as `None`
    #[serde(default)]
    pub video_rating: Option<f64>,
    /// Resolution label: 480p, 720p, 1080p or 4K
    pub resolution: String,
    /// Country the video is offered in
    pub country: String,
}

impl VideoRecord {
    /// Case-insensitive substring match against the video name
    pub fn title_contains(&self, keyword: &str) -> bool {
        self.video_name
            .to_lowercase()
            .contains(&keyword.to_lowercase())
    }
}
