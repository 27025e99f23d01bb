use std::collections::HashMap;

use crate::models::VideoRecord;

/// Videos in file order with an id index for lookups
#[derive(Debug, Clone)]
pub struct VideoCatalog {
    videos: Vec<VideoRecord>,
    index: HashMap<u64, usize>,
}

impl VideoCatalog {
    /// Builds the catalog; when an id repeats, lookups resolve to its first row
    pub fn new(videos: Vec<VideoRecord>) -> Self {
        let mut index = HashMap::with_capacity(videos.len());
        for (position, video) in videos.iter().enumerate() {
            index.entry(video.video_id).or_insert(position);
        }
        Self { videos, index }
    }

    pub fn get(&self, video_id: u64) -> Option<&VideoRecord> {
        self.index.get(&video_id).map(|&position| &self.videos[position])
    }

    /// Genre of a video, if the id exists in the catalog
    pub fn genre_of(&self, video_id: u64) -> Option<&str> {
        self.get(video_id).map(|video| video.video_genre.as_str())
    }

    /// All videos in their original order
    pub fn iter(&self) -> impl Iterator<Item = &VideoRecord> {
        self.videos.iter()
    }

    pub fn len(&self) -> usize {
        self.videos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.videos.is_empty()
    }
}
