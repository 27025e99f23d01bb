use serde::Serialize;

use super::VideoRecord;

/// Status attached to a recommendation result that came back empty
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Notice {
    /// The user has no activity rows (or none with a usable rating)
    NoHistory,
    /// The filters matched nothing
    NoResults,
}

/// Ordered recommendation result with its implicit status
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Recommendations {
    pub videos: Vec<VideoRecord>,
    pub notice: Option<Notice>,
}

impl Recommendations {
    /// Wraps a result list, flagging `NoResults` when it is empty
    pub fn from_videos(videos: Vec<VideoRecord>) -> Self {
        let notice = videos.is_empty().then_some(Notice::NoResults);
        Self { videos, notice }
    }

    pub fn no_history() -> Self {
        Self {
            videos: Vec::new(),
            notice: Some(Notice::NoHistory),
        }
    }
}
