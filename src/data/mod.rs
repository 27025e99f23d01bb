//! Read-only access to the video catalog and user activity datasets
//!
//! Both tables are loaded once at startup and never mutated afterwards, so a
//! `Datasets` can be shared behind an `Arc` across request handlers.

mod activity;
mod catalog;

use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::{AppError, AppResult};

pub use activity::UserActivity;
pub use catalog::VideoCatalog;

/// The two tables every recommendation is computed from
#[derive(Debug, Clone)]
pub struct Datasets {
    pub catalog: VideoCatalog,
    pub activity: UserActivity,
}

impl Datasets {
    pub fn new(catalog: VideoCatalog, activity: UserActivity) -> Self {
        Self { catalog, activity }
    }

    /// Loads both datasets from CSV files
    pub fn load(video_path: impl AsRef<Path>, user_path: impl AsRef<Path>) -> AppResult<Self> {
        let catalog = VideoCatalog::new(read_csv(video_path.as_ref())?);
        let activity = UserActivity::new(read_csv(user_path.as_ref())?);

        tracing::info!(
            videos = catalog.len(),
            activity_rows = activity.len(),
            "Datasets loaded"
        );

        Ok(Self::new(catalog, activity))
    }
}

/// Deserializes every row of a headed CSV file, keeping file order
fn read_csv<T: DeserializeOwned>(path: &Path) -> AppResult<Vec<T>> {
    let dataset_error = |source: csv::Error| AppError::Dataset {
        path: path.display().to_string(),
        source,
    };

    let mut reader = csv::Reader::from_path(path).map_err(dataset_error)?;
    let rows = reader
        .deserialize()
        .collect::<Result<Vec<T>, _>>()
        .map_err(dataset_error)?;

    tracing::debug!(path = %path.display(), rows = rows.len(), "Read CSV dataset");
    Ok(rows)
}
