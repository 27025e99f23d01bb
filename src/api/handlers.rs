use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::{
    error::{AppError, AppResult},
    models::{Notice, RecommendationFilters, Recommendations, UserProfile, VideoRecord},
    services::RecommendationEngine,
};

use super::validation::{
    validate_age, validate_choice, validate_location, validate_user_id, GENRE_OPTIONS,
    RESOLUTION_OPTIONS,
};
use super::AppState;

const NO_HISTORY_MESSAGE: &str = "No watch history found for this user ID.";
const NO_DEMOGRAPHIC_RESULTS_MESSAGE: &str = "No recommendations found. Try adjusting your inputs.";
const NO_REFINED_RESULTS_MESSAGE: &str =
    "No refined recommendations found. Try adjusting your preferences.";

// Request/Response types

#[derive(Debug, Deserialize)]
pub struct DemographicQuery {
    pub age: i64,
    #[serde(default)]
    pub location: String,
}

#[derive(Debug, Deserialize)]
pub struct PersonalizedQuery {
    pub user_id: i64,
    #[serde(default)]
    pub genre: String,
    #[serde(default)]
    pub resolution: String,
    #[serde(default)]
    pub title: String,
}

#[derive(Debug, Serialize)]
pub struct RecommendationResponse {
    pub videos: Vec<VideoRecord>,
    pub notice: Option<Notice>,
    pub message: Option<&'static str>,
}

impl RecommendationResponse {
    fn new(result: Recommendations, no_results_message: &'static str) -> Self {
        let message = result.notice.map(|notice| match notice {
            Notice::NoHistory => NO_HISTORY_MESSAGE,
            Notice::NoResults => no_results_message,
        });

        Self {
            videos: result.videos,
            notice: result.notice,
            message,
        }
    }
}

// Handlers

/// Health check endpoint
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Stage 1 recommendations from age and location
pub async fn recommend_by_demographics(
    State(state): State<AppState>,
    query: Result<Query<DemographicQuery>, QueryRejection>,
) -> AppResult<Json<RecommendationResponse>> {
    let Query(query) = query?;
    let location = validate_location(&query.location)?;
    let age = validate_age(query.age)?;

    let result = RecommendationEngine::new(&state.datasets).recommend_by_demographics(age, location);

    Ok(Json(RecommendationResponse::new(
        result,
        NO_DEMOGRAPHIC_RESULTS_MESSAGE,
    )))
}

/// Stage 2 recommendations from watch history and optional filters
pub async fn recommend_by_user_data(
    State(state): State<AppState>,
    query: Result<Query<PersonalizedQuery>, QueryRejection>,
) -> AppResult<Json<RecommendationResponse>> {
    let Query(query) = query?;
    let user_id = validate_user_id(query.user_id)?;
    let genre = validate_choice("genre", &query.genre, GENRE_OPTIONS)?;
    let resolution = validate_choice("resolution", &query.resolution, RESOLUTION_OPTIONS)?;
    let filters = RecommendationFilters::from_form(genre, resolution, &query.title);

    let result = RecommendationEngine::new(&state.datasets).recommend_by_user_data(user_id, &filters);

    Ok(Json(RecommendationResponse::new(
        result,
        NO_REFINED_RESULTS_MESSAGE,
    )))
}

/// Derived preference profile for a user
pub async fn get_user_profile(
    State(state): State<AppState>,
    user_id: Result<Path<i64>, PathRejection>,
) -> AppResult<Json<UserProfile>> {
    let Path(user_id) = user_id?;
    let user_id = validate_user_id(user_id)?;

    RecommendationEngine::new(&state.datasets)
        .profile(user_id)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("No watch history for user {}", user_id)))
}
