use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::Value;

use hybrid_video_recs::{
    api::{create_router, AppState},
    data::{Datasets, UserActivity, VideoCatalog},
    models::{ActivityRecord, VideoRecord},
};

fn video(id: u64, name: &str, genre: &str, rating: f64, resolution: &str, country: &str) -> VideoRecord {
    VideoRecord {
        video_id: id,
        video_name: name.to_string(),
        video_genre: genre.to_string(),
        video_rating: Some(rating),
        resolution: resolution.to_string(),
        country: country.to_string(),
    }
}

fn watch(user_id: u64, video_id: u64, rating: Option<f64>, label: &str) -> ActivityRecord {
    ActivityRecord {
        user_id,
        video_id,
        rating,
        watch_history: label.to_string(),
    }
}

fn create_test_server() -> TestServer {
    let catalog = VideoCatalog::new(vec![
        video(1, "Chhota Bheem", "Animation", 7.0, "720p", "India"),
        video(2, "Bhoot", "Horror", 5.0, "1080p", "India"),
        video(3, "Spider-Man", "Action", 7.5, "4K", "USA"),
        video(4, "Superbad", "Comedy", 6.0, "720p", "USA"),
        video(5, "The Notebook", "Romance", 9.0, "1080p", "USA"),
    ]);
    let activity = UserActivity::new(vec![
        watch(1, 3, Some(8.0), "Watched fully"),
        watch(1, 4, Some(6.0), "Stopped halfway"),
        watch(1, 3, Some(7.0), "Rewatched"),
        watch(2, 99, None, "Unknown video"),
    ]);

    let state = AppState::new(Datasets::new(catalog, activity));
    TestServer::new(create_router(state)).unwrap()
}

fn video_ids(body: &Value) -> Vec<u64> {
    body["videos"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["video_id"].as_u64().unwrap())
        .collect()
}

#[tokio::test]
async fn test_health_check() {
    let server = create_test_server();
    let response = server.get("/health").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_demographic_recommendations_for_child() {
    let server = create_test_server();

    let response = server
        .get("/api/v1/recommendations/demographic")
        .add_query_param("age", 10)
        .add_query_param("location", "India")
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(video_ids(&body), vec![1]);
    assert_eq!(body["notice"], Value::Null);

    let row = body["videos"][0].as_object().unwrap();
    assert_eq!(row.len(), 6);
    assert_eq!(row["video_genre"], "Animation");
    assert_eq!(row["country"], "India");
}

#[tokio::test]
async fn test_demographic_recommendations_for_adult() {
    let server = create_test_server();

    let response = server
        .get("/api/v1/recommendations/demographic")
        .add_query_param("age", 25)
        .add_query_param("location", "USA")
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(video_ids(&body), vec![3, 4, 5]);
}

#[tokio::test]
async fn test_demographic_no_results_notice() {
    let server = create_test_server();

    let response = server
        .get("/api/v1/recommendations/demographic")
        .add_query_param("age", 30)
        .add_query_param("location", "Brazil")
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert!(video_ids(&body).is_empty());
    assert_eq!(body["notice"], "no_results");
    assert_eq!(
        body["message"],
        "No recommendations found. Try adjusting your inputs."
    );
}

#[tokio::test]
async fn test_demographic_rejects_empty_location() {
    let server = create_test_server();

    let response = server
        .get("/api/v1/recommendations/demographic")
        .add_query_param("age", 30)
        .add_query_param("location", "")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"], "Please enter your location.");
}

#[tokio::test]
async fn test_demographic_rejects_out_of_range_age() {
    let server = create_test_server();

    let response = server
        .get("/api/v1/recommendations/demographic")
        .add_query_param("age", 121)
        .add_query_param("location", "USA")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_personalized_recommendations() {
    let server = create_test_server();

    // User 1: Action twice, average rating 7.0
    let response = server
        .get("/api/v1/recommendations/personalized")
        .add_query_param("user_id", 1)
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(video_ids(&body), vec![1, 3, 5]);
}

#[tokio::test]
async fn test_personalized_with_filters() {
    let server = create_test_server();

    let response = server
        .get("/api/v1/recommendations/personalized")
        .add_query_param("user_id", 1)
        .add_query_param("genre", "")
        .add_query_param("resolution", "4K")
        .add_query_param("title", "man")
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(video_ids(&body), vec![3]);
}

#[tokio::test]
async fn test_personalized_filters_with_no_match() {
    let server = create_test_server();

    let response = server
        .get("/api/v1/recommendations/personalized")
        .add_query_param("user_id", 1)
        .add_query_param("genre", "Horror")
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["notice"], "no_results");
    assert_eq!(
        body["message"],
        "No refined recommendations found. Try adjusting your preferences."
    );
}

#[tokio::test]
async fn test_personalized_without_history() {
    let server = create_test_server();

    for user_id in [2, 77] {
        let response = server
            .get("/api/v1/recommendations/personalized")
            .add_query_param("user_id", user_id)
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert!(video_ids(&body).is_empty());
        assert_eq!(body["notice"], "no_history");
        assert_eq!(body["message"], "No watch history found for this user ID.");
    }
}

#[tokio::test]
async fn test_personalized_rejects_invalid_input() {
    let server = create_test_server();

    let response = server
        .get("/api/v1/recommendations/personalized")
        .add_query_param("user_id", 0)
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let response = server
        .get("/api/v1/recommendations/personalized")
        .add_query_param("user_id", 1)
        .add_query_param("resolution", "8K")
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_user_profile() {
    let server = create_test_server();

    let response = server.get("/api/v1/users/1/profile").await;
    response.assert_status_ok();

    let profile: Value = response.json();
    assert_eq!(profile["user_id"], 1);
    assert_eq!(profile["average_rating"], 7.0);
    assert_eq!(profile["most_watched_genre"], "Action");
    assert_eq!(
        profile["watch_history"],
        serde_json::json!(["Watched fully", "Stopped halfway", "Rewatched"])
    );
}

#[tokio::test]
async fn test_user_profile_not_found() {
    let server = create_test_server();
    let response = server.get("/api/v1/users/500/profile").await;
    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_request_id_is_echoed() {
    let server = create_test_server();

    let response = server.get("/health").await;
    assert!(response.headers().contains_key("x-request-id"));

    let supplied = "3f1c2f0e-2b9a-4a51-9a70-8d4b1b0c6a11";
    let response = server
        .get("/health")
        .add_header(
            axum::http::HeaderName::from_static("x-request-id"),
            axum::http::HeaderValue::from_static(supplied),
        )
        .await;
    assert_eq!(response.headers()["x-request-id"], supplied);
}

#[tokio::test]
async fn test_demographic_missing_age_is_json_error() {
    let server = create_test_server();

    let response = server
        .get("/api/v1/recommendations/demographic")
        .add_query_param("location", "USA")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert!(body["error"].as_str().unwrap().contains("age"));
}

#[tokio::test]
async fn test_non_numeric_ids_are_json_errors() {
    let server = create_test_server();

    let response = server
        .get("/api/v1/recommendations/demographic")
        .add_query_param("age", "abc")
        .add_query_param("location", "USA")
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert!(body["error"].is_string());

    let response = server
        .get("/api/v1/recommendations/personalized")
        .add_query_param("user_id", "abc")
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert!(body["error"].is_string());

    let response = server.get("/api/v1/users/abc/profile").await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert!(body["error"].is_string());
}
