use hybrid_video_recs::{
    api::{create_router, AppState},
    config::Config,
    data::Datasets,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env()?;

    // Both tables are loaded once and stay read-only for the life of the process
    let datasets = Datasets::load(&config.video_dataset_path, &config.user_dataset_path)?;
    let state = AppState::new(datasets);

    // Create the router with all routes
    let app = create_router(state);

    // Start the server
    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address).await?;
    tracing::info!(address = %address, "Server listening");
    axum::serve(listener, app).await?;

    Ok(())
}
