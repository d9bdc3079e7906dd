//! Songseek: a batch song link finder
//!
//! This is the main entry point for the application.

use anyhow::Result;
use songseek::{
    backend::YouTube,
    config::Settings,
    dispatch::Dispatcher,
    lookup::BackendLookup,
    network::HttpClient,
    web::{create_router, AppState},
};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .init();

    info!("Starting songseek v{}", songseek::VERSION);

    // Load configuration
    let settings = load_settings()?;
    info!(
        "Loaded configuration for instance: {}",
        settings.general.instance_name
    );

    // Initialize HTTP client
    let client = HttpClient::with_settings(&settings.outgoing)?;
    info!("HTTP client initialized");

    // Wire the lookup path: YouTube backend behind the lookup seam,
    // fanned out by the dispatcher
    let backend = Arc::new(YouTube::new());
    let lookup = BackendLookup::new(client, backend)
        .with_min_duration(settings.search.min_duration_secs)
        .with_max_candidates(settings.search.max_candidates);
    let dispatcher = Dispatcher::new(Arc::new(lookup))
        .with_max_concurrency(settings.search.max_concurrency)
        .with_task_timeout(Duration::from_secs(settings.search.lookup_timeout_secs));

    // Create application state
    let state = AppState::new(settings.clone(), dispatcher)?;
    info!("Application state initialized");

    // Create router
    let app = create_router(state);

    // Bind address
    let addr = SocketAddr::new(settings.server.bind_address.parse()?, settings.server.port);

    info!("Starting server on http://{}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Load settings from file or use defaults
fn load_settings() -> Result<Settings> {
    // Check environment variable first
    if let Ok(path) = std::env::var("SONGSEEK_SETTINGS_PATH") {
        let path = PathBuf::from(path);
        if path.exists() {
            info!("Loading settings from: {}", path.display());
            let mut settings = Settings::from_file(&path)?;
            settings.merge_env();
            return Ok(settings);
        }
    }

    // Check for a settings file in the usual locations
    let paths = [
        PathBuf::from("songseek.yml"),
        PathBuf::from("config/songseek.yml"),
        dirs::config_dir()
            .map(|p| p.join("songseek/songseek.yml"))
            .unwrap_or_default(),
    ];

    for path in paths.iter() {
        if path.exists() {
            info!("Loading settings from: {}", path.display());
            let mut settings = Settings::from_file(path)?;
            settings.merge_env();
            return Ok(settings);
        }
    }

    // Use defaults
    info!("No settings file found, using defaults");
    let mut settings = Settings::default();
    settings.merge_env();
    Ok(settings)
}
