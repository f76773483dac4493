//! Development server for UI work
//!
//! Starts the mock content API on a fixed port, fills it with sample
//! content through the client, and keeps running until interrupted.
//!
//! Usage: cargo run -p dev-server

use anyhow::Result;
use test_helpers::{ADMIN_EMAIL, ADMIN_PASSWORD, mock::DevDataset};
use tracing::info;

const DEFAULT_PORT: u16 = 8000;

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    let subscriber = mock_api::telemetry::get_subscriber("info".into());
    mock_api::telemetry::init_subscriber(subscriber)?;

    info!("🚀 Starting development API server");

    let port = std::env::var("PORT")
        .ok()
        .and_then(|port| port.parse().ok())
        .unwrap_or(DEFAULT_PORT);
    let app = test_helpers::spawn_app_on_port(port).await;

    info!("✅ API server running on http://127.0.0.1:{}", app.port);

    info!("📊 Setting up development content...");
    let dataset = DevDataset::create(&app).await?;

    info!("🎯 Development server ready!");
    info!("   API: http://127.0.0.1:{}/api", app.port);
    info!(
        "   UI:  cd ui && BACKEND_URL=http://127.0.0.1:{} trunk serve",
        app.port
    );
    info!("   Admin login: {ADMIN_EMAIL} / {ADMIN_PASSWORD}");
    info!("");
    dataset.print_summary();
    info!("");
    info!("👋 Press Ctrl+C to shutdown");

    tokio::signal::ctrl_c().await?;
    info!("🛑 Shutting down development server");
    Ok(())
}
