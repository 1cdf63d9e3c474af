#![recursion_limit = "256"]

mod config;
mod roster;
mod routes;
mod state;

use config::{RosterConfig, ServerConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A missing .env file is fine; real deployments set variables directly.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = ServerConfig::from_env()?;
    match &config.roster {
        RosterConfig::File { path } => tracing::info!(path = %path.display(), "serving roster from file"),
        RosterConfig::Upstream { url, .. } => tracing::info!(%url, "proxying roster from upstream"),
    }

    let source = roster::source_from_config(&config.roster)?;
    let state = state::AppState::new(source);

    let app = routes::leptos_app(state)?;
    let port = config.port;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}")).await?;

    tracing::info!(%port, "team-page listening");
    axum::serve(listener, app).await?;
    Ok(())
}
