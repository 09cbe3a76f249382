use classtrack_api::config;
use classtrack_api::server;
use classtrack_api::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up SECURITY_JWT_SECRET etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    let config = config::config();
    tracing::info!("Starting ClassTrack API in {:?} mode", config.environment);

    // Fails closed when no signing secret is configured: better no service
    // than a service that treats every credential as unverified
    let state = AppState::from_config(config)?;

    let app = server::app(state);

    let port = std::env::var("PORT")
        .ok()
        .and_then(|s| s.parse::<u16>().ok())
        .unwrap_or(config.server.port);

    let bind_addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;

    tracing::info!("ClassTrack API listening on http://{}", bind_addr);

    axum::serve(listener, app).await?;
    Ok(())
}
