mod config;
mod frame;
mod grid;
mod notify;
mod routes;
mod services;
mod state;
mod toolbar;
mod views;

#[tokio::main]
async fn main() {
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            eprintln!("failed to load .env: {e}");
        }
    }
    tracing_subscriber::fmt::init();

    let config = match config::Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };
    let port = config.port;
    tracing::info!(
        variant = ?config.variant,
        combo_items = config.combo_items.len(),
        max_page_size = config.max_page_size,
        "grid demo configured"
    );

    let state = state::AppState::new(config);

    // Spawn background eviction of idle view sessions.
    let _reaper = services::reaper::spawn_reaper_task(state.clone());

    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "gridlab listening");
    axum::serve(listener, app).await.expect("server failed");
}
