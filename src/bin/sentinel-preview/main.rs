//! Preview server: renders every page from its fixture for design review.

mod config;
mod routes;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = match config::PreviewConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid preview configuration");
            std::process::exit(1);
        }
    };

    let app = routes::app(&config);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .expect("failed to bind");

    tracing::info!(port = config.port, assets = ?config.assets_dir, "sentinel preview listening");
    axum::serve(listener, app).await.expect("server failed");
}
