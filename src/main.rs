//! Notebook Server entry point.

use std::net::SocketAddr;

use tracing_subscriber::EnvFilter;

use notebook_server::AppState;
use notebook_server::config::Config;

#[tokio::main]
async fn main() {
    let config = Config::parse();

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    if config.log_format == "json" {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    let state = AppState::new(&config);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        password_env = %config.password_env,
        auth_enabled = state.gate().is_enabled(),
        exempt_paths = state.gate().exemptions().len(),
        "Notebook Server starting",
    );
    if !state.gate().is_enabled() {
        tracing::warn!(
            "{} is not set, authentication is disabled until it is",
            config.password_env
        );
    }

    let app = notebook_server::router(state);

    let addr = SocketAddr::new(config.host.parse().expect("invalid host"), config.port);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind");

    tracing::info!(%addr, "Notebook Server ready");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("server error");

    tracing::info!("Notebook Server shut down");
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("failed to install signal handler");
    tracing::info!("Shutdown signal received");
}
