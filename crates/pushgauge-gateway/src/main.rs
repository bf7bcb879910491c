//! pushgauge daemon.
//!
//! - Settings from `PMG_PORT` / `PMG_CONFIGFILE` (optionally via `.env`)
//! - Metrics declared in a YAML file, built once into the registry
//! - `GET /metrics` scrape, `POST /metric` push, `GET /healthz`

use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

use pushgauge_core::error::{PushGaugeError, Result};
use pushgauge_gateway::{app_state::AppState, config, router};

#[tokio::main]
async fn main() -> ExitCode {
    // Before the subscriber, so RUST_LOG from .env applies.
    let env_file = dotenvy::dotenv().ok();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).init();

    if let Some(path) = env_file {
        info!(path = %path.display(), "loaded .env");
    }

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "pushgauge failed");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<()> {
    let settings = config::Settings::from_env()?;
    let metrics = config::load_from_file(&settings.config_file)?;
    let state = AppState::new(metrics)?;
    let app = router::build_router(state);

    let listen = settings.listen_addr();
    let listener = tokio::net::TcpListener::bind(listen)
        .await
        .map_err(|e| PushGaugeError::Internal(format!("bind {listen} failed: {e}")))?;

    info!(%listen, config = %settings.config_file.display(), "pushgauge listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| PushGaugeError::Internal(format!("server failed: {e}")))?;

    info!("pushgauge stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "ctrl-c handler failed");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                error!(error = %e, "SIGTERM handler failed");
                std::future::pending::<()>().await;
            }
        }
    };
    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("received Ctrl+C, shutting down"),
        _ = terminate => info!("received SIGTERM, shutting down"),
    }
}
