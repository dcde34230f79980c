//! JSON exporter
//!
//! - `GET /metrics` probes the configured upstream, flattens its JSON body and
//!   returns every number/boolean as a gauge
//! - `GET /` landing page, `GET /healthz` liveness
//! - Logging via `RUST_LOG` (default `info`)

use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use tracing_subscriber::{fmt, EnvFilter};

use json_exporter_server::{app_state, config, router};

#[tokio::main]
async fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).init();

    let cfg = match config::Args::parse().into_config() {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!(error = %e, "startup failed");
            let _ = config::Args::command().print_help();
            return ExitCode::FAILURE;
        }
    };

    let listen = match cfg.listen_addr() {
        Ok(addr) => addr,
        Err(e) => {
            tracing::error!(error = %e, "startup failed");
            return ExitCode::FAILURE;
        }
    };

    let state = match app_state::AppState::new(cfg) {
        Ok(state) => state,
        Err(e) => {
            tracing::error!(error = %e, "startup failed");
            return ExitCode::FAILURE;
        }
    };
    let target = state.prober().target().clone();
    let app = router::build_router(state);

    let listener = match tokio::net::TcpListener::bind(listen).await {
        Ok(l) => l,
        Err(e) => {
            tracing::error!(%listen, error = %e, "failed to bind");
            return ExitCode::FAILURE;
        }
    };
    tracing::info!(%listen, target_url = %target, "json-exporter listening");

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(error = %e, "server failed");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
