mod assets;
mod config;
mod proxy;
mod routes;

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use leptos::config::{LeptosOptions, get_configuration};
use tracing_subscriber::EnvFilter;

use crate::config::{Cli, Command, ConfigError, HostConfig};

#[derive(Debug, thiserror::Error)]
enum HostError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("leptos configuration: {0}")]
    Leptos(String),
    #[error("http client init failed: {0}")]
    HttpClient(#[from] reqwest::Error),
    #[error("failed to bind port {port}: {source}")]
    Bind { port: u16, source: std::io::Error },
    #[error("server failed: {0}")]
    Serve(std::io::Error),
}

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env file is normal outside local development.
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    match run(Cli::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "chatrooms host exiting");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), HostError> {
    let config = HostConfig::from_cli(cli, assets::current_stamp())?;
    let mut leptos_options = get_configuration(None)
        .map_err(|e| HostError::Leptos(e.to_string()))?
        .leptos_options;

    prepare_assets(&mut leptos_options, config.asset_stamp);

    match config.command {
        Command::Stamp => Ok(()),
        Command::Serve => serve(&config, leptos_options).await,
    }
}

/// Stamp the bundle and point the shell at the stamped names. If the bundle
/// is missing the shell keeps the unstamped names so a partial build still
/// renders.
fn prepare_assets(leptos_options: &mut LeptosOptions, stamp: u64) {
    let pkg_dir = PathBuf::from(leptos_options.site_root.as_ref()).join(leptos_options.site_pkg_dir.as_ref());
    let output_name = leptos_options.output_name.to_string();

    match assets::stamp_pkg_dir(&pkg_dir, &output_name, stamp) {
        Ok(files) => {
            let stamped = assets::stamped_output_name(&output_name, stamp);
            tracing::info!(%stamp, output = %stamped, files = files.len(), "stamped client assets");
            leptos_options.output_name = Arc::from(stamped);
        }
        Err(e) => {
            tracing::warn!(error = %e, "serving unstamped client assets");
        }
    }
}

async fn serve(config: &HostConfig, leptos_options: LeptosOptions) -> Result<(), HostError> {
    let proxy = proxy::ApiProxy::new(config.backend_url.clone(), config.proxy_timeout)?;
    let app = routes::leptos_app(proxy, leptos_options);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .map_err(|source| HostError::Bind { port: config.port, source })?;

    tracing::info!(port = config.port, backend = %config.backend_url, "chatrooms listening");
    axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await.map_err(HostError::Serve)?;
    tracing::info!("shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "ctrl-c handler unavailable");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "SIGTERM handler unavailable");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
    tracing::info!("shutdown signal received");
}
