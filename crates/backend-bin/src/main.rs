use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use backend_lib::{
    config::{self, LogFormat, Settings},
    router, AppState,
};
use clap::Parser;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Mergington High School activities server
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// TOML config file
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,
    /// Override the bind address
    #[arg(long)]
    bind: Option<SocketAddr>,
    /// Override the seed file
    #[arg(long)]
    seed_file: Option<PathBuf>,
    /// Override the static asset directory
    #[arg(long)]
    static_dir: Option<PathBuf>,
}

fn init_tracing(settings: &Settings) {
    // RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.log_level));

    match settings.log_format {
        LogFormat::Json => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init(),
        LogFormat::Pretty => tracing_subscriber::fmt().with_env_filter(filter).init(),
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {e}");
    }
    info!("shutting down");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut settings = config::load_settings_from(&args.config)
        .with_context(|| format!("loading {}", args.config.display()))?;
    if let Some(bind) = args.bind {
        settings.bind_addr = bind;
    }
    if let Some(seed_file) = args.seed_file {
        settings.seed_file = Some(seed_file);
    }
    if let Some(static_dir) = args.static_dir {
        settings.static_dir = static_dir;
    }

    init_tracing(&settings);

    let addr = settings.bind_addr;
    let state = Arc::new(AppState::from_settings(settings).context("loading activities")?);
    info!(activities = state.directory.len(), "activity directory ready");

    let app = router::create_router(state);

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    info!("listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
