//! commentary-server binary
//!
//! Usage:
//!   commentary-server [--bind 0.0.0.0:5001]
//!
//! Credentials come from GROQ_API_KEY, GEMINI_API_KEY, and GITHUB_TOKEN;
//! all are optional, and the service starts without any of them.

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use commentary_core::{ProviderCredentials, ServiceConfig};
use commentary_server::{AppState, app};

#[derive(Debug, Parser)]
#[command(name = "commentary-server", about = "Chess commentary generation service")]
struct Args {
    /// Address to listen on
    #[arg(long, default_value = "0.0.0.0:5001")]
    bind: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let credentials = ProviderCredentials::from_env();
    credentials.log_status();

    let state = AppState::new(ServiceConfig::new(args.bind, credentials));
    let bind_addr = state.config.bind_addr.clone();

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {bind_addr}"))?;

    info!("commentary service listening on {bind_addr}");

    axum::serve(listener, app(state))
        .await
        .context("server error")?;

    Ok(())
}
