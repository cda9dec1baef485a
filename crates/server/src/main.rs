//! Toolforge server binary.
//!
//! Binds the HTTP listener immediately; all tool execution happens on
//! background tasks owned by the job runner, so the request path never
//! blocks on a conversion.

use std::net::SocketAddr;

use anyhow::Result;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use toolforge_server::{create_app, AppState, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing. TOOLFORGE_LOG overrides, RUST_LOG works too.
    let filter = EnvFilter::try_from_env("TOOLFORGE_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("toolforge=info,tower_http=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = Config::from_env();
    config.ensure_dirs()?;
    tracing::info!(
        port = config.port,
        upload_dir = %config.upload_dir.display(),
        output_dir = %config.output_dir.display(),
        max_concurrent_jobs = config.max_concurrent_jobs,
        "toolforge v{} starting",
        env!("CARGO_PKG_VERSION")
    );

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let state = AppState::new(config);
    let app = create_app(state);

    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, "listening");
    axum::serve(listener, app).await?;

    Ok(())
}
