#![doc = include_str!("../README.md")]

mod server;

use clap::Parser;
use server::config::{CliArgs, ServerConfig};
use server::dispatch::dispatcher::Dispatcher;
use server::http;
use server::telemetry::init_telemetry;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tokio::signal;

// Using mimalloc for better performance under contention, especially in musl
// environments.
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load from .env
    let _ = dotenvy::dotenv();
    let args = CliArgs::parse();
    let config = ServerConfig::try_from(args)?;

    init_telemetry(&config)?;

    // The dispatcher is constructed here and handed to the HTTP state; there
    // is no process-global queue handle.
    let dispatcher = Dispatcher::spawn(config.queue_capacity);
    let app = http::router(dispatcher);

    let listener = TcpListener::bind(config.listen_addr).await?;
    log_startup_info(&config);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Service shut down successfully");
    Ok(())
}

fn log_startup_info(config: &ServerConfig) {
    if cfg!(debug_assertions) {
        tracing::info!(
            "Listening on {} with full config: {:#?}",
            config.listen_addr,
            config
        );
    } else {
        tracing::info!("Listening on {}...", config.listen_addr);
    }
}

/// Resolves when the process receives Ctrl+C or SIGTERM.
///
/// Stopping the listener is graceful for in-flight HTTP requests only:
/// emission tasks are detached and deadline-bounded, so they are abandoned
/// rather than awaited.
async fn shutdown_signal() {
    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received Ctrl+C signal");
        },
        () = terminate => {
            tracing::info!("Received SIGTERM signal");
        },
    }

    tracing::info!("Shutdown signal received, terminating gracefully...");
}
