//! Sentimen Server
//!
//! HTTP front for the hybrid sentiment pipeline: a deterministic classifier
//! decides the label, a generative explainer justifies it, and the caller
//! always gets a usable result while the classifier is up.

use anyhow::Result;
use clap::Parser;
use metrics_exporter_prometheus::PrometheusHandle;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{info, warn};

mod config;
mod routes;
mod state;

use config::ServerConfig;
use state::AppState;

#[derive(Parser, Debug)]
#[command(name = "sentimen-server")]
#[command(about = "Sentimen hybrid sentiment inference server", long_about = None)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config.yaml")]
    config: String,

    /// Classifier service base URL
    #[arg(long)]
    pub classifier: Option<String>,

    /// Analytics artifact path
    #[arg(long)]
    pub artifact: Option<String>,

    /// Listen address
    #[arg(short = 'l', long, default_value = "0.0.0.0")]
    listen: String,

    /// Listen port
    #[arg(short = 'P', long, default_value = "8080")]
    port: u16,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    init_tracing(cli.verbose);

    info!("Starting Sentimen server");

    // Load configuration
    let config = ServerConfig::load(&cli.config, &cli)?;
    info!(
        classifier = config.classifier_url.as_deref().unwrap_or("<lexicon fallback>"),
        explainer_enabled = config.explainer.api_key.is_some(),
        "Configuration loaded"
    );

    // Initialize metrics
    let metrics_handle = init_metrics()?;

    // Build the pipeline and load the analytics artifact
    let state = AppState::new(config, metrics_handle)?;

    // Build and run the server with graceful shutdown
    let addr: SocketAddr = format!("{}:{}", cli.listen, cli.port).parse()?;
    let app = routes::create_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on http://{}", addr);

    let shutdown = async {
        shutdown_signal().await;
        warn!("Shutdown signal received, stopping server...");
    };

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Listen for shutdown signals (SIGTERM, SIGINT)
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

/// Initialize tracing/logging
fn init_tracing(verbose: bool) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = if verbose {
        EnvFilter::new("sentimen=debug,tower_http=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("sentimen=info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Initialize metrics exporter and return handle for rendering
fn init_metrics() -> Result<PrometheusHandle> {
    use metrics_exporter_prometheus::PrometheusBuilder;

    let builder = PrometheusBuilder::new();
    let handle = builder
        .install_recorder()
        .map_err(|e| anyhow::anyhow!("Failed to install metrics: {}", e))?;

    metrics::describe_counter!(
        "sentimen_requests_total",
        "Total number of prediction requests received"
    );
    metrics::describe_counter!(
        "sentimen_decisions_total",
        "Total number of pipeline decisions by tier"
    );
    metrics::describe_histogram!(
        "sentimen_classifier_latency_us",
        metrics::Unit::Microseconds,
        "Classifier tier latency in microseconds"
    );
    metrics::describe_counter!(
        "sentimen_errors_total",
        "Total number of request failures by class"
    );

    info!("Metrics exporter initialized");
    Ok(handle)
}
