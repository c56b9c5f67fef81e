//! CircuitLab Dashboard binary entry point.

use std::net::SocketAddr;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use circuitlab_dashboard::{AppState, DashboardConfig, create_router};

/// Serve the CircuitLab circuit builder on a local port.
#[derive(Parser)]
#[command(name = "circuitlab-dashboard")]
#[command(version, about)]
struct Cli {
    /// Address to listen on
    #[arg(long, env = "CIRCUITLAB_BIND", default_value = "127.0.0.1:3000")]
    bind: SocketAddr,

    /// Number of qubits of the initial circuit (1-5)
    #[arg(long, env = "CIRCUITLAB_QUBITS")]
    qubits: Option<u32>,

    /// Seed the sampler for reproducible histograms
    #[arg(long, env = "CIRCUITLAB_SEED")]
    seed: Option<u64>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = match cli.verbose {
        0 => "circuitlab_dashboard=info,tower_http=info",
        1 => "circuitlab_dashboard=debug,circuitlab_adapter_sim=debug,tower_http=debug",
        _ => "trace",
    };

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Create configuration
    let mut config = DashboardConfig {
        bind_address: cli.bind,
        seed: cli.seed,
        ..DashboardConfig::default()
    };
    if let Some(qubits) = cli.qubits {
        config.default_qubits = qubits;
    }
    let bind_addr = config.bind_address;

    let state = Arc::new(
        AppState::with_config(config)
            .map_err(|e| anyhow::anyhow!("Invalid --qubits value: {e}"))?,
    );
    if let Some(seed) = cli.seed {
        tracing::info!("Sampler seeded with {}", seed);
    }

    let app = create_router(state);

    tracing::info!("Starting CircuitLab Dashboard at http://{}", bind_addr);
    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
