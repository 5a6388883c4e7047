mod config;
mod error;

use std::path::PathBuf;

use clap::Parser;
use finance::FinanceClient;
use mcp::{FinanceTool, StatementQaServer};
use rmcp::service::RunningService;
use rmcp::{RoleServer, ServiceExt};
use tracing_subscriber::EnvFilter;

use config::{Config, Overrides};
use error::{Error, Result};

const CONFIG_FILE: &str = "statement-qa.toml";

#[derive(Parser)]
#[command(name = "statement-qa")]
#[command(about = "MCP server answering personal finance questions over stdio", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to the TOML configuration file (ignored if missing)
    #[arg(short, long, default_value = CONFIG_FILE)]
    config: PathBuf,

    /// Base URL of the inference service
    #[arg(long, env = "STATEMENT_QA_ENDPOINT_URL")]
    endpoint_url: Option<String>,

    /// Flow run identifier
    #[arg(long, env = "STATEMENT_QA_RUN_ID")]
    run_id: Option<String>,

    /// Request deadline in milliseconds (0 disables it)
    #[arg(long, env = "STATEMENT_QA_TIMEOUT_MS")]
    timeout_ms: Option<u64>,
}

#[tokio::main]
async fn main() {
    init_logging();

    if let Err(e) = run().await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    // Exit without waiting on the blocking stdin reader.
    std::process::exit(0);
}

/// Logs go to stderr; stdout belongs to the protocol.
fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load_or_default(&cli.config)?.apply(Overrides {
        endpoint_url: cli.endpoint_url,
        run_id: cli.run_id,
        timeout_ms: cli.timeout_ms,
    });

    let client = FinanceClient::new(&config.remote)?;
    tracing::info!(
        url = %client.url(),
        timeout_ms = config.remote.timeout_ms,
        "finance flow configured"
    );

    let server = StatementQaServer::new(FinanceTool::new(client));
    let exit = serve_until(
        server.serve(rmcp::transport::stdio()),
        tokio::signal::ctrl_c(),
    )
    .await?;
    tracing::debug!(?exit, "server stopped");

    Ok(())
}

/// How the serving loop ended.
#[derive(Debug, PartialEq, Eq)]
enum Exit {
    Interrupted,
    HostDisconnected,
}

/// Run the MCP session until the host goes away or `shutdown` resolves.
///
/// `shutdown` is raced against the initialize handshake as well, so an
/// interrupt before the host connects still ends the process cleanly.
async fn serve_until<E>(
    start: impl Future<Output = std::result::Result<RunningService<RoleServer, StatementQaServer>, E>>,
    shutdown: impl Future<Output = std::io::Result<()>>,
) -> Result<Exit>
where
    E: std::fmt::Display,
{
    tokio::pin!(shutdown);

    let service = tokio::select! {
        started = start => started.map_err(|e| Error::Transport(e.to_string()))?,
        signal = &mut shutdown => {
            signal?;
            tracing::info!("interrupt received before initialization, shutting down");
            return Ok(Exit::Interrupted);
        }
    };
    tracing::info!("Statement QA MCP server running on stdio");

    // Dropping the running service on interrupt closes the transport.
    tokio::select! {
        quit = service.waiting() => {
            let reason = quit.map_err(|e| Error::Transport(e.to_string()))?;
            tracing::info!(?reason, "host disconnected");
            Ok(Exit::HostDisconnected)
        }
        signal = &mut shutdown => {
            signal?;
            tracing::info!("interrupt received, shutting down");
            Ok(Exit::Interrupted)
        }
    }
}
