//! Service entry-point: parses the port, wires the HTTP server and waits for
//! a termination signal.

mod server;

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use server::{DEFAULT_PORT, ServerConfig, ShutdownSignals, create_server};

/// In-memory user REST API.
#[derive(Debug, Parser)]
#[command(name = "user-api", version, about)]
struct Cli {
    /// TCP port to listen on.
    #[arg(default_value_t = DEFAULT_PORT)]
    port: u16,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if let Err(e) = fmt().with_env_filter(filter).json().try_init() {
        warn!(error = %e, "tracing init failed");
    }
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // Help and version requests print to stdout and exit cleanly.
        Err(err) if !err.use_stderr() => err.exit(),
        Err(err) => return Err(err).wrap_err("invalid command line"),
    };
    init_tracing();

    let signals = ShutdownSignals::install()
        .inspect_err(|err| error!(error = %err, "failed to install signal listeners"))
        .wrap_err("failed to install signal listeners")?;

    let config = ServerConfig::from_port(cli.port);
    let server = create_server(config)
        .inspect_err(|err| error!(error = %err, port = config.port(), "failed to start server"))
        .wrap_err_with(|| format!("failed to bind {}", config.bind_addr()))?;

    let port = config.port();
    info!(address = %config.bind_addr(), "server listening on {}", config.bind_addr());
    info!("health check: http://localhost:{port}/health");
    info!("API info: http://localhost:{port}/api");
    info!("users API: http://localhost:{port}/api/users");

    let handle = server.handle();
    actix_web::rt::spawn(async move {
        signals.recv().await;
        handle.stop(true).await;
    });

    server.await.wrap_err("server terminated abnormally")?;
    info!("server stopped");
    Ok(())
}
