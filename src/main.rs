use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use ninefold_client::{Session, SessionConfig};

/// Nested tic-tac-toe agent that plays against a remote arbiter.
#[derive(Debug, Parser)]
#[command(name = "ninefold", version)]
struct Cli {
    /// Arbiter port.
    #[arg(short, long)]
    port: u16,

    /// Trace each decision and log at debug level.
    #[arg(short, long)]
    debug: bool,

    /// Arbiter host.
    #[arg(long, default_value = "localhost")]
    host: String,

    /// Hard limit on thinking time per move, in milliseconds.
    #[arg(long, value_name = "MS")]
    move_time: Option<u64>,
}

impl Cli {
    fn session_config(&self) -> SessionConfig {
        SessionConfig {
            host: self.host.clone(),
            port: self.port,
            trace: self.debug,
            move_time: self.move_time.map(Duration::from_millis),
        }
    }
}

fn init_tracing(debug: bool) {
    let level = if debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    let config = cli.session_config();
    info!(addr = %config.addr(), trace = config.trace, "ninefold starting");

    Session::new(config)
        .run()
        .context("session with the arbiter failed")?;
    Ok(())
}
