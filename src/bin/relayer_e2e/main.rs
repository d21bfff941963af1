use std::path::PathBuf;
use std::process::exit;
use std::time::Duration;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{filter::LevelFilter, EnvFilter};

use ibc_relayer_e2e::error::Error;
use ibc_relayer_e2e::harness::run_e2e_test;
use ibc_relayer_e2e::relayer::driver::{RelayerDriver, DEFAULT_RELAYER_COMMAND};
use ibc_relayer_e2e::types::id::ChainId;

/// Test all relayer commands, end to end.
#[derive(Debug, Parser)]
struct Opts {
    /// Configuration file for the relayer
    #[clap(short, long, value_name = "CONFIG_FILE")]
    config: PathBuf,

    /// Entry point used to invoke the relayer, split on whitespace
    #[clap(long, default_value = DEFAULT_RELAYER_COMMAND)]
    relayer_cmd: String,

    /// Chain id of the first chain
    #[clap(long, default_value = "ibc-0")]
    chain_a: ChainId,

    /// Chain id of the second chain
    #[clap(long, default_value = "ibc-1")]
    chain_b: ChainId,

    /// Delay in milliseconds between steps, to keep interleaved relayer
    /// log output readable
    #[clap(long, default_value = "500")]
    pacing_ms: u64,
}

fn main() {
    install_logger();

    if let Err(e) = run() {
        error!("{}", e);
        exit(1);
    }
}

fn run() -> Result<(), Error> {
    let opts = Opts::parse();

    // fail before the first command rather than partway through a phase
    if !opts.config.exists() {
        return Err(Error::config_not_found(opts.config.display().to_string()));
    }

    let driver = RelayerDriver::new(
        opts.relayer_cmd,
        opts.config,
        Duration::from_millis(opts.pacing_ms),
    );

    run_e2e_test(&driver, &opts.chain_a, &opts.chain_b)?;

    info!("all relayer phases completed");

    Ok(())
}

fn install_logger() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::DEBUG.into())
                .from_env_lossy(),
        )
        .init();
}
