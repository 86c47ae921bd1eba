//! Menagerie - main entry point

use std::io::{self, Write};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use menagerie::cli::Cli;
use menagerie::config_file::SessionConfig;
use menagerie::exercises;

/// Initialize logging on stderr so stdout only carries exercise output
fn init_logger(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse_args();
    init_logger(cli.verbose);
    info!("menagerie starting up");

    let config = SessionConfig::resolve(
        cli.config.as_deref(),
        cli.seed,
        cli.save_config.as_deref(),
    )?;
    debug!(?config, "configuration ready");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    exercises::run(&cli.command, &config, &mut out)?;
    out.flush()?;

    Ok(())
}
