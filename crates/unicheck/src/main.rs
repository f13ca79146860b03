mod cli;
mod config;
mod error;
mod output;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use unicheck_core::Measurement;

use crate::cli::Cli;
use crate::error::CliError;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Usage errors exit 2 from inside clap, before any network activity.
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let verbose = cli.verbose > 0;
    let perfdata = cli.perfdata;

    let code = match run(&cli).await {
        Ok(measurement) => {
            output::print_line(&output::status_line(&measurement, perfdata));
            measurement.status.exit_code()
        }
        Err(err) => {
            let code = err.exit_code();
            output::print_line(&output::error_line(&err));
            if verbose {
                eprintln!("{:?}", miette::Report::new(err));
            }
            code
        }
    };

    std::process::exit(code);
}

/// Logs go to stderr; stdout carries only the status line.
fn init_tracing(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn run(cli: &Cli) -> Result<Measurement, CliError> {
    let check_config = config::build_check_config(cli)?;

    tracing::debug!(
        controller = %check_config.controller,
        site = %check_config.site,
        mode = %check_config.mode,
        device = %check_config.device_mac,
        "starting check"
    );

    unicheck_core::run_check(&check_config).await.map_err(|err| {
        if let Some(stage) = err.stage() {
            tracing::info!(%stage, "controller request failed");
        }
        CliError::from(err)
    })
}
