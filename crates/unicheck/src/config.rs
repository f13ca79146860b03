//! Translate parsed flags into a `CheckConfig`.

use std::time::Duration;

use secrecy::SecretString;

use unicheck_core::{CheckConfig, Thresholds, TlsMode, TransportConfig};

use crate::cli::Cli;
use crate::error::CliError;

/// Build the check configuration. Validation lives in core; this only
/// picks the transport settings out of the flags.
pub fn build_check_config(cli: &Cli) -> Result<CheckConfig, CliError> {
    let tls = if let Some(ref ca_path) = cli.ca_cert {
        TlsMode::CustomCa(ca_path.clone())
    } else if cli.verify_tls {
        TlsMode::System
    } else {
        TlsMode::DangerAcceptInvalid
    };

    let transport = TransportConfig {
        tls,
        timeout: Duration::from_secs(cli.timeout),
    };

    let config = CheckConfig::new(
        cli.controller.as_str(),
        SecretString::from(cli.api_key.clone()),
        &cli.mode,
        cli.device.as_str(),
        Thresholds {
            warning: cli.warn_level,
            critical: cli.crit_level,
        },
    )?
    .with_site(Some(cli.site.clone()))
    .with_transport(transport);

    Ok(config)
}
