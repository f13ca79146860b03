//! CLI error types with miette diagnostics.
//!
//! Maps `CheckError` variants into operator-facing errors with help text.
//! Every one of them is reported as UNKNOWN so a controller problem is
//! never mistaken for a utilization breach.

use miette::Diagnostic;
use thiserror::Error;

use unicheck_core::{CheckError, Stage};

/// Monitoring-plugin exit codes. OK, WARNING and CRITICAL (0-2) come from
/// `Status::exit_code`; clap exits 2 on usage errors by itself.
pub mod exit_code {
    pub const UNKNOWN: i32 = 3;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Input ────────────────────────────────────────────────────────
    #[error("Unknown mode '{mode}'")]
    #[diagnostic(code(check_unifi::unknown_mode), help("Available modes: cpu, memory"))]
    UnknownMode { mode: String },

    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(check_unifi::validation))]
    Validation { field: String, reason: String },

    #[error("Could not set up HTTP client: {source}")]
    #[diagnostic(
        code(check_unifi::client),
        help("Check the controller address and the --ca-cert path.")
    )]
    Client {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    // ── Controller ───────────────────────────────────────────────────
    #[error("Error for request {stage}: {detail}")]
    #[diagnostic(
        code(check_unifi::request_failed),
        help(
            "Check that the controller is reachable and the API key is valid.\n\
             Keys are created under Network > Settings > Control Plane > Integrations."
        )
    )]
    RequestFailed { stage: Stage, detail: String },

    #[error("No statistics found for device {mac} ({detail})")]
    #[diagnostic(
        code(check_unifi::no_statistics),
        help("The device may be offline or still adopting.")
    )]
    NoStatistics { mac: String, detail: String },

    // ── Lookups ──────────────────────────────────────────────────────
    #[error("No site named '{name}' found")]
    #[diagnostic(
        code(check_unifi::site_not_found),
        help("Site names are case-sensitive; the built-in site is called 'Default'.")
    )]
    SiteNotFound { name: String },

    #[error("No device with mac-address {mac} found")]
    #[diagnostic(
        code(check_unifi::device_not_found),
        help("The MAC address must match the controller's spelling, usually lowercase.")
    )]
    DeviceNotFound { mac: String },

    // ── Metric ───────────────────────────────────────────────────────
    #[error("Statistics field '{field}' is missing or not numeric")]
    #[diagnostic(code(check_unifi::metric))]
    MetricNotNumeric { field: String },
}

impl CliError {
    /// Map this error to an exit code for process termination.
    #[allow(clippy::unused_self)]
    pub fn exit_code(&self) -> i32 {
        exit_code::UNKNOWN
    }
}

// ── CheckError → CliError mapping ────────────────────────────────────

impl From<CheckError> for CliError {
    fn from(err: CheckError) -> Self {
        match err {
            CheckError::UnknownMode { mode } => CliError::UnknownMode { mode },

            CheckError::InvalidConfig { field, reason } => CliError::Validation {
                field: field.into(),
                reason,
            },

            CheckError::Client(source) => CliError::Client {
                source: Box::new(source),
            },

            CheckError::ControllerRequestFailed { stage, detail, .. } => {
                CliError::RequestFailed { stage, detail }
            }

            CheckError::StatisticsUnavailable { mac, detail, .. } => {
                CliError::NoStatistics { mac, detail }
            }

            CheckError::SiteNotFound { name } => CliError::SiteNotFound { name },

            CheckError::DeviceNotFound { mac } => CliError::DeviceNotFound { mac },

            CheckError::MetricNotNumeric { field } => CliError::MetricNotNumeric {
                field: field.into(),
            },
        }
    }
}
