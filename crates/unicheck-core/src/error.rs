// ── Check error types ──
//
// Every variant is terminal for the invocation. The binary prints one
// diagnostic line and exits; nothing here is retried.

use strum::Display;
use thiserror::Error;

/// The controller request a failure happened in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Stage {
    Sites,
    Devices,
    Statistics,
}

/// Unified error type for a check run.
#[derive(Debug, Error)]
pub enum CheckError {
    // ── Configuration ────────────────────────────────────────────────
    #[error("Unknown mode '{mode}' (available modes: cpu, memory)")]
    UnknownMode { mode: String },

    #[error("Invalid value for {field}: {reason}")]
    InvalidConfig { field: &'static str, reason: String },

    #[error("Could not set up HTTP client: {0}")]
    Client(#[source] unicheck_api::Error),

    // ── Controller requests ──────────────────────────────────────────
    #[error("Error for request {stage}: {detail}")]
    ControllerRequestFailed {
        stage: Stage,
        /// HTTP status, when the controller answered at all.
        status: Option<u16>,
        detail: String,
    },

    #[error("No statistics found for device {mac}: {detail}")]
    StatisticsUnavailable {
        mac: String,
        status: Option<u16>,
        detail: String,
    },

    // ── Lookups ──────────────────────────────────────────────────────
    #[error("No site named '{name}' found")]
    SiteNotFound { name: String },

    #[error("No device with mac-address {mac} found")]
    DeviceNotFound { mac: String },

    // ── Metric ───────────────────────────────────────────────────────
    #[error("Statistics field '{field}' is missing or not numeric")]
    MetricNotNumeric { field: &'static str },
}

impl CheckError {
    /// Wrap a client failure at the given stage.
    pub(crate) fn request_failed(stage: Stage, err: &unicheck_api::Error) -> Self {
        Self::ControllerRequestFailed {
            stage,
            status: err.status(),
            detail: describe(err),
        }
    }

    /// The statistics request failed without a usable answer.
    pub(crate) fn statistics_unavailable(mac: &str, err: &unicheck_api::Error) -> Self {
        Self::StatisticsUnavailable {
            mac: mac.to_owned(),
            status: err.status(),
            detail: describe(err),
        }
    }

    /// The pipeline stage this error belongs to, for errors raised by a
    /// controller request.
    pub fn stage(&self) -> Option<Stage> {
        match self {
            Self::ControllerRequestFailed { stage, .. } => Some(*stage),
            Self::StatisticsUnavailable { .. } => Some(Stage::Statistics),
            _ => None,
        }
    }
}

/// Error text plus the controller's error code, when it sent one.
fn describe(err: &unicheck_api::Error) -> String {
    match err.api_error_code() {
        Some(code) => format!("{err} [{code}]"),
        None => err.to_string(),
    }
}
