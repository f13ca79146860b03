// ── Metric extraction ──
//
// Picks the utilization field for the selected mode out of a statistics
// snapshot and coerces it to an integer for classification, keeping the
// reported value for display.

use std::str::FromStr;

use serde_json::Value;
use strum::{AsRefStr, Display, EnumString};

use unicheck_api::integration_types::DeviceStatisticsResponse;

use crate::error::CheckError;

/// Which utilization metric a check reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum Mode {
    Cpu,
    Memory,
}

impl Mode {
    /// Parse a mode name, failing with [`CheckError::UnknownMode`].
    ///
    /// Matching is exact: `cpu` and `memory` only.
    pub fn parse(raw: &str) -> Result<Self, CheckError> {
        Self::from_str(raw).map_err(|_| CheckError::UnknownMode {
            mode: raw.to_owned(),
        })
    }

    /// Statistics field holding this metric.
    pub fn field(self) -> &'static str {
        match self {
            Self::Cpu => "cpuUtilizationPct",
            Self::Memory => "memoryUtilizationPct",
        }
    }
}

/// One metric reading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reading {
    /// Integer used for classification.
    pub value: i64,
    /// The value as the controller reported it, e.g. `91.2`.
    pub observed: String,
}

/// Read the metric for `mode` from a statistics snapshot.
pub fn extract(stats: &DeviceStatisticsResponse, mode: Mode) -> Result<Reading, CheckError> {
    let field = mode.field();
    let raw = stats.field(field);
    raw.and_then(|v| {
        let value = to_integer(v)?;
        let observed = match v {
            Value::String(s) => s.trim().to_owned(),
            other => other.to_string(),
        };
        Some(Reading { value, observed })
    })
    .ok_or(CheckError::MetricNotNumeric { field })
}

/// Integer view of a JSON value.
///
/// Floats are truncated toward zero, so `85.9` reads as `85`. Strings must
/// hold a plain integer.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::as_conversions
)]
fn to_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            let f = n.as_f64()?;
            let in_range = f.is_finite() && f >= i64::MIN as f64 && f < i64::MAX as f64;
            in_range.then(|| f.trunc() as i64)
        }),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
