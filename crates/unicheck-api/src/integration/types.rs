//! Integration API response types for the endpoints a check reads.
//!
//! Field names use camelCase via `#[serde(rename_all = "camelCase")]`.
//! Identifiers are kept as opaque strings; the controller hands out UUIDs
//! but nothing here depends on their shape.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

// ── Pagination ───────────────────────────────────────────────────────

/// Pagination envelope returned by the collection endpoints.
///
/// Only `data` is required. Older controllers and proxies omit the
/// counters, in which case the response is treated as a single page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    #[serde(default)]
    pub offset: Option<i64>,
    #[serde(default)]
    pub limit: Option<i32>,
    #[serde(default)]
    pub count: Option<i32>,
    #[serde(default)]
    pub total_count: Option<i64>,
    pub data: Vec<T>,
}

// ── Sites ────────────────────────────────────────────────────────────

/// Site overview, from `GET /v1/sites`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteResponse {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub internal_reference: Option<String>,
}

// ── Devices ──────────────────────────────────────────────────────────

/// Adopted device overview, from `GET /v1/sites/{siteId}/devices`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceResponse {
    pub id: String,
    pub mac_address: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    /// One of: `ONLINE`, `OFFLINE`, `PENDING_ADOPTION`, `UPDATING`,
    /// `GETTING_READY`, `ADOPTING`, `DELETING`, `CONNECTION_INTERRUPTED`, `ISOLATED`.
    #[serde(default)]
    pub state: Option<String>,
}

// ── Statistics ───────────────────────────────────────────────────────

/// Latest device statistics, from
/// `GET /v1/sites/{siteId}/devices/{deviceId}/statistics/latest`.
///
/// Kept as a raw field map: the utilization fields arrive as integers on
/// some firmware and floats on others, and the check decides how to read
/// them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeviceStatisticsResponse {
    #[serde(flatten)]
    pub fields: HashMap<String, Value>,
}

impl DeviceStatisticsResponse {
    /// Look up a top-level field, e.g. `cpuUtilizationPct`.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }
}
