// ── Check pipeline ──
//
// sites -> resolve site -> devices -> resolve device -> statistics
//       -> extract metric -> classify
//
// Each request is awaited before the next one starts. Any failure ends the
// check; there are no retries.

use tracing::{debug, info};

use unicheck_api::IntegrationClient;

use crate::config::{CheckConfig, Thresholds};
use crate::error::{CheckError, Stage};
use crate::metric::{self, Mode};
use crate::resolve::{resolve_device, resolve_site};
use crate::status::{Status, classify};

/// A classified reading for one device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Measurement {
    pub mode: Mode,
    /// Integer the status was classified on.
    pub value: i64,
    /// Reported value, shown in the status line.
    pub observed: String,
    pub status: Status,
    pub thresholds: Thresholds,
}

/// Run one check end to end.
///
/// The HTTP client lives only for the duration of this call, so its
/// connections are released before the caller reports and exits.
pub async fn run_check(config: &CheckConfig) -> Result<Measurement, CheckError> {
    let client =
        IntegrationClient::from_api_key(&config.controller, &config.api_key, &config.transport)
            .map_err(CheckError::Client)?;
    debug!(base_url = %client.base_url(), "integration client ready");

    check_device(&client, config).await
}

/// Run the pipeline against an existing client.
pub async fn check_device(
    client: &IntegrationClient,
    config: &CheckConfig,
) -> Result<Measurement, CheckError> {
    let sites = client
        .fetch_sites()
        .await
        .map_err(|e| CheckError::request_failed(Stage::Sites, &e))?;
    let site = resolve_site(&sites, &config.site)
        .or_else_missing(|name| CheckError::SiteNotFound { name })?;
    info!(site = %site.name, site_id = %site.id, "resolved site");

    let devices = client
        .fetch_devices(&site.id)
        .await
        .map_err(|e| CheckError::request_failed(Stage::Devices, &e))?;
    let device = resolve_device(&devices, &config.device_mac)
        .or_else_missing(|mac| CheckError::DeviceNotFound { mac })?;
    info!(
        mac = %device.mac_address,
        device_id = %device.id,
        name = device.name.as_deref().unwrap_or("-"),
        state = device.state.as_deref().unwrap_or("-"),
        "resolved device"
    );

    let stats = client
        .fetch_statistics(&site.id, &device.id)
        .await
        .map_err(|e| {
            if e.is_decode() {
                CheckError::request_failed(Stage::Statistics, &e)
            } else {
                CheckError::statistics_unavailable(&config.device_mac, &e)
            }
        })?;

    let metric::Reading { value, observed } = metric::extract(&stats, config.mode)?;
    let Thresholds { warning, critical } = config.thresholds;
    let status = classify(value, warning, critical);
    debug!(mode = %config.mode, value, %observed, warning, critical, %status, "classified");

    Ok(Measurement {
        mode: config.mode,
        value,
        observed,
        status,
        thresholds: config.thresholds,
    })
}
