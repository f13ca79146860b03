// ── Check configuration ──
//
// The validated input for one invocation. The CLI builds it from flags;
// core never reads files or the environment.

use secrecy::{ExposeSecret, SecretString};
use tracing::warn;

use unicheck_api::TransportConfig;

use crate::error::CheckError;
use crate::metric::Mode;

/// Site used when none is given.
pub const DEFAULT_SITE: &str = "Default";

/// Warning and critical levels, in percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Thresholds {
    pub warning: i64,
    pub critical: i64,
}

/// Everything one check needs.
#[derive(Debug, Clone)]
pub struct CheckConfig {
    /// Controller address: host, host:port, or full URL.
    pub controller: String,
    pub api_key: SecretString,
    /// Site display name (defaults to [`DEFAULT_SITE`]).
    pub site: String,
    pub mode: Mode,
    /// MAC address exactly as the controller reports it.
    pub device_mac: String,
    pub thresholds: Thresholds,
    /// TLS trust and request timeout.
    pub transport: TransportConfig,
}

impl CheckConfig {
    /// Validate raw inputs into a config.
    ///
    /// The mode is parsed first so an unknown mode is reported even when
    /// other inputs are also wrong. Nothing here touches the network.
    pub fn new(
        controller: impl Into<String>,
        api_key: SecretString,
        mode: &str,
        device_mac: impl Into<String>,
        thresholds: Thresholds,
    ) -> Result<Self, CheckError> {
        let mode = Mode::parse(mode)?;

        let controller: String = controller.into();
        let controller = controller.trim().to_owned();
        if controller.is_empty() {
            return Err(CheckError::InvalidConfig {
                field: "controller",
                reason: "controller address must not be empty".into(),
            });
        }

        if api_key.expose_secret().trim().is_empty() {
            return Err(CheckError::InvalidConfig {
                field: "api-key",
                reason: "API key must not be empty".into(),
            });
        }

        let device_mac: String = device_mac.into();
        if !is_mac_address(&device_mac) {
            return Err(CheckError::InvalidConfig {
                field: "device",
                reason: format!(
                    "'{device_mac}' is not a MAC address (expected format 00:11:22:33:44:55)"
                ),
            });
        }

        if thresholds.warning > thresholds.critical {
            warn!(
                warning = thresholds.warning,
                critical = thresholds.critical,
                "warning threshold is above critical; WARNING can never be reported"
            );
        }

        Ok(Self {
            controller,
            api_key,
            site: DEFAULT_SITE.to_owned(),
            mode,
            device_mac,
            thresholds,
            transport: TransportConfig::default(),
        })
    }

    /// Select a site by name. `None` or an empty name keeps the default.
    pub fn with_site(mut self, site: Option<String>) -> Self {
        if let Some(site) = site.filter(|s| !s.is_empty()) {
            self.site = site;
        }
        self
    }

    pub fn with_transport(mut self, transport: TransportConfig) -> Self {
        self.transport = transport;
        self
    }
}

/// Six colon-separated pairs of hex digits. Letter case is not checked.
fn is_mac_address(raw: &str) -> bool {
    let octets: Vec<&str> = raw.split(':').collect();
    octets.len() == 6
        && octets
            .iter()
            .all(|o| o.len() == 2 && o.chars().all(|c| c.is_ascii_hexdigit()))
}
