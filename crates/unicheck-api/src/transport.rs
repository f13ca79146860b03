// Transport configuration for building the reqwest::Client a check uses.
//
// TLS trust and request timeout live here so the Integration client only
// deals with URLs and payloads.

use std::path::PathBuf;
use std::time::Duration;

use reqwest::ClientBuilder;
use reqwest::header::HeaderMap;

use crate::Error;

/// Default per-request timeout. Schedulers usually kill a plugin after
/// 10-60s, so a hung controller has to fail well before that.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// How the controller's TLS certificate is verified.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TlsMode {
    /// Accept any certificate. UniFi controllers ship self-signed
    /// certificates, so this is the default.
    #[default]
    DangerAcceptInvalid,
    /// Use the system certificate store.
    System,
    /// Use a custom CA certificate from the given PEM file.
    CustomCa(PathBuf),
}

/// Shared transport configuration for building HTTP clients.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    pub tls: TlsMode,
    pub timeout: Duration,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            tls: TlsMode::default(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl TlsMode {
    /// Install this trust policy on a client builder.
    fn apply(&self, builder: ClientBuilder) -> Result<ClientBuilder, Error> {
        Ok(match self {
            Self::System => builder,
            Self::DangerAcceptInvalid => builder.danger_accept_invalid_certs(true),
            Self::CustomCa(path) => {
                let shown = path.display();
                let pem = std::fs::read(path)
                    .map_err(|e| Error::Tls(format!("cannot read CA file {shown}: {e}")))?;
                let ca = reqwest::Certificate::from_pem(&pem)
                    .map_err(|e| Error::Tls(format!("{shown} is not a PEM certificate: {e}")))?;
                builder.add_root_certificate(ca)
            }
        })
    }
}

impl TransportConfig {
    /// Build the `reqwest::Client` for one check, with `headers` sent on
    /// every request.
    pub fn build_client_with_headers(&self, headers: HeaderMap) -> Result<reqwest::Client, Error> {
        let builder = reqwest::Client::builder()
            .user_agent(concat!("check_unifi/", env!("CARGO_PKG_VERSION")))
            .timeout(self.timeout)
            .default_headers(headers);

        self.tls
            .apply(builder)?
            .build()
            .map_err(|e| Error::Tls(format!("HTTP client setup failed: {e}")))
    }
}
