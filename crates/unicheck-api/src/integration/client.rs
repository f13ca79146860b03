// Async HTTP client for the read-only Integration API endpoints.
//
// Base path: /proxy/network/integrations/v1/
// Auth: X-API-KEY header

use std::future::Future;

use reqwest::StatusCode;
use reqwest::header::{HeaderMap, HeaderValue};
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use super::types;
use crate::Error;
use crate::transport::TransportConfig;

/// Path under the controller address where the Integration API lives.
pub const INTEGRATION_BASE_PATH: &str = "/proxy/network/integrations/v1";

/// Page size requested from collection endpoints. The controller caps
/// `limit` at 200.
const PAGE_LIMIT: i32 = 200;

// ── Error response shape from the Integration API ────────────────────

#[derive(serde::Deserialize)]
struct ErrorResponse {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    code: Option<String>,
}

// ── Client ───────────────────────────────────────────────────────────

/// Async client for the UniFi Integration API.
///
/// Owns one `reqwest::Client` (and with it the connection pool) for its
/// whole lifetime. Dropping the client releases every pooled connection.
pub struct IntegrationClient {
    http: reqwest::Client,
    base_url: Url,
}

impl IntegrationClient {
    // ── Constructors ─────────────────────────────────────────────────

    /// Build from a controller address, API key, and transport config.
    ///
    /// Injects `X-API-KEY` as a sensitive default header on every request.
    pub fn from_api_key(
        controller: &str,
        api_key: &SecretString,
        transport: &TransportConfig,
    ) -> Result<Self, Error> {
        let mut headers = HeaderMap::new();
        let mut key_value =
            HeaderValue::from_str(api_key.expose_secret()).map_err(|_| Error::InvalidApiKey)?;
        key_value.set_sensitive(true);
        headers.insert("X-API-KEY", key_value);

        let http = transport.build_client_with_headers(headers)?;
        let base_url = Self::normalize_base_url(controller)?;

        Ok(Self { http, base_url })
    }

    /// Wrap an existing `reqwest::Client` (caller manages auth headers).
    pub fn from_reqwest(controller: &str, http: reqwest::Client) -> Result<Self, Error> {
        let base_url = Self::normalize_base_url(controller)?;
        Ok(Self { http, base_url })
    }

    /// The resolved Integration API root, always ending in `/v1/`.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build the Integration API root from a controller address.
    ///
    /// `192.168.1.1` and `unifi.lan:8443` get an `https://` scheme. A full
    /// URL keeps its scheme, and a URL that already points at the
    /// Integration API is not prefixed twice.
    fn normalize_base_url(raw: &str) -> Result<Url, Error> {
        let raw = raw.trim();
        let mut url = if raw.contains("://") {
            Url::parse(raw)?
        } else {
            Url::parse(&format!("https://{raw}"))?
        };

        let path = url.path().trim_end_matches('/').to_owned();
        if path.ends_with(INTEGRATION_BASE_PATH) {
            url.set_path(&format!("{path}/"));
        } else {
            url.set_path(&format!("{path}{INTEGRATION_BASE_PATH}/"));
        }

        Ok(url)
    }

    // ── URL builder ──────────────────────────────────────────────────

    /// Join a relative path (e.g. `"sites"`) onto the base URL.
    fn url(&self, path: &str) -> Result<Url, Error> {
        Ok(self.base_url.join(path)?)
    }

    // ── HTTP verbs ───────────────────────────────────────────────────

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        let url = self.url(path)?;
        debug!("GET {url}");

        let resp = self.http.get(url).send().await?;
        Self::handle_response(resp).await
    }

    async fn get_with_params<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<T, Error> {
        let url = self.url(path)?;
        debug!("GET {url} params={params:?}");

        let resp = self.http.get(url).query(params).send().await?;
        Self::handle_response(resp).await
    }

    // ── Response handling ────────────────────────────────────────────

    /// Decode a 200 response. Any other status, 2xx included, is an error
    /// for these read-only endpoints.
    async fn handle_response<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, Error> {
        let status = resp.status();
        if status != StatusCode::OK {
            let body = resp.text().await.unwrap_or_default();
            return Err(error_from_body(status, body));
        }

        let body = resp.text().await?;
        serde_json::from_str(&body).map_err(|e| {
            let preview: String = body.chars().take(200).collect();
            Error::Deserialization {
                message: format!("{e} (body starts {preview:?})"),
                body,
            }
        })
    }

    // ── Pagination helper ────────────────────────────────────────────

    /// Collect all pages into a single `Vec<T>`, preserving controller order.
    ///
    /// Stops on a short page, once `totalCount` items are collected, or
    /// immediately when the response carries no `totalCount` at all.
    pub async fn paginate_all<T, F, Fut>(&self, limit: i32, fetch: F) -> Result<Vec<T>, Error>
    where
        F: Fn(i64, i32) -> Fut,
        Fut: Future<Output = Result<types::Page<T>, Error>>,
    {
        let mut all = Vec::new();
        let mut offset: i64 = 0;

        loop {
            let page = fetch(offset, limit).await?;
            let received = page.data.len();
            all.extend(page.data);

            let Some(total_count) = page.total_count else {
                break;
            };

            let limit_usize = usize::try_from(limit).unwrap_or(0);
            if received == 0
                || received < limit_usize
                || i64::try_from(all.len()).unwrap_or(i64::MAX) >= total_count
            {
                break;
            }

            offset += i64::try_from(received).unwrap_or(i64::MAX);
        }

        Ok(all)
    }

    // ━━ Public API ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

    // ── Sites ────────────────────────────────────────────────────────

    pub async fn list_sites(
        &self,
        offset: i64,
        limit: i32,
    ) -> Result<types::Page<types::SiteResponse>, Error> {
        self.get_with_params(
            "sites",
            &[("offset", offset.to_string()), ("limit", limit.to_string())],
        )
        .await
    }

    /// Every site the API key can see.
    pub async fn fetch_sites(&self) -> Result<Vec<types::SiteResponse>, Error> {
        self.paginate_all(PAGE_LIMIT, |offset, limit| self.list_sites(offset, limit))
            .await
    }

    // ── Devices ──────────────────────────────────────────────────────

    pub async fn list_devices(
        &self,
        site_id: &str,
        offset: i64,
        limit: i32,
    ) -> Result<types::Page<types::DeviceResponse>, Error> {
        self.get_with_params(
            &format!("sites/{site_id}/devices"),
            &[("offset", offset.to_string()), ("limit", limit.to_string())],
        )
        .await
    }

    /// Every adopted device of a site.
    pub async fn fetch_devices(&self, site_id: &str) -> Result<Vec<types::DeviceResponse>, Error> {
        self.paginate_all(PAGE_LIMIT, |offset, limit| {
            self.list_devices(site_id, offset, limit)
        })
        .await
    }

    // ── Statistics ───────────────────────────────────────────────────

    pub async fn fetch_statistics(
        &self,
        site_id: &str,
        device_id: &str,
    ) -> Result<types::DeviceStatisticsResponse, Error> {
        self.get(&format!(
            "sites/{site_id}/devices/{device_id}/statistics/latest"
        ))
        .await
    }
}

/// Turn a non-200 response into an [`Error`].
///
/// 401 means the key was refused. Otherwise the controller's
/// `{ "message", "code" }` body is used when present, then the raw text,
/// then the status line.
fn error_from_body(status: StatusCode, body: String) -> Error {
    if status == StatusCode::UNAUTHORIZED {
        return Error::InvalidApiKey;
    }

    let (message, code) = match serde_json::from_str::<ErrorResponse>(&body) {
        Ok(ErrorResponse { message, code }) => (message, code),
        Err(_) => ((!body.trim().is_empty()).then_some(body), None),
    };

    Error::Integration {
        message: message.unwrap_or_else(|| status.to_string()),
        code,
        status: status.as_u16(),
    }
}
