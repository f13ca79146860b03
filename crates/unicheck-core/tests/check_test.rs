#![allow(clippy::unwrap_used)]
// End-to-end pipeline tests against a wiremock controller.

use pretty_assertions::assert_eq;
use secrecy::SecretString;
use serde_json::{Value, json};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use unicheck_core::{
    CheckConfig, CheckError, Measurement, Mode, Stage, Status, Thresholds, run_check,
};

const BASE: &str = "/proxy/network/integrations/v1";
const MAC: &str = "aa:bb:cc:dd:ee:ff";
const KEY: &str = "test-api-key";

// ── Helpers ─────────────────────────────────────────────────────────

fn config(server: &MockServer, mode: &str) -> CheckConfig {
    CheckConfig::new(
        server.uri(),
        SecretString::from(KEY.to_string()),
        mode,
        MAC,
        Thresholds {
            warning: 80,
            critical: 90,
        },
    )
    .unwrap()
}

async fn mount_json(server: &MockServer, route: &str, status: u16, body: Value) {
    Mock::given(method("GET"))
        .and(path(format!("{BASE}{route}")))
        .and(header("X-API-KEY", KEY))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .mount(server)
        .await;
}

async fn mount_sites(server: &MockServer) {
    mount_json(
        server,
        "/sites",
        200,
        json!({ "data": [{ "id": "s1", "name": "Default" }] }),
    )
    .await;
}

async fn mount_devices(server: &MockServer) {
    mount_json(
        server,
        "/sites/s1/devices",
        200,
        json!({ "data": [{ "id": "d1", "macAddress": MAC }] }),
    )
    .await;
}

async fn mount_stats(server: &MockServer, body: Value) {
    mount_json(server, "/sites/s1/devices/d1/statistics/latest", 200, body).await;
}

async fn healthy_controller(cpu: Value) -> MockServer {
    let server = MockServer::start().await;
    mount_sites(&server).await;
    mount_devices(&server).await;
    mount_stats(
        &server,
        json!({ "cpuUtilizationPct": cpu, "memoryUtilizationPct": 42 }),
    )
    .await;
    server
}

// ── Classification through the full pipeline ───────────────────────

#[tokio::test]
async fn test_cpu_in_warning_band() {
    let server = healthy_controller(json!(85)).await;

    let m = run_check(&config(&server, "cpu")).await.unwrap();

    assert_eq!(
        m,
        Measurement {
            mode: Mode::Cpu,
            value: 85,
            observed: "85".into(),
            status: Status::Warning,
            thresholds: Thresholds {
                warning: 80,
                critical: 90
            },
        }
    );
}

#[tokio::test]
async fn test_cpu_critical() {
    let server = healthy_controller(json!(95)).await;

    let m = run_check(&config(&server, "cpu")).await.unwrap();

    assert_eq!((m.value, m.status), (95, Status::Critical));
}

#[tokio::test]
async fn test_cpu_ok() {
    let server = healthy_controller(json!(10)).await;

    let m = run_check(&config(&server, "cpu")).await.unwrap();

    assert_eq!((m.value, m.status), (10, Status::Ok));
}

#[tokio::test]
async fn test_memory_mode_reads_memory_field() {
    let server = healthy_controller(json!(99)).await;

    let m = run_check(&config(&server, "memory")).await.unwrap();

    assert_eq!(m.mode, Mode::Memory);
    assert_eq!((m.value, m.status), (42, Status::Ok));
}

#[tokio::test]
async fn test_named_site_is_used() {
    let server = MockServer::start().await;
    mount_json(
        &server,
        "/sites",
        200,
        json!({ "data": [
            { "id": "s1", "name": "Default" },
            { "id": "s2", "name": "Branch" }
        ] }),
    )
    .await;
    mount_json(
        &server,
        "/sites/s2/devices",
        200,
        json!({ "data": [{ "id": "d9", "macAddress": MAC }] }),
    )
    .await;
    mount_json(
        &server,
        "/sites/s2/devices/d9/statistics/latest",
        200,
        json!({ "cpuUtilizationPct": 91.4 }),
    )
    .await;

    let cfg = config(&server, "cpu").with_site(Some("Branch".into()));
    let m = run_check(&cfg).await.unwrap();

    assert_eq!((m.value, m.status), (91, Status::Critical));
    assert_eq!(m.observed, "91.4");
}

// ── Lookups ─────────────────────────────────────────────────────────

#[tokio::test]
async fn test_unknown_site() {
    let server = MockServer::start().await;
    mount_sites(&server).await;

    let cfg = config(&server, "cpu").with_site(Some("Nowhere".into()));
    let err = run_check(&cfg).await.unwrap_err();

    assert!(
        matches!(err, CheckError::SiteNotFound { ref name } if name == "Nowhere"),
        "got: {err:?}"
    );
}

#[tokio::test]
async fn test_unknown_device() {
    let server = MockServer::start().await;
    mount_sites(&server).await;
    mount_json(
        &server,
        "/sites/s1/devices",
        200,
        json!({ "data": [{ "id": "d1", "macAddress": "00:11:22:33:44:55" }] }),
    )
    .await;

    let err = run_check(&config(&server, "cpu")).await.unwrap_err();

    assert!(
        matches!(err, CheckError::DeviceNotFound { ref mac } if mac == MAC),
        "got: {err:?}"
    );
}

// ── Request failures ────────────────────────────────────────────────

#[tokio::test]
async fn test_sites_request_failure() {
    let server = MockServer::start().await;
    mount_json(&server, "/sites", 500, json!({ "message": "boom" })).await;

    let err = run_check(&config(&server, "cpu")).await.unwrap_err();

    assert!(
        matches!(
            err,
            CheckError::ControllerRequestFailed {
                stage: Stage::Sites,
                status: Some(500),
                ..
            }
        ),
        "got: {err:?}"
    );
}

#[tokio::test]
async fn test_devices_request_failure() {
    let server = MockServer::start().await;
    mount_sites(&server).await;
    mount_json(&server, "/sites/s1/devices", 403, json!({})).await;

    let err = run_check(&config(&server, "cpu")).await.unwrap_err();

    assert_eq!(err.stage(), Some(Stage::Devices));
    assert!(
        matches!(
            err,
            CheckError::ControllerRequestFailed {
                status: Some(403),
                ..
            }
        ),
        "got: {err:?}"
    );
}

#[tokio::test]
async fn test_statistics_failure_is_distinct() {
    let server = MockServer::start().await;
    mount_sites(&server).await;
    mount_devices(&server).await;
    mount_json(
        &server,
        "/sites/s1/devices/d1/statistics/latest",
        404,
        json!({ "message": "not found" }),
    )
    .await;

    let err = run_check(&config(&server, "cpu")).await.unwrap_err();

    assert!(
        matches!(
            err,
            CheckError::StatisticsUnavailable {
                ref mac,
                status: Some(404),
                ..
            } if mac == MAC
        ),
        "got: {err:?}"
    );
}

#[tokio::test]
async fn test_undecodable_statistics_is_request_failure() {
    let server = MockServer::start().await;
    mount_sites(&server).await;
    mount_devices(&server).await;
    Mock::given(method("GET"))
        .and(path(format!("{BASE}/sites/s1/devices/d1/statistics/latest")))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = run_check(&config(&server, "cpu")).await.unwrap_err();

    assert!(
        matches!(
            err,
            CheckError::ControllerRequestFailed {
                stage: Stage::Statistics,
                ..
            }
        ),
        "got: {err:?}"
    );
}

#[tokio::test]
async fn test_missing_metric_field() {
    let server = MockServer::start().await;
    mount_sites(&server).await;
    mount_devices(&server).await;
    mount_stats(&server, json!({ "uptimeSec": 10 })).await;

    let err = run_check(&config(&server, "memory")).await.unwrap_err();

    assert!(
        matches!(
            err,
            CheckError::MetricNotNumeric {
                field: "memoryUtilizationPct"
            }
        ),
        "got: {err:?}"
    );
}

#[tokio::test]
async fn test_unreachable_controller() {
    // Bind and drop a server to get a port nothing listens on.
    let uri = {
        let server = MockServer::start().await;
        server.uri()
    };
    let cfg = CheckConfig::new(
        uri,
        SecretString::from(KEY.to_string()),
        "cpu",
        MAC,
        Thresholds {
            warning: 80,
            critical: 90,
        },
    )
    .unwrap();

    let err = run_check(&cfg).await.unwrap_err();

    assert!(
        matches!(
            err,
            CheckError::ControllerRequestFailed {
                stage: Stage::Sites,
                status: None,
                ..
            }
        ),
        "got: {err:?}"
    );
}
