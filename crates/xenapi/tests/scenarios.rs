//! End-to-end scenarios against a mock XenAPI endpoint.
//!
//! Each test starts a `wiremock` server speaking JSON-RPC on `/jsonrpc` and drives
//! a real [`Session`] over HTTP.

use std::fs;
use std::path::PathBuf;

use secrecy::SecretString;
use serde_json::{json, Value};
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};
use xenapi::enums::{AllocationAlgorithm, TristateType};
use xenapi::refs::{GpuGroupRef, PbdRef, PgpuRef, SessionRef, TaskRef, VbdRef, VmGuestMetricsRef};
use xenapi::{ApiVersion, Error, ErrorKind, Session, SessionConfig, WaitOptions};

/// Answers with a fixed JSON-RPC body, echoing the request's correlation id.
struct Reply(Value);

impl Respond for Reply {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let id = request
            .body_json::<Value>()
            .map(|body| body["id"].clone())
            .unwrap_or(Value::Null);
        let mut body = self.0.clone();
        body["jsonrpc"] = json!("2.0");
        body["id"] = id;
        ResponseTemplate::new(200).set_body_json(body)
    }
}

async fn answer(server: &MockServer, rpc: &str, body: Value) {
    Mock::given(method("POST"))
        .and(path("/jsonrpc"))
        .and(body_partial_json(json!({ "method": rpc })))
        .respond_with(Reply(body))
        .mount(server)
        .await;
}

async fn answer_once(server: &MockServer, rpc: &str, body: Value) {
    Mock::given(method("POST"))
        .and(path("/jsonrpc"))
        .and(body_partial_json(json!({ "method": rpc })))
        .respond_with(Reply(body))
        .expect(1)
        .mount(server)
        .await;
}

fn session_for(server: &MockServer) -> Session {
    let config = SessionConfig::new(server.uri()).unwrap();
    Session::new(&config).unwrap()
}

fn secret(text: &str) -> SecretString {
    SecretString::from(text.to_string())
}

async fn mount_discovery(server: &MockServer, major: i64, minor: i64, xapi: &str) {
    answer(server, "pool.get_all", json!({ "result": ["OpaqueRef:pool"] })).await;
    answer(
        server,
        "pool.get_record",
        json!({ "result": { "uuid": "pool-uuid", "master": "OpaqueRef:coordinator" } }),
    )
    .await;
    answer(
        server,
        "host.get_record",
        json!({
            "result": {
                "uuid": "host-uuid",
                "API_version_major": major.to_string(),
                "API_version_minor": minor.to_string(),
                "software_version": { "xapi": xapi, "product_version": "8.3.0" },
            }
        }),
    )
    .await;
}

async fn logged_in(server: &MockServer) -> Session {
    answer(
        server,
        "session.login_with_password",
        json!({ "result": "OpaqueRef:session" }),
    )
    .await;
    mount_discovery(server, 2, 21, "24.39.0").await;
    let session = session_for(server);
    session.login("root", &secret("secret")).await.unwrap();
    session
}

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

fn load_fixture(name: &str) -> Value {
    let fixture_path = fixtures_dir().join(name);
    let text = fs::read_to_string(&fixture_path).unwrap_or_else(|e| {
        panic!("Failed to read fixture at {}: {}", fixture_path.display(), e)
    });
    serde_json::from_str(&text).unwrap()
}

#[tokio::test]
async fn test_login_with_wrong_password() {
    let server = MockServer::start().await;
    answer_once(
        &server,
        "session.login_with_password",
        json!({ "error": { "code": "SESSION_AUTHENTICATION_FAILED", "params": [] } }),
    )
    .await;

    let session = session_for(&server);
    let err = session
        .login_with_password("root", &secret("wrong"), "2.15", "tester")
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Authentication);
    assert_eq!(err.error_code(), "SESSION_AUTHENTICATION_FAILED");
    assert!(!session.is_logged_in());
}

#[tokio::test]
async fn test_login_discovers_coordinator_versions() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/jsonrpc"))
        .and(body_partial_json(json!({
            "method": "session.login_with_password",
            "params": ["root", "secret", "2.15", "tester"],
        })))
        .respond_with(Reply(json!({ "result": "OpaqueSession/123" })))
        .expect(1)
        .mount(&server)
        .await;
    mount_discovery(&server, 2, 15, "25.14.0").await;

    let session = session_for(&server);
    let reference = session
        .login_with_password("root", &secret("secret"), "2.15", "tester")
        .await
        .unwrap();

    assert_eq!(reference, SessionRef::new("OpaqueSession/123"));
    assert_eq!(session.reference(), reference);
    assert_eq!(session.api_version(), ApiVersion::V2_15);
    assert_eq!(session.api_version().to_string(), "2.15");
    assert_eq!(session.xapi_version(), "25.14.0");
}

#[tokio::test]
async fn test_login_against_pool_member() {
    let server = MockServer::start().await;
    answer(
        &server,
        "session.login_with_password",
        json!({ "error": { "code": "HOST_IS_SLAVE", "params": ["10.0.0.7"] } }),
    )
    .await;

    let session = session_for(&server);
    let err = session.login("root", &secret("secret")).await.unwrap_err();

    assert!(matches!(err, Error::HostIsSlave(_)));
    assert_eq!(err.kind(), ErrorKind::CoordinatorRedirection);
    assert_eq!(err.error_code(), "HOST_IS_SLAVE");
    assert_eq!(err.fault().unwrap().params(), ["10.0.0.7"]);
    assert_eq!(err.coordinator_address(), Some("10.0.0.7"));
    assert!(!session.is_logged_in());
}

#[tokio::test]
async fn test_call_against_pool_member_keeps_session() {
    let server = MockServer::start().await;
    let session = logged_in(&server).await;
    answer(
        &server,
        "VM.get_all",
        json!({ "error": { "code": "HOST_IS_SLAVE", "params": ["10.0.0.7"] } }),
    )
    .await;

    let err = session.vm().get_all().await.unwrap_err();

    assert_eq!(err.coordinator_address(), Some("10.0.0.7"));
    assert_eq!(session.reference(), SessionRef::new("OpaqueRef:session"));
    assert_eq!(session.api_version(), ApiVersion::V2_21);
}

#[tokio::test]
async fn test_eject_empty_drive() {
    let server = MockServer::start().await;
    let session = logged_in(&server).await;
    Mock::given(method("POST"))
        .and(path("/jsonrpc"))
        .and(body_partial_json(json!({
            "method": "VBD.eject",
            "params": ["OpaqueRef:session", "OpaqueVBD/7"],
        })))
        .respond_with(Reply(json!({
            "error": { "code": "VBD_IS_EMPTY", "params": ["OpaqueVBD/7"] }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let err = session
        .vbd()
        .eject(&VbdRef::new("OpaqueVBD/7"))
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::RemoteFault);
    assert!(err.is_fault("VBD_IS_EMPTY"));
    assert_eq!(err.fault().unwrap().param(0), Some("OpaqueVBD/7"));
}

#[tokio::test]
async fn test_destroy_sync_and_async() {
    let server = MockServer::start().await;
    let session = logged_in(&server).await;
    answer_once(&server, "VBD.destroy", json!({ "result": "" })).await;
    answer_once(&server, "Async.VBD.destroy", json!({ "result": "OpaqueTask/9" })).await;
    answer(&server, "task.get_status", json!({ "result": "success" })).await;
    answer(&server, "task.get_result", json!({ "result": "" })).await;

    let vbd = VbdRef::new("OpaqueRef:vbd");
    session.vbd().destroy(&vbd).await.unwrap();

    let task = session.vbd().async_destroy(&vbd).await.unwrap();
    assert_eq!(task, TaskRef::new("OpaqueTask/9"));

    session
        .task()
        .wait_for::<()>(&task, WaitOptions::default())
        .await
        .unwrap();
}

#[tokio::test]
async fn test_gpu_group_records() {
    let server = MockServer::start().await;
    let session = logged_in(&server).await;
    answer_once(
        &server,
        "GPU_group.get_all_records",
        json!({ "result": load_fixture("gpu_group_records.json") }),
    )
    .await;

    let records = session.gpu_group().get_all_records().await.unwrap();
    assert_eq!(records.len(), 1);

    let group_ref = GpuGroupRef::new("OpaqueRef:6a4e7c1b-2f0d-4b8e-9d3a-0c5f1e2d7a90");
    let group = &records[&group_ref];
    assert_eq!(group.uuid, "3f2b9c4e-7d61-4e0a-a1b8-5c9d0e7f6a12");
    assert_eq!(
        group.pgpus,
        [
            PgpuRef::new("OpaqueRef:pgpu-0000-0b"),
            PgpuRef::new("OpaqueRef:pgpu-0000-0a"),
            PgpuRef::new("OpaqueRef:pgpu-0000-0c"),
        ]
    );
    assert!(group.vgpus.is_empty());

    let mut types = group.gpu_types.clone();
    types.sort();
    assert_eq!(types, ["10de/13f2", "10de/13f3"]);

    assert_eq!(group.other_config.len(), 2);
    assert_eq!(group.other_config["vendor"], "nvidia");
    assert_eq!(group.other_config["placement"], "rack-4");
    assert_eq!(group.allocation_algorithm, AllocationAlgorithm::DepthFirst);
    assert_eq!(group.enabled_vgpu_types.len(), 1);
}

#[tokio::test]
async fn test_logout_then_call_fails_locally() {
    let server = MockServer::start().await;
    let session = logged_in(&server).await;
    answer_once(&server, "session.logout", json!({ "result": "" })).await;

    session.logout().await.unwrap();

    let err = session.vm().get_all().await.unwrap_err();
    assert_eq!(err, Error::NotLoggedIn);
}

#[tokio::test]
async fn test_guest_metrics_and_storage_plug() {
    let server = MockServer::start().await;
    let session = logged_in(&server).await;
    answer_once(
        &server,
        "VM_guest_metrics.get_record",
        json!({
            "result": {
                "uuid": "gm-1",
                "os_version": { "name": "Debian GNU/Linux 12", "distro": "debian" },
                "PV_drivers_version": { "major": "9", "minor": "4" },
                "PV_drivers_up_to_date": true,
                "memory": {},
                "disks": {},
                "networks": { "0/ip": "10.0.0.21" },
                "other": { "feature-balloon": "1" },
                "last_updated": "20261016T07:59:30Z",
                "other_config": {},
                "live": true,
                "can_use_hotplug_vbd": "yes",
                "can_use_hotplug_vif": "unspecified",
                "PV_drivers_detected": true,
            }
        }),
    )
    .await;
    Mock::given(method("POST"))
        .and(path("/jsonrpc"))
        .and(body_partial_json(json!({
            "method": "Async.PBD.plug",
            "params": ["OpaqueRef:session", "OpaqueRef:pbd"],
        })))
        .respond_with(Reply(json!({ "result": "OpaqueTask/pbd" })))
        .expect(1)
        .mount(&server)
        .await;

    let metrics = session
        .vm_guest_metrics()
        .get_record(&VmGuestMetricsRef::new("OpaqueRef:gm"))
        .await
        .unwrap();
    assert_eq!(metrics.networks["0/ip"], "10.0.0.21");
    assert_eq!(metrics.can_use_hotplug_vbd, TristateType::Yes);
    assert_eq!(metrics.can_use_hotplug_vif, TristateType::Unspecified);
    assert_eq!(metrics.last_updated.to_rfc3339(), "2026-10-16T07:59:30+00:00");

    let task = session
        .pbd()
        .async_plug(&PbdRef::new("OpaqueRef:pbd"))
        .await
        .unwrap();
    assert_eq!(task, TaskRef::new("OpaqueTask/pbd"));
}
