#![allow(clippy::unwrap_used)]
// Integration tests for `Client` using wiremock.

use std::io;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use serde::Deserialize;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use wnc_api::{Cause, Client, Error, Method, RequestContext, YANG_DATA_JSON};

const TOKEN: &str = "YWRtaW46c2VjcmV0";

#[derive(Debug, Deserialize)]
struct ContainerModel {
    #[serde(rename = "module:container")]
    container: Container,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
struct Container {
    field_count: u32,
}

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, Client) {
    let server = MockServer::start().await;
    let client = Client::builder(server.uri(), TOKEN.to_owned())
        .build()
        .unwrap();
    (server, client)
}

fn ctx() -> RequestContext {
    RequestContext::background()
}

async fn mount_status(server: &MockServer, status: u16, body: &str) {
    Mock::given(method("GET"))
        .and(path("/restconf/data/module:container"))
        .respond_with(ResponseTemplate::new(status).set_body_string(body))
        .mount(server)
        .await;
}

// ── Fetch ───────────────────────────────────────────────────────────

#[tokio::test]
async fn test_fetch_decodes_wrapped_container() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/restconf/data/module:container"))
        .and(header("authorization", format!("Basic {TOKEN}").as_str()))
        .and(header("accept", YANG_DATA_JSON))
        .and(header("user-agent", wnc_api::DEFAULT_USER_AGENT))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "module:container": { "field-count": 2 } })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let model: ContainerModel = client.fetch(&ctx(), "module:container").await.unwrap();
    assert_eq!(model.container.field_count, 2);
}

#[tokio::test]
async fn test_fetch_not_found() {
    let (server, client) = setup().await;
    mount_status(&server, 404, "").await;

    let result = client
        .fetch::<ContainerModel>(&ctx(), "module:container")
        .await;
    assert!(
        matches!(result, Err(Error::ResourceNotFound)),
        "expected ResourceNotFound, got: {result:?}"
    );
}

#[tokio::test]
async fn test_fetch_unauthorized() {
    let (server, client) = setup().await;
    mount_status(&server, 401, "").await;

    let result = client
        .fetch::<ContainerModel>(&ctx(), "module:container")
        .await;
    assert!(
        matches!(result, Err(Error::AuthenticationFailed)),
        "expected AuthenticationFailed, got: {result:?}"
    );
}

#[tokio::test]
async fn test_fetch_forbidden() {
    let (server, client) = setup().await;
    mount_status(&server, 403, "").await;

    let err = client
        .fetch::<ContainerModel>(&ctx(), "module:container")
        .await
        .unwrap_err();
    assert!(matches!(err, Error::AccessForbidden));
    assert!(err.is_auth());
}

#[tokio::test]
async fn test_fetch_server_error_keeps_status_and_body() {
    let (server, client) = setup().await;
    let body = r#"{"ietf-restconf:errors":{"error":[{"error-tag":"operation-failed"}]}}"#;
    mount_status(&server, 500, body).await;

    match client
        .fetch::<ContainerModel>(&ctx(), "module:container")
        .await
    {
        Err(Error::RemoteApi { status, body: got }) => {
            assert_eq!(status, 500);
            assert_eq!(got, body);
        }
        other => panic!("expected RemoteApi, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_fetch_undecodable_body_is_other() {
    let (server, client) = setup().await;
    mount_status(&server, 200, r#"{"module:other":{}}"#).await;

    let result = client
        .fetch::<ContainerModel>(&ctx(), "module:container")
        .await;
    match result {
        Err(Error::Other(Cause::Decode { body, .. })) => {
            assert_eq!(body, r#"{"module:other":{}}"#);
        }
        other => panic!("expected Decode error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_custom_user_agent_is_sent() {
    let server = MockServer::start().await;
    let client = Client::builder(server.uri(), TOKEN.to_owned())
        .user_agent("first/1")
        .user_agent("inventory-sync/2.0")
        .build()
        .unwrap();

    Mock::given(method("GET"))
        .and(header("user-agent", "inventory-sync/2.0"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "module:container": { "field-count": 0 } })),
        )
        .expect(1)
        .mount(&server)
        .await;

    client
        .fetch::<ContainerModel>(&ctx(), "module:container")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_dot_segments_are_rejected_before_io() {
    let (server, client) = setup().await;

    Mock::given(wiremock::matchers::any())
        .respond_with(ResponseTemplate::new(204))
        .expect(0)
        .mount(&server)
        .await;

    let result = client
        .submit(&ctx(), Method::POST, "../operations/module:do-thing", &json!({}))
        .await;
    assert!(matches!(
        result,
        Err(Error::InvalidConfiguration { field: "path", .. })
    ));
}

// ── Writes ──────────────────────────────────────────────────────────

#[tokio::test]
async fn test_submit_sends_yang_json() {
    let (server, client) = setup().await;
    let payload = json!({ "module:container": { "field-count": 3 } });

    for verb in ["POST", "PUT", "PATCH"] {
        Mock::given(method(verb))
            .and(path("/restconf/data/module:container"))
            .and(header("content-type", YANG_DATA_JSON))
            .and(body_json(&payload))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;
    }

    for verb in [Method::POST, Method::PUT, Method::PATCH] {
        client
            .submit(&ctx(), verb, "module:container", &payload)
            .await
            .unwrap();
    }
}

#[tokio::test]
async fn test_submit_rejects_read_methods_before_io() {
    let (server, client) = setup().await;

    Mock::given(wiremock::matchers::any())
        .respond_with(ResponseTemplate::new(204))
        .expect(0)
        .mount(&server)
        .await;

    let result = client
        .submit(&ctx(), Method::GET, "module:container", &json!({}))
        .await;
    assert!(matches!(
        result,
        Err(Error::InvalidConfiguration {
            field: "method",
            ..
        })
    ));
}

#[tokio::test]
async fn test_submit_classifies_failures() {
    let (server, client) = setup().await;

    Mock::given(method("PATCH"))
        .respond_with(ResponseTemplate::new(409).set_body_string("data-exists"))
        .mount(&server)
        .await;

    let result = client
        .submit(&ctx(), Method::PATCH, "module:container", &json!({}))
        .await;
    assert!(matches!(result, Err(Error::RemoteApi { status: 409, .. })));
}

#[tokio::test]
async fn test_delete() {
    let (server, client) = setup().await;

    Mock::given(method("DELETE"))
        .and(path("/restconf/data/module:container/entry=a"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    client
        .delete(&ctx(), "module:container/entry=a")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_invoke_rpc_targets_operations_root() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/restconf/operations/module:do-thing"))
        .and(body_json(json!({ "input": { "x": 1 } })))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    client
        .invoke_rpc(&ctx(), "module:do-thing", &json!({ "input": { "x": 1 } }))
        .await
        .unwrap();
}

// ── Timeouts and cancellation ───────────────────────────────────────

#[tokio::test]
async fn test_per_request_timeout() {
    let server = MockServer::start().await;
    let client = Client::builder(server.uri(), TOKEN.to_owned())
        .timeout(Duration::from_secs(1))
        .build()
        .unwrap();

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(5)))
        .mount(&server)
        .await;

    let started = Instant::now();
    let result = client
        .fetch::<ContainerModel>(&ctx(), "module:container")
        .await;

    assert!(
        matches!(result, Err(Error::RequestTimeout)),
        "expected RequestTimeout, got: {result:?}"
    );
    assert!(started.elapsed() < Duration::from_secs(2));
}

#[tokio::test]
async fn test_context_deadline_aborts_in_flight_request() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(5)))
        .mount(&server)
        .await;

    let started = Instant::now();
    let ctx = RequestContext::background().with_timeout(Duration::from_millis(300));
    let result = client
        .fetch::<ContainerModel>(&ctx, "module:container")
        .await;

    assert!(matches!(result, Err(Error::RequestTimeout)));
    assert!(started.elapsed() < Duration::from_secs(2));
}

#[tokio::test]
async fn test_expired_context_sends_nothing() {
    let (server, client) = setup().await;

    Mock::given(wiremock::matchers::any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let ctx = RequestContext::background().with_timeout(Duration::ZERO);
    let result = client
        .fetch::<ContainerModel>(&ctx, "module:container")
        .await;
    assert!(matches!(result, Err(Error::RequestTimeout)));

    let cancelled = RequestContext::background();
    cancelled.cancel();
    let result = client
        .fetch::<ContainerModel>(&cancelled, "module:container")
        .await;
    assert!(matches!(result, Err(Error::Cancelled)));
}

#[tokio::test]
async fn test_cancellation_aborts_in_flight_request() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(5)))
        .mount(&server)
        .await;

    let ctx = RequestContext::background();
    let canceller = ctx.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(100)).await;
        canceller.cancel();
    });

    let started = Instant::now();
    let result = client
        .fetch::<ContainerModel>(&ctx, "module:container")
        .await;

    assert!(matches!(result, Err(Error::Cancelled)));
    assert!(started.elapsed() < Duration::from_secs(2));
}

// ── Transport failures ──────────────────────────────────────────────

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let client = Client::builder(format!("http://127.0.0.1:{port}"), TOKEN.to_owned())
        .build()
        .unwrap();

    let err = client
        .fetch::<ContainerModel>(&ctx(), "module:container")
        .await
        .unwrap_err();
    assert!(
        matches!(err, Error::Other(Cause::Transport(_))),
        "expected transport error, got: {err:?}"
    );
    assert!(err.is_transient());
}

// ── Concurrency ─────────────────────────────────────────────────────

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_calls_share_one_client() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "module:container": { "field-count": 5 } })),
        )
        .expect(16)
        .mount(&server)
        .await;

    let mut handles = Vec::new();
    for _ in 0..16 {
        let client = client.clone();
        handles.push(tokio::spawn(async move {
            client
                .fetch::<ContainerModel>(&RequestContext::background(), "module:container")
                .await
        }));
    }

    for handle in handles {
        let model = handle.await.unwrap().unwrap();
        assert_eq!(model.container.field_count, 5);
    }
}

// ── Logging ─────────────────────────────────────────────────────────

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Captured {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

#[tokio::test]
async fn test_logger_receives_request_events() {
    let server = MockServer::start().await;
    let captured = Captured::default();
    let writer = captured.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();

    let client = Client::builder(server.uri(), TOKEN.to_owned())
        .logger(subscriber)
        .build()
        .unwrap();
    mount_status(&server, 404, "").await;

    let _ = client
        .fetch::<ContainerModel>(&ctx(), "module:container")
        .await;

    let logs = captured.contents();
    assert!(logs.contains("sending request"), "logs: {logs}");
    assert!(logs.contains("request rejected"), "logs: {logs}");
    assert!(!logs.contains(TOKEN), "token leaked into logs: {logs}");
}
