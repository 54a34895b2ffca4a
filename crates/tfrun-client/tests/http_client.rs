//! End-to-end tests for `TfeClient` against an in-process fake of the API.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use tokio::net::TcpListener;

use tfrun_client::{ClientConfig, ClientError, RunApi, TfeClient};
use tfrun_core::{RunCreateOptions, RunId, Workspace, WorkspaceRef};

const TOKEN: &str = "test-token";

#[derive(Clone, Default)]
struct Recorded {
    bodies: Arc<Mutex<Vec<Value>>>,
    content_types: Arc<Mutex<Vec<String>>>,
}

fn authorized(headers: &HeaderMap) -> bool {
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(|v| v == format!("Bearer {TOKEN}"))
        .unwrap_or(false)
}

async fn create_run(
    State(recorded): State<Recorded>,
    headers: HeaderMap,
    body: String,
) -> (StatusCode, Json<Value>) {
    if !authorized(&headers) {
        return (StatusCode::UNAUTHORIZED, Json(json!({ "errors": [] })));
    }
    let content_type = headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    recorded.content_types.lock().unwrap().push(content_type);
    recorded
        .bodies
        .lock()
        .unwrap()
        .push(serde_json::from_str(&body).unwrap());

    (
        StatusCode::CREATED,
        Json(json!({
            "data": {
                "id": "run-new",
                "type": "runs",
                "attributes": { "status": "pending", "message": "from test" }
            }
        })),
    )
}

async fn read_run(Path(id): Path<String>, headers: HeaderMap) -> (StatusCode, Json<Value>) {
    if !authorized(&headers) {
        return (StatusCode::UNAUTHORIZED, Json(json!({ "errors": [] })));
    }
    match id.as_str() {
        "run-missing" => (StatusCode::NOT_FOUND, Json(json!({ "errors": [] }))),
        "run-broken" => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "errors": [{ "status": "500" }] })),
        ),
        _ => (
            StatusCode::OK,
            Json(json!({
                "data": { "id": id, "type": "runs", "attributes": { "status": "applied" } }
            })),
        ),
    }
}

async fn current_state_version(Path(id): Path<String>) -> Json<Value> {
    Json(json!({
        "data": {
            "id": format!("sv-of-{id}"),
            "type": "state-versions",
            "attributes": { "resources-processed": true, "serial": 7 }
        }
    }))
}

async fn read_workspace(Path((org, name)): Path<(String, String)>) -> (StatusCode, Json<Value>) {
    if org != "acme" {
        return (StatusCode::NOT_FOUND, Json(json!({ "errors": [] })));
    }
    (
        StatusCode::OK,
        Json(json!({
            "data": { "id": "ws-42", "type": "workspaces", "attributes": { "name": name } }
        })),
    )
}

async fn spawn_server(recorded: Recorded) -> SocketAddr {
    let app = Router::new()
        .route("/api/v2/runs", post(create_run))
        .route("/api/v2/runs/:id", get(read_run))
        .route(
            "/api/v2/workspaces/:id/current-state-version",
            get(current_state_version),
        )
        .route(
            "/api/v2/organizations/:org/workspaces/:name",
            get(read_workspace),
        )
        .with_state(recorded);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

fn client_for(addr: SocketAddr, token: &str) -> TfeClient {
    TfeClient::new(&ClientConfig::new(token).with_hostname(format!("http://{addr}")))
}

#[tokio::test]
async fn test_create_run_posts_jsonapi_document() {
    let recorded = Recorded::default();
    let addr = spawn_server(recorded.clone()).await;
    let client = client_for(addr, TOKEN);

    let opts = RunCreateOptions {
        workspace_id: Some("ws-42".into()),
        ..RunCreateOptions::new().with_message("from test").with_plan_only(true)
    };
    let run = client.create_run(&opts).await.unwrap();

    assert_eq!(run.id.as_str(), "run-new");
    assert_eq!(run.status.as_str(), "pending");
    assert_eq!(run.attribute("message"), Some(&json!("from test")));

    assert_eq!(
        *recorded.content_types.lock().unwrap(),
        vec!["application/vnd.api+json".to_string()]
    );
    let bodies = recorded.bodies.lock().unwrap();
    assert_eq!(bodies[0]["data"]["type"], "runs");
    assert_eq!(bodies[0]["data"]["attributes"]["plan-only"], true);
    assert_eq!(
        bodies[0]["data"]["relationships"]["workspace"]["data"]["id"],
        "ws-42"
    );
}

#[tokio::test]
async fn test_read_run() {
    let addr = spawn_server(Recorded::default()).await;
    let client = client_for(addr, TOKEN);

    let run = client.read_run(&RunId::new("run-abc")).await.unwrap();
    assert_eq!(run.id.as_str(), "run-abc");
    assert!(run.status.is_success());
}

#[tokio::test]
async fn test_read_run_not_found() {
    let addr = spawn_server(Recorded::default()).await;
    let client = client_for(addr, TOKEN);

    let err = client.read_run(&RunId::new("run-missing")).await.unwrap_err();
    assert!(matches!(err, ClientError::NotFound(_)), "{err:?}");
}

#[tokio::test]
async fn test_server_error_is_reported_with_status() {
    let addr = spawn_server(Recorded::default()).await;
    let client = client_for(addr, TOKEN);

    let err = client.read_run(&RunId::new("run-broken")).await.unwrap_err();
    match err {
        ClientError::Api { status, body } => {
            assert_eq!(status, 500);
            assert!(body.contains("errors"));
        }
        other => panic!("Expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_bad_token_is_rejected() {
    let addr = spawn_server(Recorded::default()).await;
    let client = client_for(addr, "wrong");

    let err = client.read_run(&RunId::new("run-abc")).await.unwrap_err();
    assert!(matches!(err, ClientError::Api { status: 401, .. }), "{err:?}");
}

#[tokio::test]
async fn test_read_current_state_version() {
    let addr = spawn_server(Recorded::default()).await;
    let client = client_for(addr, TOKEN);

    let workspace = Workspace::new("ws-42", "prod", "acme");
    let sv = client.read_current_state_version(&workspace).await.unwrap();
    assert_eq!(sv.id.as_str(), "sv-of-ws-42");
    assert!(sv.resources_processed);
}

#[tokio::test]
async fn test_read_workspace() {
    let addr = spawn_server(Recorded::default()).await;
    let client = client_for(addr, TOKEN);

    let ws = client
        .read_workspace(&WorkspaceRef::new("acme", "prod"))
        .await
        .unwrap();
    assert_eq!(ws, Workspace::new("ws-42", "prod", "acme"));

    let err = client
        .read_workspace(&WorkspaceRef::new("other", "prod"))
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::NotFound(_)));
}

#[tokio::test]
async fn test_create_run_without_workspace_makes_no_request() {
    let recorded = Recorded::default();
    let addr = spawn_server(recorded.clone()).await;
    let client = client_for(addr, TOKEN);

    let err = client
        .create_run(&RunCreateOptions::new())
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::InvalidRequest(_)));
    assert!(recorded.bodies.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_path_segments_are_percent_encoded() {
    let addr = spawn_server(Recorded::default()).await;
    let client = client_for(addr, TOKEN);

    // The fake echoes the decoded name back, so a truncated path would
    // resolve to "prod" instead.
    let ws = client
        .read_workspace(&WorkspaceRef::new("acme", "prod?staging"))
        .await
        .unwrap();
    assert_eq!(ws.name, "prod?staging");

    let run = client.read_run(&RunId::new("run-a#b")).await.unwrap();
    assert_eq!(run.id.as_str(), "run-a#b");
}
