//! Integration tests for the API facades against a mock backend.
//!
//! Each test stands up a wiremock server, mounts the endpoint under test
//! with a canned response, and asserts on the typed result or the surfaced
//! error class.

use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use fleetmon::api::types::{
    ContainerDataRequest, HealthStatus, LoginRequest, RegisterRequest, ServerRegisterRequest,
    ServerStatus,
};
use fleetmon::{ApiError, ApiTransport, AuthApi, ContainersApi, ServersApi};

fn transport(server: &MockServer) -> ApiTransport {
    ApiTransport::new(server.uri()).expect("build transport")
}

fn sample_server(id: i64) -> serde_json::Value {
    json!({
        "id": id,
        "user_name": "ops",
        "ssh_password_encrypted": "c2VjcmV0",
        "ip_address": "10.0.0.5",
        "port": 22,
        "status": "up"
    })
}

fn sample_health(server_id: i64) -> serde_json::Value {
    json!({
        "id": 7,
        "server_id": server_id,
        "status": "healthy",
        "cpu_usage": 12.5,
        "memory_usage": 48.0,
        "disk_usage": 71.3,
        "uptime": "5 days, 3:02:11",
        "checked_at": "2026-08-20T10:15:00Z"
    })
}

fn sample_container(server_id: i64, container_id: &str) -> serde_json::Value {
    json!({
        "id": 1,
        "server_id": server_id,
        "container_id": container_id,
        "name": "web",
        "image": "nginx:1.27",
        "status": "running"
    })
}

fn sample_snapshot(server_id: i64) -> serde_json::Value {
    json!({
        "server": sample_server(server_id),
        "current_health": sample_health(server_id),
        "containers": [sample_container(server_id, "abc123")]
    })
}

// --- Auth facade ---

#[tokio::test]
async fn login_returns_token_for_configured_user() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .and(body_json(json!({"username": "alice", "password": "hunter2"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "access_token": "tok-123",
                "token_type": "bearer",
                "expires_at": "2026-09-01T00:00:00Z",
                "user_id": 42
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let auth = AuthApi::new(transport(&server));
    let token = auth
        .login(&LoginRequest {
            username: "alice".to_string(),
            password: "hunter2".to_string(),
        })
        .await
        .expect("login");

    assert_eq!(token.user_id, 42);
    assert_eq!(token.access_token, "tok-123");
    assert_eq!(token.token_type, "bearer");
}

#[tokio::test]
async fn login_rejected_credentials_surface_authentication_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(401).set_body_string("invalid credentials"))
        .mount(&server)
        .await;

    let auth = AuthApi::new(transport(&server));
    let err = auth
        .login(&LoginRequest {
            username: "alice".to_string(),
            password: "wrong".to_string(),
        })
        .await
        .expect_err("login should fail");

    match err {
        ApiError::Authentication { body } => assert_eq!(body, "invalid credentials"),
        other => panic!("expected Authentication, got {other:?}"),
    }
}

#[tokio::test]
async fn login_malformed_body_surfaces_validation_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(422).set_body_string("username required"))
        .mount(&server)
        .await;

    let auth = AuthApi::new(transport(&server));
    let err = auth
        .login(&LoginRequest {
            username: String::new(),
            password: String::new(),
        })
        .await
        .expect_err("login should fail");

    assert!(matches!(err, ApiError::Validation { .. }));
}

#[tokio::test]
async fn register_echoes_request_fields_into_user() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/register"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "id": 9,
                "user_name": "bob",
                "first_name": "Bob",
                "last_name": "Builder",
                "email": "bob@example.com"
            }
        })))
        .mount(&server)
        .await;

    let request = RegisterRequest {
        user_name: "bob".to_string(),
        first_name: "Bob".to_string(),
        last_name: "Builder".to_string(),
        email: "bob@example.com".to_string(),
        password: "hunter2".to_string(),
        user_type: "user".to_string(),
    };

    let auth = AuthApi::new(transport(&server));
    let user = auth.register(&request).await.expect("register");

    assert_eq!(user.user_name, request.user_name);
    assert_eq!(user.first_name, request.first_name);
    assert_eq!(user.last_name, request.last_name);
    assert_eq!(user.email, request.email);
}

#[tokio::test]
async fn register_duplicate_identity_surfaces_conflict() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/register"))
        .respond_with(ResponseTemplate::new(409).set_body_string("username already taken"))
        .mount(&server)
        .await;

    let auth = AuthApi::new(transport(&server));
    let err = auth
        .register(&RegisterRequest {
            user_name: "bob".to_string(),
            first_name: "Bob".to_string(),
            last_name: "Builder".to_string(),
            email: "bob@example.com".to_string(),
            password: "hunter2".to_string(),
            user_type: "user".to_string(),
        })
        .await
        .expect_err("register should fail");

    match err {
        ApiError::Conflict { body } => assert_eq!(body, "username already taken"),
        other => panic!("expected Conflict, got {other:?}"),
    }
}

// --- Server facade ---

#[tokio::test]
async fn server_register_unwraps_envelope_and_round_trips_through_listing() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/servers/register"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"data": sample_server(3)})),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/servers/all-servers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([sample_server(3)])))
        .mount(&server)
        .await;

    let servers = ServersApi::new(transport(&server));
    let registered = servers
        .register(&ServerRegisterRequest {
            registrator_id: 1,
            name: "edge-01".to_string(),
            password: "s3cret".to_string(),
            ip_address: "10.0.0.5".to_string(),
            port: 22,
            status: ServerStatus::Up,
        })
        .await
        .expect("register server");

    assert_eq!(registered.id, 3);
    assert_eq!(registered.status, ServerStatus::Up);

    // Listing the same server must yield a record equal in every field.
    let listed = servers.get_servers().await.expect("list servers");
    assert_eq!(listed, vec![registered]);
}

#[tokio::test]
async fn monitor_snapshot_uses_the_backends_misspelled_route() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/servers/monitoting/5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_snapshot(5)))
        .expect(1)
        .mount(&server)
        .await;

    let snapshot = ServersApi::new(transport(&server))
        .get_server_with_containers(5)
        .await
        .expect("monitor snapshot");

    assert_eq!(snapshot.server.id, 5);
    assert_eq!(snapshot.current_health.status, HealthStatus::Healthy);
    assert_eq!(snapshot.containers.len(), 1);
}

#[tokio::test]
async fn all_snapshots_match_server_count_with_unique_ids() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/servers/containers/all"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            sample_snapshot(1),
            sample_snapshot(2),
            sample_snapshot(3)
        ])))
        .mount(&server)
        .await;

    let snapshots = ServersApi::new(transport(&server))
        .get_all_servers_with_containers()
        .await
        .expect("all snapshots");

    assert_eq!(snapshots.len(), 3);
    let mut ids: Vec<i64> = snapshots.iter().map(|s| s.server.id).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 3, "server ids must be unique across the sequence");
}

#[tokio::test]
async fn health_sample_fetched_via_get() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/servers/server-health/5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_health(5)))
        .expect(1)
        .mount(&server)
        .await;

    let health = ServersApi::new(transport(&server))
        .get_server_health(5)
        .await
        .expect("health sample");

    assert_eq!(health.server_id, 5);
    assert_eq!(health.status, HealthStatus::Healthy);
    assert_eq!(health.uptime, "5 days, 3:02:11");
}

#[tokio::test]
async fn collect_all_triggers_sweep_via_get_and_returns_summary() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/servers/monitoring/collect-all"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "collection started",
            "servers": 3
        })))
        .expect(1)
        .mount(&server)
        .await;

    let summary = ServersApi::new(transport(&server))
        .collect_all()
        .await
        .expect("collect all");

    assert_eq!(
        summary.fields.get("message").and_then(|v| v.as_str()),
        Some("collection started")
    );
}

#[tokio::test]
async fn delete_unknown_server_surfaces_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/servers/delete/99"))
        .respond_with(ResponseTemplate::new(404).set_body_string("server 99 not found"))
        .mount(&server)
        .await;

    let err = ServersApi::new(transport(&server))
        .delete_server(99)
        .await
        .expect_err("delete should fail");

    assert!(matches!(err, ApiError::NotFound { .. }));
}

#[tokio::test]
async fn delete_resolves_with_no_value_on_204() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/servers/delete/3"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    ServersApi::new(transport(&server))
        .delete_server(3)
        .await
        .expect("delete");
}

#[tokio::test]
async fn unexpected_status_keeps_code_and_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/servers/all-servers"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let err = ServersApi::new(transport(&server))
        .get_servers()
        .await
        .expect_err("listing should fail");

    match err {
        ApiError::Request { status, body } => {
            assert_eq!(status, 500);
            assert_eq!(body, "boom");
        }
        other => panic!("expected Request, got {other:?}"),
    }
}

// --- Container facade ---

#[tokio::test]
async fn container_data_normalizes_bare_object_to_one_element() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/containers/get-container-data"))
        .and(body_json(json!({"server_id": 5})))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_container(5, "abc123")))
        .mount(&server)
        .await;

    let containers = ContainersApi::new(transport(&server))
        .get_container_data(&ContainerDataRequest { server_id: 5 })
        .await
        .expect("container data");

    assert_eq!(containers.len(), 1);
    assert_eq!(containers[0].server_id, 5);
    assert_eq!(containers[0].container_id, "abc123");
}

#[tokio::test]
async fn container_data_array_passes_through_unchanged() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/containers/get-container-data"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            sample_container(5, "a"),
            sample_container(5, "b")
        ])))
        .mount(&server)
        .await;

    let containers = ContainersApi::new(transport(&server))
        .get_container_data(&ContainerDataRequest { server_id: 5 })
        .await
        .expect("container data");

    assert_eq!(containers.len(), 2);
    assert_eq!(containers[0].container_id, "a");
    assert_eq!(containers[1].container_id, "b");
}

// --- Transport ---

#[tokio::test]
async fn bearer_token_attached_after_set() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/servers/all-servers"))
        .and(header("authorization", "Bearer tok-9"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let transport = transport(&server);
    transport.set_bearer_token("tok-9".to_string());

    let listed = ServersApi::new(transport)
        .get_servers()
        .await
        .expect("list with token");
    assert!(listed.is_empty());
}
