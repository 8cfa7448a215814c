//! Router tests over a scripted `MockDatabase`: each test queues the rows or
//! failures its request will hit, in query order.

use axum::Router;
use axum::body::to_bytes;
use axum::http::{Method, StatusCode, header};
use sea_orm::{DatabaseBackend, DatabaseConnection, DbErr, MockDatabase, MockExecResult};
use tower::ServiceExt;

use assetdesk_domain::id::UserId;
use assetdesk_inventory::domain::policy::AnonymousListAccess;
use assetdesk_inventory::domain::repository::CredentialHasher;
use assetdesk_inventory::infra::credential::Argon2CredentialHasher;
use assetdesk_inventory::router::build_router;
use assetdesk_inventory::state::AppState;
use assetdesk_inventory_schema::{departments, users};
use assetdesk_testing::auth::MockCaller;
use assetdesk_testing::request::json_request;

fn router_on(db: DatabaseConnection, anonymous_access: AnonymousListAccess) -> Router {
    build_router(AppState {
        db,
        anonymous_access,
    })
}

fn router(mock: MockDatabase) -> Router {
    router_on(mock.into_connection(), AnonymousListAccess::Unrestricted)
}

fn mock() -> MockDatabase {
    MockDatabase::new(DatabaseBackend::Postgres)
}

fn lost_connection() -> DbErr {
    DbErr::Custom("connection reset by peer".into())
}

fn user_row(id: i64, role: &str, department_id: Option<i64>, password_hash: &str) -> users::Model {
    users::Model {
        id,
        username: format!("user{id}"),
        email: format!("user{id}@example.com"),
        enabled: true,
        role: role.to_owned(),
        department_id,
        password_hash: password_hash.to_owned(),
    }
}

fn department_row(id: i64, name: &str) -> departments::Model {
    departments::Model {
        id,
        name: name.to_owned(),
        description: None,
        active: true,
    }
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

// ── Health ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_report_liveness() {
    let response = router(mock())
        .oneshot(json_request(Method::GET, "/healthz", MockCaller::anonymous(), None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().contains_key("x-request-id"));
}

#[tokio::test]
async fn should_report_not_ready_without_database() {
    let response = router_on(DatabaseConnection::Disconnected, AnonymousListAccess::Unrestricted)
        .oneshot(json_request(Method::GET, "/readyz", MockCaller::anonymous(), None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}

// ── Request handling ─────────────────────────────────────────────────────────

#[tokio::test]
async fn should_reject_malformed_caller_header() {
    let request = axum::http::Request::builder()
        .uri("/api/sites")
        .header("x-user-id", "not-a-number")
        .body(axum::body::Body::empty())
        .unwrap();

    let response = router(mock()).oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn should_reject_payload_missing_field_as_validation_error() {
    let response = router(mock())
        .oneshot(json_request(
            Method::POST,
            "/api/virtual-machines",
            MockCaller::anonymous(),
            Some(serde_json::json!({
                "name": "web-1",
                "hostname": "web-1.local",
                "operatingSystem": "debian",
                "vram": 4096,
                "diskSize": 40,
                "hardwareId": 4,
            })),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["kind"], "VALIDATION_ERROR");
    let message = json["message"].as_str().unwrap();
    assert!(message.contains("vcpu"), "message was {message:?}");
}

#[tokio::test]
async fn should_reject_non_json_body_as_validation_error() {
    let request = axum::http::Request::builder()
        .method(Method::POST)
        .uri("/api/sites")
        .header(header::CONTENT_TYPE, "text/plain")
        .body(axum::body::Body::from("name=dc1"))
        .unwrap();

    let response = router(mock()).oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["kind"], "VALIDATION_ERROR");
}

// ── Listing and lookup ───────────────────────────────────────────────────────

#[tokio::test]
async fn should_render_failed_list_query_as_empty_array() {
    let db = mock().append_query_errors([lost_connection()]);

    let response = router(db)
        .oneshot(json_request(
            Method::GET,
            "/api/hardware?departmentId=7",
            MockCaller::anonymous(),
            None,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, serde_json::json!([]));
}

#[tokio::test]
async fn should_forbid_department_list_when_caller_cannot_be_resolved() {
    let db = mock().append_query_results([Vec::<users::Model>::new()]);

    let response = router(db)
        .oneshot(json_request(
            Method::GET,
            "/api/departments",
            MockCaller::new(UserId(1)),
            None,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(body_json(response).await["kind"], "FORBIDDEN");
}

#[tokio::test]
async fn should_forbid_anonymous_user_creation() {
    let response = router(mock())
        .oneshot(json_request(
            Method::POST,
            "/api/users",
            MockCaller::anonymous(),
            Some(serde_json::json!({
                "username": "eve",
                "email": "eve@example.com",
                "password": "pw",
            })),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn should_map_store_failure_on_get_to_internal_error() {
    let db = mock().append_query_errors([lost_connection()]);

    let response = router_on(db.into_connection(), AnonymousListAccess::Denied)
        .oneshot(json_request(
            Method::GET,
            "/api/sites/3",
            MockCaller::anonymous(),
            None,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert_eq!(json["kind"], "INTERNAL");
    assert_eq!(json["message"], "internal error");
}

// ── Writes ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_create_department_with_location_header() {
    // Caller lookup, then the INSERT .. RETURNING row.
    let db = mock()
        .append_query_results([vec![user_row(1, "SUPER_ADMIN", None, "")]])
        .append_query_results([vec![department_row(5, "Platform")]]);

    let response = router(db)
        .oneshot(json_request(
            Method::POST,
            "/api/departments",
            MockCaller::new(UserId(1)),
            Some(serde_json::json!({ "name": "Platform" })),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        "/api/departments/5"
    );
    let json = body_json(response).await;
    assert_eq!(json["id"], 5);
    assert_eq!(json["name"], "Platform");
    assert_eq!(json["active"], true);
}

#[tokio::test]
async fn should_delete_hardware_with_no_content() {
    let db = mock().append_exec_results([MockExecResult {
        last_insert_id: 0,
        rows_affected: 1,
    }]);

    let response = router(db)
        .oneshot(json_request(
            Method::DELETE,
            "/api/hardware/4",
            MockCaller::anonymous(),
            None,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert!(bytes.is_empty());
}

// ── Auth ─────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_reject_login_for_unknown_username() {
    let db = mock().append_query_results([Vec::<users::Model>::new()]);

    let response = router(db)
        .oneshot(json_request(
            Method::POST,
            "/api/auth/login",
            MockCaller::anonymous(),
            Some(serde_json::json!({ "username": "ghost", "password": "pw" })),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await["kind"], "UNAUTHORIZED");
}

#[tokio::test]
async fn should_return_profile_on_login() {
    let hash = Argon2CredentialHasher.hash("s3cret").unwrap();
    let db = mock()
        .append_query_results([vec![user_row(3, "ADMIN", Some(7), &hash)]])
        .append_query_results([vec![department_row(7, "Platform")]]);

    let response = router(db)
        .oneshot(json_request(
            Method::POST,
            "/api/auth/login",
            MockCaller::anonymous(),
            Some(serde_json::json!({ "username": "user3", "password": "s3cret" })),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["userId"], 3);
    assert_eq!(json["role"], "ADMIN");
    assert_eq!(json["departmentName"], "Platform");
    assert!(json.get("passwordHash").is_none());
}

#[tokio::test]
async fn should_require_caller_for_profile() {
    let response = router(mock())
        .oneshot(json_request(
            Method::GET,
            "/api/auth/me",
            MockCaller::anonymous(),
            None,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
