use actix_web::web::Data;
use actix_web::{App, test};
use serde_json::{Value, json};

use attendly::config::Config;
use attendly::routes;
use attendly::store::Store;

fn test_config() -> Config {
    Config {
        server_addr: "127.0.0.1:0".to_string(),
        data_dir: String::new(),
        rate_login_per_min: 10_000,
        rate_register_per_min: 10_000,
        rate_protected_per_min: 10_000,
        api_prefix: "/api".to_string(),
    }
}

macro_rules! test_app {
    ($store:expr) => {
        test::init_service(
            App::new()
                .app_data(Data::new($store))
                .configure(|cfg| routes::configure(cfg, test_config())),
        )
        .await
    };
}

use actix_web::http::Method;

// The per-IP rate limiter needs a peer address, which TestRequest does not
// set by default.
fn req(method: Method, uri: &str) -> test::TestRequest {
    test::TestRequest::default()
        .method(method)
        .uri(uri)
        .peer_addr("127.0.0.1:41000".parse().unwrap())
}

macro_rules! register_employee {
    ($app:expr, $name:expr, $email:expr) => {{
        let resp = test::call_service(
            $app,
            req(Method::POST, "/auth/register")
                .set_json(json!({
                    "name": $name,
                    "email": $email,
                    "password": "secret",
                    "role": "employee",
                }))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), 201);
        let body: Value = test::read_body_json(resp).await;
        body["user"]["id"].as_str().unwrap().to_string()
    }};
}

#[actix_web::test]
async fn register_login_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let app = test_app!(Store::open(dir.path()).unwrap());

    register_employee!(&app, "Jane Doe", "jane@x.com");

    // Same email again is a conflict.
    let resp = test::call_service(
        &app,
        req(Method::POST, "/auth/register")
            .set_json(json!({
                "name": "Jane Again",
                "email": "jane@x.com",
                "password": "other",
                "role": "employee",
            }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 409);

    let resp = test::call_service(
        &app,
        req(Method::POST, "/auth/login")
            .set_json(json!({ "email": "jane@x.com", "password": "secret" }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 200);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["email"], "jane@x.com");
    assert_eq!(body["role"], "employee");
    assert!(body.get("password").is_none());

    let resp = test::call_service(
        &app,
        req(Method::POST, "/auth/login")
            .set_json(json!({ "email": "jane@x.com", "password": "wrong" }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 401);
}

#[actix_web::test]
async fn check_in_out_flow() {
    let dir = tempfile::tempdir().unwrap();
    let app = test_app!(Store::open(dir.path()).unwrap());
    let id = register_employee!(&app, "Jane Doe", "jane@x.com");

    let resp = test::call_service(
        &app,
        req(Method::POST, &format!("/api/attendance/{id}/check-in")).to_request(),
    )
    .await;
    assert_eq!(resp.status(), 200);

    // Second check-in on the same day is gated.
    let resp = test::call_service(
        &app,
        req(Method::POST, &format!("/api/attendance/{id}/check-in")).to_request(),
    )
    .await;
    assert_eq!(resp.status(), 400);

    let resp = test::call_service(
        &app,
        req(Method::GET, &format!("/api/attendance/{id}/today")).to_request(),
    )
    .await;
    assert_eq!(resp.status(), 200);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["check_out"].is_null());

    let resp = test::call_service(
        &app,
        req(Method::PUT, &format!("/api/attendance/{id}/check-out")).to_request(),
    )
    .await;
    assert_eq!(resp.status(), 200);

    let resp = test::call_service(
        &app,
        req(Method::GET, &format!("/api/attendance/{id}/history")).to_request(),
    )
    .await;
    let history: Value = test::read_body_json(resp).await;
    let entries = history.as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert!(!entries[0]["record"]["check_out"].is_null());
    assert_ne!(entries[0]["duration"], "N/A");
}

#[actix_web::test]
async fn check_out_without_check_in_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let app = test_app!(Store::open(dir.path()).unwrap());
    let id = register_employee!(&app, "Jane Doe", "jane@x.com");

    let resp = test::call_service(
        &app,
        req(Method::PUT, &format!("/api/attendance/{id}/check-out")).to_request(),
    )
    .await;
    assert_eq!(resp.status(), 400);
}

#[actix_web::test]
async fn leave_lifecycle_over_http() {
    let dir = tempfile::tempdir().unwrap();
    let app = test_app!(Store::open(dir.path()).unwrap());
    let id = register_employee!(&app, "Jane Doe", "jane@x.com");

    let resp = test::call_service(
        &app,
        req(Method::POST, "/api/leave")
            .set_json(json!({
                "employee_id": id,
                "start_date": "2026-01-05",
                "end_date": "2026-01-07",
                "reason": "family visit",
            }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 200);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "pending");
    let leave_id = body["request"]["id"].as_str().unwrap().to_string();

    let resp = test::call_service(
        &app,
        req(Method::PUT, &format!("/api/leave/{leave_id}/approve")).to_request(),
    )
    .await;
    assert_eq!(resp.status(), 200);

    // Approved is terminal; a repeat transition fails.
    let resp = test::call_service(
        &app,
        req(Method::PUT, &format!("/api/leave/{leave_id}/approve")).to_request(),
    )
    .await;
    assert_eq!(resp.status(), 400);

    let resp = test::call_service(
        &app,
        req(Method::GET, &format!("/api/leave?employee_id={id}")).to_request(),
    )
    .await;
    let requests: Value = test::read_body_json(resp).await;
    assert_eq!(requests.as_array().unwrap().len(), 1);
    assert_eq!(requests[0]["status"], "approved");
}

#[actix_web::test]
async fn daily_report_includes_todays_records() {
    let dir = tempfile::tempdir().unwrap();
    let app = test_app!(Store::open(dir.path()).unwrap());
    let id = register_employee!(&app, "Jane Doe", "jane@x.com");

    test::call_service(
        &app,
        req(Method::POST, &format!("/api/attendance/{id}/check-in")).to_request(),
    )
    .await;

    let resp = test::call_service(
        &app,
        req(Method::GET, "/api/reports/attendance?period=daily").to_request(),
    )
    .await;
    assert_eq!(resp.status(), 200);
    let report: Value = test::read_body_json(resp).await;
    assert_eq!(report["title"], "Attendance Report - DAILY");
    assert_eq!(report["filename"], "attendance-report-daily.pdf");
    let rows = report["rows"].as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["employee"], "Jane Doe");
    assert_eq!(rows[0]["check_out"], "Not checked out");
}

#[actix_web::test]
async fn removing_an_employee_cascades_attendance() {
    let dir = tempfile::tempdir().unwrap();
    let app = test_app!(Store::open(dir.path()).unwrap());
    let id = register_employee!(&app, "Jane Doe", "jane@x.com");

    test::call_service(
        &app,
        req(Method::POST, &format!("/api/attendance/{id}/check-in")).to_request(),
    )
    .await;

    let resp = test::call_service(
        &app,
        req(Method::DELETE, &format!("/api/employees/{id}")).to_request(),
    )
    .await;
    assert_eq!(resp.status(), 200);

    let resp = test::call_service(&app, req(Method::GET, "/api/employees").to_request()).await;
    let roster: Value = test::read_body_json(resp).await;
    assert!(roster.as_array().unwrap().is_empty());

    let resp = test::call_service(
        &app,
        req(Method::GET, &format!("/api/attendance/{id}/history")).to_request(),
    )
    .await;
    let history: Value = test::read_body_json(resp).await;
    assert!(history.as_array().unwrap().is_empty());
}
