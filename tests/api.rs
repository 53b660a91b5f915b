use actix_web::{test, web, App};
use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool};
use serde_json::{json, Value};

use isms_backend::routes::{self, AppState};

/// App state with a lazily-built pool: no database is contacted unless a
/// handler actually asks for a connection, so validation paths can be
/// exercised without a running Postgres.
fn test_state() -> web::Data<AppState> {
    let manager =
        ConnectionManager::<PgConnection>::new("postgres://localhost:1/unreachable");
    let pool = Pool::builder().max_size(1).build_unchecked(manager);
    web::Data::new(AppState {
        pool,
        screenshot_dir: std::env::temp_dir().join("isms-test-screenshots"),
    })
}

#[actix_web::test]
async fn home_reports_online_status() {
    let app = test::init_service(
        App::new()
            .app_data(test_state())
            .configure(routes::configure),
    )
    .await;

    let req = test::TestRequest::get().uri("/").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "online");
    assert_eq!(body["version"], "1.0.0");
}

#[actix_web::test]
async fn mentor_performance_is_an_empty_list() {
    let app = test::init_service(
        App::new()
            .app_data(test_state())
            .configure(routes::configure),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/api/mentors/performance")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!([]));
}

#[actix_web::test]
async fn login_with_blank_credentials_is_rejected() {
    let app = test::init_service(
        App::new()
            .app_data(test_state())
            .configure(routes::configure),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/login")
        .set_json(json!({"username": "  ", "password": ""}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Username and password are required");
}

#[actix_web::test]
async fn logout_without_username_is_rejected() {
    let app = test::init_service(
        App::new()
            .app_data(test_state())
            .configure(routes::configure),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/logout")
        .set_json(json!({}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Username is required for logout");
}

#[actix_web::test]
async fn activity_without_username_is_rejected() {
    let app = test::init_service(
        App::new()
            .app_data(test_state())
            .configure(routes::configure),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/activity")
        .set_json(json!({"action": "login", "idle_time": 5}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);
}

#[actix_web::test]
async fn activity_with_traversal_username_is_rejected() {
    let app = test::init_service(
        App::new()
            .app_data(test_state())
            .configure(routes::configure),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/activity")
        .set_json(json!({
            "username": "../escape",
            "action": "screenshot",
            "screenshot": "data:image/png;base64,aGVsbG8=",
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);
}

#[actix_web::test]
async fn activity_with_malformed_screenshot_is_rejected() {
    let app = test::init_service(
        App::new()
            .app_data(test_state())
            .configure(routes::configure),
    )
    .await;

    // No data-URL header separator.
    let req = test::TestRequest::post()
        .uri("/api/activity")
        .set_json(json!({
            "username": "alice",
            "action": "screenshot",
            "screenshot": "aGVsbG8=",
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);
}
