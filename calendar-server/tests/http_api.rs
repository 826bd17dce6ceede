//! In-process HTTP tests covering every route and its status codes.

use std::sync::Arc;

use actix_web::{App, test, web};
use serde_json::{Value, json};

use calendar_server::api_scope;
use calendar_server::application::content_service::ContentService;
use calendar_server::data::content_repository::InMemoryContentRepository;

macro_rules! test_app {
    () => {
        test::init_service(
            App::new()
                .app_data(web::Data::new(ContentService::new(Arc::new(
                    InMemoryContentRepository::new(),
                ))))
                .service(api_scope()),
        )
        .await
    };
}

#[actix_web::test]
async fn health_reports_ok() {
    let app = test_app!();

    let req = test::TestRequest::get().uri("/api/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["status"], "ok");
}

#[actix_web::test]
async fn create_returns_201_and_item_is_readable() {
    let app = test_app!();

    let req = test::TestRequest::post()
        .uri("/api/content")
        .set_json(json!({
            "title": "Launch Post",
            "status": "DRAFT",
            "contentType": "SOCIAL_POST"
        }))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), 201);

    let created: Value = test::read_body_json(res).await;
    assert!(created["id"].is_i64());
    assert_eq!(created["status"], "DRAFT");
    assert_eq!(created["description"], "");
    assert_eq!(created["dateCreated"], created["dateUpdated"]);

    let uri = format!("/api/content/{}", created["id"]);
    let req = test::TestRequest::get().uri(&uri).to_request();
    let fetched: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(fetched, created);
}

#[actix_web::test]
async fn create_rejects_empty_title() {
    let app = test_app!();

    let req = test::TestRequest::post()
        .uri("/api/content")
        .set_json(json!({
            "title": "",
            "status": "DRAFT",
            "contentType": "ARTICLE"
        }))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), 400);

    let body: Value = test::read_body_json(res).await;
    assert!(body["error"].as_str().unwrap().contains("title"));
}

#[actix_web::test]
async fn create_rejects_unknown_enum_values() {
    let app = test_app!();

    let req = test::TestRequest::post()
        .uri("/api/content")
        .set_json(json!({
            "title": "Bad status",
            "status": "ON_FIRE",
            "contentType": "ARTICLE"
        }))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), 400);
}

#[actix_web::test]
async fn get_unknown_id_returns_404() {
    let app = test_app!();

    let req = test::TestRequest::get().uri("/api/content/9999").to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), 404);

    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["details"]["resource"], 9999);
}

#[actix_web::test]
async fn update_changes_status_and_keeps_title() {
    let app = test_app!();

    let req = test::TestRequest::post()
        .uri("/api/content")
        .set_json(json!({
            "title": "Launch Post",
            "status": "DRAFT",
            "contentType": "SOCIAL_POST"
        }))
        .to_request();
    let created: Value = test::call_and_read_body_json(&app, req).await;

    let uri = format!("/api/content/{}", created["id"]);
    let req = test::TestRequest::put()
        .uri(&uri)
        .set_json(json!({ "status": "PUBLISHED" }))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), 200);

    let updated: Value = test::read_body_json(res).await;
    assert_eq!(updated["id"], created["id"]);
    assert_eq!(updated["title"], "Launch Post");
    assert_eq!(updated["status"], "PUBLISHED");
    assert_eq!(updated["dateCreated"], created["dateCreated"]);
}

#[actix_web::test]
async fn update_unknown_id_returns_404() {
    let app = test_app!();

    let req = test::TestRequest::put()
        .uri("/api/content/7")
        .set_json(json!({ "status": "PUBLISHED" }))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), 404);
}

#[actix_web::test]
async fn delete_returns_204_then_404() {
    let app = test_app!();

    let req = test::TestRequest::post()
        .uri("/api/content")
        .set_json(json!({
            "title": "short lived",
            "status": "IDEA",
            "contentType": "VIDEO"
        }))
        .to_request();
    let created: Value = test::call_and_read_body_json(&app, req).await;
    let uri = format!("/api/content/{}", created["id"]);

    let req = test::TestRequest::delete().uri(&uri).to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), 204);

    let req = test::TestRequest::delete().uri(&uri).to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), 404);
}

#[actix_web::test]
async fn list_supports_status_and_type_filters() {
    let app = test_app!();

    for (title, status, content_type) in [
        ("How we ship", "PUBLISHED", "ARTICLE"),
        ("Release walkthrough", "PUBLISHED", "VIDEO"),
        ("teaser", "DRAFT", "SOCIAL_POST"),
    ] {
        let req = test::TestRequest::post()
            .uri("/api/content")
            .set_json(json!({
                "title": title,
                "status": status,
                "contentType": content_type
            }))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), 201);
    }

    let req = test::TestRequest::get().uri("/api/content").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["total"], 3);

    let req = test::TestRequest::get()
        .uri("/api/content?status=PUBLISHED&type=VIDEO")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["total"], 1);
    assert_eq!(body["content"][0]["title"], "Release walkthrough");
}

#[actix_web::test]
async fn responses_echo_request_id() {
    use calendar_server::presentation::middleware::{RequestIdMiddleware, TimingMiddleware};

    let app = test::init_service(
        App::new()
            .wrap(RequestIdMiddleware)
            .wrap(TimingMiddleware)
            .app_data(web::Data::new(ContentService::new(Arc::new(
                InMemoryContentRepository::new(),
            ))))
            .service(api_scope()),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/api/health")
        .insert_header(("x-request-id", "abc-123"))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(
        res.headers().get("x-request-id").unwrap().to_str().unwrap(),
        "abc-123"
    );
    assert!(res.headers().contains_key("server-timing"));
}

#[actix_web::test]
async fn wildcard_cors_config_still_serves() {
    use calendar_server::build_cors;
    use calendar_server::infrastructure::config::AppConfig;

    // The out-of-the-box config: no CORS_ORIGINS set defaults to "*".
    let config = AppConfig {
        host: "127.0.0.1".into(),
        port: 8080,
        cors_origins: vec!["*".into()],
    };

    let app = test::init_service(
        App::new()
            .wrap(build_cors(&config))
            .app_data(web::Data::new(ContentService::new(Arc::new(
                InMemoryContentRepository::new(),
            ))))
            .service(api_scope()),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/api/health")
        .insert_header(("Origin", "https://example.com"))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), 200);
}
