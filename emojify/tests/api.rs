use actix_web::http::header::{self, ContentType};
use actix_web::http::{Method, StatusCode};
use actix_web::{App, test, web};
use serde_json::{Value, json};

use emojify::emoji::AppConfig;
use emojify::api_cors;
use emojify::handlers::{self, Pipelines};

fn config() -> AppConfig {
    AppConfig {
        cdn_host: "https://cdn.example".into(),
        ..AppConfig::default()
    }
}

macro_rules! app {
    () => {
        test::init_service(
            App::new()
                .app_data(web::Data::new(Pipelines::new(&config())))
                .configure(handlers::config),
        )
        .await
    };
}

#[actix_web::test]
async fn health_replies_pong() {
    let app = app!();
    let req = test::TestRequest::get().uri("/api/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body, json!({ "message": "pong" }));
}

#[actix_web::test]
async fn emojify_renders_every_token_kind() {
    let app = app!();
    let req = test::TestRequest::post()
        .uri("/api/emojify")
        .set_json(json!({
            "text": "<p>hi :blob: 👍 :@alice:</p>",
            "custom_emojis": [{ "shortcode": "blob", "url": "https://x/blob.png" }],
            "profile_emojis": {
                "alice": { "url": "https://x/alice.png", "account_url": "https://x/@alice" }
            }
        }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let html = body["html"].as_str().expect("html string");

    assert!(html.starts_with("<p>hi <img"));
    assert!(html.contains(r#"alt=":blob:" title=":blob:" src="https://x/blob.png""#));
    assert!(html.contains(r#"src="https://cdn.example/emoji/1f44d.svg""#));
    assert!(html.contains(r#"data-account-name="alice""#));
    assert!(html.ends_with("</a></p>"));
}

#[actix_web::test]
async fn emojify_can_skip_profile_pass() {
    let app = app!();
    let req = test::TestRequest::post()
        .uri("/api/emojify")
        .set_json(json!({
            "text": "hey :@alice:",
            "profile_emojis": {
                "alice": { "url": "u", "account_url": "p" }
            },
            "profile": false
        }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["html"], "hey :@alice:");
}

#[actix_web::test]
async fn emojify_rejects_malformed_json() {
    let app = app!();
    let req = test::TestRequest::post()
        .uri("/api/emojify")
        .insert_header(ContentType::json())
        .set_payload("{\"text\": ")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn custom_emojis_become_picker_records() {
    let app = app!();
    let req = test::TestRequest::post()
        .uri("/api/custom_emojis")
        .set_json(json!([{ "shortcode": "blob", "url": "https://x/blob.png" }]))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(
        body,
        json!([{
            "id": "blob",
            "name": "blob",
            "shortNames": ["blob"],
            "text": "",
            "emoticons": [],
            "keywords": ["blob"],
            "imageUrl": "https://x/blob.png",
            "custom": true
        }])
    );
}

#[actix_web::test]
async fn preflight_allows_configured_origin() {
    let app = test::init_service(
        App::new()
            .wrap(api_cors(&["https://social.example".to_string()]))
            .app_data(web::Data::new(Pipelines::new(&config())))
            .configure(handlers::config),
    )
    .await;
    let req = test::TestRequest::default()
        .method(Method::OPTIONS)
        .uri("/api/emojify")
        .insert_header((header::ORIGIN, "https://social.example"))
        .insert_header((header::ACCESS_CONTROL_REQUEST_METHOD, "POST"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert!(resp.status().is_success());
    let headers = resp.headers();
    assert_eq!(
        headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "https://social.example"
    );
    assert!(headers.get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS).is_none());
}
