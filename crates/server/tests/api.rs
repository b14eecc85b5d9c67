use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Statement};
use serde_json::Value;
use tower::ServiceExt;

use engine::Engine;
use migration::MigratorTrait;

const FIXTURES: &str = r#"
INSERT INTO partner (id, headline, description, latitude, longitude, price_level) VALUES
    (1, 'Pizza & Co', 'Wood oven', 40.0, -73.0, 2),
    (2, 'Far Bar', 'Cocktails', 10.0, 10.0, 3);

INSERT INTO promotion (id, partner_id, category_id, title, description) VALUES
    (1, 2, 7, 'Happy hour', '18-20'),
    (2, 1, 8, 'Two for one', 'Every Tuesday'),
    (3, 1, 10, 'Burger deal', 'Fries & drink <included>');
"#;

async fn app() -> (Router, DatabaseConnection) {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    migration::Migrator::up(&db, None).await.unwrap();
    db.execute_unprepared(FIXTURES).await.unwrap();
    db.execute(Statement::from_sql_and_values(
        db.get_database_backend(),
        "INSERT INTO headline_banner (url, partner_id, promotion_id, category_id, image) \
         VALUES (?, ?, ?, ?, ?)",
        vec![
            "http://img/pizza.jpg".into(),
            Some(1).into(),
            Some(2).into(),
            Some(1).into(),
            vec![0xffu8, 0xd8, 0xff].into(),
        ],
    ))
    .await
    .unwrap();

    let engine = Engine::builder()
        .database(db.clone())
        .build()
        .await
        .unwrap();
    (server::app(engine), db)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Option<String>, Vec<u8>) {
    let res = app
        .clone()
        .oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = res.status();
    let content_type = res
        .headers()
        .get(header::CONTENT_TYPE)
        .map(|v| v.to_str().unwrap().to_string());
    let body = res.into_body().collect().await.unwrap().to_bytes().to_vec();
    (status, content_type, body)
}

async fn get_json(app: &Router, uri: &str) -> Value {
    let (status, _, body) = get(app, uri).await;
    assert_eq!(status, StatusCode::OK, "{uri}");
    serde_json::from_slice(&body).unwrap()
}

fn ids(json: &Value) -> Vec<i64> {
    json.as_array()
        .unwrap()
        .iter()
        .map(|item| item["id"].as_i64().unwrap())
        .collect()
}

#[tokio::test]
async fn healthcheck_reports_ok() {
    let (app, _db) = app().await;

    let (status, content_type, body) = get(&app, "/healthcheck").await;
    assert_eq!(status, StatusCode::OK);
    assert!(content_type.unwrap().starts_with("text/plain"));
    assert_eq!(body, b"ok");
}

#[tokio::test]
async fn healthcheck_reports_ping_failure() {
    let (app, db) = app().await;
    db.close().await.unwrap();

    let (status, content_type, body) = get(&app, "/healthcheck").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(content_type.unwrap().starts_with("text/plain"));
    let text = String::from_utf8(body).unwrap();
    assert!(text.starts_with("ping: "), "{text}");
}

#[tokio::test]
async fn categories_default_to_root() {
    let (app, _db) = app().await;

    let json = get_json(&app, "/categories").await;
    assert_eq!(ids(&json), vec![1, 2, 3, 4, 5, 6]);
    assert_eq!(json[0]["url"], "http://img/pizza.jpg");
    assert_eq!(json[1]["url"], "");
}

#[tokio::test]
async fn unparsable_parent_behaves_like_zero() {
    let (app, _db) = app().await;

    let garbage = get(&app, "/categories?parent=abc").await;
    let zero = get(&app, "/categories?parent=0").await;
    assert_eq!(garbage, zero);
    assert_eq!(garbage.0, StatusCode::OK);
}

#[tokio::test]
async fn json_keeps_html_characters_literal() {
    let (app, _db) = app().await;

    let (_, content_type, body) = get(&app, "/categories?parent=0").await;
    assert_eq!(content_type.as_deref(), Some("application/json"));
    let text = String::from_utf8(body).unwrap();
    assert!(text.contains("Clothes & etc."));
    assert!(!text.contains("\\u0026"));

    let (_, _, body) = get(&app, "/promtions?partner=1").await;
    let text = String::from_utf8(body).unwrap();
    assert!(text.contains("Fries & drink <included>"));
}

#[tokio::test]
async fn partners_listing_shape() {
    let (app, _db) = app().await;

    let json = get_json(&app, "/partners").await;
    assert_eq!(ids(&json), vec![1, 2]);
    assert_eq!(json[0]["headline"], "Pizza & Co");
    assert_eq!(json[0]["latitude"], 40.0);
    assert_eq!(json[0]["longitude"], -73.0);
    assert_eq!(json[0]["price_level"], 2);
    assert_eq!(json[0]["headline_banner_url"], "http://img/pizza.jpg");
    assert_eq!(json[1]["headline_banner_url"], "");
}

#[tokio::test]
async fn image_is_served_as_jpeg() {
    let (app, _db) = app().await;

    let (status, content_type, body) = get(&app, "/image?url=http://img/pizza.jpg").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("image/jpeg"));
    assert_eq!(body, vec![0xff, 0xd8, 0xff]);
}

#[tokio::test]
async fn missing_image_is_a_500_without_jpeg_content_type() {
    let (app, _db) = app().await;

    let (status, content_type, body) = get(&app, "/image?url=missing").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_ne!(content_type.as_deref(), Some("image/jpeg"));
    assert!(!body.is_empty());
}

#[tokio::test]
async fn promotions_for_all_partners_by_default() {
    let (app, _db) = app().await;

    let json = get_json(&app, "/promtions").await;
    assert_eq!(ids(&json), vec![1, 2, 3]);

    let json = get_json(&app, "/promtions?partner=oops").await;
    assert_eq!(ids(&json), vec![1, 2, 3]);
}

#[tokio::test]
async fn promotions_for_one_partner() {
    let (app, _db) = app().await;

    let json = get_json(&app, "/promtions?partner=1").await;
    assert_eq!(ids(&json), vec![2, 3]);
    assert_eq!(json[0]["headline_banner_url"], "http://img/pizza.jpg");
    assert_eq!(json[1]["headline_banner_url"], "");
}

#[tokio::test]
async fn repeated_partner_uses_the_first_value() {
    let (app, _db) = app().await;

    let json = get_json(&app, "/promtions?partner=1&partner=2").await;
    assert_eq!(ids(&json), vec![2, 3]);
}

#[tokio::test]
async fn geo_mode_takes_priority_over_partner() {
    let (app, _db) = app().await;

    let json = get_json(&app, "/promtions?partner=2&lat=40.0&long=-73.0").await;
    assert_eq!(ids(&json), vec![2, 3, 1]);
}

#[tokio::test]
async fn single_coordinate_keeps_partner_mode() {
    let (app, _db) = app().await;

    let json = get_json(&app, "/promtions?partner=2&lat=40.0").await;
    assert_eq!(ids(&json), vec![1]);
}

#[tokio::test]
async fn promotions_alias_route() {
    let (app, _db) = app().await;

    let misspelled = get(&app, "/promtions?partner=1").await;
    let alias = get(&app, "/promotions?partner=1").await;
    assert_eq!(misspelled, alias);
}

#[tokio::test]
async fn store_failure_is_a_500_with_error_text() {
    let (app, db) = app().await;
    db.execute_unprepared("DROP TABLE headline_banner")
        .await
        .unwrap();

    let (status, content_type, body) = get(&app, "/promtions").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(content_type.unwrap().starts_with("text/plain"));
    let text = String::from_utf8(body).unwrap();
    assert!(text.starts_with("promotions_by_partner: "), "{text}");
}
