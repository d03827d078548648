//! HTTP-level integration tests for turtles, villains, quotes, weapons and
//! search.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, post_json};
use serde_json::json;
use sqlx::SqlitePool;
use tmnt_db::seed::{self, CatalogFixture};

async fn seeded(pool: &SqlitePool) {
    let fixture = CatalogFixture::bundled().unwrap();
    seed::load(pool, &fixture).await.unwrap();
}

fn turtle_payload(name: &str) -> serde_json::Value {
    json!({
        "name": name,
        "full_name": "Casey Jones",
        "color": "white",
        "weapon": "Hockey stick",
        "personality": "Vigilante",
        "favorite_pizza": "Anchovy",
        "catchphrase": "Goongala!",
    })
}

// ---------------------------------------------------------------------------
// Turtles and villains
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_and_get_turtles(pool: SqlitePool) {
    seeded(&pool).await;

    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, "/api/v1/turtles").await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 4);

    let app = common::build_test_app(pool.clone());
    let response = get(app, "/api/v1/turtles/michelangelo").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["catchphrase"], "Cowabunga!");

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/turtles/splinter").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_turtle_then_duplicate(pool: SqlitePool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/api/v1/turtles", turtle_payload("casey")).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["data"]["name"], "casey");
    assert!(json["data"]["image_url"].is_null());

    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/v1/turtles", turtle_payload("casey")).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_turtle_rejects_blank_and_unknown_fields(pool: SqlitePool) {
    let app = common::build_test_app(pool.clone());
    let mut payload = turtle_payload("casey");
    payload["color"] = json!("  ");
    let response = post_json(app, "/api/v1/turtles", payload).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let app = common::build_test_app(pool);
    let mut payload = turtle_payload("casey");
    payload["shell"] = json!("hard");
    let response = post_json(app, "/api/v1/turtles", payload).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_get_villain_by_name(pool: SqlitePool) {
    seeded(&pool).await;

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/v1/villains/shredder").await).await;
    assert_eq!(json["data"]["real_name"], "Oroku Saki");
    assert_eq!(json["data"]["abilities"][2], "Bladed armor");
}

// ---------------------------------------------------------------------------
// Quotes
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_quotes_filter_by_character(pool: SqlitePool) {
    seeded(&pool).await;

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/v1/quotes?character=Michelangelo").await).await;
    let quotes = json["data"].as_array().unwrap();
    assert_eq!(quotes.len(), 3);
    assert!(quotes.iter().all(|q| q["character"] == "Michelangelo"));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_seeded_random_quote_is_deterministic(pool: SqlitePool) {
    seeded(&pool).await;

    let app = common::build_test_app(pool.clone());
    let first = body_json(get(app, "/api/v1/quotes/random?seed=0").await).await;
    assert_eq!(first["data"]["text"], "Cowabunga!");

    // Eight quotes in the fixture: seed 8 wraps around to index 0.
    let app = common::build_test_app(pool.clone());
    let wrapped = body_json(get(app, "/api/v1/quotes/random?seed=8").await).await;
    assert_eq!(wrapped["data"]["id"], first["data"]["id"]);

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/quotes/random").await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_random_quote_errors(pool: SqlitePool) {
    let app = common::build_test_app(pool.clone());
    let response = get(app, "/api/v1/quotes/random").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], "EMPTY_COLLECTION");

    seeded(&pool).await;
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/quotes/random?seed=-1").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_quote(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/quotes",
        json!({"text": "Radical!", "character": "Michelangelo", "context": ""}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert!(json["data"]["context"].is_null());
}

// ---------------------------------------------------------------------------
// Weapons
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_weapons_list_and_create(pool: SqlitePool) {
    seeded(&pool).await;

    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, "/api/v1/weapons?wielder=Raphael").await).await;
    let weapons = json["data"].as_array().unwrap();
    assert_eq!(weapons.len(), 1);
    assert_eq!(weapons[0]["type"], "Dagger");

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/weapons",
        json!({
            "name": "Turtle Van",
            "type": "Vehicle",
            "wielder": "All Turtles",
            "description": "Armored party wagon",
            "special_moves": ["Ram"],
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(body_json(response).await["data"]["type"], "Vehicle");
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_search_groups_matches(pool: SqlitePool) {
    seeded(&pool).await;

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/v1/search?q=shredder").await).await;
    let data = &json["data"];
    assert!(!data["villains"].as_array().unwrap().is_empty());
    assert!(!data["episodes"].as_array().unwrap().is_empty());
    assert!(!data["quotes"].as_array().unwrap().is_empty());
    assert!(data["turtles"].as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_search_windows_each_group(pool: SqlitePool) {
    seeded(&pool).await;

    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, "/api/v1/search?q=shredder").await).await;
    assert_eq!(json["data"]["episodes"].as_array().unwrap().len(), 10);

    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, "/api/v1/search?q=shredder&limit=2").await).await;
    let first_two = json["data"]["episodes"].as_array().unwrap().clone();
    assert_eq!(first_two.len(), 2);
    assert!(json["data"]["villains"].as_array().unwrap().len() <= 2);

    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, "/api/v1/search?q=shredder&limit=1&offset=1").await).await;
    let episodes = json["data"]["episodes"].as_array().unwrap();
    assert_eq!(episodes.len(), 1);
    assert_eq!(episodes[0]["episode_id"], first_two[1]["episode_id"]);

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/search?q=shredder&limit=0").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_search_rejects_short_query(pool: SqlitePool) {
    let app = common::build_test_app(pool.clone());
    let response = get(app, "/api/v1/search?q=%20a%20").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/search").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
