mod common;

use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};

use common::{client_for, pikachu_body, spawn_catalog, spawn_pikachu_catalog};
use dexterm::catalog::{CatalogError, NOT_FOUND_MESSAGE};

#[tokio::test]
async fn success_maps_wire_body() {
    let (base_url, _hits) = spawn_pikachu_catalog().await;
    let client = client_for(&base_url);

    let creature = client.lookup("pikachu").await.expect("lookup");
    assert_eq!(creature.id, 25);
    assert_eq!(creature.name, "pikachu");
    assert_eq!(creature.types, vec!["electric".to_string()]);
    assert_eq!(
        creature.abilities,
        vec!["static".to_string(), "lightning-rod".to_string()]
    );
    assert_eq!(creature.image_url, "https://artwork.example/pikachu.png");
    assert_eq!(creature.height_display(), "0.4 m");
    assert_eq!(creature.weight_display(), "6.0 kg");
}

#[tokio::test]
async fn name_is_trimmed_and_lowercased_on_the_wire() {
    let (base_url, hits) = spawn_pikachu_catalog().await;
    let client = client_for(&base_url);

    let creature = client.lookup("  PiKaChu ").await.expect("lookup");
    assert_eq!(creature.id, 25);
    assert_eq!(hits.load(std::sync::atomic::Ordering::SeqCst), 1);
}

#[tokio::test]
async fn missing_artwork_falls_back_to_default_sprite() {
    let mut body = pikachu_body();
    body["sprites"]["other"] = serde_json::Value::Null;
    let router = Router::new().route("/pokemon/{name}", get(move || async move { Json(body) }));
    let base_url = spawn_catalog(router).await;

    let creature = client_for(&base_url).lookup("pikachu").await.expect("lookup");
    assert_eq!(creature.image_url, "https://sprites.example/pikachu.png");
}

#[tokio::test]
async fn unknown_name_is_not_found_with_fixed_message() {
    let (base_url, _hits) = spawn_pikachu_catalog().await;
    let client = client_for(&base_url);

    let err = client
        .lookup("notapokemon123")
        .await
        .expect_err("lookup must fail");
    assert!(matches!(err, CatalogError::NotFound));
    assert_eq!(err.user_message(), NOT_FOUND_MESSAGE);
}

#[tokio::test]
async fn server_error_maps_to_api_with_fixed_message() {
    let router = Router::new().route(
        "/pokemon/{name}",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
    );
    let base_url = spawn_catalog(router).await;

    let err = client_for(&base_url)
        .lookup("pikachu")
        .await
        .expect_err("lookup must fail");
    assert!(matches!(err, CatalogError::Api { status: 500 }));
    assert_eq!(err.user_message(), NOT_FOUND_MESSAGE);
}

#[tokio::test]
async fn malformed_body_is_a_parse_error_with_its_own_message() {
    let router = Router::new().route(
        "/pokemon/{name}",
        get(|| async { Json(serde_json::json!({ "unexpected": true })) }),
    );
    let base_url = spawn_catalog(router).await;

    let err = client_for(&base_url)
        .lookup("pikachu")
        .await
        .expect_err("lookup must fail");
    assert!(matches!(err, CatalogError::Parse(_)));
    // Parse failures surface their own text, not the fixed message
    assert_ne!(err.user_message(), NOT_FOUND_MESSAGE);
    assert!(!err.user_message().is_empty());
}

#[tokio::test]
async fn unreachable_catalog_is_a_network_error() {
    // Bind-then-drop so nothing is listening on the port.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind");
    let base_url = format!("http://{}", listener.local_addr().expect("addr"));
    drop(listener);

    let err = client_for(&base_url)
        .lookup("pikachu")
        .await
        .expect_err("lookup must fail");
    assert!(matches!(err, CatalogError::Network(_)));
    assert_ne!(err.user_message(), NOT_FOUND_MESSAGE);
}
