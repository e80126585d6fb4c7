//! Shared test utilities: a mock catalog server and canned wire bodies.

#![allow(dead_code, unused_imports)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;

use dexterm::catalog::CatalogClient;
use dexterm::config::LookupConfig;

/// Serve `router` on an ephemeral port and return its base URL.
pub async fn spawn_catalog(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind mock catalog");
    let addr = listener.local_addr().expect("Failed to read local addr");
    tokio::spawn(async move {
        let _ = axum::serve(listener, router).await;
    });
    format!("http://{}", addr)
}

/// Mock catalog that knows exactly one creature and counts every hit.
pub async fn spawn_pikachu_catalog() -> (String, Arc<AtomicUsize>) {
    let hits = Arc::new(AtomicUsize::new(0));
    let handler_hits = Arc::clone(&hits);
    let router = Router::new().route(
        "/pokemon/{name}",
        get(move |Path(name): Path<String>| {
            let hits = Arc::clone(&handler_hits);
            async move {
                hits.fetch_add(1, Ordering::SeqCst);
                if name == "pikachu" {
                    Json(pikachu_body()).into_response()
                } else {
                    (StatusCode::NOT_FOUND, "Not Found").into_response()
                }
            }
        }),
    );
    let base_url = spawn_catalog(router).await;
    (base_url, hits)
}

pub fn client_for(base_url: &str) -> CatalogClient {
    let config = LookupConfig {
        base_url: base_url.to_string(),
        ..LookupConfig::default()
    };
    CatalogClient::new(&config).expect("Failed to build catalog client")
}

/// Wire body matching the real catalog's shape, including fields the
/// client is expected to ignore.
pub fn pikachu_body() -> serde_json::Value {
    json!({
        "id": 25,
        "name": "pikachu",
        "height": 4,
        "weight": 60,
        "base_experience": 112,
        "sprites": {
            "front_default": "https://sprites.example/pikachu.png",
            "back_default": null,
            "other": {
                "official-artwork": {
                    "front_default": "https://artwork.example/pikachu.png"
                }
            }
        },
        "types": [
            { "slot": 1, "type": { "name": "electric", "url": "https://catalog.example/type/13/" } }
        ],
        "abilities": [
            { "slot": 1, "is_hidden": false, "ability": { "name": "static", "url": "https://catalog.example/ability/9/" } },
            { "slot": 3, "is_hidden": true, "ability": { "name": "lightning-rod", "url": "https://catalog.example/ability/31/" } }
        ]
    })
}
