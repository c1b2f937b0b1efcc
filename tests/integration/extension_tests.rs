//! Integration tests for the host registration surface.
//!
//! Tests verify:
//! - Extension script directories are served under /extensions/{name}
//! - The registration listing reports the editor with zero nodes
//! - Health check

use axum::http::StatusCode;

use mesh2motion_host::EXTENSION_NAME;

use super::test_utils::{body_bytes, body_text, content_type, get, AssetTree};

#[tokio::test]
async fn test_extension_script_served() {
    let tree = AssetTree::new().with_script("mesh2motion.js", "import { app } from '/scripts/app.js'");

    let response = get(
        tree.router(),
        &format!("/extensions/{}/mesh2motion.js", EXTENSION_NAME),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(content_type(&response).unwrap().contains("javascript"));
    assert_eq!(
        body_text(response).await,
        "import { app } from '/scripts/app.js'"
    );
}

#[tokio::test]
async fn test_extension_missing_script() {
    let tree = AssetTree::new();

    let response = get(
        tree.router(),
        &format!("/extensions/{}/missing.js", EXTENSION_NAME),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_extension_dir_does_not_expose_ui_root() {
    let tree = AssetTree::new().with_file("index.html", "<html>explore</html>");

    let response = get(
        tree.router(),
        &format!("/extensions/{}/../ui/index.html", EXTENSION_NAME),
    )
    .await;

    assert_ne!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_extensions_listing() {
    let tree = AssetTree::new();

    let response = get(tree.router(), "/extensions").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_bytes(response).await;
    let listing: serde_json::Value = serde_json::from_slice(&body).unwrap();
    let extensions = listing["extensions"].as_array().unwrap();

    assert_eq!(extensions.len(), 1);
    assert_eq!(extensions[0]["name"], EXTENSION_NAME);
    assert_eq!(
        extensions[0]["web_path"],
        format!("/extensions/{}", EXTENSION_NAME)
    );
    assert_eq!(extensions[0]["node_count"], 0);
    assert_eq!(extensions[0]["node_class_mappings"], serde_json::json!({}));
    assert_eq!(
        extensions[0]["node_display_name_mappings"],
        serde_json::json!({})
    );
}

#[tokio::test]
async fn test_health() {
    let tree = AssetTree::new();

    let response = get(tree.router(), "/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_bytes(response).await;
    let health: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(health["status"], "healthy");
    assert_eq!(health["version"], env!("CARGO_PKG_VERSION"));
}
