//! Shared fixtures for integration tests.
//!
//! Builds throwaway asset roots on disk and drives the router in-process.

use std::fs;
use std::path::Path;

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tempfile::TempDir;
use tower::ServiceExt;

use mesh2motion_host::{create_router, AssetResolver, HostRegistration, RouterConfig};

/// A temporary directory holding a built editor UI and extension scripts.
pub struct AssetTree {
    dir: TempDir,
}

impl AssetTree {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("create temp dir");
        fs::create_dir_all(dir.path().join("ui")).expect("create ui dir");
        fs::create_dir_all(dir.path().join("js")).expect("create js dir");
        Self { dir }
    }

    /// Add a file under the UI asset root.
    pub fn with_file(self, relative: &str, contents: impl AsRef<[u8]>) -> Self {
        write_file(&self.ui_root().join(relative), contents.as_ref());
        self
    }

    /// Add an empty directory under the UI asset root.
    pub fn with_dir(self, relative: &str) -> Self {
        fs::create_dir_all(self.ui_root().join(relative)).expect("create dir");
        self
    }

    /// Add a file next to (outside of) the UI asset root.
    pub fn with_outside_file(self, relative: &str, contents: impl AsRef<[u8]>) -> Self {
        write_file(&self.dir.path().join(relative), contents.as_ref());
        self
    }

    /// Add a file to the extension script directory.
    pub fn with_script(self, relative: &str, contents: impl AsRef<[u8]>) -> Self {
        write_file(&self.web_dir().join(relative), contents.as_ref());
        self
    }

    pub fn ui_root(&self) -> std::path::PathBuf {
        self.dir.path().join("ui")
    }

    pub fn web_dir(&self) -> std::path::PathBuf {
        self.dir.path().join("js")
    }

    /// Router over this tree with the editor's registration, tracing off.
    pub fn router(&self) -> Router {
        create_router(
            AssetResolver::new(self.ui_root()),
            HostRegistration::mesh2motion(self.web_dir()),
            RouterConfig::new().with_tracing(false),
        )
    }
}

impl Default for AssetTree {
    fn default() -> Self {
        Self::new()
    }
}

fn write_file(path: &Path, contents: &[u8]) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent dir");
    }
    fs::write(path, contents).expect("write fixture file");
}

/// Send a GET request through the router.
pub async fn get(router: Router, uri: &str) -> Response<Body> {
    send(router, "GET", uri).await
}

/// Send a request with the given method through the router.
pub async fn send(router: Router, method: &str, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    router.oneshot(request).await.unwrap()
}

/// Collect a response body.
pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

/// Collect a response body as UTF-8 text.
pub async fn body_text(response: Response<Body>) -> String {
    String::from_utf8(body_bytes(response).await).unwrap()
}

/// The Content-Type header of a response, if any.
pub fn content_type(response: &Response<Body>) -> Option<&str> {
    response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
}
