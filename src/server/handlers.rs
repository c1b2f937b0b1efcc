//! HTTP request handlers for the Mesh2Motion host.
//!
//! # Endpoints
//!
//! - `GET /mesh2motion` - Editor landing page
//! - `GET /mesh2motion/{*rest}` - Editor pages and static assets
//! - `GET /extensions` - Registered host extensions
//! - `GET /health` - Health check endpoint

use std::convert::Infallible;
use std::sync::Arc;

use axum::{
    extract::{rejection::PathRejection, Path, Request, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tower::ServiceExt;
use tower_http::services::ServeFile;
use tracing::{debug, warn};

use crate::assets::{AssetResolver, MimeRegistry};
use crate::error::ResolveError;
use crate::registration::{ExtensionInfo, HostRegistration};

use super::routes::UI_PREFIX;

/// Body returned when the landing page cannot be found.
pub const UI_NOT_BUILT_MESSAGE: &str = "Mesh2Motion UI not found. Please build mesh2motion-app first: cd mesh2motion-app && npm install && npm run build:comfyui";

// =============================================================================
// Application State
// =============================================================================

/// Shared application state.
///
/// Everything in here is fixed at startup; handlers only read it.
#[derive(Clone)]
pub struct AppState {
    /// Resolver for the editor UI bundle
    pub resolver: Arc<AssetResolver>,

    /// Content types for served files
    pub mime: Arc<MimeRegistry>,

    /// What this process registers with the host
    pub registration: Arc<HostRegistration>,
}

impl AppState {
    /// Create application state with the default MIME registrations.
    pub fn new(resolver: AssetResolver, registration: HostRegistration) -> Self {
        Self::with_mime(resolver, registration, MimeRegistry::new())
    }

    /// Create application state with a custom MIME registry.
    pub fn with_mime(
        resolver: AssetResolver,
        registration: HostRegistration,
        mime: MimeRegistry,
    ) -> Self {
        Self {
            resolver: Arc::new(resolver),
            mime: Arc::new(mime),
            registration: Arc::new(registration),
        }
    }
}

// =============================================================================
// Response Types
// =============================================================================

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,

    /// Service version
    pub version: String,
}

/// Response from the extensions listing endpoint.
#[derive(Debug, Serialize)]
pub struct ExtensionsResponse {
    /// Registered extensions, ordered by name
    pub extensions: Vec<ExtensionInfo>,
}

// =============================================================================
// Error Mapping
// =============================================================================

/// Convert ResolveError to a plain-text HTTP response.
///
/// Rejected paths are logged at WARN, since they usually mean someone is
/// attempting traversal. Missing files are common and logged at DEBUG.
impl IntoResponse for ResolveError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ResolveError::BadPath { path } => {
                warn!(path = %path, status = 400, "Rejected asset path");
                (StatusCode::BAD_REQUEST, "Invalid path")
            }
            ResolveError::AssetMissing { path } => {
                debug!(path = %path, status = 404, "Asset not found");
                (StatusCode::NOT_FOUND, "File not found")
            }
        };

        plain_text(status, message)
    }
}

/// Wrapper for landing page errors to implement IntoResponse.
///
/// A miss here means the bundle was never built, so the body carries build
/// instructions instead of the generic `File not found`.
pub struct IndexError(pub ResolveError);

impl IntoResponse for IndexError {
    fn into_response(self) -> Response {
        match self.0 {
            ResolveError::AssetMissing { .. } => {
                warn!(status = 404, "Editor UI has not been built");
                plain_text(StatusCode::NOT_FOUND, UI_NOT_BUILT_MESSAGE)
            }
            other => other.into_response(),
        }
    }
}

impl From<ResolveError> for IndexError {
    fn from(err: ResolveError) -> Self {
        IndexError(err)
    }
}

fn plain_text(status: StatusCode, message: &'static str) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        message,
    )
        .into_response()
}

// =============================================================================
// Handlers
// =============================================================================

/// Handle the editor landing page.
///
/// # Endpoint
///
/// `GET /mesh2motion`
///
/// # Response
///
/// - `200 OK`: `index-comfyui.html`, or `index.html` if the former is absent
/// - `404 Not Found`: neither exists; the body explains how to build the UI
pub async fn index_handler(
    State(state): State<AppState>,
    request: Request,
) -> Result<Response, IndexError> {
    let path = state.resolver.resolve_index()?;
    Ok(serve_file(&state.mime, path, request).await)
}

/// Handle editor pages and static assets below the prefix.
///
/// # Endpoint
///
/// `GET /mesh2motion/{*rest}`
///
/// # Response
///
/// - `200 OK`: the resolved file, with a content type from its extension
/// - `400 Bad Request`: the path contains `..` or starts with `/`
/// - `404 Not Found`: nothing resolves
///
/// A sub-path that does not percent-decode to UTF-8 is resolved undecoded,
/// so it gets the same guard and the same `404` as any other miss.
pub async fn asset_handler(
    State(state): State<AppState>,
    rest: Result<Path<String>, PathRejection>,
    request: Request,
) -> Result<Response, ResolveError> {
    match rest {
        Ok(Path(rest)) => resolve_and_serve(&state, &rest, request).await,
        Err(rejection) => {
            let raw = raw_sub_path(request.uri().path()).to_string();
            debug!(path = %raw, error = %rejection, "Sub-path is not valid UTF-8");
            resolve_and_serve(&state, &raw, request).await
        }
    }
}

/// Handle `GET /mesh2motion/`, which carries an empty sub-path.
pub async fn asset_root_handler(
    State(state): State<AppState>,
    request: Request,
) -> Result<Response, ResolveError> {
    resolve_and_serve(&state, "", request).await
}

/// Handle health check requests.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response
///
/// `200 OK` with JSON body:
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0"
/// }
/// ```
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Handle the registered extensions listing.
///
/// # Endpoint
///
/// `GET /extensions`
///
/// # Response
///
/// `200 OK` with JSON body:
/// ```json
/// {
///   "extensions": [
///     {
///       "name": "ComfyUI-mesh2motion",
///       "web_path": "/extensions/ComfyUI-mesh2motion",
///       "node_count": 0,
///       "node_class_mappings": {},
///       "node_display_name_mappings": {}
///     }
///   ]
/// }
/// ```
pub async fn extensions_handler(State(state): State<AppState>) -> Json<ExtensionsResponse> {
    Json(ExtensionsResponse {
        extensions: state.registration.describe(),
    })
}

async fn resolve_and_serve(
    state: &AppState,
    rest: &str,
    request: Request,
) -> Result<Response, ResolveError> {
    let path = state.resolver.resolve(rest)?;
    Ok(serve_file(&state.mime, path, request).await)
}

/// The still-encoded part of a request path below `/mesh2motion/`.
fn raw_sub_path(path: &str) -> &str {
    path.strip_prefix(UI_PREFIX)
        .and_then(|rest| rest.strip_prefix('/'))
        .unwrap_or_default()
}

/// Stream a resolved file back with its registered content type.
///
/// The incoming request is forwarded so conditional and HEAD requests are
/// answered the same way a stock file response would.
async fn serve_file(mime: &MimeRegistry, path: std::path::PathBuf, request: Request) -> Response {
    let content_type = mime.for_path(&path);
    debug!(file = %path.display(), content_type = %content_type, "Serving asset");

    ServeFile::new_with_mime(path, &content_type)
        .oneshot(request)
        .await
        .unwrap_or_else(|never: Infallible| match never {})
        .into_response()
}

// =============================================================================
// Tests
// =============================================================================
