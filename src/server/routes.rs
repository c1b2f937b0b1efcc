//! Router configuration for the Mesh2Motion host.
//!
//! This module defines the HTTP routes and applies CORS and tracing
//! middleware.
//!
//! # Route Structure
//!
//! ```text
//! /health                        - Health check
//! /mesh2motion                   - Editor landing page
//! /mesh2motion/{*rest}           - Editor pages and assets
//! /extensions                    - Registered host extensions
//! /extensions/{name}/...         - Extension script directories
//! ```
//!
//! # Example
//!
//! ```ignore
//! use mesh2motion_host::{create_router, AssetResolver, HostRegistration, RouterConfig};
//!
//! let router = create_router(
//!     AssetResolver::new("mesh2motion-ui"),
//!     HostRegistration::mesh2motion("js"),
//!     RouterConfig::new().with_cors_origins(vec!["http://127.0.0.1:8188".to_string()]),
//! );
//!
//! let listener = tokio::net::TcpListener::bind("127.0.0.1:8188").await?;
//! axum::serve(listener, router).await?;
//! ```

use std::time::Duration;

use axum::{routing::get, Router};
use http::header::CONTENT_TYPE;
use http::Method;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use super::handlers::{
    asset_handler, asset_root_handler, extensions_handler, health_handler, index_handler, AppState,
};
use crate::assets::AssetResolver;
use crate::config::ServeConfig;
use crate::registration::{HostRegistration, EXTENSIONS_PREFIX};

/// URL prefix the editor UI is served under.
pub const UI_PREFIX: &str = "/mesh2motion";

// =============================================================================
// Router Configuration
// =============================================================================

/// Configuration for the HTTP router.
#[derive(Debug, Clone)]
pub struct RouterConfig {
    /// Allowed CORS origins (None = allow any origin)
    pub cors_origins: Option<Vec<String>>,

    /// Whether to enable request tracing
    pub enable_tracing: bool,
}

impl RouterConfig {
    /// Create a new router configuration.
    ///
    /// By default:
    /// - CORS allows any origin
    /// - Tracing is enabled
    pub fn new() -> Self {
        Self {
            cors_origins: None,
            enable_tracing: true,
        }
    }

    /// Set specific allowed CORS origins.
    ///
    /// Pass an empty vec to disallow all cross-origin requests.
    /// Pass None (or don't call this method) to allow any origin.
    pub fn with_cors_origins(mut self, origins: Vec<String>) -> Self {
        self.cors_origins = Some(origins);
        self
    }

    /// Enable or disable request tracing.
    pub fn with_tracing(mut self, enabled: bool) -> Self {
        self.enable_tracing = enabled;
        self
    }
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&ServeConfig> for RouterConfig {
    /// `--cors-origins` narrows CORS when given; `--no-tracing` drops the trace layer.
    fn from(config: &ServeConfig) -> Self {
        let mut router_config = RouterConfig::new();

        if let Some(ref origins) = config.cors_origins {
            router_config = router_config.with_cors_origins(origins.clone());
        }

        router_config.with_tracing(!config.no_tracing)
    }
}

// =============================================================================
// Router Builder
// =============================================================================

/// Create the main application router.
///
/// # Arguments
///
/// * `resolver` - Resolver over the built editor UI
/// * `registration` - Extension registration; each script directory is mounted read-only
/// * `config` - Router configuration
pub fn create_router(
    resolver: AssetResolver,
    registration: HostRegistration,
    config: RouterConfig,
) -> Router {
    let app_state = AppState::new(resolver, registration);
    create_router_with_state(app_state, config)
}

/// Create the router from prepared application state.
pub fn create_router_with_state(app_state: AppState, config: RouterConfig) -> Router {
    let cors = build_cors_layer(&config);

    let ui_routes = Router::new()
        .route(UI_PREFIX, get(index_handler))
        .route(&format!("{UI_PREFIX}/"), get(asset_root_handler))
        .route(&format!("{UI_PREFIX}/{{*rest}}"), get(asset_handler));

    let mut router = Router::new()
        .merge(ui_routes)
        .route("/health", get(health_handler))
        .route(EXTENSIONS_PREFIX, get(extensions_handler));

    for (name, dir) in app_state.registration.web_dirs() {
        router = router.nest_service(&HostRegistration::mount_path(name), ServeDir::new(dir));
    }

    let router = router.with_state(app_state).layer(cors);

    if config.enable_tracing {
        router.layer(TraceLayer::new_for_http())
    } else {
        router
    }
}

/// Build the CORS layer based on configuration.
fn build_cors_layer(config: &RouterConfig) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::HEAD, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(86400)); // 24 hours

    match &config.cors_origins {
        None => cors.allow_origin(Any),
        Some(origins) if origins.is_empty() => cors,
        Some(origins) => {
            let parsed_origins: Vec<_> = origins.iter().filter_map(|o| o.parse().ok()).collect();
            cors.allow_origin(parsed_origins)
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
