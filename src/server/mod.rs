//! HTTP server layer for the Mesh2Motion host.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                         HTTP Layer                              │
//! │          GET /mesh2motion/{*rest}   GET /extensions/...         │
//! │                                                                 │
//! │  ┌──────────────────────────┐  ┌─────────────────────────────┐  │
//! │  │        handlers          │  │           routes            │  │
//! │  │ (resolve, serve, errors) │  │ (router, CORS, tracing)     │  │
//! │  └──────────────────────────┘  └─────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

pub mod handlers;
pub mod routes;

pub use handlers::{
    asset_handler, asset_root_handler, extensions_handler, health_handler, index_handler,
    AppState, ExtensionsResponse, HealthResponse, IndexError, UI_NOT_BUILT_MESSAGE,
};
pub use routes::{create_router, create_router_with_state, RouterConfig, UI_PREFIX};
