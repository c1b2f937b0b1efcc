//! # Mesh2Motion Host
//!
//! Serves the pre-built Mesh2Motion rigging and animation editor under the
//! `/mesh2motion` URL prefix, together with the host extension registration
//! that lets the host load the editor's launcher scripts.
//!
//! ## Architecture
//!
//! - [`assets`] - Request path to file resolution and content types
//! - [`registration`] - Extension script directories and (empty) node maps
//! - [`server`] - Axum-based HTTP server and routes
//! - [`config`] - CLI and configuration types
//!
//! ## Example
//!
//! ```rust,no_run
//! use mesh2motion_host::{create_router, AssetResolver, HostRegistration, RouterConfig};
//!
//! #[tokio::main]
//! async fn main() -> std::io::Result<()> {
//!     let router = create_router(
//!         AssetResolver::new("mesh2motion-ui"),
//!         HostRegistration::mesh2motion("js"),
//!         RouterConfig::new(),
//!     );
//!
//!     let listener = tokio::net::TcpListener::bind("127.0.0.1:8188").await?;
//!     axum::serve(listener, router).await
//! }
//! ```

pub mod assets;
pub mod config;
pub mod error;
pub mod registration;
pub mod server;

// Re-export commonly used types
pub use assets::{AssetResolver, MimeRegistry, PageVariants};
pub use config::{CheckConfig, Cli, Command, ServeConfig};
pub use error::ResolveError;
pub use registration::{ExtensionInfo, HostRegistration, EXTENSION_NAME};
pub use server::{create_router, create_router_with_state, AppState, RouterConfig, UI_PREFIX};
