//! Configuration management for the Mesh2Motion host.
//!
//! Options come from command-line arguments via clap, with environment
//! variables (`M2M_` prefix) as a fallback and defaults for everything.
//!
//! # Example
//!
//! ```ignore
//! use clap::Parser;
//! use mesh2motion_host::config::{Cli, Command};
//!
//! match Cli::parse().into_command() {
//!     Command::Serve(config) => println!("Listening on {}", config.bind_address()),
//!     Command::Check(config) => println!("Checking {}", config.asset_root.display()),
//! }
//! ```
//!
//! # Environment Variables
//!
//! - `M2M_HOST` - Server bind address (default: 127.0.0.1)
//! - `M2M_PORT` - Server port (default: 8188)
//! - `M2M_ASSET_ROOT` - Directory holding the built editor UI (default: mesh2motion-ui)
//! - `M2M_WEB_DIR` - Directory holding the host-side extension scripts (default: js)
//! - `M2M_CORS_ORIGINS` - Allowed CORS origins, comma separated (default: any)
//!
//! The asset root and web dir are read once at startup. The URL prefix the
//! UI is served under is fixed.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

// =============================================================================
// Default Values
// =============================================================================

/// Default server host.
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default server port.
pub const DEFAULT_PORT: u16 = 8188;

/// Default directory of the built editor UI.
pub const DEFAULT_ASSET_ROOT: &str = "mesh2motion-ui";

/// Default directory of the host-side extension scripts.
pub const DEFAULT_WEB_DIR: &str = "js";

// =============================================================================
// CLI Arguments
// =============================================================================

/// Mesh2Motion host - serves the Mesh2Motion rigging and animation editor.
///
/// Without a subcommand, `serve` is assumed.
#[derive(Parser, Debug, Clone)]
#[command(name = "mesh2motion-host")]
#[command(author, version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub serve: ServeConfig,
}

impl Cli {
    /// The selected command, defaulting to `serve` with the top-level flags.
    pub fn into_command(self) -> Command {
        self.command.unwrap_or(Command::Serve(self.serve))
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Serve the editor UI and extension scripts over HTTP.
    Serve(ServeConfig),

    /// Check that the editor UI has been built into the asset root.
    Check(CheckConfig),
}

/// Options for the `serve` command.
#[derive(Args, Debug, Clone)]
pub struct ServeConfig {
    // =========================================================================
    // Server Configuration
    // =========================================================================
    /// Host address to bind the server to.
    #[arg(long, default_value = DEFAULT_HOST, env = "M2M_HOST")]
    pub host: String,

    /// Port to listen on.
    #[arg(short, long, default_value_t = DEFAULT_PORT, env = "M2M_PORT")]
    pub port: u16,

    // =========================================================================
    // Asset Configuration
    // =========================================================================
    /// Directory containing the built editor UI.
    #[arg(long, default_value = DEFAULT_ASSET_ROOT, env = "M2M_ASSET_ROOT")]
    pub asset_root: PathBuf,

    /// Directory containing the extension scripts registered with the host.
    #[arg(long, default_value = DEFAULT_WEB_DIR, env = "M2M_WEB_DIR")]
    pub web_dir: PathBuf,

    // =========================================================================
    // CORS Configuration
    // =========================================================================
    /// Allowed CORS origins (comma-separated).
    ///
    /// If not specified, allows any origin.
    #[arg(long, env = "M2M_CORS_ORIGINS", value_delimiter = ',')]
    pub cors_origins: Option<Vec<String>>,

    // =========================================================================
    // Logging Configuration
    // =========================================================================
    /// Enable verbose logging (debug level).
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,

    /// Disable request tracing.
    #[arg(long, default_value_t = false)]
    pub no_tracing: bool,
}

impl ServeConfig {
    /// Validate the configuration and return an error message if invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.host.is_empty() {
            return Err("Host is required. Set --host or M2M_HOST".to_string());
        }

        if self.port == 0 {
            return Err("Port must be between 1 and 65535".to_string());
        }

        if self.asset_root.as_os_str().is_empty() {
            return Err(
                "Asset root is required. Set --asset-root or M2M_ASSET_ROOT".to_string(),
            );
        }

        if self.web_dir.as_os_str().is_empty() {
            return Err("Web dir is required. Set --web-dir or M2M_WEB_DIR".to_string());
        }

        Ok(())
    }

    /// Get the server bind address as "host:port".
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Options for the `check` command.
#[derive(Args, Debug, Clone)]
pub struct CheckConfig {
    /// Directory containing the built editor UI.
    #[arg(long, default_value = DEFAULT_ASSET_ROOT, env = "M2M_ASSET_ROOT")]
    pub asset_root: PathBuf,

    /// Enable verbose logging (debug level).
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

// =============================================================================
// Tests
// =============================================================================
