//! Mesh2Motion host - serves the Mesh2Motion editor UI.
//!
//! This binary starts the HTTP server and configures all components.

use clap::Parser;
use std::process::ExitCode;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mesh2motion_host::{
    assets::{AssetResolver, PageVariants, CREATE_PAGE, INDEX_PAGE, RETARGET_PAGE},
    config::{CheckConfig, Cli, Command, ServeConfig},
    registration::{HostRegistration, EXTENSION_NAME},
    server::{create_router, RouterConfig, UI_NOT_BUILT_MESSAGE, UI_PREFIX},
};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.into_command() {
        Command::Serve(config) => run_serve(config).await,
        Command::Check(config) => run_check(config),
    }
}

// =============================================================================
// Serve Command
// =============================================================================

async fn run_serve(config: ServeConfig) -> ExitCode {
    init_logging(config.verbose);

    if let Err(e) = config.validate() {
        error!("Configuration error: {}", e);
        return ExitCode::FAILURE;
    }

    print_banner();

    info!("Configuration:");
    info!("  Asset root: {}", config.asset_root.display());
    info!("  Extension: {} -> {}", EXTENSION_NAME, config.web_dir.display());
    match config.cors_origins {
        Some(ref origins) => info!("  CORS origins: {}", origins.join(", ")),
        None => info!("  CORS origins: any"),
    }

    let resolver = AssetResolver::new(&config.asset_root);

    // A missing bundle is not fatal: requests get a 404 with build instructions
    if !resolver.root().is_dir() {
        warn!("");
        warn!(
            "  Asset root {} does not exist or is not a directory",
            resolver.root().display()
        );
        warn!("  {}", UI_NOT_BUILT_MESSAGE);
    } else if resolver.resolve_index().is_err() {
        warn!("");
        warn!(
            "  No index page found in {}",
            resolver.root().display()
        );
        warn!("  {}", UI_NOT_BUILT_MESSAGE);
    }

    if !config.web_dir.is_dir() {
        warn!(
            "  Extension web dir {} does not exist; its scripts will 404",
            config.web_dir.display()
        );
    }

    let registration = HostRegistration::mesh2motion(&config.web_dir);
    let router = create_router(resolver, registration, RouterConfig::from(&config));

    let addr = config.bind_address();

    info!("");
    info!("────────────────────────────────────────────────────────────────");
    info!("  Server listening on: http://{}", addr);
    info!("");
    info!("  Open the editor in your browser:");
    info!("    open http://{}{}", addr, UI_PREFIX);
    info!("");
    info!("  Try these endpoints:");
    info!("    curl http://{}/health", addr);
    info!("    curl http://{}/extensions", addr);
    info!("────────────────────────────────────────────────────────────────");
    info!("");

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("Failed to bind to {}: {}", addr, e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = axum::serve(listener, router).await {
        error!("Server error: {}", e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

/// Print the startup banner.
fn print_banner() {
    let version = env!("CARGO_PKG_VERSION");
    info!("");
    info!("███╗   ███╗███████╗███████╗██╗  ██╗██████╗ ███╗   ███╗");
    info!("████╗ ████║██╔════╝██╔════╝██║  ██║╚════██╗████╗ ████║");
    info!("██╔████╔██║█████╗  ███████╗███████║ █████╔╝██╔████╔██║");
    info!("██║╚██╔╝██║██╔══╝  ╚════██║██╔══██║██╔═══╝ ██║╚██╔╝██║");
    info!("██║ ╚═╝ ██║███████╗███████║██║  ██║███████╗██║ ╚═╝ ██║");
    info!("╚═╝     ╚═╝╚══════╝╚══════╝╚═╝  ╚═╝╚══════╝╚═╝     ╚═╝");
    info!("");
    info!("                  mesh2motion-host v{}", version);
}

/// Initialize the tracing/logging subsystem.
fn init_logging(verbose: bool) {
    let env_filter = if verbose {
        "mesh2motion_host=debug,tower_http=debug"
    } else {
        "mesh2motion_host=info,tower_http=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| env_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

// =============================================================================
// Check Command
// =============================================================================

fn run_check(config: CheckConfig) -> ExitCode {
    if config.verbose {
        init_logging(true);
    }

    println!("Mesh2Motion UI Check");
    println!("════════════════════");
    println!();

    let resolver = AssetResolver::new(&config.asset_root);

    if resolver.root().is_dir() {
        println!("✓ Asset root: {}", resolver.root().display());
    } else {
        println!("✗ Asset root: {} (not a directory)", resolver.root().display());
        println!();
        println!("{}", UI_NOT_BUILT_MESSAGE);
        return ExitCode::FAILURE;
    }
    println!();

    println!("Pages:");
    println!("──────");
    for (label, page) in [
        ("Explore", INDEX_PAGE),
        ("Create", CREATE_PAGE),
        ("Retarget", RETARGET_PAGE),
    ] {
        report_page(&resolver, label, page);
    }
    println!();

    match resolver.resolve_index() {
        Ok(path) => {
            println!("✓ {} serves {}", UI_PREFIX, path.display());
        }
        Err(_) => {
            println!("✗ {} has no index page", UI_PREFIX);
            println!();
            println!("{}", UI_NOT_BUILT_MESSAGE);
            return ExitCode::FAILURE;
        }
    }

    println!();
    println!("════════════════════");
    println!("✓ All checks passed!");

    ExitCode::SUCCESS
}

/// Print which variant of a page, if any, is present at the asset root.
fn report_page(resolver: &AssetResolver, label: &str, page: PageVariants) {
    let found = page
        .candidates()
        .into_iter()
        .find(|name| resolver.root().join(name).is_file());

    match found {
        Some(name) if name == page.primary => println!("  ✓ {:<9} {}", label, name),
        Some(name) => println!("  ✓ {:<9} {} (generic build)", label, name),
        None => println!(
            "  - {:<9} missing ({} / {})",
            label, page.primary, page.generic
        ),
    }
}
