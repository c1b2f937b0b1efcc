//! UI asset layer.
//!
//! Maps request paths under the `/mesh2motion` prefix onto files in the
//! pre-built editor bundle and decides which content type each file is
//! served with.
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │              HTTP Handlers              │
//! └────────────────────┬────────────────────┘
//!                      │ rest of path
//!                      ▼
//! ┌─────────────────────────────────────────┐
//! │             AssetResolver               │
//! │  guard → directory index → reserved     │
//! │  page → plain file → missing            │
//! └────────────────────┬────────────────────┘
//!                      │ PathBuf
//!                      ▼
//! ┌─────────────────────────────────────────┐
//! │   MimeRegistry  →  ServeFile stream     │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Components
//!
//! - [`AssetResolver`]: the fallback and traversal-guard decision procedure
//! - [`PageVariants`]: primary/generic filename pair for one logical page
//! - [`MimeRegistry`]: extension to content-type table
//!
//! # Example
//!
//! ```no_run
//! use mesh2motion_host::assets::{AssetResolver, MimeRegistry};
//!
//! let resolver = AssetResolver::new("mesh2motion-ui");
//! let mime = MimeRegistry::new();
//!
//! match resolver.resolve("retarget") {
//!     Ok(path) => println!("serving {} as {}", path.display(), mime.for_path(&path)),
//!     Err(e) => println!("{}", e),
//! }
//! ```

mod mime;
mod resolver;

pub use mime::MimeRegistry;
pub use resolver::{
    AssetResolver, PageVariants, CREATE_PAGE, DIRECTORY_INDEX, INDEX_PAGE, RESERVED_PAGE,
    RETARGET_PAGE, ROOT_INDEX,
};
