//! Static asset resolution.
//!
//! Turns the untrusted remainder of a `/mesh2motion/...` request into a file
//! under the asset root, trying page variants in preference order.
//!
//! # Resolution Order
//!
//! For the bare prefix, only the index page variants under the root are
//! tried. For a sub-path:
//!
//! 1. Reject `..` anywhere and a leading `/`
//! 2. If the joined path is a directory, try [`DIRECTORY_INDEX`] inside it
//! 3. If the path names the reserved `retarget` page, try its variants at the root
//! 4. If the joined path is a regular file, serve it
//! 5. Otherwise the asset is missing
//!
//! Every candidate must be a regular file. The first hit wins.

use std::path::{Path, PathBuf};

use tracing::{debug, trace};

use crate::error::ResolveError;

// =============================================================================
// Page Variants
// =============================================================================

/// Filenames for one logical page of the editor.
///
/// The host-specific build is preferred over the generic one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageVariants {
    /// Host-specific build of the page (e.g. `index-comfyui.html`)
    pub primary: &'static str,

    /// Stock build of the page (e.g. `index.html`)
    pub generic: &'static str,
}

impl PageVariants {
    /// Candidate filenames in preference order.
    pub const fn candidates(&self) -> [&'static str; 2] {
        [self.primary, self.generic]
    }
}

/// Explore page, the editor's landing page.
pub const INDEX_PAGE: PageVariants = PageVariants {
    primary: "index-comfyui.html",
    generic: "index.html",
};

/// Model creation page.
pub const CREATE_PAGE: PageVariants = PageVariants {
    primary: "create-comfyui.html",
    generic: "create.html",
};

/// Animation retargeting page.
pub const RETARGET_PAGE: PageVariants = PageVariants {
    primary: "retarget-comfyui.html",
    generic: "retarget.html",
};

/// Pages tried for the bare prefix.
pub const ROOT_INDEX: &[PageVariants] = &[INDEX_PAGE];

/// Pages tried, in order, when a sub-path names a directory.
pub const DIRECTORY_INDEX: &[PageVariants] = &[INDEX_PAGE, CREATE_PAGE, RETARGET_PAGE];

/// Page name served from the asset root even without a matching subdirectory.
///
/// The retarget build lands next to the index pages rather than in a
/// `retarget/` folder, so this name is matched before the plain file lookup.
pub const RESERVED_PAGE: &str = "retarget";

// =============================================================================
// Resolver
// =============================================================================

/// Resolves request paths to files under a fixed, trusted asset root.
///
/// The resolver holds no mutable state; it can be shared freely across
/// concurrent requests.
#[derive(Debug, Clone)]
pub struct AssetResolver {
    root: PathBuf,
}

impl AssetResolver {
    /// Create a resolver for the given asset root.
    ///
    /// The root is not checked here; a missing root simply resolves nothing.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The asset root this resolver serves from.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve the bare prefix (`/mesh2motion`) to the landing page.
    pub fn resolve_index(&self) -> Result<PathBuf, ResolveError> {
        first_existing(&self.root, ROOT_INDEX).ok_or_else(|| {
            debug!(root = %self.root.display(), "No index page under asset root");
            ResolveError::missing("")
        })
    }

    /// Resolve a sub-path (`/mesh2motion/<rest>`).
    ///
    /// `rest` is untrusted. It is checked before the filesystem is touched,
    /// so a rejected path is rejected whether or not the target exists.
    pub fn resolve(&self, rest: &str) -> Result<PathBuf, ResolveError> {
        if is_unsafe(rest) {
            return Err(ResolveError::bad_path(rest));
        }

        let candidate = self.root.join(rest);

        if candidate.is_dir() {
            if let Some(index) = first_existing(&candidate, DIRECTORY_INDEX) {
                trace!(path = rest, file = %index.display(), "Resolved directory index");
                return Ok(index);
            }
        }

        if is_reserved_page(rest) {
            if let Some(page) = first_existing(&self.root, &[RETARGET_PAGE]) {
                trace!(path = rest, file = %page.display(), "Resolved reserved page");
                return Ok(page);
            }
        }

        if candidate.is_file() {
            return Ok(candidate);
        }

        Err(ResolveError::missing(rest))
    }
}

/// `..` anywhere (not just as a whole segment) or an absolute path.
fn is_unsafe(rest: &str) -> bool {
    rest.contains("..") || rest.starts_with('/')
}

fn is_reserved_page(rest: &str) -> bool {
    rest.strip_suffix('/').unwrap_or(rest) == RESERVED_PAGE
}

/// First candidate, in page then variant order, that is a regular file in `dir`.
fn first_existing(dir: &Path, pages: &[PageVariants]) -> Option<PathBuf> {
    pages
        .iter()
        .flat_map(PageVariants::candidates)
        .map(|name| dir.join(name))
        .find(|path| path.is_file())
}

// =============================================================================
// Tests
// =============================================================================
