//! Content-type lookup for served files.
//!
//! A handful of extensions used by the editor bundle are registered
//! explicitly so they do not depend on the guess table: scripts must load as
//! `application/javascript` and the glTF model formats must not degrade to
//! `application/octet-stream`. Everything else goes through `mime_guess`.

use std::collections::HashMap;
use std::path::Path;

use mime_guess::{mime, Mime};

/// Registrations applied by [`MimeRegistry::new`].
const EDITOR_TYPES: &[(&str, &str)] = &[
    ("js", "application/javascript"),
    ("css", "text/css"),
    ("glb", "model/gltf-binary"),
    ("gltf", "model/gltf+json"),
];

/// Extension to content-type table, built once at startup and read-only afterwards.
#[derive(Debug, Clone)]
pub struct MimeRegistry {
    overrides: HashMap<String, Mime>,
}

impl MimeRegistry {
    /// Create a registry with the editor's extension registrations.
    pub fn new() -> Self {
        EDITOR_TYPES
            .iter()
            .filter_map(|(ext, essence)| essence.parse::<Mime>().ok().map(|mime| (*ext, mime)))
            .fold(Self::empty(), |registry, (ext, mime)| {
                registry.with_type(ext, mime)
            })
    }

    /// Create a registry that relies entirely on the guess table.
    pub fn empty() -> Self {
        Self {
            overrides: HashMap::new(),
        }
    }

    /// Register a content type for an extension (without the leading dot).
    ///
    /// Extensions are matched case-insensitively. A later registration for
    /// the same extension replaces the earlier one.
    pub fn with_type(mut self, extension: &str, mime: Mime) -> Self {
        self.overrides
            .insert(extension.trim_start_matches('.').to_ascii_lowercase(), mime);
        self
    }

    /// Content type for a file extension.
    pub fn for_extension(&self, extension: Option<&str>) -> Mime {
        let Some(ext) = extension else {
            return mime::APPLICATION_OCTET_STREAM;
        };

        let ext = ext.to_ascii_lowercase();
        if let Some(mime) = self.overrides.get(&ext) {
            return mime.clone();
        }

        mime_guess::from_ext(&ext).first_or_octet_stream()
    }

    /// Content type for a file path, based on its extension.
    pub fn for_path(&self, path: &Path) -> Mime {
        self.for_extension(path.extension().and_then(|e| e.to_str()))
    }
}

impl Default for MimeRegistry {
    fn default() -> Self {
        Self::new()
    }
}
