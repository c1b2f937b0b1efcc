//! Host extension registration.
//!
//! A host application discovers extensions through three maps: the
//! directories holding each extension's front-end scripts, and two node maps
//! (class name to implementation, class name to display name). The editor
//! integration contributes one script directory and no nodes, but the node
//! maps must still be present and valid.
//!
//! The registration is assembled once at startup and handed to the router;
//! nothing mutates it afterwards.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Serialize;

/// Name the editor integration registers its script directory under.
pub const EXTENSION_NAME: &str = "ComfyUI-mesh2motion";

/// URL prefix under which registered script directories are served.
pub const EXTENSIONS_PREFIX: &str = "/extensions";

/// Immutable snapshot of everything this process registers with the host.
#[derive(Debug, Clone, Default)]
pub struct HostRegistration {
    web_dirs: BTreeMap<String, PathBuf>,
    node_class_mappings: BTreeMap<String, String>,
    node_display_name_mappings: BTreeMap<String, String>,
}

impl HostRegistration {
    /// An empty registration: no script directories and no nodes.
    pub fn new() -> Self {
        Self::default()
    }

    /// The registration made by the editor integration: its script
    /// directory under [`EXTENSION_NAME`] and zero nodes.
    pub fn mesh2motion(web_dir: impl Into<PathBuf>) -> Self {
        Self::new().with_web_dir(EXTENSION_NAME, web_dir)
    }

    /// Register a script directory for an extension.
    pub fn with_web_dir(mut self, name: impl Into<String>, dir: impl Into<PathBuf>) -> Self {
        self.web_dirs.insert(name.into(), dir.into());
        self
    }

    /// Script directories by extension name.
    pub fn web_dirs(&self) -> impl Iterator<Item = (&str, &Path)> {
        self.web_dirs
            .iter()
            .map(|(name, dir)| (name.as_str(), dir.as_path()))
    }

    /// Script directory for one extension.
    pub fn web_dir(&self, name: &str) -> Option<&Path> {
        self.web_dirs.get(name).map(PathBuf::as_path)
    }

    /// Node class registrations (always empty for the editor integration).
    pub fn node_class_mappings(&self) -> &BTreeMap<String, String> {
        &self.node_class_mappings
    }

    /// Node display name registrations (always empty for the editor integration).
    pub fn node_display_name_mappings(&self) -> &BTreeMap<String, String> {
        &self.node_display_name_mappings
    }

    /// URL path a registered script directory is mounted at.
    pub fn mount_path(name: &str) -> String {
        format!("{}/{}", EXTENSIONS_PREFIX, name)
    }

    /// Summary of each registered extension, as reported by `GET /extensions`.
    pub fn describe(&self) -> Vec<ExtensionInfo> {
        self.web_dirs
            .keys()
            .map(|name| ExtensionInfo {
                name: name.clone(),
                web_path: Self::mount_path(name),
                node_count: self.node_class_mappings.len(),
                node_class_mappings: self.node_class_mappings.clone(),
                node_display_name_mappings: self.node_display_name_mappings.clone(),
            })
            .collect()
    }
}

/// One registered extension as seen by the host.
#[derive(Debug, Clone, Serialize)]
pub struct ExtensionInfo {
    /// Extension name
    pub name: String,

    /// URL path its script directory is served from
    pub web_path: String,

    /// Number of nodes the extension contributes
    pub node_count: usize,

    /// Node class registrations
    pub node_class_mappings: BTreeMap<String, String>,

    /// Node display name registrations
    pub node_display_name_mappings: BTreeMap<String, String>,
}
