//! Generator configuration
//!
//! The catalog is fixed at build time, so the only setting is where the
//! `assets/` tree goes. The CLI always uses the working directory; tests point
//! it at a temporary directory.

use std::path::{Path, PathBuf};

/// Name of the directory created under the root
pub const ASSETS_DIR: &str = "assets";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Directory that receives `assets/`
    pub root: PathBuf,
}

impl GeneratorConfig {
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// `<root>/assets`
    pub fn assets_root(&self) -> PathBuf {
        self.root.join(ASSETS_DIR)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::with_root(".")
    }
}
