//! Directory tree materialization

use crate::catalog::FrameSpec;
use crate::naming;
use fingerfist_core::{FingerfistError, Result};
use std::collections::HashSet;
use std::path::Path;

/// Outcome of ensuring one directory exists
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryRecord {
    /// Path relative to `assets/`
    pub path: String,
    /// False when the directory was already there
    pub created: bool,
}

/// Every directory the planned files live in, in first-seen order
pub fn required_directories(specs: &[FrameSpec]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut dirs = Vec::new();
    for spec in specs {
        if let Some(dir) = naming::parent_dir(&spec.path) {
            if seen.insert(dir) {
                dirs.push(dir.to_string());
            }
        }
    }
    dirs
}

/// Create each directory (and its parents) under `assets_root`.
///
/// Directories that already exist are left alone and reported with
/// `created: false`.
pub fn materialize_directories(assets_root: &Path, dirs: &[String]) -> Result<Vec<DirectoryRecord>> {
    let mut records = Vec::with_capacity(dirs.len());
    for dir in dirs {
        let full = assets_root.join(dir);
        let existed = full.is_dir();
        std::fs::create_dir_all(&full).map_err(|e| FingerfistError::filesystem(&full, e))?;
        if existed {
            tracing::debug!(dir = %dir, "directory already present");
        } else {
            tracing::debug!(dir = %dir, "created directory");
        }
        records.push(DirectoryRecord {
            path: dir.clone(),
            created: !existed,
        });
    }
    Ok(records)
}
