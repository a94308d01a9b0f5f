//! Structured records of what a generation run wrote
//!
//! The generator returns these instead of printing; `report` turns them into
//! text for people.

use crate::layout::DirectoryRecord;
use fingerfist_core::{ContentHash, FingerfistError, Result};
use std::fmt;
use std::path::Path;

/// What a written file is for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FileRole {
    /// Text stand-in at the path the engine expects a PNG
    SpriteDescriptor,
    /// `P3` pixel grid next to a sprite descriptor
    PixelGrid,
    /// Text stand-in at the path the engine expects an OGG
    AudioMarker,
    /// Empty file telling the engine to skip a directory on import
    ImportExclusion,
    /// The `assets/README.md` summary document
    Summary,
}

impl FileRole {
    /// Whether this file stands in for a real game asset
    pub fn is_asset(&self) -> bool {
        matches!(self, FileRole::SpriteDescriptor | FileRole::AudioMarker)
    }
}

impl fmt::Display for FileRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileRole::SpriteDescriptor => write!(f, "sprite"),
            FileRole::PixelGrid => write!(f, "pixel grid"),
            FileRole::AudioMarker => write!(f, "audio"),
            FileRole::ImportExclusion => write!(f, "import exclusion"),
            FileRole::Summary => write!(f, "summary"),
        }
    }
}

/// A file the run wrote
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    /// Path relative to `assets/`
    pub path: String,
    pub role: FileRole,
    /// Catalog category the file belongs to, if any
    pub category: Option<&'static str>,
    pub len: usize,
    pub hash: ContentHash,
}

/// Write `content` to `assets_root/path`, replacing whatever was there
pub(crate) fn write_file(
    assets_root: &Path,
    path: &str,
    role: FileRole,
    category: Option<&'static str>,
    content: &[u8],
) -> Result<GeneratedFile> {
    let full = assets_root.join(path);
    std::fs::write(&full, content).map_err(|e| FingerfistError::filesystem(&full, e))?;
    tracing::debug!(path = %path, role = %role, bytes = content.len(), "wrote file");
    Ok(GeneratedFile {
        path: path.to_string(),
        role,
        category,
        len: content.len(),
        hash: ContentHash::from_bytes(content),
    })
}

/// Everything one run did, in order
#[derive(Debug, Clone, Default)]
pub struct RunReport {
    pub directories: Vec<DirectoryRecord>,
    pub files: Vec<GeneratedFile>,
}

impl RunReport {
    /// Number of files with the given role
    pub fn count(&self, role: FileRole) -> usize {
        self.files.iter().filter(|f| f.role == role).count()
    }

    /// Sprite descriptors plus audio markers
    pub fn asset_count(&self) -> usize {
        self.files.iter().filter(|f| f.role.is_asset()).count()
    }

    /// Asset files belonging to one catalog category
    pub fn category_count(&self, category: &str) -> usize {
        self.files
            .iter()
            .filter(|f| f.role.is_asset() && f.category == Some(category))
            .count()
    }

    /// Directories created by this run (as opposed to already present)
    pub fn created_directories(&self) -> usize {
        self.directories.iter().filter(|d| d.created).count()
    }

    /// Total bytes written
    pub fn total_bytes(&self) -> usize {
        self.files.iter().map(|f| f.len).sum()
    }
}
