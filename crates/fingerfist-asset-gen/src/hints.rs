//! Godot import hints
//!
//! Audio placeholders are text, so Godot would fail to import them as OGG.
//! Every audio directory gets an empty `.gdignore`, which makes the editor skip
//! it. The `.import` templates below describe what the engine writes for real
//! media; they are kept per kind, not per file.

use crate::catalog::{AssetKind, Catalog};
use crate::manifest::{write_file, FileRole, GeneratedFile};
use fingerfist_core::Result;
use std::path::Path;

/// Marker file that stops Godot from importing a directory
pub const EXCLUSION_MARKER: &str = ".gdignore";

const FILENAME_PLACEHOLDER: &str = "FILENAME";
const FILEPATH_PLACEHOLDER: &str = "FILEPATH";

const AUDIO_IMPORT: &str = r#"[remap]

importer="oggvorbisstream"
type="AudioStreamOggVorbis"
uid="uid://placeholder"
path="res://.godot/imported/FILENAME-hash.oggvorbisstream"

[deps]

source_file="res://FILEPATH"
dest_files=["res://.godot/imported/FILENAME-hash.oggvorbisstream"]

[params]

loop=false
loop_offset=0
bpm=0
beat_count=0
bar_beats=4
"#;

const IMAGE_IMPORT: &str = r#"[remap]

importer="texture"
type="CompressedTexture2D"
uid="uid://placeholder"
path="res://.godot/imported/FILENAME-hash.ctex"
metadata={
"vram_texture": false
}

[deps]

source_file="res://FILEPATH"
dest_files=["res://.godot/imported/FILENAME-hash.ctex"]

[params]

compress/mode=0
compress/high_quality=false
compress/lossy_quality=0.7
compress/hdr_compression=1
compress/normal_map=0
compress/channel_pack=0
mipmaps/generate=false
mipmaps/limit=-1
roughness/mode=0
roughness/src_normal=""
process/fix_alpha_border=true
process/premult_alpha=false
process/normal_map_invert_y=false
process/hdr_as_srgb=false
process/hdr_clamp_exposure=false
process/size_limit=0
detect_3d/compress_to=1
svg/scale=1.0
editor/scale_with_editor_scale=false
editor/convert_colors_with_editor_theme=false
"#;

/// A Godot `.import` record shape for one asset kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportHintTemplate {
    pub kind: AssetKind,
    body: &'static str,
}

impl ImportHintTemplate {
    pub fn for_kind(kind: AssetKind) -> Self {
        let body = match kind {
            AssetKind::Image => IMAGE_IMPORT,
            AssetKind::Audio => AUDIO_IMPORT,
        };
        Self { kind, body }
    }

    /// The raw template with `FILENAME` / `FILEPATH` placeholders
    pub fn body(&self) -> &'static str {
        self.body
    }

    /// Fill in a file name and its `res://`-relative source path
    pub fn instantiate(&self, filename: &str, source_path: &str) -> String {
        self.body
            .replace(FILENAME_PLACEHOLDER, filename)
            .replace(FILEPATH_PLACEHOLDER, source_path)
    }
}

/// Write an empty exclusion marker into each audio category's directory.
pub fn emit_import_exclusions(assets_root: &Path, catalog: &Catalog) -> Result<Vec<GeneratedFile>> {
    catalog
        .categories()
        .iter()
        .filter(|c| c.kind == AssetKind::Audio)
        .map(|category| {
            let path = format!("{}/{}", category.base_dir, EXCLUSION_MARKER);
            write_file(
                assets_root,
                &path,
                FileRole::ImportExclusion,
                Some(category.id),
                b"",
            )
        })
        .collect()
}
