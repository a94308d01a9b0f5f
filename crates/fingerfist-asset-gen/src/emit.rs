//! Placeholder payload emission
//!
//! Images get two files: the pixel grid as `<name>.ppm` and a short text
//! descriptor at `<name>.png`, where the engine will look for the real sprite.
//! Audio gets a single text marker at `<name>.ogg`.

use crate::catalog::{FramePayload, FrameSpec};
use crate::color::{render_pixel_grid, Rgb};
use crate::manifest::{write_file, FileRole, GeneratedFile};
use crate::naming;
use fingerfist_core::Result;
use std::path::Path;

/// Text written at every `.ogg` path
pub const AUDIO_MARKER: &str = "# OGG Placeholder\n\
# Replace with actual OGG audio file\n\
# Use Audacity or similar to export as OGG Vorbis\n";

/// Text written at a `.png` path in place of the real image
pub fn sprite_descriptor(color: Rgb, width: u32, height: u32) -> String {
    format!(
        "# PNG Placeholder\n# Size: {}x{}\n# Color: #{}\n# Replace with actual PNG sprite\n",
        width,
        height,
        color.to_hex()
    )
}

/// Write the files for one planned frame, overwriting any previous content.
pub fn emit_frame(assets_root: &Path, spec: &FrameSpec) -> Result<Vec<GeneratedFile>> {
    let category = Some(spec.category);
    match spec.payload {
        FramePayload::Image {
            color,
            width,
            height,
        } => {
            let grid = render_pixel_grid(color, width, height)?;
            let grid_path = naming::pixel_grid_path(&spec.path);
            let grid_file = write_file(
                assets_root,
                &grid_path,
                FileRole::PixelGrid,
                category,
                grid.as_bytes(),
            )?;
            let descriptor = write_file(
                assets_root,
                &spec.path,
                FileRole::SpriteDescriptor,
                category,
                sprite_descriptor(color, width, height).as_bytes(),
            )?;
            Ok(vec![grid_file, descriptor])
        }
        FramePayload::Audio => {
            let marker = write_file(
                assets_root,
                &spec.path,
                FileRole::AudioMarker,
                category,
                AUDIO_MARKER.as_bytes(),
            )?;
            Ok(vec![marker])
        }
    }
}
