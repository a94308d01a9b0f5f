//! Human-facing output: the `assets/README.md` document and the console summary

use crate::catalog::{Catalog, DECLARED_AUDIO_COUNT, DECLARED_IMAGE_COUNT};
use crate::manifest::{write_file, FileRole, GeneratedFile, RunReport};
use fingerfist_core::Result;
use std::fmt::Write as _;
use std::path::Path;

/// Where the summary document lives, relative to `assets/`
pub const SUMMARY_DOCUMENT: &str = "README.md";

/// The static summary document.
pub fn summary_document() -> String {
    format!(
        r#"# Fingerfist Assets

## Placeholder Status

These files are automatically generated **PLACEHOLDERS**.

### Sprite placeholders (.png)
- Solid-color rectangles at the correct size
- Colors identify the asset type at a glance
- Each `.png` is a text descriptor; the matching `.ppm` holds the pixel data
- **Replace:** with real PNG sprites (same file name!)

### Audio placeholders (.ogg)
- Small text files used as markers
- `audio/sfx` and `audio/music` carry a `.gdignore` so Godot skips them
- **Replace:** with real OGG Vorbis files, then delete the `.gdignore`

## Replacement Priorities

**Phase 1 (prototype - replace first):**
- `sprites/player/default/fist_frame_00-07.png` (8 frames)
- `sprites/enemies/insect/green/insect_frame_00-03.png` (4 frames)
- `sprites/coins/bronze/coin_frame_00-03.png` (4 frames)
- `sprites/walls/level_1/wall_*.png` (3 states)
- `audio/sfx/punch_01.ogg`, `hurt_01.ogg`, `death.ogg`
- `audio/sfx/insect_death_01.ogg`, `coin_collect_01.ogg`

**Phase 2 (core loop):**
- All three enemy types, including death animations
- All coin variants
- All player and enemy SFX

**Phase 3 (polish):**
- Remaining player skins
- Item icons
- UI elements
- Music tracks

## File Conventions

- **Sprites:** PNG, transparent background, pixel art style
- **Audio:** OGG Vorbis, 44.1kHz, mono is fine for SFX
- **Naming:** lowercase, underscores, frame numbers 00-99

## Totals

- {images} sprite placeholders
- {audio} audio placeholders
- {total} files in total

## Generated With

`fingerfist-placeholders` - Fingerfist asset generator
"#,
        images = DECLARED_IMAGE_COUNT,
        audio = DECLARED_AUDIO_COUNT,
        total = DECLARED_IMAGE_COUNT + DECLARED_AUDIO_COUNT,
    )
}

/// Write the summary document to `assets/README.md`
pub fn write_summary_document(assets_root: &Path) -> Result<GeneratedFile> {
    write_file(
        assets_root,
        SUMMARY_DOCUMENT,
        FileRole::Summary,
        None,
        summary_document().as_bytes(),
    )
}

/// Console summary of a finished run
pub fn format_summary(report: &RunReport, catalog: &Catalog) -> String {
    let rule = "=".repeat(60);
    let mut out = String::new();

    let _ = writeln!(out, "{}", rule);
    let _ = writeln!(out, "COMPLETE!");
    let _ = writeln!(out, "{}", rule);

    let _ = writeln!(out, "\nCategories:");
    for category in catalog.categories() {
        let _ = writeln!(
            out,
            "  - {:<12} {:>4} {} files in {}",
            category.id,
            report.category_count(category.id),
            category.kind,
            category.base_dir
        );
    }
    let _ = writeln!(
        out,
        "  ({} directories created, {} already present)",
        report.created_directories(),
        report.directories.len() - report.created_directories()
    );

    let _ = writeln!(out, "\nSummary:");
    let _ = writeln!(out, "  - {} Sprite Placeholders", DECLARED_IMAGE_COUNT);
    let _ = writeln!(out, "  - {} Audio Placeholders", DECLARED_AUDIO_COUNT);
    let _ = writeln!(
        out,
        "  - Total: {} Files",
        DECLARED_IMAGE_COUNT + DECLARED_AUDIO_COUNT
    );

    let _ = writeln!(out, "\nNext Steps:");
    let _ = writeln!(out, "  1. Review assets/ folder structure");
    let _ = writeln!(out, "  2. Git add + commit: git add assets/ && git commit");
    let _ = writeln!(out, "  3. Replace placeholders with real assets (same filenames!)");
    let _ = writeln!(out, "  4. Godot will auto-import on next editor start");
    let _ = writeln!(out, "\nTip: Start with Phase 1 assets for quickest prototype!");

    out
}
