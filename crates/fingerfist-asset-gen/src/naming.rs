//! File naming convention for placeholder assets
//!
//! Paths are `/`-separated and relative to `assets/`:
//! `<base_dir>[/<subdir>]/<stem>[_NN].<ext>`
//!
//! - `_NN` is the zero-padded frame index, present only for multi-frame sprites
//! - audio clips carry their own descriptive name instead of a frame number
//! - every segment is lowercase ASCII, digits and underscores

use crate::catalog::{AssetCategory, AssetKind, AssetVariant, VariantShape};
use fingerfist_core::{FingerfistError, Result};

/// Highest frame count the two-digit suffix can express
pub const MAX_FRAMES: usize = 100;

/// Extension of the raw pixel grid written next to each image descriptor
pub const PIXEL_GRID_EXTENSION: &str = "ppm";

/// Resolve one file of a variant to its path relative to `assets/`.
pub fn resolve(category: &AssetCategory, variant: &AssetVariant, frame: usize) -> Result<String> {
    let count = variant.frame_count();
    if frame >= count {
        return Err(FingerfistError::validation(format!(
            "{}/{}: frame {} out of range (variant has {})",
            category.id, variant.id, frame, count
        )));
    }
    if count > MAX_FRAMES {
        return Err(FingerfistError::validation(format!(
            "{}/{}: {} frames exceed the two-digit frame suffix",
            category.id, variant.id, count
        )));
    }

    let file_stem = match (category.kind, variant.shape) {
        (AssetKind::Image, VariantShape::Sprite { frames, .. }) if frames > 1 => {
            format!("{}_{:02}", variant.stem, frame)
        }
        (AssetKind::Image, VariantShape::Sprite { .. }) => variant.stem.to_string(),
        (AssetKind::Audio, VariantShape::Clips { names }) => names[frame].to_string(),
        (kind, _) => {
            return Err(FingerfistError::validation(format!(
                "{}/{}: variant shape does not fit {} category",
                category.id, variant.id, kind
            )));
        }
    };

    check_segments(category, variant, category.base_dir)?;
    check_segments(category, variant, variant.subdir)?;
    check_segments(category, variant, &file_stem)?;

    let mut path = String::from(category.base_dir);
    if !variant.subdir.is_empty() {
        path.push('/');
        path.push_str(variant.subdir);
    }
    path.push('/');
    path.push_str(&file_stem);
    path.push('.');
    path.push_str(category.kind.extension());
    Ok(path)
}

/// Sibling path of an image descriptor holding its raw pixel grid
pub fn pixel_grid_path(descriptor_path: &str) -> String {
    let stem = descriptor_path
        .strip_suffix(AssetKind::Image.extension())
        .and_then(|s| s.strip_suffix('.'))
        .unwrap_or(descriptor_path);
    format!("{}.{}", stem, PIXEL_GRID_EXTENSION)
}

/// Parent directory of a resolved path, if any
pub fn parent_dir(path: &str) -> Option<&str> {
    path.rsplit_once('/').map(|(dir, _)| dir)
}

fn check_segments(category: &AssetCategory, variant: &AssetVariant, value: &str) -> Result<()> {
    if value.is_empty() {
        return Ok(());
    }
    for segment in value.split('/') {
        let valid = !segment.is_empty()
            && segment
                .bytes()
                .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'_');
        if !valid {
            return Err(FingerfistError::validation(format!(
                "{}/{}: '{}' breaks the lowercase_underscore naming rule",
                category.id, variant.id, value
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use std::collections::HashMap;

    fn player_default() -> (&'static AssetCategory, &'static AssetVariant) {
        let category = Catalog::shipped().category("player").unwrap();
        (category, &category.variants[0])
    }

    #[test]
    fn test_eight_frames_zero_padded() {
        let (category, variant) = player_default();
        let names: Vec<String> = (0..8)
            .map(|i| resolve(category, variant, i).unwrap())
            .collect();

        let expected: Vec<String> = (0..8)
            .map(|i| format!("sprites/player/default/fist_frame_0{}.png", i))
            .collect();
        assert_eq!(names, expected);
    }

    #[test]
    fn test_frame_out_of_range() {
        let (category, variant) = player_default();
        assert!(resolve(category, variant, 8).is_err());
    }

    #[test]
    fn test_single_frame_has_no_suffix() {
        let walls = Catalog::shipped().category("walls").unwrap();
        let bg = walls
            .variants
            .iter()
            .find(|v| v.id == "level_7_background")
            .unwrap();
        assert_eq!(
            resolve(walls, bg, 0).unwrap(),
            "sprites/walls/level_7/background.png"
        );
    }

    #[test]
    fn test_audio_uses_clip_name() {
        let sfx = Catalog::shipped().category("sfx").unwrap();
        assert_eq!(
            resolve(sfx, &sfx.variants[0], 0).unwrap(),
            "audio/sfx/punch_01.ogg"
        );
    }

    #[test]
    fn test_known_catalog_paths() {
        let plan = Catalog::shipped().plan().unwrap();
        let paths: Vec<&str> = plan.iter().map(|s| s.path.as_str()).collect();
        for expected in [
            "sprites/enemies/insect/blue/insect_frame_03.png",
            "sprites/enemies/vase/vase_windup_04.png",
            "sprites/enemies/fire_devil/fire_charge_01.png",
            "sprites/enemies/projectile/projectile_00.png",
            "sprites/coins/platinum/coin_frame_02.png",
            "sprites/walls/level_3/wall_damaged.png",
            "sprites/ui/items/call_of_wrath.png",
            "sprites/ui/button_pressed.png",
            "sprites/backgrounds/level_5_bg.png",
            "audio/sfx/meteor_rain.ogg",
            "audio/music/combat_boss.ogg",
        ] {
            assert!(paths.contains(&expected), "missing {}", expected);
        }
    }

    #[test]
    fn test_resolver_is_injective() {
        let mut owners: HashMap<String, (&str, &str, usize)> = HashMap::new();
        for category in Catalog::shipped().categories() {
            for variant in category.variants {
                for frame in 0..variant.frame_count() {
                    let path = resolve(category, variant, frame).unwrap();
                    let triple = (category.id, variant.id, frame);
                    if let Some(prev) = owners.insert(path.clone(), triple) {
                        panic!("{} resolved for both {:?} and {:?}", path, prev, triple);
                    }
                }
            }
        }
        assert_eq!(owners.len(), 276);
    }

    #[test]
    fn test_every_path_follows_naming_rule() {
        for spec in Catalog::shipped().plan().unwrap() {
            assert!(spec.path.bytes().all(|b| b.is_ascii_lowercase()
                || b.is_ascii_digit()
                || b == b'_'
                || b == b'/'
                || b == b'.'));
        }
    }

    #[test]
    fn test_rejects_uppercase_segment() {
        let category = AssetCategory {
            id: "test",
            base_dir: "sprites/Test",
            kind: AssetKind::Image,
            variants: &[],
        };
        let variant = AssetVariant {
            id: "a",
            subdir: "",
            stem: "a",
            shape: VariantShape::Sprite {
                color: "ffffff",
                width: 1,
                height: 1,
                frames: 1,
            },
        };
        assert!(resolve(&category, &variant, 0).is_err());
    }

    #[test]
    fn test_rejects_shape_kind_mismatch() {
        let category = AssetCategory {
            id: "test",
            base_dir: "audio/test",
            kind: AssetKind::Audio,
            variants: &[],
        };
        let variant = AssetVariant {
            id: "a",
            subdir: "",
            stem: "a",
            shape: VariantShape::Sprite {
                color: "ffffff",
                width: 1,
                height: 1,
                frames: 1,
            },
        };
        assert!(resolve(&category, &variant, 0).is_err());
    }

    #[test]
    fn test_pixel_grid_path() {
        assert_eq!(
            pixel_grid_path("sprites/ui/hp_icon.png"),
            "sprites/ui/hp_icon.ppm"
        );
    }

    #[test]
    fn test_parent_dir() {
        assert_eq!(parent_dir("audio/sfx/death.ogg"), Some("audio/sfx"));
        assert_eq!(parent_dir("README.md"), None);
    }
}
