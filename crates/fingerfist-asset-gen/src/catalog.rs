//! The asset catalog: every placeholder the game needs, as one static table
//!
//! Categories map to a directory under `assets/`, variants to a file stem with
//! either a sprite shape (color, size, frame count) or a list of named audio
//! clips. Single images such as wall states or backgrounds are sprite variants
//! with one frame, so emission never branches on where an entry came from.

use crate::color::Rgb;
use crate::naming;
use fingerfist_core::{FingerfistError, Result};
use std::collections::HashSet;
use std::fmt;

/// Number of image placeholders the shipped catalog declares
pub const DECLARED_IMAGE_COUNT: usize = 228;

/// Number of audio placeholders the shipped catalog declares
pub const DECLARED_AUDIO_COUNT: usize = 48;

/// The kind of media a category holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetKind {
    Image,
    Audio,
}

impl AssetKind {
    /// Extension of the file the engine will eventually load
    pub fn extension(&self) -> &'static str {
        match self {
            AssetKind::Image => "png",
            AssetKind::Audio => "ogg",
        }
    }
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetKind::Image => write!(f, "image"),
            AssetKind::Audio => write!(f, "audio"),
        }
    }
}

/// What a variant expands into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariantShape {
    /// A solid-color frame sequence; one frame means a single named image
    Sprite {
        color: &'static str,
        width: u32,
        height: u32,
        frames: u32,
    },
    /// One audio file per descriptive name
    Clips { names: &'static [&'static str] },
}

/// A skin, color, level or clip group inside a category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssetVariant {
    pub id: &'static str,
    /// Directory below the category's base directory; empty for none
    pub subdir: &'static str,
    /// File name stem; frame suffixes are appended to it
    pub stem: &'static str,
    pub shape: VariantShape,
}

impl AssetVariant {
    /// Number of files this variant produces
    pub fn frame_count(&self) -> usize {
        match self.shape {
            VariantShape::Sprite { frames, .. } => frames as usize,
            VariantShape::Clips { names } => names.len(),
        }
    }
}

/// A named grouping of variants sharing a base directory and kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssetCategory {
    pub id: &'static str,
    /// Directory relative to `assets/`
    pub base_dir: &'static str,
    pub kind: AssetKind,
    pub variants: &'static [AssetVariant],
}

impl AssetCategory {
    /// Number of files this category produces
    pub fn file_count(&self) -> usize {
        self.variants.iter().map(AssetVariant::frame_count).sum()
    }
}

/// Decoded payload of one concrete file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FramePayload {
    Image { color: Rgb, width: u32, height: u32 },
    Audio,
}

/// One concrete file to emit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameSpec {
    pub category: &'static str,
    pub variant: &'static str,
    pub frame: usize,
    /// `/`-separated path relative to `assets/`
    pub path: String,
    pub payload: FramePayload,
}

impl FrameSpec {
    pub fn kind(&self) -> AssetKind {
        match self.payload {
            FramePayload::Image { .. } => AssetKind::Image,
            FramePayload::Audio => AssetKind::Audio,
        }
    }
}

/// Read-only view over a static category table
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    categories: &'static [AssetCategory],
}

impl Catalog {
    /// The catalog the game ships with
    pub fn shipped() -> Self {
        Self::from_static(SHIPPED)
    }

    /// Wrap an arbitrary static table
    pub const fn from_static(categories: &'static [AssetCategory]) -> Self {
        Self { categories }
    }

    /// Categories in declared (emission) order
    pub fn categories(&self) -> &'static [AssetCategory] {
        self.categories
    }

    /// Look up a category by id
    pub fn category(&self, id: &str) -> Option<&'static AssetCategory> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Files of the given kind this catalog produces
    pub fn count(&self, kind: AssetKind) -> usize {
        self.categories
            .iter()
            .filter(|c| c.kind == kind)
            .map(AssetCategory::file_count)
            .sum()
    }

    pub fn image_count(&self) -> usize {
        self.count(AssetKind::Image)
    }

    pub fn audio_count(&self) -> usize {
        self.count(AssetKind::Audio)
    }

    /// Resolve every file in declared order.
    ///
    /// Fails before anything touches the filesystem if a color does not decode,
    /// a variant is empty, or two entries land on the same path.
    pub fn plan(&self) -> Result<Vec<FrameSpec>> {
        let mut specs = Vec::with_capacity(self.image_count() + self.audio_count());
        let mut seen = HashSet::new();

        for category in self.categories {
            for variant in category.variants {
                if variant.frame_count() == 0 {
                    return Err(FingerfistError::validation(format!(
                        "{}/{}: variant produces no files",
                        category.id, variant.id
                    )));
                }

                let payload = match variant.shape {
                    VariantShape::Sprite {
                        color,
                        width,
                        height,
                        ..
                    } => {
                        let color = Rgb::from_hex(color).map_err(|e| match e {
                            FingerfistError::ValidationError(msg) => FingerfistError::validation(
                                format!("{}/{}: {}", category.id, variant.id, msg),
                            ),
                            other => other,
                        })?;
                        if width == 0 || height == 0 {
                            return Err(FingerfistError::validation(format!(
                                "{}/{}: invalid size {}x{}",
                                category.id, variant.id, width, height
                            )));
                        }
                        FramePayload::Image {
                            color,
                            width,
                            height,
                        }
                    }
                    VariantShape::Clips { .. } => FramePayload::Audio,
                };

                for frame in 0..variant.frame_count() {
                    let path = naming::resolve(category, variant, frame)?;
                    if !seen.insert(path.clone()) {
                        return Err(FingerfistError::validation(format!(
                            "{}/{} frame {}: path '{}' is already taken",
                            category.id, variant.id, frame, path
                        )));
                    }
                    specs.push(FrameSpec {
                        category: category.id,
                        variant: variant.id,
                        frame,
                        path,
                        payload,
                    });
                }
            }
        }

        Ok(specs)
    }
}

const fn sprite(
    id: &'static str,
    subdir: &'static str,
    stem: &'static str,
    color: &'static str,
    size: (u32, u32),
    frames: u32,
) -> AssetVariant {
    AssetVariant {
        id,
        subdir,
        stem,
        shape: VariantShape::Sprite {
            color,
            width: size.0,
            height: size.1,
            frames,
        },
    }
}

/// A single image named after its id
const fn single(id: &'static str, subdir: &'static str, color: &'static str, size: (u32, u32)) -> AssetVariant {
    sprite(id, subdir, id, color, size, 1)
}

const fn clips(id: &'static str, names: &'static [&'static str]) -> AssetVariant {
    AssetVariant {
        id,
        subdir: "",
        stem: id,
        shape: VariantShape::Clips { names },
    }
}

const FIST: (u32, u32) = (64, 64);
const INSECT: (u32, u32) = (24, 24);
const VASE: (u32, u32) = (32, 40);
const FIRE_DEVIL: (u32, u32) = (32, 32);
const PROJECTILE: (u32, u32) = (12, 12);
const COIN: (u32, u32) = (16, 16);
const WALL: (u32, u32) = (96, 720);
const SCREEN: (u32, u32) = (1280, 720);
const ICON: (u32, u32) = (32, 32);
const ITEM: (u32, u32) = (64, 64);
const BUTTON: (u32, u32) = (200, 50);
const PANEL: (u32, u32) = (400, 300);
const DIGIT: (u32, u32) = (24, 32);

const WALL_INTACT: &str = "696969";
const WALL_DAMAGED: &str = "8b4513";
const WALL_CRITICAL: &str = "654321";

static SHIPPED: &[AssetCategory] = &[
    AssetCategory {
        id: "player",
        base_dir: "sprites/player",
        kind: AssetKind::Image,
        variants: &[
            sprite("default", "default", "fist_frame", "ff6b35", FIST, 8),
            sprite("metal", "metal", "fist_frame", "a8a8a8", FIST, 8),
            sprite("gold", "gold", "fist_frame", "ffd700", FIST, 8),
            sprite("fire", "fire", "fist_frame", "ff4500", FIST, 8),
            sprite("ice", "ice", "fist_frame", "87ceeb", FIST, 8),
            sprite("shadow", "shadow", "fist_frame", "2f2f2f", FIST, 8),
            sprite("neon", "neon", "fist_frame", "00ff00", FIST, 8),
            sprite("crystal", "crystal", "fist_frame", "e0b0ff", FIST, 8),
        ],
    },
    AssetCategory {
        id: "enemies",
        base_dir: "sprites/enemies",
        kind: AssetKind::Image,
        variants: &[
            sprite("insect_green", "insect/green", "insect_frame", "3cb371", INSECT, 4),
            sprite("insect_green_death", "insect/green", "insect_death", "3cb371", INSECT, 4),
            sprite("insect_blue", "insect/blue", "insect_frame", "4169e1", INSECT, 4),
            sprite("insect_blue_death", "insect/blue", "insect_death", "4169e1", INSECT, 4),
            sprite("insect_red", "insect/red", "insect_frame", "dc143c", INSECT, 4),
            sprite("insect_red_death", "insect/red", "insect_death", "dc143c", INSECT, 4),
            sprite("vase_idle", "vase", "vase_idle", "cd853f", VASE, 2),
            sprite("vase_windup", "vase", "vase_windup", "cd853f", VASE, 5),
            sprite("vase_attack", "vase", "vase_attack", "cd853f", VASE, 3),
            sprite("vase_break", "vase", "vase_break", "cd853f", VASE, 4),
            sprite("fire_idle", "fire_devil", "fire_idle", "ff4500", FIRE_DEVIL, 4),
            sprite("fire_charge", "fire_devil", "fire_charge", "ff4500", FIRE_DEVIL, 2),
            sprite("fire_extinguish", "fire_devil", "fire_extinguish", "ff4500", FIRE_DEVIL, 4),
            sprite("projectile", "projectile", "projectile", "ff8c00", PROJECTILE, 4),
            sprite("projectile_hit", "projectile", "projectile_hit", "ff8c00", PROJECTILE, 4),
        ],
    },
    AssetCategory {
        id: "coins",
        base_dir: "sprites/coins",
        kind: AssetKind::Image,
        variants: &[
            sprite("bronze", "bronze", "coin_frame", "cd7f32", COIN, 4),
            sprite("bronze_collect", "bronze", "coin_collect", "cd7f32", COIN, 4),
            sprite("silver", "silver", "coin_frame", "c0c0c0", COIN, 4),
            sprite("silver_collect", "silver", "coin_collect", "c0c0c0", COIN, 4),
            sprite("gold", "gold", "coin_frame", "ffd700", COIN, 4),
            sprite("gold_collect", "gold", "coin_collect", "ffd700", COIN, 4),
            sprite("platinum", "platinum", "coin_frame", "e5e4e2", COIN, 4),
            sprite("platinum_collect", "platinum", "coin_collect", "e5e4e2", COIN, 4),
        ],
    },
    AssetCategory {
        id: "walls",
        base_dir: "sprites/walls",
        kind: AssetKind::Image,
        variants: &[
            sprite("level_1_intact", "level_1", "wall_intact", WALL_INTACT, WALL, 1),
            sprite("level_1_damaged", "level_1", "wall_damaged", WALL_DAMAGED, WALL, 1),
            sprite("level_1_critical", "level_1", "wall_critical", WALL_CRITICAL, WALL, 1),
            sprite("level_1_break", "level_1", "wall_break", WALL_CRITICAL, WALL, 3),
            sprite("level_2_intact", "level_2", "wall_intact", WALL_INTACT, WALL, 1),
            sprite("level_2_damaged", "level_2", "wall_damaged", WALL_DAMAGED, WALL, 1),
            sprite("level_2_critical", "level_2", "wall_critical", WALL_CRITICAL, WALL, 1),
            sprite("level_2_break", "level_2", "wall_break", WALL_CRITICAL, WALL, 3),
            sprite("level_3_intact", "level_3", "wall_intact", WALL_INTACT, WALL, 1),
            sprite("level_3_damaged", "level_3", "wall_damaged", WALL_DAMAGED, WALL, 1),
            sprite("level_3_critical", "level_3", "wall_critical", WALL_CRITICAL, WALL, 1),
            sprite("level_3_break", "level_3", "wall_break", WALL_CRITICAL, WALL, 3),
            sprite("level_4_intact", "level_4", "wall_intact", WALL_INTACT, WALL, 1),
            sprite("level_4_damaged", "level_4", "wall_damaged", WALL_DAMAGED, WALL, 1),
            sprite("level_4_critical", "level_4", "wall_critical", WALL_CRITICAL, WALL, 1),
            sprite("level_4_break", "level_4", "wall_break", WALL_CRITICAL, WALL, 3),
            sprite("level_5_intact", "level_5", "wall_intact", WALL_INTACT, WALL, 1),
            sprite("level_5_damaged", "level_5", "wall_damaged", WALL_DAMAGED, WALL, 1),
            sprite("level_5_critical", "level_5", "wall_critical", WALL_CRITICAL, WALL, 1),
            sprite("level_5_break", "level_5", "wall_break", WALL_CRITICAL, WALL, 3),
            sprite("level_6_intact", "level_6", "wall_intact", WALL_INTACT, WALL, 1),
            sprite("level_6_damaged", "level_6", "wall_damaged", WALL_DAMAGED, WALL, 1),
            sprite("level_6_critical", "level_6", "wall_critical", WALL_CRITICAL, WALL, 1),
            sprite("level_6_break", "level_6", "wall_break", WALL_CRITICAL, WALL, 3),
            // Endless mode: no wall, only the sky
            sprite("level_7_background", "level_7", "background", "87ceeb", SCREEN, 1),
        ],
    },
    AssetCategory {
        id: "ui",
        base_dir: "sprites/ui",
        kind: AssetKind::Image,
        variants: &[
            single("hp_icon", "", "ff0000", ICON),
            single("coin_icon", "", "ffd700", ICON),
            single("combo_icon", "", "ff4500", ICON),
            single("pause_icon", "", "ffffff", ICON),
            single("settings_icon", "", "a9a9a9", ICON),
            single("shockwave_fist", "items", "4169e1", ITEM),
            single("iron_knuckles", "items", "808080", ITEM),
            single("time_crystal", "items", "9370db", ITEM),
            single("fire_shield", "items", "ff4500", ITEM),
            single("greed_magnet", "items", "ffd700", ITEM),
            single("thunder_charge", "items", "ffff00", ITEM),
            single("golem_skin", "items", "8b4513", ITEM),
            single("call_of_wrath", "items", "ff0000", ITEM),
            single("button_normal", "", "4169e1", BUTTON),
            single("button_hover", "", "1e90ff", BUTTON),
            single("button_pressed", "", "00008b", BUTTON),
            single("button_disabled", "", "696969", BUTTON),
            single("panel_bg", "", "2f4f4f", PANEL),
            single("panel_border", "", "8b4513", PANEL),
            sprite("digits", "digits", "digit", "ffffff", DIGIT, 10),
        ],
    },
    AssetCategory {
        id: "backgrounds",
        base_dir: "sprites/backgrounds",
        kind: AssetKind::Image,
        variants: &[
            single("level_1_bg", "", "191970", SCREEN),
            single("level_2_bg", "", "4b0082", SCREEN),
            single("level_3_bg", "", "8b0000", SCREEN),
            single("level_4_bg", "", "003366", SCREEN),
            single("level_5_bg", "", "2f4f2f", SCREEN),
            single("level_6_bg", "", "e0ffff", SCREEN),
            single("level_7_bg", "", "87ceeb", SCREEN),
            single("menu_bg", "", "1a1a2e", SCREEN),
            single("shop_bg", "", "3e2723", SCREEN),
            single("game_over_bg", "", "000000", SCREEN),
        ],
    },
    AssetCategory {
        id: "sfx",
        base_dir: "audio/sfx",
        kind: AssetKind::Audio,
        variants: &[
            clips(
                "player",
                &[
                    "punch_01", "punch_02", "punch_03", "punch_04", "punch_05", "punch_06",
                    "punch_07", "punch_08", "hurt_01", "hurt_02", "hurt_03", "death", "whoosh",
                ],
            ),
            clips(
                "enemy",
                &[
                    "insect_death_01",
                    "insect_death_02",
                    "insect_death_03",
                    "vase_break_01",
                    "vase_break_02",
                    "vase_break_03",
                    "vase_windup",
                    "vase_attack_01",
                    "vase_attack_02",
                    "fire_extinguish_01",
                    "fire_extinguish_02",
                    "projectile_charge",
                    "projectile_fire",
                ],
            ),
            clips(
                "coins",
                &["coin_collect_01", "coin_collect_02", "coin_collect_03", "coin_bounce"],
            ),
            clips("wall", &["wall_crack_01", "wall_crack_02", "wall_break"]),
            clips(
                "ui",
                &[
                    "button_click",
                    "button_hover",
                    "menu_open",
                    "menu_close",
                    "shop_buy",
                    "shop_error",
                ],
            ),
            clips(
                "items",
                &["fire_shield", "thunder_chain", "slow_motion", "meteor_rain"],
            ),
        ],
    },
    AssetCategory {
        id: "music",
        base_dir: "audio/music",
        kind: AssetKind::Audio,
        variants: &[clips(
            "tracks",
            &[
                "main_theme",
                "combat_level_1",
                "combat_level_2",
                "combat_boss",
                "shop_theme",
            ],
        )],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declared_totals_match_catalog() {
        let catalog = Catalog::shipped();
        assert_eq!(catalog.image_count(), DECLARED_IMAGE_COUNT);
        assert_eq!(catalog.audio_count(), DECLARED_AUDIO_COUNT);
    }

    #[test]
    fn test_category_counts() {
        let catalog = Catalog::shipped();
        let expected = [
            ("player", 64),
            ("enemies", 56),
            ("coins", 32),
            ("walls", 37),
            ("ui", 29),
            ("backgrounds", 10),
            ("sfx", 43),
            ("music", 5),
        ];
        for (id, count) in expected {
            assert_eq!(catalog.category(id).unwrap().file_count(), count, "{}", id);
        }
        assert_eq!(catalog.categories().len(), expected.len());
    }

    #[test]
    fn test_every_color_decodes() {
        for category in Catalog::shipped().categories() {
            for variant in category.variants {
                if let VariantShape::Sprite { color, .. } = variant.shape {
                    assert!(
                        Rgb::from_hex(color).is_ok(),
                        "{}/{} has bad color {}",
                        category.id,
                        variant.id,
                        color
                    );
                }
            }
        }
    }

    #[test]
    fn test_shapes_match_category_kind() {
        for category in Catalog::shipped().categories() {
            for variant in category.variants {
                let is_sprite = matches!(variant.shape, VariantShape::Sprite { .. });
                assert_eq!(
                    is_sprite,
                    category.kind == AssetKind::Image,
                    "{}/{}",
                    category.id,
                    variant.id
                );
            }
        }
    }

    #[test]
    fn test_variant_ids_unique_within_category() {
        for category in Catalog::shipped().categories() {
            let mut ids = HashSet::new();
            for variant in category.variants {
                assert!(ids.insert(variant.id), "{}/{}", category.id, variant.id);
            }
        }
    }

    #[test]
    fn test_plan_covers_catalog_in_order() {
        let catalog = Catalog::shipped();
        let plan = catalog.plan().unwrap();
        assert_eq!(plan.len(), DECLARED_IMAGE_COUNT + DECLARED_AUDIO_COUNT);

        assert_eq!(plan[0].path, "sprites/player/default/fist_frame_00.png");
        assert_eq!(plan.last().unwrap().path, "audio/music/shop_theme.ogg");

        let images = plan.iter().filter(|s| s.kind() == AssetKind::Image).count();
        assert_eq!(images, DECLARED_IMAGE_COUNT);
    }

    #[test]
    fn test_plan_frames_contiguous() {
        let plan = Catalog::shipped().plan().unwrap();
        let mut expected_next: std::collections::HashMap<(&str, &str), usize> =
            std::collections::HashMap::new();
        for spec in &plan {
            let next = expected_next.entry((spec.category, spec.variant)).or_insert(0);
            assert_eq!(spec.frame, *next, "{}", spec.path);
            *next += 1;
        }
    }

    #[test]
    fn test_plan_decodes_player_color() {
        let plan = Catalog::shipped().plan().unwrap();
        assert_eq!(
            plan[0].payload,
            FramePayload::Image {
                color: Rgb::new(255, 107, 53),
                width: 64,
                height: 64,
            }
        );
    }

    static BAD_COLOR: &[AssetCategory] = &[AssetCategory {
        id: "test",
        base_dir: "sprites/test",
        kind: AssetKind::Image,
        variants: &[
            single("ok", "", "ffffff", (8, 8)),
            single("broken", "", "12345g", (8, 8)),
        ],
    }];

    #[test]
    fn test_plan_rejects_bad_color() {
        let err = Catalog::from_static(BAD_COLOR).plan().unwrap_err();
        match err {
            FingerfistError::ValidationError(msg) => assert!(msg.contains("test/broken")),
            other => panic!("unexpected error: {other}"),
        }
    }

    static DUPLICATE_PATH: &[AssetCategory] = &[AssetCategory {
        id: "test",
        base_dir: "sprites/test",
        kind: AssetKind::Image,
        variants: &[
            sprite("a", "x", "frame", "ffffff", (8, 8), 2),
            sprite("b", "x", "frame", "000000", (8, 8), 3),
        ],
    }];

    #[test]
    fn test_plan_rejects_duplicate_path() {
        let err = Catalog::from_static(DUPLICATE_PATH).plan().unwrap_err();
        match err {
            FingerfistError::ValidationError(msg) => {
                assert!(msg.contains("sprites/test/x/frame_00.png"))
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    static EMPTY_VARIANT: &[AssetCategory] = &[AssetCategory {
        id: "test",
        base_dir: "audio/test",
        kind: AssetKind::Audio,
        variants: &[clips("nothing", &[])],
    }];

    #[test]
    fn test_plan_rejects_empty_variant() {
        assert!(Catalog::from_static(EMPTY_VARIANT).plan().is_err());
    }

    static ZERO_SIZE: &[AssetCategory] = &[AssetCategory {
        id: "test",
        base_dir: "sprites/test",
        kind: AssetKind::Image,
        variants: &[single("flat", "", "ffffff", (8, 0))],
    }];

    #[test]
    fn test_plan_rejects_zero_size() {
        assert!(Catalog::from_static(ZERO_SIZE).plan().is_err());
    }
}
