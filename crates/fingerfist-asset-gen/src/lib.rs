//! Fingerfist Asset Gen - placeholder asset pipeline
//!
//! Turns a static catalog of every sprite and sound the game needs into a
//! deterministic `assets/` tree of stand-in files: solid-color pixel grids with
//! PNG descriptors, OGG markers, Godot import exclusions and a summary document.

pub mod catalog;
pub mod color;
pub mod config;
pub mod emit;
pub mod generator;
pub mod hints;
pub mod layout;
pub mod manifest;
pub mod naming;
pub mod report;

pub use catalog::{
    AssetCategory, AssetKind, AssetVariant, Catalog, FramePayload, FrameSpec, VariantShape,
    DECLARED_AUDIO_COUNT, DECLARED_IMAGE_COUNT,
};
pub use color::{render_pixel_grid, Rgb};
pub use config::GeneratorConfig;
pub use generator::{generate, generate_catalog};
pub use hints::ImportHintTemplate;
pub use layout::DirectoryRecord;
pub use manifest::{FileRole, GeneratedFile, RunReport};
pub use report::{format_summary, summary_document};
