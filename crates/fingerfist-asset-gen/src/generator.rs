//! One full generation run
//!
//! plan -> directories -> assets -> import exclusions -> summary document.
//! The first error aborts the run; nothing already written is cleaned up, and
//! running again overwrites everything with identical bytes.

use crate::catalog::{AssetKind, Catalog};
use crate::config::GeneratorConfig;
use crate::emit::emit_frame;
use crate::hints::emit_import_exclusions;
use crate::layout::{materialize_directories, required_directories};
use crate::manifest::{FileRole, RunReport};
use crate::report::write_summary_document;
use fingerfist_core::{FingerfistError, Result};

/// Generate the shipped catalog under `config.root`
pub fn generate(config: &GeneratorConfig) -> Result<RunReport> {
    generate_catalog(config, &Catalog::shipped())
}

/// Generate an arbitrary catalog under `config.root`
pub fn generate_catalog(config: &GeneratorConfig, catalog: &Catalog) -> Result<RunReport> {
    let assets_root = config.assets_root();
    let mut report = RunReport::default();

    let plan = catalog.plan()?;
    tracing::info!(
        images = catalog.image_count(),
        audio = catalog.audio_count(),
        "planned placeholder assets"
    );

    let dirs = required_directories(&plan);
    report.directories = materialize_directories(&assets_root, &dirs)?;
    tracing::info!(
        total = report.directories.len(),
        created = report.created_directories(),
        "asset directories ready"
    );

    let mut current = None;
    for spec in &plan {
        if current != Some(spec.category) {
            tracing::info!(category = spec.category, "generating");
            current = Some(spec.category);
        }
        report.files.extend(emit_frame(&assets_root, spec)?);
    }

    check_counts(&report, catalog)?;

    report
        .files
        .extend(emit_import_exclusions(&assets_root, catalog)?);
    tracing::info!(
        markers = report.count(FileRole::ImportExclusion),
        "wrote import exclusion markers"
    );

    report.files.push(write_summary_document(&assets_root)?);
    tracing::info!(
        files = report.files.len(),
        bytes = report.total_bytes(),
        "generation complete"
    );

    Ok(report)
}

fn check_counts(report: &RunReport, catalog: &Catalog) -> Result<()> {
    let checks = [
        (AssetKind::Image, FileRole::SpriteDescriptor),
        (AssetKind::Image, FileRole::PixelGrid),
        (AssetKind::Audio, FileRole::AudioMarker),
    ];
    for (kind, role) in checks {
        let expected = catalog.count(kind);
        let written = report.count(role);
        if written != expected {
            return Err(FingerfistError::validation(format!(
                "wrote {} {} files but the catalog declares {} {} assets",
                written, role, expected, kind
            )));
        }
    }
    Ok(())
}
