//! Placeholder generation command

use anyhow::{Context, Result};
use fingerfist_asset_gen::{format_summary, generate, Catalog, GeneratorConfig};

pub fn run(config: &GeneratorConfig) -> Result<()> {
    println!("{}", "=".repeat(60));
    println!("FINGERFIST - ASSET PLACEHOLDER GENERATOR");
    println!("{}", "=".repeat(60));

    let catalog = Catalog::shipped();
    tracing::debug!(root = %config.root().display(), "output root");
    println!(
        "\nGenerating {} placeholder assets into {}...\n",
        catalog.image_count() + catalog.audio_count(),
        config.assets_root().display()
    );

    let report = generate(config).with_context(|| {
        format!(
            "placeholder generation failed under {}",
            config.assets_root().display()
        )
    })?;

    println!("{}", format_summary(&report, &catalog));
    Ok(())
}
