//! Fingerfist placeholder generator - writes the full `assets/` tree into the
//! working directory

mod commands;

use anyhow::Result;
use clap::Parser;

#[derive(Parser)]
#[command(name = "fingerfist-placeholders")]
#[command(about = "Generate every Fingerfist placeholder sprite and sound", long_about = None)]
#[command(version)]
struct Cli {}

fn main() -> Result<()> {
    let _cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    commands::generate::run(&fingerfist_asset_gen::GeneratorConfig::default())
}
