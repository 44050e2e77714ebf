use clap::Parser;
use anyhow::Result;
use std::path::Path;
use tilegrid_common::{AtlasLayout, OUTPUT_PATH};
use tilegrid_gen::generate_and_save_atlas;

/// Render a 32x32 atlas of binary-encoded tile indices for visual inspection
#[derive(Parser, Debug)]
#[command(name = "tilegrid-gen")]
#[command(version, about = "Render a debug atlas encoding tile indices 0-1023 as bit blocks", long_about = None)]
struct Args {}

fn main() -> Result<()> {
    env_logger::init();
    let _args = Args::parse();

    let layout = AtlasLayout::default();

    println!("Generating binary tile atlas:");
    println!("  Layout: {}", layout);
    println!("  Output: {}", OUTPUT_PATH);

    generate_and_save_atlas(&layout, Path::new(OUTPUT_PATH))?;

    println!("✓ Atlas generated successfully: {}", OUTPUT_PATH);
    Ok(())
}
