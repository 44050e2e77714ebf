use clap::Parser;
use anyhow::{bail, Context, Result};
use tilegrid_common::{binary_label, AtlasLayout, OUTPUT_PATH};

mod decode;

/// Decode a rendered tile atlas and verify every tile against its grid position
#[derive(Parser, Debug)]
#[command(name = "tilegrid-check")]
#[command(about = "Verify that each atlas tile encodes its own index", long_about = None)]
struct Args {
    /// Atlas image to check
    #[arg(short, long, default_value = OUTPUT_PATH)]
    input: String,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let layout = AtlasLayout::default();

    println!("TileGrid Check");
    println!("==============");
    println!("Input: {}", args.input);
    println!("Layout: {}", layout);
    println!();

    let img = image::open(&args.input)
        .with_context(|| format!("Failed to open atlas {}", args.input))?
        .to_rgb8();

    let report = decode::decode_atlas(&img, &layout)?;
    let width = layout.tile.bits_per_tile();

    if !report.is_clean() {
        println!("Mismatched tiles:");
        for m in &report.mismatches {
            println!(
                "  - tile {} ({}) decodes to {} ({})",
                m.index,
                binary_label(m.index, width),
                m.decoded,
                binary_label(m.decoded, width)
            );
        }
        bail!("{} of {} tiles do not match their index", report.mismatches.len(), report.tiles_checked);
    }

    println!("✓ All {} tiles decode to their own index", report.tiles_checked);
    Ok(())
}
