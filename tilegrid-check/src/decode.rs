// Atlas decoding module
// Reads bit blocks back out of a rendered atlas and rebuilds each tile's index

use anyhow::{bail, Context, Result};
use image::{Rgb, RgbImage};
use tilegrid_common::{bits_to_index, AtlasLayout, Palette};

/// Tile whose blocks decode to a value other than its own index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mismatch {
    pub index: u32,
    pub decoded: u32,
}

pub struct AtlasReport {
    pub tiles_checked: u32,
    pub mismatches: Vec<Mismatch>,
}

impl AtlasReport {
    pub fn is_clean(&self) -> bool {
        self.mismatches.is_empty()
    }
}

/// Map a block pixel to its bit: on color is 1, off color is 0, anything else is unknown
pub fn classify_block(pixel: &Rgb<u8>, palette: &Palette) -> Option<bool> {
    if pixel.0 == palette.on {
        Some(true)
    } else if pixel.0 == palette.off {
        Some(false)
    } else {
        None
    }
}

/// Decode the tile at grid cell (column, row)
/// Blocks are sampled at their top-left pixel, left to right and top to bottom
pub fn decode_tile(image: &RgbImage, layout: &AtlasLayout, column: u32, row: u32) -> Result<u32> {
    let tile = &layout.tile;
    let x0 = column * tile.tile_size;
    let y0 = row * tile.tile_size;

    let mut bits = Vec::with_capacity(tile.bits_per_tile() as usize);
    let mut y = y0 + tile.inset;
    for (block_row, &count) in tile.row_bits.iter().enumerate() {
        let mut x = x0 + tile.inset;
        for block_col in 0..count {
            let pixel = image.get_pixel_checked(x, y).with_context(|| {
                format!(
                    "Block ({}, {}) of tile ({}, {}) lies outside the {}x{} image",
                    block_row, block_col, column, row, image.width(), image.height()
                )
            })?;
            let bit = classify_block(pixel, &layout.palette).with_context(|| {
                format!(
                    "Unrecognized color {:?} at ({}, {}) in block ({}, {}) of tile ({}, {})",
                    pixel.0, x, y, block_row, block_col, column, row
                )
            })?;
            bits.push(bit);
            x += tile.block_pitch_x();
        }
        y += tile.block_pitch_y();
    }

    Ok(bits_to_index(&bits))
}

/// Decode every tile and compare it against its grid position
pub fn decode_atlas(image: &RgbImage, layout: &AtlasLayout) -> Result<AtlasReport> {
    let expected = layout.image_size();
    if image.dimensions() != (expected, expected) {
        bail!(
            "Atlas is {}x{}, expected {}x{}",
            image.width(),
            image.height(),
            expected,
            expected
        );
    }

    let mut mismatches = Vec::new();
    for index in 0..layout.tile_count() {
        let (column, row) = layout.grid_position(index);
        let decoded = decode_tile(image, layout, column, row)?;
        if decoded != index {
            log::warn!("tile {} at ({}, {}) decodes to {}", index, column, row, decoded);
            mismatches.push(Mismatch { index, decoded });
        }
    }

    Ok(AtlasReport {
        tiles_checked: layout.tile_count(),
        mismatches,
    })
}
