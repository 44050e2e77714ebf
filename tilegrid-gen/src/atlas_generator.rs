//! Binary tile atlas generator
//!
//! Each tile is a bordered square containing one small block per bit of its index.
//! Structure of a default 16x16 tile:
//! - Border: 1 pixel black outline, white fill
//! - Blocks: 2x3 pixels with 1 pixel spacing, starting at (2, 2)
//! - Rows: 4, 4 and 2 blocks, carrying the 10-bit index MSB first
//!
//! A set bit paints its block black, a clear bit paints it grey.

use anyhow::{Context, Result};
use image::{ImageBuffer, Rgb, RgbImage};
use imageproc::drawing::{draw_filled_rect_mut, draw_hollow_rect_mut};
use imageproc::rect::Rect;
use std::path::Path;
use tilegrid_common::{binary_label, tile_bits, AtlasLayout};

use crate::tile_placement::{block_positions, tile_origin};

/// Draw the tile for `index` onto the canvas
///
/// The tile square is repainted in full, so drawing over an existing tile is allowed.
pub fn draw_tile(canvas: &mut RgbImage, layout: &AtlasLayout, index: u32) {
    let tile = &layout.tile;
    let palette = &layout.palette;
    let (x0, y0) = tile_origin(layout, index);

    let square = Rect::at(x0 as i32, y0 as i32).of_size(tile.tile_size, tile.tile_size);
    draw_filled_rect_mut(canvas, square, Rgb(palette.background));
    draw_hollow_rect_mut(canvas, square, Rgb(palette.outline));

    let bits = tile_bits(index, tile.bits_per_tile());
    for (block, bit) in block_positions(tile, x0, y0).iter().zip(bits) {
        let color = if bit { palette.on } else { palette.off };
        let rect = Rect::at(block.x as i32, block.y as i32).of_size(block.width, block.height);
        draw_filled_rect_mut(canvas, rect, Rgb(color));
    }
}

/// Render every tile of the atlas onto a fresh canvas
pub fn render_atlas(layout: &AtlasLayout) -> RgbImage {
    let size = layout.image_size();
    let mut canvas: RgbImage = ImageBuffer::from_pixel(size, size, Rgb(layout.palette.background));

    for index in 0..layout.tile_count() {
        draw_tile(&mut canvas, layout, index);
        if index % layout.grid == 0 {
            log::debug!(
                "row {}: first tile {} = {}",
                index / layout.grid,
                index,
                binary_label(index, layout.tile.bits_per_tile())
            );
        }
    }

    log::info!("rendered {} tiles onto {}x{} canvas", layout.tile_count(), size, size);
    canvas
}

/// Save a rendered atlas; the format follows the file extension
pub fn save_atlas(canvas: &RgbImage, output_path: &Path) -> Result<()> {
    canvas
        .save(output_path)
        .with_context(|| format!("Failed to write atlas to {}", output_path.display()))?;
    Ok(())
}

/// Render the atlas and save it as a PNG file
pub fn generate_and_save_atlas(layout: &AtlasLayout, output_path: &Path) -> Result<()> {
    let canvas = render_atlas(layout);
    save_atlas(&canvas, output_path)?;
    println!("Generated {} tiles -> {}", layout.tile_count(), output_path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const BLACK: Rgb<u8> = Rgb([0, 0, 0]);
    const GREY: Rgb<u8> = Rgb([128, 128, 128]);
    const WHITE: Rgb<u8> = Rgb([255, 255, 255]);

    #[test]
    fn test_canvas_size() {
        let img = render_atlas(&AtlasLayout::default());
        assert_eq!(img.width(), 512);
        assert_eq!(img.height(), 512);
    }

    #[test]
    fn test_tile_border_and_fill() {
        let img = render_atlas(&AtlasLayout::default());

        // Tile 33 sits at (16, 16)
        for i in 0..16 {
            assert_eq!(*img.get_pixel(16 + i, 16), BLACK);
            assert_eq!(*img.get_pixel(16 + i, 31), BLACK);
            assert_eq!(*img.get_pixel(16, 16 + i), BLACK);
            assert_eq!(*img.get_pixel(31, 16 + i), BLACK);
        }
        assert_eq!(*img.get_pixel(17, 17), WHITE);
        assert_eq!(*img.get_pixel(30, 30), WHITE);
        // Gap between blocks
        assert_eq!(*img.get_pixel(20, 18), WHITE);
    }

    #[test]
    fn test_first_block_of_tile_0_is_off() {
        let img = render_atlas(&AtlasLayout::default());
        assert_eq!(*img.get_pixel(2, 2), GREY);
    }

    #[test]
    fn test_first_block_of_tile_512_is_on() {
        let layout = AtlasLayout::default();
        let img = render_atlas(&layout);
        let (x0, y0) = tile_origin(&layout, 512);
        assert_eq!((x0, y0), (0, 256));
        assert_eq!(*img.get_pixel(x0 + 2, y0 + 2), BLACK);
        // Remaining bits of 1000000000 are clear
        assert_eq!(*img.get_pixel(x0 + 5, y0 + 2), GREY);
    }

    #[test]
    fn test_blocks_are_filled_solid() {
        let layout = AtlasLayout::default();
        let img = render_atlas(&layout);
        let (x0, y0) = tile_origin(&layout, 1023);

        for block in block_positions(&layout.tile, x0, y0) {
            for y in block.y..block.y + block.height {
                for x in block.x..block.x + block.width {
                    assert_eq!(*img.get_pixel(x, y), BLACK);
                }
            }
        }
    }

    #[test]
    fn test_every_tile_matches_its_bits() {
        let layout = AtlasLayout::default();
        let img = render_atlas(&layout);

        for index in 0..layout.tile_count() {
            let (x0, y0) = tile_origin(&layout, index);
            let bits = tile_bits(index, 10);
            for (block, bit) in block_positions(&layout.tile, x0, y0).iter().zip(bits) {
                let expected = if bit { BLACK } else { GREY };
                assert_eq!(*img.get_pixel(block.x, block.y), expected, "tile {}", index);
            }
        }
    }

    #[test]
    fn test_draw_tile_repaints_square() {
        let layout = AtlasLayout::default();
        let mut img: RgbImage = ImageBuffer::from_pixel(512, 512, Rgb([10, 200, 10]));
        draw_tile(&mut img, &layout, 0);

        assert_eq!(*img.get_pixel(0, 0), BLACK);
        assert_eq!(*img.get_pixel(1, 1), WHITE);
        assert_eq!(*img.get_pixel(2, 2), GREY);
        // Neighbouring tile untouched
        assert_eq!(*img.get_pixel(16, 0), Rgb([10, 200, 10]));
    }

    #[test]
    fn test_save_and_reload() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("atlas.png");
        generate_and_save_atlas(&AtlasLayout::default(), &path).unwrap();

        let entries: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);

        let img = image::open(&path).unwrap().to_rgb8();
        assert_eq!(img.dimensions(), (512, 512));
        assert_eq!(*img.get_pixel(2, 2), GREY);
        assert_eq!(*img.get_pixel(2, 258), BLACK);
    }

    #[test]
    fn test_save_to_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("atlas.png");
        let canvas = render_atlas(&AtlasLayout::default());
        let err = save_atlas(&canvas, &path).unwrap_err();
        assert!(err.to_string().contains("Failed to write atlas"));
    }
}
