use tilegrid_common::{AtlasLayout, TileLayout};

/// A bit block inside a tile, in absolute canvas pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Calculate the top-left pixel of the tile holding `index`
/// Tiles fill the grid row by row: column = index mod grid, row = index div grid
pub fn tile_origin(layout: &AtlasLayout, index: u32) -> (u32, u32) {
    let (column, row) = layout.grid_position(index);
    (column * layout.tile.tile_size, row * layout.tile.tile_size)
}

/// Calculate the rectangles of every bit block in a tile whose origin is (x0, y0)
/// Order matches the bit order: left to right within a row, rows top to bottom
pub fn block_positions(tile: &TileLayout, x0: u32, y0: u32) -> Vec<BlockRect> {
    let mut blocks = Vec::with_capacity(tile.bits_per_tile() as usize);
    let start_x = x0 + tile.inset;
    let mut y = y0 + tile.inset;

    for &count in &tile.row_bits {
        let mut x = start_x;
        for _ in 0..count {
            blocks.push(BlockRect {
                x,
                y,
                width: tile.block_width,
                height: tile.block_height,
            });
            x += tile.block_pitch_x();
        }
        y += tile.block_pitch_y();
    }

    blocks
}
