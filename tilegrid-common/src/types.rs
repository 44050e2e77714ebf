use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed output path of the rendered atlas, relative to the working directory
pub const OUTPUT_PATH: &str = "binary_tile_grid.png";

/// An RGB color triple
pub type Color = [u8; 3];

/// Colors used when painting the atlas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    /// Canvas and tile fill
    pub background: Color,
    /// 1-pixel tile border
    pub outline: Color,
    /// Block color for a set bit
    pub on: Color,
    /// Block color for a clear bit
    pub off: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: [255, 255, 255],
            outline: [0, 0, 0],
            on: [0, 0, 0],
            off: [128, 128, 128],
        }
    }
}

/// Geometry of a single tile and the bit blocks drawn inside it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileLayout {
    /// Side of the square tile in pixels (border included)
    pub tile_size: u32,
    pub block_width: u32,
    pub block_height: u32,
    /// Gap between neighbouring blocks, both horizontally and vertically
    pub spacing: u32,
    /// Offset of the first block from the tile origin on both axes
    pub inset: u32,
    /// Number of blocks in each row, top to bottom
    pub row_bits: Vec<u32>,
}

impl TileLayout {
    /// Total number of bits encoded by one tile
    pub fn bits_per_tile(&self) -> u32 {
        self.row_bits.iter().sum()
    }

    /// Horizontal distance between the left edges of adjacent blocks
    pub fn block_pitch_x(&self) -> u32 {
        self.block_width + self.spacing
    }

    /// Vertical distance between the top edges of adjacent rows
    pub fn block_pitch_y(&self) -> u32 {
        self.block_height + self.spacing
    }
}

impl Default for TileLayout {
    fn default() -> Self {
        Self {
            tile_size: 16,
            block_width: 2,
            block_height: 3,
            spacing: 1,
            inset: 2,
            row_bits: vec![4, 4, 2],
        }
    }
}

/// Full atlas configuration: a square grid of tiles plus the colors to paint them with
///
/// The default is the 32x32 grid of 16px tiles, one tile per 10-bit index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AtlasLayout {
    /// Tiles per row and per column
    pub grid: u32,
    pub tile: TileLayout,
    pub palette: Palette,
}

impl AtlasLayout {
    /// Side of the square canvas in pixels
    pub fn image_size(&self) -> u32 {
        self.grid * self.tile.tile_size
    }

    /// Number of tiles (and therefore indices) in the atlas
    pub fn tile_count(&self) -> u32 {
        self.grid * self.grid
    }

    /// Grid cell (column, row) holding the given index
    pub fn grid_position(&self, index: u32) -> (u32, u32) {
        (index % self.grid, index / self.grid)
    }
}

impl Default for AtlasLayout {
    fn default() -> Self {
        Self {
            grid: 32,
            tile: TileLayout::default(),
            palette: Palette::default(),
        }
    }
}

impl fmt::Display for AtlasLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows: Vec<String> = self.tile.row_bits.iter().map(|b| b.to_string()).collect();
        write!(
            f,
            "{}x{} tiles of {}px ({}x{}px), rows [{}]",
            self.grid,
            self.grid,
            self.tile.tile_size,
            self.image_size(),
            self.image_size(),
            rows.join(", ")
        )
    }
}
