// Debug tool to print tile bit layouts as text
use anyhow::Result;
use tilegrid_common::{binary_label, tile_bits, AtlasLayout};
use tilegrid_gen::{block_positions, tile_origin};

const SAMPLE_INDICES: [u32; 6] = [0, 1, 5, 341, 512, 1023];

fn main() -> Result<()> {
    env_logger::init();
    let layout = AtlasLayout::default();
    let width = layout.tile.bits_per_tile();

    for index in SAMPLE_INDICES {
        let (column, row) = layout.grid_position(index);
        let (x0, y0) = tile_origin(&layout, index);
        println!("Tile {} at grid ({}, {}), origin ({}, {})", index, column, row, x0, y0);
        println!("Bits: {}", binary_label(index, width));

        // Paint the tile into a character grid, one char per pixel
        let size = layout.tile.tile_size as usize;
        let mut cells = vec![vec![' '; size]; size];
        for i in 0..size {
            cells[0][i] = '#';
            cells[size - 1][i] = '#';
            cells[i][0] = '#';
            cells[i][size - 1] = '#';
        }

        let bits = tile_bits(index, width);
        for (block, bit) in block_positions(&layout.tile, 0, 0).iter().zip(bits) {
            let ch = if bit { '█' } else { '░' };
            for y in block.y..block.y + block.height {
                for x in block.x..block.x + block.width {
                    cells[y as usize][x as usize] = ch;
                }
            }
        }

        for line in cells {
            println!("  {}", line.into_iter().collect::<String>());
        }
        println!();
    }

    Ok(())
}
