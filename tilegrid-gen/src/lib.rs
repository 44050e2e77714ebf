pub mod atlas_generator;
pub mod tile_placement;

pub use atlas_generator::{draw_tile, generate_and_save_atlas, render_atlas, save_atlas};
pub use tile_placement::{block_positions, tile_origin, BlockRect};
