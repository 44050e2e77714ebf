mod bits;
mod types;

pub use bits::*;
pub use types::*;
