/// Format `index` as a zero-padded binary string of `width` digits, most significant bit first
///
/// Bits above `width` are not shown.
pub fn binary_label(index: u32, width: u32) -> String {
    tile_bits(index, width)
        .iter()
        .map(|&bit| if bit { '1' } else { '0' })
        .collect()
}

/// Extract the low `width` bits of `index`, most significant bit first
///
/// This is the order in which blocks are painted: left to right, top to bottom.
pub fn tile_bits(index: u32, width: u32) -> Vec<bool> {
    (0..width)
        .rev()
        .map(|shift| (index >> shift) & 1 == 1)
        .collect()
}

/// Rebuild an index from bits read back in painting order (MSB first)
pub fn bits_to_index(bits: &[bool]) -> u32 {
    bits.iter().fold(0, |acc, &bit| (acc << 1) | bit as u32)
}
