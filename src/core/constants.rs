/// The geohash base-32 alphabet, indexed by 5-bit value.
pub const BASE32: &[u8; 32] = b"0123456789bcdefghjkmnpqrstuvwxyz";

/// Number of bits encoded by a single geohash character.
pub const BITS_PER_CHAR: usize = 5;

/// Minimum latitude cell size used when encoding.
///
/// Roughly 1.1 mm at the equator; tolerances below this are raised to it.
pub const LAT_MAX_PRECISION: f64 = 0.00000001;

/// Minimum longitude cell size used when encoding.
pub const LON_MAX_PRECISION: f64 = 0.00000001;

/// Latitude extent [min, max)
pub const LAT_RANGE: [f64; 2] = [-90.0, 90.0];

/// Longitude extent [min, max)
pub const LON_RANGE: [f64; 2] = [-180.0, 180.0];

const INVALID: u8 = 0xff;

const fn build_decode_table() -> [u8; 256] {
    let mut table = [INVALID; 256];
    let mut i = 0;
    while i < BASE32.len() {
        table[BASE32[i] as usize] = i as u8;
        i += 1;
    }
    table
}

const DECODE_TABLE: [u8; 256] = build_decode_table();

/// Returns the 5-bit value of a geohash character, or `None` if the byte is
/// not in the alphabet.
pub const fn char_index(byte: u8) -> Option<u8> {
    match DECODE_TABLE[byte as usize] {
        INVALID => None,
        index => Some(index),
    }
}
