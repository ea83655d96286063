pub mod codec;
pub mod constants;
pub mod dimensions;
pub mod neighbor;
pub mod tables;

pub use codec::{decode_indices, encode_hash, encode_hash_with_length};
pub use constants::{
    BASE32, BITS_PER_CHAR, LAT_MAX_PRECISION, LAT_RANGE, LON_MAX_PRECISION, LON_RANGE, char_index,
};
pub use dimensions::{cell_dimensions, length_for_tolerance};
pub use neighbor::adjacent;
pub use tables::{Direction, Parity};
