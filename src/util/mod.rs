pub mod coord;

pub use coord::{Coordinate, normalize_lat, normalize_lon};
