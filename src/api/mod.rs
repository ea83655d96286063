pub mod bbox;
pub mod geohash;
pub mod grid;
pub mod tolerance;

pub use bbox::BoundingBox;
pub use geohash::{GeoHash, decode, encode, neighbor, parse};
pub use grid::{GeoHashGrid, GeoHashGridBuilder, MAX_GRID_CELLS};
pub use tolerance::Tolerance;
