//! # geohash-rs
//!
//! Base-32 geohash encoding, decoding and neighbor lookup.
//!
//! There are currently three main entry points.
//!
//! ### 1. Free functions
//!
//! ```
//! use geohash_rs::{Direction, decode, encode, neighbor, parse};
//!
//! # fn main() -> Result<(), geohash_rs::GeoHashError> {
//! // lat, lon, lat tolerance, lon tolerance (degrees)
//! let hash = encode(51.5, -0.12, 0.01, 0.01);
//! println!("{}", hash);
//!
//! let (lat_min, lat_delta, lon_min, lon_delta): (f64, f64, f64, f64) = decode(&hash).into();
//! assert!(lat_min <= 51.5 && 51.5 < lat_min + lat_delta);
//! assert!(lon_min <= -0.12 && -0.12 < lon_min + lon_delta);
//!
//! let east = neighbor("ezs42", Direction::East)?;
//! assert_eq!(east, parse("ezs43")?);
//! # Ok(())
//! # }
//! ```
//!
//! ### 2. `GeoHash` - Single Cell Operations
//!
//! ```
//! use geohash_rs::{Direction, GeoHash};
//!
//! # fn main() -> Result<(), geohash_rs::GeoHashError> {
//! let cell = GeoHash::with_length(&(10.40744, 57.64911), 11);
//! assert_eq!(cell.as_str(), "u4pruydqqvj");
//!
//! let north = cell.neighbor(Direction::North);
//! assert_eq!(north.neighbor(Direction::South), cell);
//!
//! let polygon = cell.to_polygon();
//! # Ok(())
//! # }
//! ```
//!
//! ### 3. `GeoHashGrid` - Collections of Cells
//!
//! ```
//! use geohash_rs::GeoHashGrid;
//!
//! let grid = GeoHashGrid::from_extent(-0.5, 51.2, 0.3, 51.7, 4);
//! assert_eq!(grid.len(), 12);
//!
//! let features = grid.to_geojson();
//! println!("{}", features);
//! ```
//!

pub mod api;
pub mod core;
pub mod error;
pub mod util;

pub use api::{
    BoundingBox, GeoHash, GeoHashGrid, GeoHashGridBuilder, Tolerance, decode, encode, neighbor,
    parse,
};
pub use crate::core::{
    BASE32, Direction, LAT_MAX_PRECISION, LON_MAX_PRECISION, cell_dimensions,
    length_for_tolerance,
};
pub use error::GeoHashError;
pub use util::Coordinate;

pub use geo_types;
pub use geojson;
