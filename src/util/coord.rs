use crate::core::constants::{LAT_RANGE, LON_RANGE};
use geo_types::{Coord, Point};

/// Trait for types that can provide x/y coordinates.
///
/// `x` is longitude and `y` is latitude, matching `geo_types`. Implemented for
/// `(f64, f64)` tuples, `geo_types::Point<f64>` and `geo_types::Coord<f64>`.
pub trait Coordinate {
    /// Returns the x-coordinate (longitude).
    fn x(&self) -> f64;
    /// Returns the y-coordinate (latitude).
    fn y(&self) -> f64;
}

impl Coordinate for (f64, f64) {
    fn x(&self) -> f64 {
        self.0
    }
    fn y(&self) -> f64 {
        self.1
    }
}

impl Coordinate for Point<f64> {
    fn x(&self) -> f64 {
        Point::x(*self)
    }
    fn y(&self) -> f64 {
        Point::y(*self)
    }
}

impl Coordinate for Coord<f64> {
    fn x(&self) -> f64 {
        self.x
    }
    fn y(&self) -> f64 {
        self.y
    }
}

fn wrap(value: f64, range: [f64; 2]) -> f64 {
    if value >= range[0] && value < range[1] {
        return value;
    }
    let width = range[1] - range[0];
    ((value - range[1]) % width + width) % width + range[0]
}

/// Wraps a latitude into [-90, 90).
///
/// The wrap is modular rather than a reflection over the pole: 100 maps
/// to -80 and -100 to 80.
pub fn normalize_lat(lat: f64) -> f64 {
    wrap(lat, LAT_RANGE)
}

/// Wraps a longitude into [-180, 180).
pub fn normalize_lon(lon: f64) -> f64 {
    wrap(lon, LON_RANGE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_trait_tuple() {
        let tuple = (10.0, 20.0);
        assert_eq!(tuple.x(), 10.0);
        assert_eq!(tuple.y(), 20.0);
    }

    #[test]
    fn test_coordinate_trait_point() {
        let point = Point::new(10.0, 20.0);
        assert_eq!(point.x(), 10.0);
        assert_eq!(point.y(), 20.0);
    }

    #[test]
    fn test_normalize_lat() {
        assert_eq!(normalize_lat(45.0), 45.0);
        assert_eq!(normalize_lat(-90.0), -90.0);
        assert_eq!(normalize_lat(90.0), -90.0);
        assert_eq!(normalize_lat(-100.0), 80.0);
        assert_eq!(normalize_lat(-460.0), 80.0);
        assert_eq!(normalize_lat(440.0), 80.0);
    }

    #[test]
    fn test_normalize_lon() {
        assert_eq!(normalize_lon(-190.0), 170.0);
        assert_eq!(normalize_lon(180.0), -180.0);
        assert_eq!(normalize_lon(540.0), -180.0);
        assert_eq!(normalize_lon(-181.0), 179.0);
        assert_eq!(normalize_lon(12.5), 12.5);
    }

    #[test]
    fn test_normalize_nan() {
        assert!(normalize_lat(f64::NAN).is_nan());
        assert!(normalize_lon(f64::INFINITY).is_nan());
    }
}
