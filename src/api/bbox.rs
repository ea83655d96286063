use crate::util::coord::Coordinate;
use geo_types::{Point, Polygon, Rect, coord};
use serde::{Deserialize, Serialize};

/// The cell covered by a geohash.
///
/// Stored as the south-west corner plus the full height and width in degrees.
/// The box is half-open: it contains its south and west edges but not its
/// north and east edges.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Southern edge in degrees latitude
    pub lat_min: f64,
    /// Height in degrees latitude
    pub lat_delta: f64,
    /// Western edge in degrees longitude
    pub lon_min: f64,
    /// Width in degrees longitude
    pub lon_delta: f64,
}

impl BoundingBox {
    pub(crate) fn new(lat_min: f64, lat_delta: f64, lon_min: f64, lon_delta: f64) -> Self {
        Self {
            lat_min,
            lat_delta,
            lon_min,
            lon_delta,
        }
    }

    pub fn lat_max(&self) -> f64 {
        self.lat_min + self.lat_delta
    }

    pub fn lon_max(&self) -> f64 {
        self.lon_min + self.lon_delta
    }

    /// Returns the center of the box as a `(lon, lat)` point.
    pub fn center(&self) -> Point<f64> {
        Point::new(
            self.lon_min + self.lon_delta * 0.5,
            self.lat_min + self.lat_delta * 0.5,
        )
    }

    /// Returns true if the coordinate lies inside the box.
    ///
    /// The coordinate is compared as given, without wrapping.
    pub fn contains(&self, coord: &impl Coordinate) -> bool {
        let (lon, lat) = (coord.x(), coord.y());
        lat >= self.lat_min && lat < self.lat_max() && lon >= self.lon_min && lon < self.lon_max()
    }

    pub fn to_rect(&self) -> Rect<f64> {
        Rect::new(
            coord! { x: self.lon_min, y: self.lat_min },
            coord! { x: self.lon_max(), y: self.lat_max() },
        )
    }

    /// Converts the box to a closed rectangular polygon.
    pub fn to_polygon(&self) -> Polygon<f64> {
        self.to_rect().to_polygon()
    }
}

impl From<BoundingBox> for (f64, f64, f64, f64) {
    fn from(bbox: BoundingBox) -> Self {
        (bbox.lat_min, bbox.lat_delta, bbox.lon_min, bbox.lon_delta)
    }
}

impl From<BoundingBox> for Rect<f64> {
    fn from(bbox: BoundingBox) -> Self {
        bbox.to_rect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> BoundingBox {
        BoundingBox::new(45.0, 45.0, 0.0, 45.0)
    }

    #[test]
    fn test_edges_and_center() {
        let bbox = sample();
        assert_eq!(bbox.lat_max(), 90.0);
        assert_eq!(bbox.lon_max(), 45.0);
        assert_eq!(bbox.center(), Point::new(22.5, 67.5));
    }

    #[test]
    fn test_contains_is_half_open() {
        let bbox = sample();
        assert!(bbox.contains(&(0.0, 45.0)));
        assert!(bbox.contains(&Point::new(10.0, 60.0)));
        assert!(!bbox.contains(&(45.0, 60.0)));
        assert!(!bbox.contains(&(10.0, 90.0)));
        assert!(!bbox.contains(&(-0.1, 60.0)));
    }

    #[test]
    fn test_to_polygon() {
        let polygon = sample().to_polygon();
        assert_eq!(polygon.exterior().coords().count(), 5);
        assert_eq!(polygon.exterior().0[0], polygon.exterior().0[4]);
    }

    #[test]
    fn test_into_tuple() {
        let tuple: (f64, f64, f64, f64) = sample().into();
        assert_eq!(tuple, (45.0, 45.0, 0.0, 45.0));
    }
}
