use crate::api::geohash::GeoHash;
use crate::core::constants::{LAT_RANGE, LON_RANGE};
use crate::core::dimensions::cell_dimensions;
use crate::core::tables::Direction;
use geo::{BoundingRect, Intersects};
use geo_types::{Polygon, Rect};
use geojson::{Feature, FeatureCollection, JsonObject, JsonValue};
use tracing::{debug, warn};

/// Largest number of cells a single grid will generate. Extents that would
/// need more produce an empty grid.
pub const MAX_GRID_CELLS: usize = 1 << 22;

/// All geohash cells of one length covering an extent.
///
/// # Example
///
/// ```
/// use geohash_rs::GeoHashGrid;
///
/// let grid = GeoHashGrid::builder()
///     .length(3)
///     .extent(-0.5, 51.2, 0.3, 51.7)
///     .build();
///
/// let hashes: Vec<&str> = grid.iter().map(|cell| cell.as_str()).collect();
/// assert_eq!(hashes, ["gcp", "u10"]);
/// ```
#[derive(Debug, Clone)]
pub struct GeoHashGrid {
    cells: Vec<GeoHash>,
    length: usize,
}

impl GeoHashGrid {
    pub fn builder() -> GeoHashGridBuilder {
        GeoHashGridBuilder::new()
    }

    /// Covers the lon/lat extent, walking rows south to north and cells west
    /// to east.
    pub fn from_extent(min_lon: f64, min_lat: f64, max_lon: f64, max_lat: f64, length: usize) -> Self {
        let cells = generate_cells_for_extent(min_lon, min_lat, max_lon, max_lat, length);
        Self { cells, length }
    }

    pub fn from_rect(rect: &Rect<f64>, length: usize) -> Self {
        Self::from_extent(
            rect.min().x,
            rect.min().y,
            rect.max().x,
            rect.max().y,
            length,
        )
    }

    /// Keeps only the cells whose rectangle intersects `polygon`.
    pub fn from_polygon(polygon: &Polygon<f64>, length: usize) -> Self {
        let Some(rect) = polygon.bounding_rect() else {
            return Self {
                cells: Vec::new(),
                length,
            };
        };

        let mut grid = Self::from_rect(&rect, length);
        grid.cells
            .retain(|cell| cell.to_polygon().intersects(polygon));
        grid
    }

    /// Hash length of every cell in the grid.
    pub fn length(&self) -> usize {
        self.length
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cells(&self) -> &[GeoHash] {
        &self.cells
    }

    pub fn iter(&self) -> impl Iterator<Item = &GeoHash> {
        self.cells.iter()
    }

    pub fn contains(&self, hash: &GeoHash) -> bool {
        self.cells.contains(hash)
    }

    pub fn to_polygons(&self) -> Vec<Polygon<f64>> {
        self.cells.iter().map(|cell| cell.to_polygon()).collect()
    }

    pub fn filter<F>(&self, predicate: F) -> Vec<&GeoHash>
    where
        F: Fn(&GeoHash) -> bool,
    {
        self.cells.iter().filter(|cell| predicate(cell)).collect()
    }

    /// Exports the grid as a GeoJSON `FeatureCollection`, one polygon feature
    /// per cell with a `geohash` property.
    pub fn to_geojson(&self) -> FeatureCollection {
        let features = self
            .cells
            .iter()
            .map(|cell| {
                let mut properties = JsonObject::new();
                properties.insert(String::from("geohash"), JsonValue::from(cell.as_str()));
                Feature {
                    geometry: Some(geojson::Geometry::from(&cell.to_polygon())),
                    properties: Some(properties),
                    ..Default::default()
                }
            })
            .collect();

        FeatureCollection {
            bbox: None,
            features,
            foreign_members: None,
        }
    }
}

impl<'a> IntoIterator for &'a GeoHashGrid {
    type Item = &'a GeoHash;
    type IntoIter = std::slice::Iter<'a, GeoHash>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

/// Builder for [`GeoHashGrid`].
///
/// A grid built without a length or an extent is empty.
#[derive(Debug, Default)]
pub struct GeoHashGridBuilder {
    length: Option<usize>,
    min_lon: Option<f64>,
    min_lat: Option<f64>,
    max_lon: Option<f64>,
    max_lat: Option<f64>,
}

impl GeoHashGridBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn length(mut self, length: usize) -> Self {
        self.length = Some(length);
        self
    }

    pub fn extent(mut self, min_lon: f64, min_lat: f64, max_lon: f64, max_lat: f64) -> Self {
        self.min_lon = Some(min_lon);
        self.min_lat = Some(min_lat);
        self.max_lon = Some(max_lon);
        self.max_lat = Some(max_lat);
        self
    }

    pub fn rect(mut self, rect: &Rect<f64>) -> Self {
        self.min_lon = Some(rect.min().x);
        self.min_lat = Some(rect.min().y);
        self.max_lon = Some(rect.max().x);
        self.max_lat = Some(rect.max().y);
        self
    }

    pub fn build(self) -> GeoHashGrid {
        let length = self.length.unwrap_or(0);
        match (self.min_lon, self.min_lat, self.max_lon, self.max_lat) {
            (Some(min_lon), Some(min_lat), Some(max_lon), Some(max_lat)) => {
                GeoHashGrid::from_extent(min_lon, min_lat, max_lon, max_lat, length)
            }
            _ => GeoHashGrid {
                cells: Vec::new(),
                length,
            },
        }
    }
}

fn generate_cells_for_extent(
    min_lon: f64,
    min_lat: f64,
    max_lon: f64,
    max_lat: f64,
    length: usize,
) -> Vec<GeoHash> {
    if [min_lon, min_lat, max_lon, max_lat].iter().any(|v| v.is_nan()) {
        return Vec::new();
    }

    let min_lon = min_lon.max(LON_RANGE[0]);
    let max_lon = max_lon.min(LON_RANGE[1]);
    let min_lat = min_lat.max(LAT_RANGE[0]);
    let max_lat = max_lat.min(LAT_RANGE[1]);

    if length == 0 || !(min_lon <= max_lon && min_lat <= max_lat) {
        return Vec::new();
    }

    let start = GeoHash::with_length(&(min_lon, min_lat), length);
    let origin = start.decode();
    let (height, width) = cell_dimensions(length);

    // Never step past the pole or the antimeridian, where the neighbor tables wrap.
    let rows_left = ((LAT_RANGE[1] - origin.lat_min) / height).round() as usize;
    let cols_left = ((LON_RANGE[1] - origin.lon_min) / width).round() as usize;
    let rows = (((max_lat - origin.lat_min) / height).ceil().max(1.0) as usize).min(rows_left);
    let cols = (((max_lon - origin.lon_min) / width).ceil().max(1.0) as usize).min(cols_left);

    let total = match rows.checked_mul(cols) {
        Some(total) if total <= MAX_GRID_CELLS => total,
        _ => {
            warn!(rows, cols, length, "grid exceeds {} cells, returning empty", MAX_GRID_CELLS);
            return Vec::new();
        }
    };

    let mut cells = Vec::with_capacity(total);
    let mut row_start = start;
    for _ in 0..rows {
        let mut cell = row_start.clone();
        for _ in 0..cols {
            let next = cell.neighbor(Direction::East);
            cells.push(cell);
            cell = next;
        }
        row_start = row_start.neighbor(Direction::North);
    }

    debug!(rows, cols, length, "generated geohash grid");
    cells
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GeoHashError;
    use geo_types::{coord, polygon};

    #[test]
    fn test_grid_from_extent() {
        let grid = GeoHashGrid::from_extent(-0.5, 51.2, 0.3, 51.7, 4);
        let hashes: Vec<&str> = grid.iter().map(GeoHash::as_str).collect();
        assert_eq!(
            hashes,
            [
                "gcpe", "gcpg", "u105", "gcps", "gcpu", "u10h", "gcpt", "gcpv", "u10j", "gcpw",
                "gcpy", "u10n"
            ]
        );
        assert_eq!(grid.length(), 4);
        for cell in &grid {
            assert_eq!(cell.len(), 4);
        }
    }

    #[test]
    fn test_grid_cells_cover_extent() {
        let grid = GeoHashGrid::from_extent(-0.5, 51.2, 0.3, 51.7, 4);
        for corner in [(-0.5, 51.2), (0.3, 51.2), (-0.5, 51.7), (0.3, 51.7), (0.0, 51.5)] {
            assert!(grid.iter().any(|cell| cell.contains(&corner)));
        }
    }

    #[test]
    fn test_grid_from_rect() -> Result<(), GeoHashError> {
        let rect = Rect::new(coord! { x: -0.5, y: 51.2 }, coord! { x: 0.3, y: 51.7 });
        let grid = GeoHashGrid::from_rect(&rect, 3);
        assert_eq!(grid.len(), 2);
        assert!(grid.contains(&GeoHash::parse("gcp")?));
        assert!(grid.contains(&GeoHash::parse("u10")?));
        Ok(())
    }

    #[test]
    fn test_single_point_extent() {
        let grid = GeoHashGrid::from_extent(179.0, 10.0, 179.0, 10.0, 3);
        assert_eq!(grid.len(), 1);
        assert_eq!(grid.cells()[0].as_str(), "xcz");
    }

    #[test]
    fn test_does_not_wrap_past_edges() {
        let grid = GeoHashGrid::from_extent(170.0, 80.0, 200.0, 95.0, 1);
        let hashes: Vec<&str> = grid.iter().map(GeoHash::as_str).collect();
        assert_eq!(hashes, ["z"]);

        let world = GeoHashGrid::from_extent(-180.0, -90.0, 180.0, 90.0, 1);
        assert_eq!(world.len(), 32);
    }

    #[test]
    fn test_empty_grids() {
        assert!(GeoHashGrid::from_extent(1.0, 1.0, 0.0, 0.0, 3).is_empty());
        assert!(GeoHashGrid::from_extent(0.0, 0.0, 1.0, 1.0, 0).is_empty());
        assert!(GeoHashGrid::from_extent(f64::NAN, 0.0, 1.0, 1.0, 3).is_empty());
        assert!(GeoHashGrid::from_extent(0.0, 0.0, 1.0, f64::NAN, 3).is_empty());
        assert!(GeoHashGrid::builder().length(3).build().is_empty());
    }

    #[test]
    fn test_oversized_grid_is_empty() {
        let world = GeoHashGrid::from_extent(-180.0, -90.0, 180.0, 90.0, 12);
        assert!(world.is_empty());
        assert_eq!(world.length(), 12);

        let deep = GeoHashGrid::from_extent(-180.0, -90.0, 180.0, 90.0, 40);
        assert!(deep.is_empty());

        let world = GeoHashGrid::from_extent(-180.0, -90.0, 180.0, 90.0, 3);
        assert_eq!(world.len(), 32 * 32 * 32);
    }

    #[test]
    fn test_builder() {
        let rect = Rect::new(coord! { x: -0.5, y: 51.2 }, coord! { x: 0.3, y: 51.7 });
        let from_builder = GeoHashGrid::builder().length(4).rect(&rect).build();
        let direct = GeoHashGrid::from_rect(&rect, 4);
        assert_eq!(from_builder.cells(), direct.cells());
    }

    #[test]
    fn test_from_polygon() -> Result<(), GeoHashError> {
        let triangle = polygon![
            (x: -0.5, y: 51.2),
            (x: 0.3, y: 51.2),
            (x: -0.5, y: 51.7),
            (x: -0.5, y: 51.2),
        ];
        let rect_grid = GeoHashGrid::from_extent(-0.5, 51.2, 0.3, 51.7, 4);
        let grid = GeoHashGrid::from_polygon(&triangle, 4);

        assert!(!grid.is_empty());
        assert!(grid.len() < rect_grid.len());
        for cell in &grid {
            assert!(rect_grid.contains(cell));
            assert!(cell.to_polygon().intersects(&triangle));
        }
        // north-east corner of the extent is outside the triangle
        assert!(!grid.contains(&GeoHash::parse("u10n")?));
        Ok(())
    }

    #[test]
    fn test_filter_and_polygons() {
        let grid = GeoHashGrid::from_extent(-0.5, 51.2, 0.3, 51.7, 4);
        let east = grid.filter(|cell| cell.as_str().starts_with('u'));
        assert_eq!(east.len(), 4);
        assert_eq!(grid.to_polygons().len(), grid.len());
    }

    #[test]
    fn test_to_geojson() {
        let grid = GeoHashGrid::from_extent(-0.5, 51.2, 0.3, 51.7, 3);
        let collection = grid.to_geojson();
        assert_eq!(collection.features.len(), 2);

        let feature = &collection.features[0];
        assert_eq!(
            feature.property("geohash"),
            Some(&JsonValue::from("gcp"))
        );
        assert!(feature.geometry.is_some());
    }
}
