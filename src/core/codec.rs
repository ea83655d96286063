use crate::core::constants::{
    BITS_PER_CHAR, LAT_MAX_PRECISION, LAT_RANGE, LON_MAX_PRECISION, LON_RANGE,
};
use crate::core::tables::base32_char;
use crate::util::coord::{normalize_lat, normalize_lon};
use tracing::{debug, trace};

/// A half-open interval `[min, min + span)` being bisected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Interval {
    pub min: f64,
    pub span: f64,
}

impl Interval {
    fn new(range: [f64; 2]) -> Self {
        Self {
            min: range[0],
            span: range[1] - range[0],
        }
    }

    fn is_upper(&self, value: f64) -> bool {
        value >= self.min + self.span * 0.5
    }

    fn split(&mut self, upper: bool) {
        self.span *= 0.5;
        if upper {
            self.min += self.span;
        }
    }
}

/// Bisection state shared by encoding and decoding.
///
/// Bits alternate between longitude and latitude, starting with longitude,
/// so characters at even positions refine lon/lat/lon/lat/lon and odd
/// positions lat/lon/lat/lon/lat.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Bisector {
    pub lat: Interval,
    pub lon: Interval,
    on_longitude: bool,
}

impl Bisector {
    pub fn new() -> Self {
        Self {
            lat: Interval::new(LAT_RANGE),
            lon: Interval::new(LON_RANGE),
            on_longitude: true,
        }
    }

    fn target(&mut self) -> &mut Interval {
        if self.on_longitude {
            &mut self.lon
        } else {
            &mut self.lat
        }
    }

    /// Consumes one bit: tests the coordinate against the current target and
    /// narrows to the half containing it.
    fn locate(&mut self, lat: f64, lon: f64) -> bool {
        let value = if self.on_longitude { lon } else { lat };
        let upper = self.target().is_upper(value);
        self.apply(upper);
        upper
    }

    /// Narrows the current target to its upper or lower half.
    fn apply(&mut self, upper: bool) {
        self.target().split(upper);
        self.on_longitude = !self.on_longitude;
    }

    fn encode_char(&mut self, lat: f64, lon: f64) -> u8 {
        let mut index = 0u8;
        for _ in 0..BITS_PER_CHAR {
            index = (index << 1) | self.locate(lat, lon) as u8;
        }
        index
    }

    fn decode_char(&mut self, index: u8) {
        for bit in (0..BITS_PER_CHAR).rev() {
            self.apply((index >> bit) & 1 == 1);
        }
    }
}

/// Encodes a coordinate into the shortest hash whose cell fits within
/// `lat_tol` x `lon_tol` degrees.
///
/// Coordinates are wrapped into range first and tolerances are floored to
/// [`LAT_MAX_PRECISION`] / [`LON_MAX_PRECISION`], so this always terminates.
pub fn encode_hash(lat: f64, lon: f64, lat_tol: f64, lon_tol: f64) -> String {
    if !(lat_tol >= LAT_MAX_PRECISION && lon_tol >= LON_MAX_PRECISION) {
        debug!(lat_tol, lon_tol, "tolerance below minimum precision, using floor");
    }
    let lat_tol = lat_tol.max(LAT_MAX_PRECISION);
    let lon_tol = lon_tol.max(LON_MAX_PRECISION);

    let (lat, lon) = (normalize_lat(lat), normalize_lon(lon));
    let mut cells = Bisector::new();
    let mut hash = String::new();

    loop {
        hash.push(base32_char(cells.encode_char(lat, lon)));
        if cells.lat.span <= lat_tol && cells.lon.span <= lon_tol {
            break;
        }
    }

    trace!(lat, lon, hash = %hash, "encoded geohash");
    hash
}

/// Encodes a coordinate into a hash of exactly `length` characters.
pub fn encode_hash_with_length(lat: f64, lon: f64, length: usize) -> String {
    let (lat, lon) = (normalize_lat(lat), normalize_lon(lon));
    let mut cells = Bisector::new();

    (0..length)
        .map(|_| base32_char(cells.encode_char(lat, lon)))
        .collect()
}

/// Replays the bisection for a sequence of 5-bit character values.
///
/// Returns `(lat_min, lat_delta, lon_min, lon_delta)` where the deltas are
/// the full height and width of the cell.
pub fn decode_indices(indices: impl IntoIterator<Item = u8>) -> (f64, f64, f64, f64) {
    let mut cells = Bisector::new();
    for index in indices {
        cells.decode_char(index);
    }
    (cells.lat.min, cells.lat.span, cells.lon.min, cells.lon.span)
}
