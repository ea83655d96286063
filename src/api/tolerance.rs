use crate::core::constants::{LAT_MAX_PRECISION, LON_MAX_PRECISION};

/// Maximum acceptable cell size, in degrees, when encoding.
///
/// Each component is floored to [`LAT_MAX_PRECISION`] / [`LON_MAX_PRECISION`];
/// zero, negative and NaN inputs all land on the floor.
///
/// # Example
/// ```
/// use geohash_rs::Tolerance;
///
/// let tol = Tolerance::new(0.01, 0.0);
/// assert_eq!(tol.lat(), 0.01);
/// assert_eq!(tol.lon(), 0.00000001);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance {
    lat: f64,
    lon: f64,
}

impl Tolerance {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self {
            lat: lat.max(LAT_MAX_PRECISION),
            lon: lon.max(LON_MAX_PRECISION),
        }
    }

    /// Same tolerance in both axes.
    pub fn uniform(tolerance: f64) -> Self {
        Self::new(tolerance, tolerance)
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn lon(&self) -> f64 {
        self.lon
    }
}

impl Default for Tolerance {
    /// The finest supported precision.
    fn default() -> Self {
        Self::new(LAT_MAX_PRECISION, LON_MAX_PRECISION)
    }
}
