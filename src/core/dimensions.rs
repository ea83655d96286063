use crate::core::constants::{
    BITS_PER_CHAR, LAT_MAX_PRECISION, LAT_RANGE, LON_MAX_PRECISION, LON_RANGE,
};

/// Returns `(lat_height, lon_width)` in degrees of every cell at a hash length.
///
/// Longitude receives the extra bit when the total bit count is odd.
pub fn cell_dimensions(length: usize) -> (f64, f64) {
    let bits = length * BITS_PER_CHAR;
    let lon_bits = bits.div_ceil(2);
    let lat_bits = bits / 2;

    let lat_height = (LAT_RANGE[1] - LAT_RANGE[0]) / 2f64.powi(lat_bits as i32);
    let lon_width = (LON_RANGE[1] - LON_RANGE[0]) / 2f64.powi(lon_bits as i32);

    (lat_height, lon_width)
}

/// Returns the shortest hash length whose cells fit within the tolerances.
///
/// Matches the length produced by encoding with the same tolerances.
pub fn length_for_tolerance(lat_tol: f64, lon_tol: f64) -> usize {
    let lat_tol = lat_tol.max(LAT_MAX_PRECISION);
    let lon_tol = lon_tol.max(LON_MAX_PRECISION);

    let mut length = 1;
    loop {
        let (height, width) = cell_dimensions(length);
        if height <= lat_tol && width <= lon_tol {
            return length;
        }
        length += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::codec::encode_hash;

    #[test]
    fn test_cell_dimensions() {
        assert_eq!(cell_dimensions(0), (180.0, 360.0));
        assert_eq!(cell_dimensions(1), (45.0, 45.0));
        assert_eq!(cell_dimensions(2), (5.625, 11.25));
        assert_eq!(cell_dimensions(4), (0.17578125, 0.3515625));
        assert_eq!(cell_dimensions(5), (0.0439453125, 0.0439453125));
    }

    #[test]
    fn test_length_for_tolerance() {
        assert_eq!(length_for_tolerance(45.0, 45.0), 1);
        assert_eq!(length_for_tolerance(10.0, 10.0), 3);
        assert_eq!(length_for_tolerance(0.0, 0.0), 15);
    }

    #[test]
    fn test_length_matches_encode() {
        for tol in [50.0, 1.0, 0.1, 0.01, 0.001, 1e-5, 1e-9] {
            let hash = encode_hash(12.34, 56.78, tol, tol);
            assert_eq!(hash.len(), length_for_tolerance(tol, tol));
        }
    }
}
