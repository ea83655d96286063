use crate::api::bbox::BoundingBox;
use crate::api::tolerance::Tolerance;
use crate::core::codec::{decode_indices, encode_hash, encode_hash_with_length};
use crate::core::constants::{BASE32, char_index};
use crate::core::neighbor::adjacent;
use crate::core::tables::{Direction, base32_char};
use crate::error::GeoHashError;
use crate::util::coord::{Coordinate, normalize_lat, normalize_lon};
use geo_types::{Point, Polygon};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A validated base-32 geohash.
///
/// Every character is guaranteed to be in the geohash alphabet
/// `0123456789bcdefghjkmnpqrstuvwxyz`. The empty hash is valid and covers
/// the whole world.
///
/// # Example
///
/// ```
/// use geohash_rs::{Direction, GeoHash, Tolerance};
///
/// # fn main() -> Result<(), geohash_rs::GeoHashError> {
/// // (lon, lat) tuple, cell no larger than 0.1 degrees on either side
/// let hash = GeoHash::from_coord(&(-0.12, 51.5), Tolerance::uniform(0.1));
/// assert_eq!(hash.as_str(), "gcpuv");
///
/// let bbox = hash.decode();
/// assert!(bbox.lat_delta <= 0.1 && bbox.lon_delta <= 0.1);
///
/// let cell: GeoHash = "gcpuv".parse()?;
/// assert_eq!(cell.neighbor(Direction::North).as_str(), "gcpvj");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct GeoHash(String);

impl GeoHash {
    /// Validates a string as a geohash.
    ///
    /// # Errors
    ///
    /// [`GeoHashError::InvalidCharacter`] for the first character outside the
    /// alphabet, with its byte offset.
    pub fn parse(s: &str) -> Result<Self, GeoHashError> {
        validate(s)?;
        Ok(Self(s.to_string()))
    }

    /// Encodes a `(lon, lat)` coordinate into the shortest hash whose cell
    /// fits within the tolerance.
    pub fn from_coord(coord: &impl Coordinate, tolerance: Tolerance) -> Self {
        Self(encode_hash(coord.y(), coord.x(), tolerance.lat(), tolerance.lon()))
    }

    /// Encodes a `(lon, lat)` coordinate into a hash of exactly `length`
    /// characters.
    pub fn with_length(coord: &impl Coordinate, length: usize) -> Self {
        Self(encode_hash_with_length(coord.y(), coord.x(), length))
    }

    fn from_cells(cells: Vec<u8>) -> Self {
        Self(cells.into_iter().map(base32_char).collect())
    }

    fn cells(&self) -> impl Iterator<Item = u8> + '_ {
        self.0.bytes().filter_map(char_index)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of characters in the hash.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the cell covered by this hash.
    pub fn decode(&self) -> BoundingBox {
        let (lat_min, lat_delta, lon_min, lon_delta) = decode_indices(self.cells());
        BoundingBox::new(lat_min, lat_delta, lon_min, lon_delta)
    }

    /// Returns the adjacent cell of the same length in `direction`.
    ///
    /// Steps wrap around the poles and the antimeridian, so the result always
    /// has the same length as `self`.
    pub fn neighbor(&self, direction: Direction) -> GeoHash {
        let cells: Vec<u8> = self.cells().collect();
        Self::from_cells(adjacent(&cells, direction))
    }

    /// Returns the four cardinal neighbors in [`Direction::ALL`] order.
    pub fn neighbors(&self) -> [GeoHash; 4] {
        Direction::ALL.map(|direction| self.neighbor(direction))
    }

    /// Returns the enclosing cell one character shorter, or `None` for the
    /// empty hash.
    pub fn parent(&self) -> Option<GeoHash> {
        let len = self.0.len();
        if len == 0 {
            return None;
        }
        Some(Self(self.0[..len - 1].to_string()))
    }

    /// Returns the 32 cells one character longer, in alphabet order.
    pub fn children(&self) -> Vec<GeoHash> {
        BASE32
            .iter()
            .map(|&b| {
                let mut child = String::with_capacity(self.0.len() + 1);
                child.push_str(&self.0);
                child.push(b as char);
                Self(child)
            })
            .collect()
    }

    /// Returns true if the `(lon, lat)` coordinate falls in this cell.
    ///
    /// The coordinate is wrapped into range first, as when encoding.
    pub fn contains(&self, coord: &impl Coordinate) -> bool {
        let wrapped = (normalize_lon(coord.x()), normalize_lat(coord.y()));
        self.decode().contains(&wrapped)
    }

    /// Returns the center of the cell as a `(lon, lat)` point.
    pub fn center(&self) -> Point<f64> {
        self.decode().center()
    }

    /// Converts this cell to a rectangular polygon.
    pub fn to_polygon(&self) -> Polygon<f64> {
        self.decode().to_polygon()
    }
}

fn validate(s: &str) -> Result<(), GeoHashError> {
    for (position, character) in s.char_indices() {
        let valid = character.is_ascii() && char_index(character as u8).is_some();
        if !valid {
            return Err(GeoHashError::InvalidCharacter {
                character,
                position,
            });
        }
    }
    Ok(())
}

impl fmt::Display for GeoHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for GeoHash {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for GeoHash {
    type Err = GeoHashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for GeoHash {
    type Error = GeoHashError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl TryFrom<String> for GeoHash {
    type Error = GeoHashError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        validate(&s)?;
        Ok(Self(s))
    }
}

impl From<GeoHash> for String {
    fn from(hash: GeoHash) -> Self {
        hash.0
    }
}

/// Encodes `(lat, lon)` into the shortest geohash whose cell is no taller
/// than `lat_tol` and no wider than `lon_tol` degrees.
///
/// Never fails: coordinates outside [-90, 90) x [-180, 180) are wrapped and
/// tolerances below 1e-8 are raised to it.
///
/// # Example
/// ```
/// use geohash_rs::encode;
///
/// assert_eq!(encode(0.0, -190.0, 0.01, 0.01), encode(0.0, 170.0, 0.01, 0.01));
/// ```
pub fn encode(lat: f64, lon: f64, lat_tol: f64, lon_tol: f64) -> GeoHash {
    GeoHash(encode_hash(lat, lon, lat_tol, lon_tol))
}

/// Validates a string as a geohash. See [`GeoHash::parse`].
pub fn parse(s: &str) -> Result<GeoHash, GeoHashError> {
    GeoHash::parse(s)
}

/// Returns the cell covered by a geohash. See [`GeoHash::decode`].
pub fn decode(hash: &GeoHash) -> BoundingBox {
    hash.decode()
}

/// Steps an unvalidated hash one cell in a direction.
///
/// `direction` is either a [`Direction`] or its raw `i32` form
/// (0 = North, 1 = East, 2 = South, 3 = West). Both inputs are checked
/// before any stepping.
///
/// # Example
/// ```
/// use geohash_rs::{Direction, GeoHashError, neighbor};
///
/// # fn main() -> Result<(), GeoHashError> {
/// assert_eq!(neighbor("ezs42", Direction::West)?.as_str(), "ezefr");
/// assert_eq!(neighbor("ezs42", 0_i32)?.as_str(), "ezs48");
/// assert_eq!(neighbor("ezs42", 99_i32), Err(GeoHashError::InvalidDirection(99)));
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// - [`GeoHashError::InvalidDirection`] - raw direction outside 0..=3
/// - [`GeoHashError::InvalidCharacter`] - hash contains a character outside the alphabet
pub fn neighbor<D>(hash: &str, direction: D) -> Result<GeoHash, GeoHashError>
where
    D: TryInto<Direction>,
    GeoHashError: From<D::Error>,
{
    let direction: Direction = direction.try_into()?;
    let hash = GeoHash::parse(hash)?;
    Ok(hash.neighbor(direction))
}
