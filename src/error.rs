use std::convert::Infallible;
use thiserror::Error;

/// Error type for geohash-rs operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeoHashError {
    /// The input contains a character outside the base-32 geohash alphabet.
    #[error("Invalid character {character:?} at position {position}")]
    InvalidCharacter { character: char, position: usize },
    /// The direction value is not one of North (0), East (1), South (2) or West (3).
    #[error("Invalid direction: {0}")]
    InvalidDirection(i32),
}

impl From<Infallible> for GeoHashError {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}
