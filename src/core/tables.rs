use crate::core::constants::{BASE32, char_index};
use crate::error::GeoHashError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A cardinal direction used to step between adjacent cells.
///
/// The discriminants match the raw integer form accepted by
/// [`Direction::try_from`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    North = 0,
    East = 1,
    South = 2,
    West = 3,
}

impl Direction {
    /// All four directions in discriminant order.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Returns the direction pointing the other way.
    pub fn opposite(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl TryFrom<i32> for Direction {
    type Error = GeoHashError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Direction::North),
            1 => Ok(Direction::East),
            2 => Ok(Direction::South),
            3 => Ok(Direction::West),
            other => Err(GeoHashError::InvalidDirection(other)),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::North => "north",
            Direction::East => "east",
            Direction::South => "south",
            Direction::West => "west",
        };
        f.write_str(name)
    }
}

/// Parity of a hash length.
///
/// Even- and odd-length hashes end in characters with opposite bit
/// interleaving, so each direction needs a table per parity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parity {
    Even = 0,
    Odd = 1,
}

impl Parity {
    pub fn of_length(len: usize) -> Self {
        if len % 2 == 0 { Parity::Even } else { Parity::Odd }
    }

    fn index(self) -> usize {
        self as usize
    }
}

// [direction][parity], direction in North, East, South, West order.
const NEIGHBORS: [[&[u8; 32]; 2]; 4] = [
    [
        b"p0r21436x8zb9dcf5h7kjnmqesgutwvy",
        b"bc01fg45238967deuvhjyznpkmstqrwx",
    ],
    [
        b"bc01fg45238967deuvhjyznpkmstqrwx",
        b"p0r21436x8zb9dcf5h7kjnmqesgutwvy",
    ],
    [
        b"14365h7k9dcfesgujnmqp0r2twvyx8zb",
        b"238967debc01fg45kmstqrwxuvhjyznp",
    ],
    [
        b"238967debc01fg45kmstqrwxuvhjyznp",
        b"14365h7k9dcfesgujnmqp0r2twvyx8zb",
    ],
];

const BORDERS: [[&[u8]; 2]; 4] = [
    [b"prxz", b"bcfguvyz"],
    [b"bcfguvyz", b"prxz"],
    [b"028b", b"0145hjnp"],
    [b"0145hjnp", b"028b"],
];

const fn index_of(byte: u8) -> usize {
    match char_index(byte) {
        Some(index) => index as usize,
        None => panic!("table character outside the geohash alphabet"),
    }
}

// Inverts each neighbor string: the character at position i steps to BASE32[i].
const fn build_neighbor_lookup() -> [[[u8; 32]; 2]; 4] {
    let mut lookup = [[[0u8; 32]; 2]; 4];
    let mut dir = 0;
    while dir < 4 {
        let mut parity = 0;
        while parity < 2 {
            let table = NEIGHBORS[dir][parity];
            let mut i = 0;
            while i < 32 {
                lookup[dir][parity][index_of(table[i])] = i as u8;
                i += 1;
            }
            parity += 1;
        }
        dir += 1;
    }
    lookup
}

const fn build_border_masks() -> [[u32; 2]; 4] {
    let mut masks = [[0u32; 2]; 4];
    let mut dir = 0;
    while dir < 4 {
        let mut parity = 0;
        while parity < 2 {
            let border = BORDERS[dir][parity];
            let mut i = 0;
            while i < border.len() {
                masks[dir][parity] |= 1 << index_of(border[i]);
                i += 1;
            }
            parity += 1;
        }
        dir += 1;
    }
    masks
}

const NEIGHBOR_LOOKUP: [[[u8; 32]; 2]; 4] = build_neighbor_lookup();
const BORDER_MASKS: [[u32; 2]; 4] = build_border_masks();

/// Returns the 5-bit value of the same-level neighbor of `cell`.
pub fn neighbor_index(direction: Direction, parity: Parity, cell: u8) -> u8 {
    NEIGHBOR_LOOKUP[direction.index()][parity.index()][(cell & 0x1f) as usize]
}

/// Returns true if stepping `cell` in `direction` leaves its parent cell.
pub fn is_border(direction: Direction, parity: Parity, cell: u8) -> bool {
    BORDER_MASKS[direction.index()][parity.index()] & (1 << (cell & 0x1f)) != 0
}

/// Alphabet character for a 5-bit value.
pub fn base32_char(index: u8) -> char {
    BASE32[(index & 0x1f) as usize] as char
}

#[cfg(test)]
mod tests {
    use super::*;

    fn idx(c: char) -> u8 {
        char_index(c as u8).unwrap()
    }

    #[test]
    fn test_direction_try_from() {
        assert_eq!(Direction::try_from(0), Ok(Direction::North));
        assert_eq!(Direction::try_from(3), Ok(Direction::West));
        assert_eq!(
            Direction::try_from(99),
            Err(GeoHashError::InvalidDirection(99))
        );
        assert_eq!(
            Direction::try_from(-1),
            Err(GeoHashError::InvalidDirection(-1))
        );
    }

    #[test]
    fn test_opposite_is_involution() {
        for dir in Direction::ALL {
            assert_ne!(dir, dir.opposite());
            assert_eq!(dir, dir.opposite().opposite());
        }
    }

    #[test]
    fn test_parity() {
        assert_eq!(Parity::of_length(0), Parity::Even);
        assert_eq!(Parity::of_length(1), Parity::Odd);
        assert_eq!(Parity::of_length(6), Parity::Even);
    }

    #[test]
    fn test_single_char_neighbors() {
        assert_eq!(base32_char(neighbor_index(Direction::East, Parity::Odd, idx('u'))), 'v');
        assert_eq!(base32_char(neighbor_index(Direction::North, Parity::Odd, idx('b'))), '0');
        assert_eq!(base32_char(neighbor_index(Direction::West, Parity::Odd, idx('b'))), 'z');
    }

    #[test]
    fn test_lookup_tables_invert_each_other() {
        for parity in [Parity::Even, Parity::Odd] {
            for dir in Direction::ALL {
                for cell in 0..32u8 {
                    let stepped = neighbor_index(dir, parity, cell);
                    assert_eq!(neighbor_index(dir.opposite(), parity, stepped), cell);
                }
            }
        }
    }

    #[test]
    fn test_border_sets_mirror() {
        // A cell on the north edge steps onto the south edge of the next parent.
        for parity in [Parity::Even, Parity::Odd] {
            for dir in Direction::ALL {
                for cell in 0..32u8 {
                    let stepped = neighbor_index(dir, parity, cell);
                    assert_eq!(
                        is_border(dir, parity, cell),
                        is_border(dir.opposite(), parity, stepped)
                    );
                }
            }
        }
    }

    #[test]
    fn test_border_counts() {
        for dir in Direction::ALL {
            let even = (0..32u8).filter(|&c| is_border(dir, Parity::Even, c)).count();
            let odd = (0..32u8).filter(|&c| is_border(dir, Parity::Odd, c)).count();
            assert_eq!(even + odd, 12);
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(Direction::North.to_string(), "north");
        assert_eq!(Direction::West.to_string(), "west");
    }
}
