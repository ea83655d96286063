use crate::core::tables::{Direction, Parity, is_border, neighbor_index};
use tracing::trace;

/// Steps a hash, given as 5-bit character values, one cell in `direction`.
///
/// The last character is replaced through the `(direction, parity)` neighbor
/// table. When it sits on the edge of its parent cell the prefix is stepped
/// first, recursively. An empty input yields an empty output.
///
/// The tables wrap: north of the top row is the bottom row and west of the
/// antimeridian is the eastern edge, so the output length always matches.
pub fn adjacent(cells: &[u8], direction: Direction) -> Vec<u8> {
    let Some((&last, base)) = cells.split_last() else {
        return Vec::new();
    };
    let parity = Parity::of_length(cells.len());

    let mut prefix = if is_border(direction, parity, last) {
        trace!(depth = cells.len(), %direction, "neighbor step crosses parent boundary");
        adjacent(base, direction)
    } else {
        base.to_vec()
    };
    prefix.push(neighbor_index(direction, parity, last));
    prefix
}
