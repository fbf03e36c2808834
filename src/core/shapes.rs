//! Shape table: canonical piece patterns and the rotation index transform.
//!
//! Each shape is stored exactly once, in its canonical orientation, as a
//! 16-byte row-major pattern over `.`/`X`. A rotated cell is answered by
//! remapping the local `(r, c)` coordinate to an index into the canonical
//! pattern instead of materializing four grids per shape.

use crate::types::{Rotation, ShapeId};

const FILLED_MARK: u8 = b'X';

/// Canonical 4x4 patterns, indexed by `ShapeId::index()`.
const PATTERNS: [&[u8; 16]; 7] = [
    b"..X...X...X...X.", // I
    b"..X..XX..X......", // S
    b".X...XX...X.....", // Z
    b".....XX..XX.....", // O
    b"..X..XX...X.....", // T
    b"..X...X..XX.....", // J
    b".XX...X...X.....", // L
];

/// Map a local cell `(r, c)` to its canonical pattern index at `rotation`.
///
/// Each arm is a bijection on 0..16, so rotation never aliases cells.
/// Callers must keep `r` and `c` within 0..4.
pub fn pattern_index(r: usize, c: usize, rotation: Rotation) -> usize {
    debug_assert!(r < 4 && c < 4);
    match rotation {
        Rotation::R0 => r * 4 + c,
        Rotation::R90 => 12 + r - 4 * c,
        Rotation::R180 => 15 - 4 * r - c,
        Rotation::R270 => 3 - r + 4 * c,
    }
}

/// Is local cell `(r, c)` of `shape` filled at `rotation`?
pub fn filled_at(shape: ShapeId, r: usize, c: usize, rotation: Rotation) -> bool {
    PATTERNS[shape.index()][pattern_index(r, c, rotation)] == FILLED_MARK
}
