//! The active falling piece.

use crate::core::shapes::filled_at;
use crate::core::Board;
use crate::types::{Rotation, ShapeId, SPAWN_COL, SPAWN_ROW};

/// The one falling piece. `row`/`col` anchor the top-left corner of its
/// 4x4 bounding box in board coordinates; the anchor may sit outside the
/// grid as long as every filled cell stays inside.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivePiece {
    pub shape: ShapeId,
    pub rotation: Rotation,
    pub row: i8,
    pub col: i8,
}

impl ActivePiece {
    /// A fresh piece at the spawn anchor, canonical orientation.
    pub fn spawn(shape: ShapeId) -> Self {
        Self {
            shape,
            rotation: Rotation::R0,
            row: SPAWN_ROW,
            col: SPAWN_COL,
        }
    }

    /// Does the piece fit the board at its current placement?
    pub fn fits(&self, board: &Board) -> bool {
        board.fits(self.shape, self.rotation, self.row, self.col)
    }

    /// Candidate placement translated by `(d_row, d_col)`.
    pub fn translated(&self, d_row: i8, d_col: i8) -> Self {
        Self {
            row: self.row + d_row,
            col: self.col + d_col,
            ..*self
        }
    }

    /// Candidate placement rotated one quarter turn clockwise.
    pub fn rotated_cw(&self) -> Self {
        Self {
            rotation: self.rotation.rotate_cw(),
            ..*self
        }
    }

    /// Board coordinates of the piece's filled cells.
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> {
        let piece = *self;
        (0..4usize).flat_map(move |r| {
            (0..4usize).filter_map(move |c| {
                filled_at(piece.shape, r, c, piece.rotation)
                    .then(|| (piece.row + r as i8, piece.col + c as i8))
            })
        })
    }
}
