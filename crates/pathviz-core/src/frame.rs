//! Per-tick diff frames: [`Frame`] and [`FrameCell`].
//!
//! The replay engine emits one [`Frame`] per tick describing the cells that
//! changed, so a consumer can render incrementally instead of redrawing the
//! whole board.

use crate::cell::Cell;
use crate::geom::Point;

/// A single cell that changed this tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameCell {
    pub pos: Point,
    pub cell: Cell,
}

/// A set of cell changes produced by one tick.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Frame {
    pub cells: Vec<FrameCell>,
}

impl Frame {
    /// A frame with no changes.
    pub const fn empty() -> Self {
        Self { cells: Vec::new() }
    }

    /// A frame holding a single changed cell.
    pub fn single(pos: Point, cell: Cell) -> Self {
        Self {
            cells: vec![FrameCell { pos, cell }],
        }
    }

    /// Whether the frame carries no changes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}
