//! **pathviz-core** — grid model and core types for the search visualizer
//! engine.
//!
//! This crate provides the foundational pieces shared across the *pathviz*
//! workspace: the [`Point`] geometry primitive, the [`Cell`]/[`Role`] data
//! model, the editable [`Grid`] board, and the [`Frame`] diff records the
//! replay engine emits once per tick.
//!
//! The grid knows nothing about search algorithms or playback; it only
//! enforces the board invariants (one start, one target, mutually exclusive
//! roles, silent rejection of out-of-bounds edits).

pub mod cell;
pub mod frame;
pub mod geom;
pub mod grid;

pub use cell::{Cell, INFINITY, Role};
pub use frame::{Frame, FrameCell};
pub use geom::Point;
pub use grid::Grid;
