//! Search output: the exploration trace and the predecessor arena.

use pathviz_core::{INFINITY, Point};

/// Parent sentinel meaning "no predecessor" (the start cell, or a cell the
/// search never reached).
pub const NO_PREDECESSOR: usize = usize::MAX;

/// One visited cell, in visitation order.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TraceStep {
    pub pos: Point,
    /// Final path cost from the start to this cell.
    pub distance: i32,
}

/// The immutable outcome of one search run.
///
/// Owns the trace plus flat per-cell arenas (parent indices, distances,
/// visited flags) indexed by `y * width + x`. Predecessors are indices into
/// the same arena rather than references, so reconstruction is a simple
/// index walk.
#[derive(Clone, Debug)]
pub struct SearchResult {
    width: i32,
    height: i32,
    start: Point,
    target: Point,
    target_reached: bool,
    trace: Vec<TraceStep>,
    parents: Vec<usize>,
    distances: Vec<i32>,
    visited: Vec<bool>,
}

impl SearchResult {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        width: i32,
        height: i32,
        start: Point,
        target: Point,
        target_reached: bool,
        trace: Vec<TraceStep>,
        parents: Vec<usize>,
        distances: Vec<i32>,
        visited: Vec<bool>,
    ) -> Self {
        Self {
            width,
            height,
            start,
            target,
            target_reached,
            trace,
            parents,
            distances,
            visited,
        }
    }

    /// The start the run was seeded with.
    #[inline]
    pub fn start(&self) -> Point {
        self.start
    }

    /// The target the run searched for.
    #[inline]
    pub fn target(&self) -> Point {
        self.target
    }

    /// Whether the target was dequeued before the frontier ran dry.
    ///
    /// `false` is the "unreachable" signal: the trace then never contains
    /// the target and [`path_chain`](Self::path_chain) is empty for it.
    #[inline]
    pub fn target_reached(&self) -> bool {
        self.target_reached
    }

    /// Cells in the order the search marked them visited.
    ///
    /// The search stops at the target, so this is not necessarily every
    /// reachable cell.
    #[inline]
    pub fn trace(&self) -> &[TraceStep] {
        &self.trace
    }

    #[inline]
    fn idx(&self, p: Point) -> Option<usize> {
        if p.x >= 0 && p.x < self.width && p.y >= 0 && p.y < self.height {
            Some((p.y as usize) * (self.width as usize) + (p.x as usize))
        } else {
            None
        }
    }

    /// Whether the run visited `p`.
    pub fn visited(&self, p: Point) -> bool {
        self.idx(p).is_some_and(|i| self.visited[i])
    }

    /// Final path cost from the start to `p`, or [`INFINITY`] if the run
    /// never reached it (or it is out of bounds).
    pub fn distance(&self, p: Point) -> i32 {
        self.idx(p).map_or(INFINITY, |i| self.distances[i])
    }

    /// Reconstruct the path from `to` back to — but excluding — the start,
    /// by walking predecessor indices.
    ///
    /// Returns an empty chain when the run never visited `to` (unreachable
    /// target, a valid outcome) or when `to` is the start itself. `to` may
    /// be any visited cell, not just the run's target; the session uses
    /// this to re-root the path when the target moves inside the explored
    /// tree.
    pub fn path_chain(&self, to: Point) -> Vec<Point> {
        let Some(mut i) = self.idx(to) else {
            return Vec::new();
        };
        if !self.visited[i] {
            return Vec::new();
        }
        let mut chain = Vec::new();
        while self.parents[i] != NO_PREDECESSOR {
            chain.push(self.point(i));
            i = self.parents[i];
        }
        chain
    }

    #[inline]
    fn point(&self, i: usize) -> Point {
        let w = self.width as usize;
        Point::new((i % w) as i32, (i / w) as i32)
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn trace_step_round_trip() {
        let step = TraceStep {
            pos: Point::new(3, 7),
            distance: 42,
        };
        let json = serde_json::to_string(&step).unwrap();
        let back: TraceStep = serde_json::from_str(&json).unwrap();
        assert_eq!(step, back);
    }
}
