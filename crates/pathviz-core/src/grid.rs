//! The [`Grid`] — a rectangular board of [`Cell`]s and its edit operations.
//!
//! The grid owns its cells exclusively; there is no shared or aliased
//! storage. Dimensions are fixed at creation. Out-of-bounds coordinates are
//! silently ignored by every operation — a boundary-safety contract, not an
//! error.

use crate::cell::{Cell, INFINITY, Role};
use crate::geom::Point;

/// A rectangular board of cells with at most one start and one target.
///
/// Edit operations keep the role invariants: a cell holds one role at a
/// time, and placing start/target/wall on a cell displaces whatever role it
/// had, including forgetting a displaced start or target position.
#[derive(Clone, Debug)]
pub struct Grid {
    width: i32,
    height: i32,
    cells: Vec<Cell>,
    start: Option<Point>,
    target: Option<Point>,
}

impl Grid {
    /// Create a new grid of the given dimensions, filled with default cells.
    pub fn new(width: i32, height: i32) -> Self {
        let w = width.max(0);
        let h = height.max(0);
        Self {
            width: w,
            height: h,
            cells: vec![Cell::default(); (w as usize) * (h as usize)],
            start: None,
            target: None,
        }
    }

    /// Width of the grid.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Height of the grid.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Whether `p` is inside the grid bounds.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.x < self.width && p.y >= 0 && p.y < self.height
    }

    #[inline]
    fn index(&self, p: Point) -> Option<usize> {
        if self.contains(p) {
            Some((p.y as usize) * (self.width as usize) + (p.x as usize))
        } else {
            None
        }
    }

    /// Read the cell at `p`, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, p: Point) -> Option<&Cell> {
        self.index(p).map(|i| &self.cells[i])
    }

    /// Current start position, if any.
    #[inline]
    pub fn start(&self) -> Option<Point> {
        self.start
    }

    /// Current target position, if any.
    #[inline]
    pub fn target(&self) -> Option<Point> {
        self.target
    }

    /// Row-major iterator over `(Point, &Cell)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Point, &Cell)> {
        let w = self.width;
        self.cells.iter().enumerate().map(move |(i, cell)| {
            let i = i as i32;
            (Point::new(i % w, i / w), cell)
        })
    }

    // -----------------------------------------------------------------------
    // Edits
    // -----------------------------------------------------------------------

    /// Place the start at `p`, displacing any role the cell had.
    ///
    /// The previous start cell (if different) reverts to open with its
    /// distance reset. The new start cell gets distance 0. Returns whether
    /// the edit was applied.
    pub fn place_start(&mut self, p: Point) -> bool {
        let Some(i) = self.index(p) else {
            return false;
        };
        if let Some(prev) = self.start.take() {
            if prev != p {
                if let Some(pi) = self.index(prev) {
                    self.cells[pi].role = Role::Open;
                    self.cells[pi].distance = INFINITY;
                    self.cells[pi].on_path = false;
                }
            }
        }
        if self.target == Some(p) {
            self.target = None;
        }
        self.cells[i].role = Role::Start;
        self.cells[i].distance = 0;
        self.cells[i].on_path = false;
        self.start = Some(p);
        true
    }

    /// Place the target at `p`, displacing any role the cell had.
    ///
    /// Moving the target invalidates the reconstructed path, so every
    /// `on_path` flag on the grid is cleared. Returns whether the edit was
    /// applied.
    pub fn place_target(&mut self, p: Point) -> bool {
        let Some(i) = self.index(p) else {
            return false;
        };
        for cell in &mut self.cells {
            cell.on_path = false;
        }
        if let Some(prev) = self.target.take() {
            if prev != p {
                if let Some(pi) = self.index(prev) {
                    self.cells[pi].role = Role::Open;
                    self.cells[pi].distance = INFINITY;
                }
            }
        }
        if self.start == Some(p) {
            self.start = None;
        }
        self.cells[i].role = Role::Target;
        self.cells[i].distance = INFINITY;
        self.target = Some(p);
        true
    }

    /// Place a wall at `p`, displacing any role the cell had.
    ///
    /// A walled-over start or target is forgotten. Returns whether the edit
    /// was applied.
    pub fn place_wall(&mut self, p: Point) -> bool {
        let Some(i) = self.index(p) else {
            return false;
        };
        if self.start == Some(p) {
            self.start = None;
        }
        if self.target == Some(p) {
            self.target = None;
        }
        self.cells[i].role = Role::Wall;
        self.cells[i].distance = INFINITY;
        self.cells[i].on_path = false;
        true
    }

    /// Clear the role and path flag at `p`, forgetting a start or target
    /// that lived there. Returns whether the edit was applied.
    ///
    /// `visited` is left alone: it belongs to the replay engine and is only
    /// swept by [`reset`](Grid::reset) or
    /// [`clear_search_artifacts`](Grid::clear_search_artifacts).
    pub fn erase(&mut self, p: Point) -> bool {
        let Some(i) = self.index(p) else {
            return false;
        };
        if self.start == Some(p) {
            self.start = None;
        }
        if self.target == Some(p) {
            self.target = None;
        }
        self.cells[i].role = Role::Open;
        self.cells[i].distance = INFINITY;
        self.cells[i].on_path = false;
        true
    }

    /// Restore every cell to the created state and forget start/target.
    pub fn reset(&mut self) {
        for cell in &mut self.cells {
            *cell = Cell::default();
        }
        self.start = None;
        self.target = None;
    }

    /// Sweep `visited`/`on_path` flags and computed distances ahead of a
    /// fresh run, leaving roles untouched.
    pub fn clear_search_artifacts(&mut self) {
        for cell in &mut self.cells {
            cell.visited = false;
            cell.on_path = false;
            cell.distance = if cell.role == Role::Start { 0 } else { INFINITY };
        }
    }

    // -----------------------------------------------------------------------
    // Replay diffs
    // -----------------------------------------------------------------------

    /// Mark `p` visited with the given distance, returning the updated cell.
    ///
    /// Called by the replay engine when applying one exploration step; user
    /// edits never set this flag.
    pub fn mark_visited(&mut self, p: Point, distance: i32) -> Option<Cell> {
        let i = self.index(p)?;
        self.cells[i].visited = true;
        self.cells[i].distance = distance;
        Some(self.cells[i])
    }

    /// Mark `p` as part of the reconstructed path, returning the updated
    /// cell. Called by the replay engine when applying one reveal step.
    pub fn mark_on_path(&mut self, p: Point) -> Option<Cell> {
        let i = self.index(p)?;
        self.cells[i].on_path = true;
        Some(self.cells[i])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_grid_is_open_and_unreached() {
        let g = Grid::new(4, 3);
        assert_eq!(g.width(), 4);
        assert_eq!(g.height(), 3);
        assert_eq!(g.iter().count(), 12);
        for (_, cell) in g.iter() {
            assert_eq!(*cell, Cell::default());
        }
        assert!(g.start().is_none());
        assert!(g.target().is_none());
    }

    #[test]
    fn out_of_bounds_edits_are_noops() {
        let mut g = Grid::new(3, 3);
        assert!(!g.place_start(Point::new(-1, 0)));
        assert!(!g.place_target(Point::new(3, 0)));
        assert!(!g.place_wall(Point::new(0, 3)));
        assert!(!g.erase(Point::new(9, 9)));
        assert!(g.at(Point::new(5, 5)).is_none());
        assert!(g.start().is_none());
        assert!(g.target().is_none());
    }

    #[test]
    fn start_placement_sets_distance_zero() {
        let mut g = Grid::new(3, 3);
        assert!(g.place_start(Point::new(1, 1)));
        let c = g.at(Point::new(1, 1)).unwrap();
        assert_eq!(c.role, Role::Start);
        assert_eq!(c.distance, 0);
        assert_eq!(g.start(), Some(Point::new(1, 1)));
    }

    #[test]
    fn moving_start_clears_previous_holder() {
        let mut g = Grid::new(3, 3);
        g.place_start(Point::new(0, 0));
        g.place_start(Point::new(2, 2));
        let prev = g.at(Point::new(0, 0)).unwrap();
        assert_eq!(prev.role, Role::Open);
        assert_eq!(prev.distance, INFINITY);
        assert_eq!(g.start(), Some(Point::new(2, 2)));
    }

    #[test]
    fn roles_are_mutually_exclusive() {
        let mut g = Grid::new(3, 3);
        g.place_start(Point::new(1, 1));
        g.place_target(Point::new(1, 1));
        assert_eq!(g.at(Point::new(1, 1)).unwrap().role, Role::Target);
        assert!(g.start().is_none());
        assert_eq!(g.target(), Some(Point::new(1, 1)));

        g.place_wall(Point::new(1, 1));
        assert_eq!(g.at(Point::new(1, 1)).unwrap().role, Role::Wall);
        assert!(g.target().is_none());
    }

    #[test]
    fn target_move_clears_path_flags() {
        let mut g = Grid::new(3, 3);
        g.place_target(Point::new(0, 0));
        g.mark_on_path(Point::new(1, 1));
        g.place_target(Point::new(2, 2));
        assert!(g.iter().all(|(_, c)| !c.on_path));
        assert_eq!(g.at(Point::new(0, 0)).unwrap().role, Role::Open);
    }

    #[test]
    fn erase_forgets_start_and_target() {
        let mut g = Grid::new(3, 3);
        g.place_start(Point::new(0, 0));
        g.place_target(Point::new(2, 2));
        g.erase(Point::new(0, 0));
        g.erase(Point::new(2, 2));
        assert!(g.start().is_none());
        assert!(g.target().is_none());
        assert_eq!(g.at(Point::new(0, 0)).unwrap().role, Role::Open);
        assert_eq!(g.at(Point::new(0, 0)).unwrap().distance, INFINITY);
    }

    #[test]
    fn erase_leaves_visited_alone() {
        let mut g = Grid::new(3, 3);
        g.mark_visited(Point::new(1, 0), 4);
        g.erase(Point::new(1, 0));
        assert!(g.at(Point::new(1, 0)).unwrap().visited);
    }

    #[test]
    fn clear_search_artifacts_keeps_roles() {
        let mut g = Grid::new(3, 3);
        g.place_start(Point::new(0, 0));
        g.place_wall(Point::new(1, 0));
        g.mark_visited(Point::new(2, 0), 2);
        g.mark_on_path(Point::new(2, 1));
        g.clear_search_artifacts();
        assert_eq!(g.at(Point::new(0, 0)).unwrap().role, Role::Start);
        assert_eq!(g.at(Point::new(0, 0)).unwrap().distance, 0);
        assert_eq!(g.at(Point::new(1, 0)).unwrap().role, Role::Wall);
        assert!(!g.at(Point::new(2, 0)).unwrap().visited);
        assert_eq!(g.at(Point::new(2, 0)).unwrap().distance, INFINITY);
        assert!(!g.at(Point::new(2, 1)).unwrap().on_path);
    }

    #[test]
    fn reset_restores_everything() {
        let mut g = Grid::new(3, 3);
        g.place_start(Point::new(0, 0));
        g.place_wall(Point::new(1, 1));
        g.mark_visited(Point::new(2, 2), 4);
        g.reset();
        for (_, cell) in g.iter() {
            assert_eq!(*cell, Cell::default());
        }
        assert!(g.start().is_none());
    }
}
