//! Dijkstra shortest-path search over a grid snapshot.

use pathviz_core::{Grid, INFINITY, Point};

use crate::queue::PriorityQueue;
use crate::result::{NO_PREDECESSOR, SearchResult, TraceStep};

/// Run Dijkstra from `start` toward `target` on a frozen view of `grid`.
///
/// The grid is not mutated; the search runs synchronously to completion,
/// bounded by grid area. Expansion order follows cumulative distance, so
/// the frontier floods outward uniformly. The search stops as soon as the
/// target is dequeued; if the frontier runs dry first, the target is
/// unreachable and the result's trace never contains it.
pub fn dijkstra(grid: &Grid, start: Point, target: Point) -> SearchResult {
    let width = grid.width();
    let height = grid.height();
    let len = (width as usize) * (height as usize);
    let idx = |p: Point| (p.y as usize) * (width as usize) + (p.x as usize);

    let mut distances = vec![INFINITY; len];
    let mut parents = vec![NO_PREDECESSOR; len];
    let mut visited = vec![false; len];
    let mut trace = Vec::new();
    let mut target_reached = false;

    let mut frontier = PriorityQueue::min();
    if grid.contains(start) {
        distances[idx(start)] = 0;
        frontier.insert(start, 0);
    }

    while let Some(entry) = frontier.extract() {
        let ci = idx(entry.pos);
        // Stale duplicates should not occur with in-place priority updates;
        // the re-check keeps a corrupt queue from corrupting the trace.
        if visited[ci] {
            continue;
        }
        visited[ci] = true;
        trace.push(TraceStep {
            pos: entry.pos,
            distance: distances[ci],
        });
        if entry.pos == target {
            target_reached = true;
            break;
        }

        for np in entry.pos.neighbors_4() {
            let Some(cell) = grid.at(np) else {
                // Out of bounds: ignore this candidate.
                continue;
            };
            if cell.is_wall() {
                continue;
            }
            let ni = idx(np);
            if visited[ni] {
                continue;
            }
            let tentative = distances[ci] + 1;
            if tentative < distances[ni] {
                distances[ni] = tentative;
                parents[ni] = ci;
                match frontier.find_index(np) {
                    Some(slot) => frontier.update_priority(slot, tentative),
                    None => frontier.insert(np, tentative),
                }
            }
        }
    }

    SearchResult::new(
        width,
        height,
        start,
        target,
        target_reached,
        trace,
        parents,
        distances,
        visited,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: i32, y: i32) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn straight_line_path() {
        let grid = Grid::new(5, 1);
        let r = dijkstra(&grid, p(0, 0), p(4, 0));
        assert!(r.target_reached());
        assert_eq!(r.distance(p(4, 0)), 4);
        assert_eq!(
            r.path_chain(p(4, 0)),
            vec![p(4, 0), p(3, 0), p(2, 0), p(1, 0)]
        );
    }

    #[test]
    fn trace_starts_at_start_and_ends_at_target() {
        let grid = Grid::new(4, 4);
        let r = dijkstra(&grid, p(0, 0), p(2, 3));
        let trace = r.trace();
        assert_eq!(trace.first().unwrap().pos, p(0, 0));
        assert_eq!(trace.last().unwrap().pos, p(2, 3));
        // Distances along the trace never decrease (frontier is a min-queue).
        for pair in trace.windows(2) {
            assert!(pair[0].distance <= pair[1].distance);
        }
    }

    #[test]
    fn walls_force_a_detour() {
        let mut grid = Grid::new(3, 3);
        // Vertical wall through the middle column with a gap at the bottom.
        grid.place_wall(p(1, 0));
        grid.place_wall(p(1, 1));
        let r = dijkstra(&grid, p(0, 0), p(2, 0));
        assert!(r.target_reached());
        // Down around the wall and back up: 6 steps instead of 2.
        assert_eq!(r.distance(p(2, 0)), 6);
        assert_eq!(r.path_chain(p(2, 0)).len(), 6);
    }

    #[test]
    fn enclosed_target_is_unreachable() {
        let mut grid = Grid::new(5, 5);
        for q in [p(3, 3), p(3, 4), p(4, 3)] {
            grid.place_wall(q);
        }
        let r = dijkstra(&grid, p(0, 0), p(4, 4));
        assert!(!r.target_reached());
        assert!(!r.visited(p(4, 4)));
        assert!(r.trace().iter().all(|s| s.pos != p(4, 4)));
        assert!(r.path_chain(p(4, 4)).is_empty());
        assert_eq!(r.distance(p(4, 4)), INFINITY);
    }

    #[test]
    fn out_of_bounds_start_yields_empty_trace() {
        let grid = Grid::new(3, 3);
        let r = dijkstra(&grid, p(-1, 0), p(2, 2));
        assert!(r.trace().is_empty());
        assert!(!r.target_reached());
    }

    #[test]
    fn open_grid_distance_equals_manhattan() {
        let grid = Grid::new(6, 6);
        let start = p(1, 2);
        for (tx, ty) in [(0, 0), (5, 5), (4, 1), (1, 2)] {
            let r = dijkstra(&grid, start, p(tx, ty));
            assert!(r.target_reached());
            assert_eq!(
                r.distance(p(tx, ty)),
                crate::distance::manhattan(start, p(tx, ty))
            );
        }
    }

    #[test]
    fn rerun_on_unmodified_grid_is_identical() {
        let mut grid = Grid::new(6, 6);
        grid.place_wall(p(2, 2));
        grid.place_wall(p(2, 3));
        let a = dijkstra(&grid, p(0, 0), p(5, 5));
        let b = dijkstra(&grid, p(0, 0), p(5, 5));
        assert_eq!(a.trace(), b.trace());
        assert_eq!(a.path_chain(p(5, 5)), b.path_chain(p(5, 5)));
    }
}
