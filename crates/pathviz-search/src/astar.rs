//! A* shortest-path search over a grid snapshot.

use pathviz_core::{Grid, INFINITY, Point};

use crate::distance::manhattan;
use crate::queue::PriorityQueue;
use crate::result::{NO_PREDECESSOR, SearchResult, TraceStep};

/// Run A* from `start` toward `target` on a frozen view of `grid`.
///
/// Identical to [`dijkstra`](crate::dijkstra) except that the queue
/// priority is the tentative distance plus the Manhattan estimate to the
/// target, which steers expansion toward the target and typically visits
/// fewer cells while still finding an optimal path (the estimate never
/// overestimates 4-directional unit cost).
pub fn astar(grid: &Grid, start: Point, target: Point) -> SearchResult {
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
        frontier.insert(start, manhattan(start, target));
    }

    while let Some(entry) = frontier.extract() {
        let ci = idx(entry.pos);
        // Same stale-duplicate re-check as Dijkstra.
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
                let priority = tentative + manhattan(np, target);
                match frontier.find_index(np) {
                    Some(slot) => frontier.update_priority(slot, priority),
                    None => frontier.insert(np, priority),
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
