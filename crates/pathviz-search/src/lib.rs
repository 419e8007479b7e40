//! **pathviz-search** — graph search for the grid visualizer engine.
//!
//! This crate provides the two search algorithms and the frontier queue
//! that orders their expansion:
//!
//! - **Dijkstra** shortest-path search ([`dijkstra`])
//! - **A\*** shortest-path search with a Manhattan estimate ([`astar`])
//! - A decrease-key [`PriorityQueue`] over grid coordinates
//!
//! Both algorithms consume a frozen [`pathviz_core::Grid`] plus explicit
//! start/target coordinates and produce a [`SearchResult`]: the exploration
//! trace in visitation order and a predecessor arena from which
//! [`SearchResult::path_chain`] reconstructs the shortest route. An
//! unreachable target is a valid outcome (empty chain), never an error.

mod astar;
mod dijkstra;
mod distance;
mod queue;
mod result;

pub use astar::astar;
pub use dijkstra::dijkstra;
pub use distance::manhattan;
pub use queue::{Entry, Order, PriorityQueue};
pub use result::{NO_PREDECESSOR, SearchResult, TraceStep};
