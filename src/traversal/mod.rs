//! Graph traversal algorithms.
//!
//! - [`bfs`] - Breadth-first reachability, the building block for
//!   connectivity and Eulerian preconditions
//! - [`dijkstra`] - Single-source weighted shortest paths

pub mod bfs;
pub mod dijkstra;

pub use bfs::reachable_from;
pub use dijkstra::{single_source, ShortestPathTree, WeightedPath};
