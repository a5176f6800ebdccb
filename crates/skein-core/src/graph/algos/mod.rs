//! Graph analysis algorithms
//!
//! Implemented as `Graph` methods, one concern per module:
//! - `bfs`: level-bounded breadth-first queries and shortest paths
//! - `dfs`: depth-first spanning trees and arbitrary paths
//! - `clique`: greedy maximal-clique extraction
//! - `connectivity`: weak-connectivity and Eulerian-circuit tests
//! - `influence`: fixed-iteration rank propagation

mod bfs;
mod clique;
mod connectivity;
mod dfs;
mod influence;
