//! Shortest weighted paths in undirected graphs built from CSV edge lists.
//!
//! The pipeline is: [load](io::loader) raw edges, [build](graph::GraphBuilder)
//! a deduplicated [`Graph`](graph::Graph), then either enumerate
//! [all pairs](algo::AllPairs) or answer [queries](query::Session) with
//! [Dijkstra's algorithm](algo::ShortestPaths).

pub mod algo;
pub mod config;
pub mod core;
pub mod error;
pub mod graph;
pub mod io;
pub mod logging;
pub mod query;
pub mod storage;

pub use error::{Error, Result};

pub mod prelude {
    pub use crate::algo::{AllPairs, Path, PathNotFound, ShortestPaths};
    pub use crate::core::{EdgeId, VertexId, Weight};
    pub use crate::graph::{Graph, GraphBuilder, RawEdge};
}
