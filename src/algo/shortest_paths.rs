//! Find [single source shortest paths] and their distances in a graph.
//!
//! The search is Dijkstra's algorithm driven by a
//! [frontier](frontier::Frontier) without decrease-key. Edge weights must be
//! non-negative, a negative weight is reported as
//! [`Error::NegativeWeight`] when encountered.
//!
//! Among several shortest paths, the one found is determined by the order of
//! neighbors in the graph and by the first-in-first-out order of equal
//! priorities in the frontier. A distance is updated only on strict
//! improvement, so the first predecessor that achieves it is kept.
//!
//! [single source shortest paths]:
//!     https://en.wikipedia.org/wiki/Shortest_path_problem#Single-source_shortest_paths
//!
//! # Examples
//!
//! ```
//! use strider::{algo::ShortestPaths, graph::Graph};
//!
//! let graph = Graph::from_edges([
//!     ("Winterfell", "Moat Cailin", 30.0),
//!     ("Moat Cailin", "The Twins", 25.0),
//!     ("Winterfell", "The Twins", 70.0),
//! ]);
//!
//! let winterfell = graph.vertex_id("Winterfell").unwrap();
//! let twins = graph.vertex_id("The Twins").unwrap();
//!
//! let shortest_paths = ShortestPaths::on(&graph).run(winterfell).unwrap();
//! let path = shortest_paths.reconstruct(twins).unwrap();
//!
//! assert_eq!(path.total(), 55.0);
//! assert_eq!(path.weights(), &[30.0, 25.0]);
//! assert_eq!(
//!     path.labels(&graph).collect::<Vec<_>>(),
//!     vec!["Winterfell", "Moat Cailin", "The Twins"]
//! );
//! ```

use fixedbitset::FixedBitSet;
use thiserror::Error;

use crate::{
    core::{VertexId, Weight},
    graph::Graph,
};

mod builder;
mod dijkstra;
pub mod frontier;

pub use builder::ShortestPathsBuilder;
pub use frontier::{EmptyFrontierError, FrontierKind};

/// Shortest paths and their distances from a single source vertex.
///
/// See [module](self) documentation for more details and example.
#[derive(Debug, Clone)]
pub struct ShortestPaths<W> {
    source: VertexId,
    dist: Vec<W>,
    // Predecessor together with the weight of the edge leading from it.
    pred: Vec<Option<(VertexId, W)>>,
    settled: FixedBitSet,
}

impl<W: Weight> ShortestPaths<W> {
    /// Returns the path distance between the source vertex and the given
    /// vertex, or `None` if it's not known.
    ///
    /// There are two causes why the distance between two vertices is not known:
    /// (1) the vertices are not connected, or (2) the
    /// [goal](ShortestPathsBuilder::goal) was reached before settling the given
    /// vertex.
    pub fn dist(&self, to: VertexId) -> Option<W> {
        self.is_settled(to).then(|| self.dist[to.as_usize()])
    }

    /// Previous vertex on the shortest path from the source.
    pub fn pred(&self, to: VertexId) -> Option<VertexId> {
        if !self.is_settled(to) {
            return None;
        }

        self.pred[to.as_usize()].map(|(pred, _)| pred)
    }

    /// Returns an iterator over vertices on the path between the given vertex
    /// and the source vertex, in this order, excluding the given vertex.
    ///
    /// The iterator is empty if the distance to the vertex is not known or if
    /// the vertex is the source.
    pub fn walk_back(&self, to: VertexId) -> PathReconstruction<'_, W> {
        let pred = if self.is_settled(to) {
            self.pred.as_slice()
        } else {
            &[]
        };

        PathReconstruction { curr: to, pred }
    }

    /// Reconstructs the path from the source to the given vertex.
    pub fn reconstruct(&self, to: VertexId) -> Result<Path<W>, PathNotFound> {
        let not_found = PathNotFound {
            from: self.source,
            to,
        };

        if !self.is_settled(to) {
            return Err(not_found);
        }

        let mut vertices = vec![to];
        let mut weights = Vec::new();

        let mut curr = to;
        while let Some((pred, weight)) = self.pred[curr.as_usize()] {
            vertices.push(pred);
            weights.push(weight);
            curr = pred;
        }

        if curr != self.source {
            return Err(not_found);
        }

        vertices.reverse();
        weights.reverse();

        Ok(Path {
            vertices,
            weights,
            total: self.dist[to.as_usize()],
        })
    }

    fn is_settled(&self, v: VertexId) -> bool {
        self.settled.contains(v.as_usize())
    }
}

/// A shortest path from a source to a target vertex.
#[derive(Debug, Clone, PartialEq)]
pub struct Path<W> {
    vertices: Vec<VertexId>,
    weights: Vec<W>,
    total: W,
}

impl<W: Weight> Path<W> {
    pub fn source(&self) -> VertexId {
        self.vertices[0]
    }

    pub fn target(&self) -> VertexId {
        self.vertices[self.vertices.len() - 1]
    }

    /// Vertices from the source to the target, both included.
    pub fn vertices(&self) -> &[VertexId] {
        &self.vertices
    }

    /// Weights of the traversed edges, parallel to the consecutive pairs of
    /// [`vertices`](Path::vertices).
    pub fn weights(&self) -> &[W] {
        &self.weights
    }

    /// Sum of the traversed edge weights, equal to the distance of the target.
    pub fn total(&self) -> W {
        self.total
    }

    /// Number of edges on the path.
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    pub fn labels<'g>(&'g self, graph: &'g Graph<W>) -> impl Iterator<Item = &'g str> + 'g {
        self.vertices.iter().map(move |&v| &graph[v])
    }
}

/// The target is not reachable from the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no path from {from} to {to}")]
pub struct PathNotFound {
    pub from: VertexId,
    pub to: VertexId,
}

/// The error encountered during a [`ShortestPaths`] run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// An edge with negative weight encountered.
    #[error("edge with negative weight encountered")]
    NegativeWeight,

    /// The source vertex is not in the graph.
    #[error("vertex {0} does not exist")]
    VertexNotFound(VertexId),

    /// An edge not available.
    ///
    /// This error should not happen in normal circumstances. If it does, it
    /// indicates a bad implementation of the graph.
    #[error("edge not available")]
    EdgeNotAvailable,

    #[error(transparent)]
    EmptyFrontier(#[from] EmptyFrontierError),
}

/// Iterator over the vertices on the path from a vertex to the source vertex.
///
/// Returned by [`ShortestPaths::walk_back`].
pub struct PathReconstruction<'a, W> {
    curr: VertexId,
    pred: &'a [Option<(VertexId, W)>],
}

impl<'a, W: Copy> Iterator for PathReconstruction<'a, W> {
    type Item = VertexId;

    fn next(&mut self) -> Option<Self::Item> {
        let (pred, _) = (*self.pred.get(self.curr.as_usize())?)?;
        self.curr = pred;
        Some(pred)
    }
}
