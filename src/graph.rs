//! Simple undirected graph with labeled vertices.
//!
//! A [`Graph`] is assembled once from a sequence of [`RawEdge`]s by the
//! [`GraphBuilder`] and never changes afterwards. Parallel edges of the raw
//! sequence are collapsed to a single edge carrying the weight of the first
//! occurrence, see [`GraphBuilder`] for the exact rules.
//!
//! # Examples
//!
//! ```
//! use strider::graph::Graph;
//!
//! let graph = Graph::from_edges([
//!     ("Arya", "Sansa", 4.0),
//!     ("Sansa", "Jon", 2.0),
//!     ("Jon", "Sansa", 9.0),
//! ]);
//!
//! assert_eq!(graph.vertex_count(), 3);
//! assert_eq!(graph.edge_count(), 2);
//!
//! let sansa = graph.vertex_id("Sansa").unwrap();
//! let jon = graph.vertex_id("Jon").unwrap();
//! assert_eq!(graph.weight_between(jon, sansa), Some(2.0));
//! ```

use std::ops::Index;

use rustc_hash::FxHashMap;

use crate::{
    core::{EdgeId, VertexId, Weight},
    storage::{AdjList, NeighborsIter},
};

mod builder;

pub use builder::GraphBuilder;

/// One record of an edge list, before deduplication.
#[derive(Debug, Clone, PartialEq)]
pub struct RawEdge<W> {
    pub source: String,
    pub target: String,
    pub weight: W,
}

impl<W> RawEdge<W> {
    pub fn new(source: impl Into<String>, target: impl Into<String>, weight: W) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            weight,
        }
    }
}

impl<S: Into<String>, T: Into<String>, W> From<(S, T, W)> for RawEdge<W> {
    fn from((source, target, weight): (S, T, W)) -> Self {
        Self::new(source, target, weight)
    }
}

#[derive(Debug, Clone)]
pub struct Graph<W = f64> {
    storage: AdjList<String, W>,
    index: FxHashMap<String, VertexId>,
}

impl<W: Weight> Graph<W> {
    pub fn from_edges<I, T>(edges: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<RawEdge<W>>,
    {
        GraphBuilder::new().extend(edges).build()
    }

    pub(crate) fn from_parts(
        storage: AdjList<String, W>,
        index: FxHashMap<String, VertexId>,
    ) -> Self {
        Self { storage, index }
    }

    pub fn vertex_count(&self) -> usize {
        self.storage.vertex_count()
    }

    pub fn edge_count(&self) -> usize {
        self.storage.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.vertex_count() == 0
    }

    /// Vertex IDs in registration order.
    pub fn vertex_ids(&self) -> impl ExactSizeIterator<Item = VertexId> + '_ {
        self.storage.vertex_ids()
    }

    /// Vertex labels in registration order.
    pub fn labels(&self) -> impl Iterator<Item = &str> + '_ {
        self.storage.vertices().map(|(_, label)| label.as_str())
    }

    pub fn vertex_id(&self, label: &str) -> Option<VertexId> {
        self.index.get(label).copied()
    }

    pub fn label(&self, id: VertexId) -> Option<&str> {
        self.storage.vertex(id).map(String::as_str)
    }

    pub fn contains(&self, id: VertexId) -> bool {
        id.as_usize() < self.vertex_count()
    }

    /// Neighbors in registration order.
    pub fn neighbors(&self, id: VertexId) -> NeighborsIter<'_> {
        self.storage.neighbors(id)
    }

    pub fn weight(&self, edge: EdgeId) -> Option<W> {
        self.storage.edge(edge).copied()
    }

    pub fn edge_between(&self, u: VertexId, v: VertexId) -> Option<EdgeId> {
        self.storage.edge_id_between(u, v)
    }

    pub fn weight_between(&self, u: VertexId, v: VertexId) -> Option<W> {
        self.edge_between(u, v).and_then(|edge| self.weight(edge))
    }
}

impl<W> Index<VertexId> for Graph<W> {
    type Output = str;

    fn index(&self, id: VertexId) -> &Self::Output {
        self.storage
            .vertex(id)
            .map(String::as_str)
            .expect("vertex does not exist")
    }
}
