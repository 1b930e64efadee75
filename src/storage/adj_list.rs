use std::slice::Iter;

use crate::core::{EdgeId, VertexId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjVertex<V> {
    pub attr: V,
    /// Incident edges in the order they were added.
    pub edges: Vec<EdgeId>,
}

impl<V> AdjVertex<V> {
    pub fn new(attr: V) -> Self {
        Self {
            attr,
            edges: Vec::new(),
        }
    }
}

/// Undirected adjacency list.
///
/// Every vertex keeps the list of its incident edges, every edge keeps its two
/// endpoints. A self-loop is recorded only once in the incidence list of its
/// vertex.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjList<V, E> {
    vertices: Vec<AdjVertex<V>>,
    edges: Vec<E>,
    endpoints: Vec<[VertexId; 2]>,
}

impl<V, E> AdjList<V, E> {
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            edges: Vec::new(),
            endpoints: Vec::new(),
        }
    }

    pub fn with_capacity(vertex_count: usize, edge_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            edges: Vec::with_capacity(edge_count),
            endpoints: Vec::with_capacity(edge_count),
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn vertex_ids(&self) -> impl ExactSizeIterator<Item = VertexId> + '_ {
        (0..self.vertices.len()).map(VertexId::from_usize)
    }

    pub fn vertex(&self, id: VertexId) -> Option<&V> {
        self.vertices.get(id.as_usize()).map(|vertex| &vertex.attr)
    }

    pub fn vertices(&self) -> impl Iterator<Item = (VertexId, &V)> + '_ {
        self.vertices
            .iter()
            .enumerate()
            .map(|(index, vertex)| (VertexId::from_usize(index), &vertex.attr))
    }

    pub fn edge(&self, id: EdgeId) -> Option<&E> {
        self.edges.get(id.as_usize())
    }

    pub fn add_vertex(&mut self, attr: V) -> VertexId {
        let id = VertexId::from_usize(self.vertices.len());
        self.vertices.push(AdjVertex::new(attr));
        id
    }

    /// Adds an edge between two existing vertices.
    ///
    /// # Panics
    ///
    /// Panics if any of the endpoints does not exist.
    pub fn add_edge(&mut self, from: VertexId, to: VertexId, attr: E) -> EdgeId {
        assert!(
            from.as_usize() < self.vertices.len() && to.as_usize() < self.vertices.len(),
            "edge endpoint does not exist"
        );

        let id = EdgeId::from_usize(self.edges.len());
        self.edges.push(attr);
        self.endpoints.push([from, to]);

        self.vertices[from.as_usize()].edges.push(id);
        if from != to {
            self.vertices[to.as_usize()].edges.push(id);
        }

        id
    }

    /// Finds the edge connecting the two vertices in any direction.
    pub fn edge_id_between(&self, u: VertexId, v: VertexId) -> Option<EdgeId> {
        let (u_vertex, v_vertex) = (
            self.vertices.get(u.as_usize())?,
            self.vertices.get(v.as_usize())?,
        );

        // Scan the shorter incidence list.
        let (from, edges) = if u_vertex.edges.len() <= v_vertex.edges.len() {
            (u, &u_vertex.edges)
        } else {
            (v, &v_vertex.edges)
        };
        let to = if from == u { v } else { u };

        edges
            .iter()
            .copied()
            .find(|edge| other_endpoint(self.endpoints[edge.as_usize()], from) == to)
    }

    /// Reorders the incident edges of every vertex by the ID of the neighbor
    /// they lead to. The order among parallel edges is kept.
    pub fn sort_neighbors(&mut self) {
        let endpoints = &self.endpoints;

        for (index, vertex) in self.vertices.iter_mut().enumerate() {
            let from = VertexId::from_usize(index);
            vertex
                .edges
                .sort_by_key(|edge| other_endpoint(endpoints[edge.as_usize()], from));
        }
    }

    /// Neighbors of the vertex in the order of its incident edges.
    pub fn neighbors(&self, id: VertexId) -> NeighborsIter<'_> {
        let edges = self
            .vertices
            .get(id.as_usize())
            .map(|vertex| vertex.edges.as_slice())
            .unwrap_or_default();

        NeighborsIter {
            pred: id,
            edges: edges.iter(),
            endpoints: &self.endpoints,
        }
    }
}

impl<V, E> Default for AdjList<V, E> {
    fn default() -> Self {
        Self::new()
    }
}

fn other_endpoint(endpoints: [VertexId; 2], from: VertexId) -> VertexId {
    if endpoints[0] == from {
        endpoints[1]
    } else {
        endpoints[0]
    }
}

/// A neighbor reached from vertex `pred` through `edge`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NeighborRef {
    pub id: VertexId,
    pub edge: EdgeId,
    pub pred: VertexId,
}

pub struct NeighborsIter<'a> {
    pred: VertexId,
    edges: Iter<'a, EdgeId>,
    endpoints: &'a [[VertexId; 2]],
}

impl<'a> Iterator for NeighborsIter<'a> {
    type Item = NeighborRef;

    fn next(&mut self) -> Option<Self::Item> {
        let edge = *self.edges.next()?;
        let id = other_endpoint(self.endpoints[edge.as_usize()], self.pred);

        Some(NeighborRef {
            id,
            edge,
            pred: self.pred,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.edges.size_hint()
    }
}
