use rustc_hash::{FxHashMap, FxHashSet};

use crate::{
    core::{VertexId, Weight},
    storage::AdjList,
};

use super::{Graph, RawEdge};

/// Collects raw edges and materializes them into a simple [`Graph`].
///
/// Every raw edge is recorded in both directions in an insertion-ordered
/// adjacency structure which may contain any number of entries for the same
/// pair of vertices. On [`build`](GraphBuilder::build), vertices are registered
/// in the order of their first appearance and then, for each vertex in turn,
/// its recorded neighbors are scanned and an edge is added unless the pair is
/// already connected. Hence an edge carries the weight of the first occurrence
/// of its pair in the raw sequence and later occurrences are dropped (neither
/// summed nor minimized).
///
/// The neighbors of every vertex are finally ordered by registration. The
/// shortest paths search visits neighbors in this order, so it decides which
/// of several equally short paths is found.
#[derive(Debug, Clone)]
pub struct GraphBuilder<W> {
    slots: FxHashMap<String, usize>,
    adjacency: Vec<(String, Vec<(usize, W)>)>,
    raw_count: usize,
}

impl<W: Weight> GraphBuilder<W> {
    pub fn new() -> Self {
        Self {
            slots: FxHashMap::default(),
            adjacency: Vec::new(),
            raw_count: 0,
        }
    }

    pub fn push(&mut self, edge: impl Into<RawEdge<W>>) {
        let RawEdge {
            source,
            target,
            weight,
        } = edge.into();

        let source = self.slot(source);
        let target = self.slot(target);

        self.adjacency[source].1.push((target, weight));
        self.adjacency[target].1.push((source, weight));
        self.raw_count += 1;
    }

    pub fn extend<I, T>(mut self, edges: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<RawEdge<W>>,
    {
        for edge in edges {
            self.push(edge);
        }
        self
    }

    fn slot(&mut self, label: String) -> usize {
        if let Some(&slot) = self.slots.get(&label) {
            return slot;
        }

        let slot = self.adjacency.len();
        self.slots.insert(label.clone(), slot);
        self.adjacency.push((label, Vec::new()));
        slot
    }

    #[tracing::instrument(level = "debug", skip(self), fields(raw_edges = self.raw_count))]
    pub fn build(self) -> Graph<W> {
        let GraphBuilder {
            slots,
            adjacency,
            raw_count,
        } = self;

        let mut storage = AdjList::with_capacity(adjacency.len(), raw_count);
        let mut neighbors = Vec::with_capacity(adjacency.len());

        // Slots are dense and assigned in insertion order, so they coincide
        // with the vertex IDs.
        for (label, recorded) in adjacency {
            storage.add_vertex(label);
            neighbors.push(recorded);
        }

        let mut connected = FxHashSet::default();

        for (u, recorded) in neighbors.into_iter().enumerate() {
            for (v, weight) in recorded {
                let pair = if u <= v { (u, v) } else { (v, u) };

                if connected.insert(pair) {
                    storage.add_edge(VertexId::from_usize(u), VertexId::from_usize(v), weight);
                }
            }
        }

        storage.sort_neighbors();

        let index = slots
            .into_iter()
            .map(|(label, slot)| (label, VertexId::from_usize(slot)))
            .collect();

        tracing::debug!(
            vertices = storage.vertex_count(),
            edges = storage.edge_count(),
            dropped = raw_count - storage.edge_count(),
            "graph built"
        );

        Graph::from_parts(storage, index)
    }
}

impl<W: Weight> Default for GraphBuilder<W> {
    fn default() -> Self {
        Self::new()
    }
}
