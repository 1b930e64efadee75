#![allow(dead_code)]

use fastrand::Rng;
use petgraph::prelude::*;
use strider::graph::{Graph, RawEdge};

pub const RANDOM_SEED: u64 = 0xef6f79ed30ba75a;

/// Geometric skipping over the lower triangle of the adjacency matrix, so
/// that every pair is an edge with probability `p`.
pub struct RandomEdges {
    v: usize,
    w: usize,
    n: usize,
    p: f32,
}

impl RandomEdges {
    pub fn new(vertex_bound: usize, p: f32) -> Self {
        Self {
            v: 1,
            w: usize::MAX,
            n: vertex_bound,
            p,
        }
    }

    pub fn next_edge(&mut self, rng: &mut Rng) -> Option<(usize, usize)> {
        let Self { v, w, .. } = self;
        let n = self.n;
        let p = self.p;

        if *v >= n {
            return None;
        }

        let r = rng.f32();
        *w = w.wrapping_add(1) + ((1.0 - r).log10() / (1.0 - p).log10()).floor() as usize;

        while *w >= *v && *v < n {
            *w -= *v;
            *v += 1;
        }

        if *v < n { Some((*v, *w)) } else { None }
    }
}

pub fn random_edges(vertex_count: usize, density: f32, rng: &mut Rng) -> Vec<(usize, usize, f64)> {
    let mut edges = RandomEdges::new(vertex_count, density);
    let mut result = Vec::new();

    while let Some((u, v)) = edges.next_edge(rng) {
        result.push((u, v, rng.f64()));
    }

    result
}

pub fn strider_graph(edges: &[(usize, usize, f64)]) -> Graph<f64> {
    Graph::from_edges(
        edges
            .iter()
            .map(|&(u, v, w)| RawEdge::new(u.to_string(), v.to_string(), w)),
    )
}

/// Petgraph counterpart with node indices equal to the vertex ids of
/// [`strider_graph`] built from the same edges.
pub fn petgraph_graph(graph: &Graph<f64>, edges: &[(usize, usize, f64)]) -> UnGraph<(), f64> {
    let mut reference = UnGraph::with_capacity(graph.vertex_count(), edges.len());

    for _ in graph.vertex_ids() {
        reference.add_node(());
    }

    for &(u, v, w) in edges {
        let (Some(u), Some(v)) = (
            graph.vertex_id(&u.to_string()),
            graph.vertex_id(&v.to_string()),
        ) else {
            continue;
        };
        reference.add_edge(NodeIndex::new(u.as_usize()), NodeIndex::new(v.as_usize()), w);
    }

    reference
}
