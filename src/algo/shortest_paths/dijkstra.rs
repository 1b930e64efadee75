use fixedbitset::FixedBitSet;

use crate::{
    core::{VertexId, Weight},
    graph::Graph,
};

use super::{frontier::Frontier, Error, ShortestPaths};

pub fn dijkstra<W, F>(
    graph: &Graph<W>,
    source: VertexId,
    goal: Option<VertexId>,
    mut frontier: F,
) -> Result<ShortestPaths<W>, Error>
where
    W: Weight,
    F: Frontier<VertexId, W>,
{
    if !graph.contains(source) {
        return Err(Error::VertexNotFound(source));
    }

    let vertex_count = graph.vertex_count();

    let mut settled = FixedBitSet::with_capacity(vertex_count);
    let mut dist = vec![W::inf(); vertex_count];
    let mut pred = vec![None; vertex_count];

    dist[source.as_usize()] = W::zero();
    frontier.enqueue(source, W::zero());

    while !frontier.is_empty() {
        let vertex = frontier.dequeue()?;

        // Stale entry of a vertex that was relaxed again after being queued.
        // Processing it again would not change anything, because all its
        // unsettled neighbors already have distance at most this good.
        if settled.put(vertex.as_usize()) {
            continue;
        }

        if goal == Some(vertex) {
            break;
        }

        let vertex_dist = dist[vertex.as_usize()];

        for neighbor in graph.neighbors(vertex) {
            let next = neighbor.id;

            if settled.contains(next.as_usize()) {
                continue;
            }

            let edge_dist = graph
                .weight(neighbor.edge)
                .ok_or(Error::EdgeNotAvailable)?;

            // The check for unsignedness should eliminate the negativity weight
            // check, because the implementation of `is_unsigned` method is
            // always a constant boolean in practice.
            if !W::is_unsigned() && edge_dist < W::zero() {
                return Err(Error::NegativeWeight);
            }

            let next_dist = vertex_dist + edge_dist;

            // Relaxation only on strict improvement, so that the first
            // discovered predecessor is kept on ties.
            if next_dist < dist[next.as_usize()] {
                dist[next.as_usize()] = next_dist;
                pred[next.as_usize()] = Some((vertex, edge_dist));
                // A textbook version of the algorithm would update the
                // priority of `next`. Adding it as a new item causes
                // duplicities which are skipped when dequeued.
                frontier.enqueue(next, next_dist);
            }
        }
    }

    tracing::trace!(
        source = %source,
        settled = settled.count_ones(..),
        "single source search finished"
    );

    Ok(ShortestPaths {
        source,
        dist,
        pred,
        settled,
    })
}
