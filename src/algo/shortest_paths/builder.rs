use crate::{
    core::{VertexId, Weight},
    graph::Graph,
};

use super::{
    dijkstra::dijkstra,
    frontier::{FrontierKind, HeapFrontier, SortedFrontier},
    Error, ShortestPaths,
};

pub struct ShortestPathsBuilder<'a, W> {
    graph: &'a Graph<W>,
    goal: Option<VertexId>,
    frontier: FrontierKind,
}

impl<W: Weight> ShortestPaths<W> {
    pub fn on(graph: &Graph<W>) -> ShortestPathsBuilder<'_, W> {
        ShortestPathsBuilder {
            graph,
            goal: None,
            frontier: FrontierKind::default(),
        }
    }
}

impl<'a, W: Weight> ShortestPathsBuilder<'a, W> {
    /// Stops the search as soon as the goal is settled. Only the goal and the
    /// vertices settled before it have known distances then.
    pub fn goal(self, goal: VertexId) -> Self {
        Self {
            goal: Some(goal),
            ..self
        }
    }

    pub fn frontier(self, frontier: FrontierKind) -> Self {
        Self { frontier, ..self }
    }

    pub fn run(self, source: VertexId) -> Result<ShortestPaths<W>, Error> {
        let ShortestPathsBuilder {
            graph,
            goal,
            frontier,
        } = self;

        match frontier {
            FrontierKind::Sorted => dijkstra(graph, source, goal, SortedFrontier::new()),
            FrontierKind::Heap => dijkstra(
                graph,
                source,
                goal,
                HeapFrontier::with_capacity(graph.vertex_count()),
            ),
        }
    }
}
