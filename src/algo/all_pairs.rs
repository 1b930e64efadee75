//! Shortest paths between every ordered pair of distinct vertices.
//!
//! One [single source search](super::ShortestPaths) is run per vertex. The
//! paths are produced source-major and target-minor, both in the registration
//! order of the vertices. Pairs without a connecting path are omitted.
//!
//! # Examples
//!
//! ```
//! use strider::{algo::AllPairs, graph::Graph};
//!
//! let graph = Graph::from_edges([("A", "B", 1.0), ("B", "C", 2.0), ("X", "Y", 4.0)]);
//! let paths = AllPairs::on(&graph).run().unwrap();
//!
//! // A-B, A-C, B-A, B-C, C-A, C-B, X-Y, Y-X
//! assert_eq!(paths.len(), 8);
//! assert_eq!(paths[1].total(), 3.0);
//! ```

use rayon::prelude::*;

use crate::{
    core::{VertexId, Weight},
    graph::Graph,
};

use super::shortest_paths::{Error, FrontierKind, Path, ShortestPaths};

pub struct AllPairs;

pub struct AllPairsBuilder<'a, W> {
    graph: &'a Graph<W>,
    frontier: FrontierKind,
    parallel: bool,
}

impl AllPairs {
    pub fn on<W: Weight>(graph: &Graph<W>) -> AllPairsBuilder<'_, W> {
        AllPairsBuilder {
            graph,
            frontier: FrontierKind::default(),
            parallel: false,
        }
    }
}

impl<'a, W: Weight> AllPairsBuilder<'a, W> {
    pub fn frontier(self, frontier: FrontierKind) -> Self {
        Self { frontier, ..self }
    }

    /// Runs the searches from different sources on the rayon thread pool. The
    /// output order is the same as in the sequential run.
    pub fn parallel(self, parallel: bool) -> Self {
        Self { parallel, ..self }
    }

    #[tracing::instrument(level = "debug", skip(self), fields(vertices = self.graph.vertex_count(), frontier = %self.frontier, parallel = self.parallel))]
    pub fn run(self) -> Result<Vec<Path<W>>, Error>
    where
        W: Send + Sync,
    {
        let sources = self.graph.vertex_ids().collect::<Vec<_>>();

        let per_source = if self.parallel {
            sources
                .par_iter()
                .map(|&source| self.paths_from(source))
                .collect::<Result<Vec<_>, _>>()?
        } else {
            sources
                .iter()
                .map(|&source| self.paths_from(source))
                .collect::<Result<Vec<_>, _>>()?
        };

        let paths = per_source.into_iter().flatten().collect::<Vec<_>>();

        tracing::info!(
            pairs = paths.len(),
            unreachable = sources.len() * sources.len().saturating_sub(1) - paths.len(),
            "all pairs shortest paths computed"
        );

        Ok(paths)
    }

    fn paths_from(&self, source: VertexId) -> Result<Vec<Path<W>>, Error> {
        let shortest_paths = ShortestPaths::on(self.graph)
            .frontier(self.frontier)
            .run(source)?;

        Ok(self
            .graph
            .vertex_ids()
            .filter(|&target| target != source)
            .filter_map(|target| shortest_paths.reconstruct(target).ok())
            .collect())
    }
}
