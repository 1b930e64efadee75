//! Text rendering of shortest paths.
//!
//! A path is rendered as a block of three lines:
//!
//! ```text
//! Shortest path from A to C: A -> B -> C
//! Edge weights: 1 -> 2
//! Total weight: 3
//! ```
//!
//! Multiple blocks are separated by a blank line. Numbers switch to exponent
//! notation below `1e-6` and from `1e21` on, e.g. `1e-7` and `1e+21`.

use std::{
    fmt::{self, Display, LowerExp},
    fs,
    path::PathBuf,
};

use thiserror::Error;

use crate::{
    algo::Path,
    core::{VertexId, Weight},
    graph::Graph,
};

/// Default destination of the all pairs report.
pub const ALL_PAIRS_FILE: &str = "all_shortest_paths.txt";

/// Default destination of a single query report.
pub const SINGLE_FILE: &str = "shortest_path.txt";

#[derive(Debug, Error)]
#[error("failed to write {}: {source}", path.display())]
pub struct WriteError {
    pub path: PathBuf,
    #[source]
    source: std::io::Error,
}

/// [`Display`] adapter rendering a path as a block of text.
pub struct PathBlock<'a, W> {
    graph: &'a Graph<W>,
    path: &'a Path<W>,
}

impl<'a, W> PathBlock<'a, W> {
    pub fn new(graph: &'a Graph<W>, path: &'a Path<W>) -> Self {
        Self { graph, path }
    }
}

impl<W: Weight + Display + LowerExp> Display for PathBlock<'_, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self { graph, path } = self;

        write!(
            f,
            "Shortest path from {} to {}: ",
            &graph[path.source()],
            &graph[path.target()]
        )?;
        write_joined(f, path.labels(graph))?;
        f.write_str("\nEdge weights: ")?;
        write_joined(f, path.weights().iter().map(Number))?;
        writeln!(f, "\nTotal weight: {}", Number(path.total()))
    }
}

struct Number<W>(W);

impl<W: Display + LowerExp> Display for Number<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let plain = self.0.to_string();
        let digits = plain.trim_start_matches('-');
        let integral = digits.split('.').next().unwrap_or(digits);

        if integral.len() <= 21 && !digits.starts_with("0.000000") {
            return f.write_str(&plain);
        }

        let exp = format!("{:e}", self.0);
        match exp.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                write!(f, "{mantissa}e+{exponent}")
            }
            _ => f.write_str(&exp),
        }
    }
}

fn write_joined<T: Display>(
    f: &mut fmt::Formatter<'_>,
    items: impl IntoIterator<Item = T>,
) -> fmt::Result {
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            f.write_str(" -> ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

/// Notice reported when the selected pair is not connected.
pub struct NotFound<'a, W> {
    graph: &'a Graph<W>,
    from: VertexId,
    to: VertexId,
}

impl<'a, W> NotFound<'a, W> {
    pub fn new(graph: &'a Graph<W>, from: VertexId, to: VertexId) -> Self {
        Self { graph, from, to }
    }
}

impl<W> Display for NotFound<'_, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "No path found between {} and {}.",
            &self.graph[self.from], &self.graph[self.to]
        )
    }
}

/// Renders all paths as blocks separated by blank lines.
pub fn render_all<W: Weight + Display + LowerExp>(graph: &Graph<W>, paths: &[Path<W>]) -> String {
    paths
        .iter()
        .map(|path| PathBlock::new(graph, path).to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn write_all_pairs<W: Weight + Display + LowerExp>(
    dest: impl Into<PathBuf>,
    graph: &Graph<W>,
    paths: &[Path<W>],
) -> Result<(), WriteError> {
    write_file(dest.into(), render_all(graph, paths))
}

pub fn write_single<W: Weight + Display + LowerExp>(
    dest: impl Into<PathBuf>,
    graph: &Graph<W>,
    path: &Path<W>,
) -> Result<(), WriteError> {
    write_file(dest.into(), PathBlock::new(graph, path).to_string())
}

fn write_file(path: PathBuf, contents: String) -> Result<(), WriteError> {
    match fs::write(&path, contents) {
        Ok(()) => {
            tracing::debug!(path = %path.display(), "report written");
            Ok(())
        }
        Err(source) => Err(WriteError { path, source }),
    }
}

#[cfg(test)]
mod tests {
    use crate::algo::{AllPairs, ShortestPaths};

    use super::*;

    fn graph() -> Graph<f64> {
        Graph::from_edges([("A", "B", 1.0), ("B", "C", 2.0), ("A", "C", 10.0)])
    }

    #[test]
    fn single_block() {
        let graph = graph();
        let a = graph.vertex_id("A").unwrap();
        let c = graph.vertex_id("C").unwrap();
        let path = ShortestPaths::on(&graph).run(a).unwrap().reconstruct(c).unwrap();

        assert_eq!(
            PathBlock::new(&graph, &path).to_string(),
            "Shortest path from A to C: A -> B -> C\nEdge weights: 1 -> 2\nTotal weight: 3\n"
        );
    }

    #[test]
    fn fractional_weights() {
        let graph = Graph::from_edges([("Arya", "Sansa", 2.5)]);
        let arya = graph.vertex_id("Arya").unwrap();
        let sansa = graph.vertex_id("Sansa").unwrap();
        let path = ShortestPaths::on(&graph)
            .run(sansa)
            .unwrap()
            .reconstruct(arya)
            .unwrap();

        assert_eq!(
            PathBlock::new(&graph, &path).to_string(),
            "Shortest path from Sansa to Arya: Sansa -> Arya\nEdge weights: 2.5\nTotal weight: 2.5\n"
        );
    }

    #[test]
    fn number_notation() {
        assert_eq!(Number(3.0).to_string(), "3");
        assert_eq!(Number(0.1 + 0.2).to_string(), "0.30000000000000004");
        assert_eq!(Number(1e-6).to_string(), "0.000001");
        assert_eq!(Number(1e-7).to_string(), "1e-7");
        assert_eq!(Number(1.5e-7).to_string(), "1.5e-7");
        assert_eq!(Number(1e20).to_string(), "100000000000000000000");
        assert_eq!(Number(1e21).to_string(), "1e+21");
        assert_eq!(Number(2.5e300).to_string(), "2.5e+300");
        assert_eq!(Number(u32::MAX).to_string(), "4294967295");
    }

    #[test]
    fn extreme_weights() {
        let graph = Graph::from_edges([("A", "B", 1e-7), ("B", "C", 1e21)]);
        let a = graph.vertex_id("A").unwrap();
        let c = graph.vertex_id("C").unwrap();
        let path = ShortestPaths::on(&graph).run(a).unwrap().reconstruct(c).unwrap();

        assert_eq!(
            PathBlock::new(&graph, &path).to_string(),
            "Shortest path from A to C: A -> B -> C\nEdge weights: 1e-7 -> 1e+21\nTotal weight: 1e+21\n"
        );
    }

    #[test]
    fn not_found_notice() {
        let graph = Graph::from_edges([("A", "B", 1.0), ("C", "D", 1.0)]);
        let a = graph.vertex_id("A").unwrap();
        let c = graph.vertex_id("C").unwrap();

        assert_eq!(
            NotFound::new(&graph, a, c).to_string(),
            "No path found between A and C."
        );
    }

    #[test]
    fn blocks_separated_by_blank_line() {
        let graph = Graph::from_edges([("A", "B", 1.0)]);
        let paths = AllPairs::on(&graph).run().unwrap();

        assert_eq!(
            render_all(&graph, &paths),
            "Shortest path from A to B: A -> B\nEdge weights: 1\nTotal weight: 1\n\
             \n\
             Shortest path from B to A: B -> A\nEdge weights: 1\nTotal weight: 1\n"
        );
    }

    #[test]
    fn write_files() {
        let dir = tempfile::tempdir().unwrap();
        let graph = graph();
        let paths = AllPairs::on(&graph).run().unwrap();

        let all = dir.path().join(ALL_PAIRS_FILE);
        write_all_pairs(&all, &graph, &paths).unwrap();
        assert_eq!(fs::read_to_string(&all).unwrap(), render_all(&graph, &paths));

        let single = dir.path().join(SINGLE_FILE);
        write_single(&single, &graph, &paths[1]).unwrap();
        assert!(fs::read_to_string(&single)
            .unwrap()
            .starts_with("Shortest path from A to C: A -> B -> C\n"));
    }

    #[test]
    fn write_into_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let graph = graph();

        let dest = dir.path().join("missing").join(ALL_PAIRS_FILE);
        let error = write_all_pairs(&dest, &graph, &[]).unwrap_err();

        assert_eq!(error.path, dest);
    }
}
