//! Interactive shortest path queries.
//!
//! A [`Session`] lists the vertices, asks for two of them by their 1-based
//! number, reports the shortest path between them and asks whether to
//! continue. Invalid selections are reported and asked again. The session
//! ends when the answer to the last question is anything other than `y` or
//! when the input is exhausted.
//!
//! The session is generic over its input and output so that it can be driven
//! by any reader, not just a terminal.

use std::{
    fmt::{Display, LowerExp},
    io::{self, BufRead, Write},
    path::PathBuf,
};

use thiserror::Error;

use crate::{
    algo::{
        shortest_paths::{self, FrontierKind},
        Path, ShortestPaths,
    },
    core::{VertexId, Weight},
    graph::Graph,
    io::report::{self, NotFound, PathBlock, WriteError},
};

/// A selection that does not name a vertex.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidSelection {
    #[error("`{0}` is not a positive number")]
    Malformed(String),

    #[error("{index} is not between 1 and {count}")]
    OutOfRange { index: usize, count: usize },
}

#[derive(Debug, Error)]
pub enum QueryError {
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    ShortestPaths(#[from] shortest_paths::Error),

    #[error(transparent)]
    Write(#[from] WriteError),
}

/// Parses a 1-based vertex number.
pub fn parse_selection(input: &str, count: usize) -> Result<VertexId, InvalidSelection> {
    let input = input.trim();
    let index = input
        .parse::<usize>()
        .ok()
        .filter(|&index| index > 0)
        .ok_or_else(|| InvalidSelection::Malformed(input.to_string()))?;

    if index > count {
        return Err(InvalidSelection::OutOfRange { index, count });
    }

    Ok(VertexId::from_usize(index - 1))
}

pub struct Session<'g, W, R, O> {
    graph: &'g Graph<W>,
    input: R,
    output: O,
    frontier: FrontierKind,
    save_to: Option<PathBuf>,
}

impl<'g, W, R, O> Session<'g, W, R, O>
where
    W: Weight + Display + LowerExp,
    R: BufRead,
    O: Write,
{
    pub fn new(graph: &'g Graph<W>, input: R, output: O) -> Self {
        Self {
            graph,
            input,
            output,
            frontier: FrontierKind::default(),
            save_to: None,
        }
    }

    pub fn frontier(self, frontier: FrontierKind) -> Self {
        Self { frontier, ..self }
    }

    /// Every found path is also written to this file, replacing the previous
    /// one.
    pub fn save_to(self, path: impl Into<PathBuf>) -> Self {
        Self {
            save_to: Some(path.into()),
            ..self
        }
    }

    /// Runs the query loop until the user declines to continue or the input
    /// ends. Returns the number of answered queries.
    #[tracing::instrument(level = "debug", skip_all, fields(vertices = self.graph.vertex_count()))]
    pub fn run(&mut self) -> Result<usize, QueryError> {
        if self.graph.is_empty() {
            writeln!(self.output, "The graph has no nodes to choose from.")?;
            return Ok(0);
        }

        let mut answered = 0;

        loop {
            let Some((from, to)) = self.select_pair()? else {
                break;
            };

            writeln!(
                self.output,
                "\nFinding path between {} and {}...",
                &self.graph[from], &self.graph[to]
            )?;
            self.answer(from, to)?;
            answered += 1;

            match self.prompt("\nWould you like to find another path? (y/n): ")? {
                Some(answer) if answer.trim().eq_ignore_ascii_case("y") => continue,
                _ => break,
            }
        }

        tracing::debug!(answered, "query session finished");

        Ok(answered)
    }

    /// Lists the vertices and asks for two of them until both name a vertex.
    /// Returns `None` if the input ends first.
    pub fn select_pair(&mut self) -> Result<Option<(VertexId, VertexId)>, QueryError> {
        let count = self.graph.vertex_count();

        loop {
            self.list_vertices()?;

            let Some(first) = self.prompt("\nSelect first node (number): ")? else {
                return Ok(None);
            };
            let Some(second) = self.prompt("Select second node (number): ")? else {
                return Ok(None);
            };

            let selections = [
                parse_selection(&first, count),
                parse_selection(&second, count),
            ];

            if let [Ok(from), Ok(to)] = &selections {
                return Ok(Some((*from, *to)));
            }

            // A malformed number is reported before an out of range one,
            // whichever of the two inputs it is.
            let malformed = selections
                .iter()
                .any(|selection| matches!(selection, Err(InvalidSelection::Malformed(_))));

            let message = if malformed {
                "Invalid input. Please enter valid numbers."
            } else {
                "Invalid selection. Please try again."
            };

            for error in selections.iter().filter_map(|selection| selection.as_ref().err()) {
                tracing::debug!(%error, "invalid selection");
            }
            writeln!(self.output, "{message}")?;
        }
    }

    /// Finds and reports the shortest path between two vertices.
    pub fn answer(&mut self, from: VertexId, to: VertexId) -> Result<Option<Path<W>>, QueryError> {
        let shortest_paths = ShortestPaths::on(self.graph)
            .goal(to)
            .frontier(self.frontier)
            .run(from)?;

        match shortest_paths.reconstruct(to) {
            Ok(path) => {
                writeln!(self.output, "{}", PathBlock::new(self.graph, &path))?;

                if let Some(dest) = &self.save_to {
                    report::write_single(dest, self.graph, &path)?;
                }

                Ok(Some(path))
            }
            Err(not_found) => {
                tracing::debug!(%not_found, "query without result");
                writeln!(self.output, "{}", NotFound::new(self.graph, from, to))?;
                Ok(None)
            }
        }
    }

    fn list_vertices(&mut self) -> Result<(), QueryError> {
        for (i, label) in self.graph.labels().enumerate() {
            writeln!(self.output, "{}: {label}", i + 1)?;
        }
        Ok(())
    }

    fn prompt(&mut self, text: &str) -> Result<Option<String>, QueryError> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        Ok(Some(line))
    }
}
