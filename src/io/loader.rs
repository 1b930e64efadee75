//! Reading edge lists from CSV files.
//!
//! Every file must have a header row naming at least the source, target and
//! weight columns (see [`Columns`]). Labels are trimmed of surrounding
//! whitespace, weights must be finite non-negative numbers.

use std::{
    fs::File,
    io::Read,
    path::{Path, PathBuf},
};

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::graph::RawEdge;

/// Names of the CSV columns holding the edge fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Columns {
    pub source: String,
    pub target: String,
    pub weight: String,
}

impl Default for Columns {
    fn default() -> Self {
        Self {
            source: "Source".to_string(),
            target: "Target".to_string(),
            weight: "weight".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadOptions {
    pub columns: Columns,
    pub delimiter: u8,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            columns: Columns::default(),
            delimiter: b',',
        }
    }
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to open {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed CSV in {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("{}: missing column `{column}`", path.display())]
    MissingColumn { path: PathBuf, column: String },

    #[error("{}:{line}: invalid weight `{value}` (expected a non-negative number)", path.display())]
    InvalidWeight {
        path: PathBuf,
        line: u64,
        value: String,
    },
}

/// Loads a single CSV file.
#[tracing::instrument(level = "debug", skip_all, fields(path = %path.display()))]
pub fn load_csv(path: &Path, options: &LoadOptions) -> Result<Vec<RawEdge<f64>>, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let edges = read_edges(file, path, options)?;

    tracing::info!(path = %path.display(), edges = edges.len(), "loaded edge list");

    Ok(edges)
}

/// Loads all files concurrently and concatenates their edges in the order of
/// `paths`. Fails if any of the files fails to load.
#[tracing::instrument(level = "debug", skip_all, fields(files = paths.len()))]
pub fn load_all<P>(paths: &[P], options: &LoadOptions) -> Result<Vec<RawEdge<f64>>, LoadError>
where
    P: AsRef<Path> + Sync,
{
    let per_file = paths
        .par_iter()
        .map(|path| load_csv(path.as_ref(), options))
        .collect::<Result<Vec<_>, _>>()?;

    let edges = per_file.into_iter().flatten().collect::<Vec<_>>();

    tracing::info!(edges = edges.len(), "total edges loaded");

    Ok(edges)
}

/// Reads edges from any CSV source. `path` is used for error reporting only.
pub fn read_edges<R: Read>(
    reader: R,
    path: &Path,
    options: &LoadOptions,
) -> Result<Vec<RawEdge<f64>>, LoadError> {
    let csv_error = |source| LoadError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(options.delimiter)
        .from_reader(reader);

    let headers = reader.headers().map_err(csv_error)?.clone();
    let column = |name: &str| {
        headers
            .iter()
            .position(|header| header.trim() == name)
            .ok_or_else(|| LoadError::MissingColumn {
                path: path.to_path_buf(),
                column: name.to_string(),
            })
    };

    let source_at = column(&options.columns.source)?;
    let target_at = column(&options.columns.target)?;
    let weight_at = column(&options.columns.weight)?;

    let mut edges = Vec::new();

    for record in reader.records() {
        let record = record.map_err(csv_error)?;
        let field = |at: usize| record.get(at).unwrap_or_default().trim();

        let raw_weight = field(weight_at);
        let weight = parse_weight(raw_weight).ok_or_else(|| LoadError::InvalidWeight {
            path: path.to_path_buf(),
            line: record.position().map_or(0, |position| position.line()),
            value: raw_weight.to_string(),
        })?;

        edges.push(RawEdge::new(field(source_at), field(target_at), weight));
    }

    Ok(edges)
}

fn parse_weight(value: &str) -> Option<f64> {
    value
        .parse::<f64>()
        .ok()
        .filter(|weight| weight.is_finite() && *weight >= 0.0)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use assert_matches::assert_matches;

    use super::*;

    fn read(input: &str) -> Result<Vec<RawEdge<f64>>, LoadError> {
        read_edges(input.as_bytes(), Path::new("book.csv"), &LoadOptions::default())
    }

    #[test]
    fn trims_labels() {
        let edges = read("Source,Target,Type,weight\n Arya , Sansa ,Undirected,4\nJon,Sansa,Undirected,2.5\n")
            .unwrap();

        assert_eq!(
            edges,
            vec![
                RawEdge::new("Arya", "Sansa", 4.0),
                RawEdge::new("Jon", "Sansa", 2.5),
            ]
        );
    }

    #[test]
    fn column_order_does_not_matter() {
        let edges = read("weight,Target,Source\n7,B,A\n").unwrap();
        assert_eq!(edges, vec![RawEdge::new("A", "B", 7.0)]);
    }

    #[test]
    fn custom_columns_and_delimiter() {
        let options = LoadOptions {
            columns: Columns {
                source: "from".to_string(),
                target: "to".to_string(),
                weight: "cost".to_string(),
            },
            delimiter: b';',
        };

        let edges = read_edges("from;to;cost\nA;B;1\n".as_bytes(), Path::new("x"), &options).unwrap();
        assert_eq!(edges, vec![RawEdge::new("A", "B", 1.0)]);
    }

    #[test]
    fn missing_column() {
        assert_matches!(
            read("Source,Target\nA,B\n"),
            Err(LoadError::MissingColumn { column, .. }) if column == "weight"
        );
    }

    #[test]
    fn invalid_weights() {
        assert_matches!(
            read("Source,Target,weight\nA,B,1\nA,C,heavy\n"),
            Err(LoadError::InvalidWeight { line: 3, value, .. }) if value == "heavy"
        );
        assert_matches!(
            read("Source,Target,weight\nA,B,-2\n"),
            Err(LoadError::InvalidWeight { .. })
        );
        assert_matches!(
            read("Source,Target,weight\nA,B,NaN\n"),
            Err(LoadError::InvalidWeight { .. })
        );
    }

    #[test]
    fn ragged_record() {
        assert_matches!(
            read("Source,Target,weight\nA,B\n"),
            Err(LoadError::Csv { .. })
        );
    }

    #[test]
    fn load_all_keeps_file_order() {
        let dir = tempfile::tempdir().unwrap();
        let mut paths = Vec::new();

        for (i, rows) in ["A,B,1\n", "B,C,2\nC,D,3\n", "D,E,4\n"].iter().enumerate() {
            let path = dir.path().join(format!("book{}.csv", i + 1));
            let mut file = File::create(&path).unwrap();
            write!(file, "Source,Target,weight\n{rows}").unwrap();
            paths.push(path);
        }

        let edges = load_all(&paths, &LoadOptions::default()).unwrap();
        let sources = edges.iter().map(|e| e.source.as_str()).collect::<Vec<_>>();

        assert_eq!(sources, vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn load_all_fails_on_any_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let present = dir.path().join("present.csv");
        std::fs::write(&present, "Source,Target,weight\nA,B,1\n").unwrap();

        let result = load_all(
            &[present, dir.path().join("absent.csv")],
            &LoadOptions::default(),
        );

        assert_matches!(result, Err(LoadError::Io { path, .. }) if path.ends_with("absent.csv"));
    }
}
