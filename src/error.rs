//! Top-level error type and process exit codes.
//!
//! Exit codes:
//! - 0: success
//! - 1: generic failure
//! - 2: usage error (bad flags or arguments)
//! - 3: data error (unreadable or invalid input files)

use thiserror::Error;

use crate::{
    algo::shortest_paths,
    config::ConfigError,
    io::{LoadError, WriteError},
    query::QueryError,
};

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    Success = 0,
    Failure = 1,
    Usage = 2,
    Data = 3,
}

impl From<ExitCode> for u8 {
    fn from(code: ExitCode) -> u8 {
        code as u8
    }
}

#[derive(Debug, Error)]
pub enum Error {
    // Usage errors
    #[error("no input files given (pass them as arguments or set `inputs` in the config)")]
    NoInputs,

    #[error("node `{0}` does not exist")]
    UnknownNode(String),

    #[error("both --from and --to must be given for a single query")]
    IncompletePair,

    #[error(transparent)]
    Config(#[from] ConfigError),

    // Data errors
    #[error(transparent)]
    Load(#[from] LoadError),

    // Generic failures
    #[error(transparent)]
    ShortestPaths(#[from] shortest_paths::Error),

    #[error(transparent)]
    Write(#[from] WriteError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Error::NoInputs | Error::UnknownNode(_) | Error::IncompletePair | Error::Config(_) => {
                ExitCode::Usage
            }
            Error::Load(_) => ExitCode::Data,
            Error::ShortestPaths(_) | Error::Write(_) | Error::Io(_) => ExitCode::Failure,
        }
    }
}

impl From<QueryError> for Error {
    fn from(error: QueryError) -> Self {
        match error {
            QueryError::Io(error) => Error::Io(error),
            QueryError::ShortestPaths(error) => Error::ShortestPaths(error),
            QueryError::Write(error) => Error::Write(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn exit_codes() {
        assert_eq!(Error::NoInputs.exit_code(), ExitCode::Usage);
        assert_eq!(Error::UnknownNode("Hodor".into()).exit_code(), ExitCode::Usage);

        let load = LoadError::MissingColumn {
            path: PathBuf::from("book1.csv"),
            column: "weight".into(),
        };
        assert_eq!(Error::from(load).exit_code(), ExitCode::Data);

        let negative = shortest_paths::Error::NegativeWeight;
        assert_eq!(Error::from(negative).exit_code(), ExitCode::Failure);
        assert_eq!(u8::from(ExitCode::Data), 3);
    }

    #[test]
    fn query_errors_flatten() {
        let error = Error::from(QueryError::ShortestPaths(shortest_paths::Error::NegativeWeight));
        assert_eq!(error.to_string(), "edge with negative weight encountered");
    }
}
