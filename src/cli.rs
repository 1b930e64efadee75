//! Command line arguments.
//!
//! Flags override the values read from the config file.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use strider::algo::shortest_paths::FrontierKind;

/// Shortest weighted paths between the nodes of CSV edge lists
#[derive(Parser, Debug)]
#[command(name = "strider")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Configuration file [default: strider.toml if present]
    #[arg(long, global = true, env = "STRIDER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log debug information to stderr
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive, e.g. `info` or `strider=trace`
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write the shortest paths between all pairs of nodes to a file
    All(AllArgs),

    /// Find the shortest path between two nodes, interactively unless both
    /// --from and --to are given
    Query(QueryArgs),
}

#[derive(Args, Debug)]
pub struct InputArgs {
    /// CSV edge list files, in the order of loading
    pub inputs: Vec<PathBuf>,

    /// Priority queue implementation (sorted or heap)
    #[arg(long, value_parser = parse_frontier)]
    pub frontier: Option<FrontierKind>,

    /// Output file
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct AllArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Run the searches from different sources in parallel
    #[arg(long)]
    pub parallel: bool,
}

#[derive(Args, Debug)]
pub struct QueryArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Label of the start node
    #[arg(long)]
    pub from: Option<String>,

    /// Label of the end node
    #[arg(long)]
    pub to: Option<String>,
}

fn parse_frontier(s: &str) -> Result<FrontierKind, String> {
    s.parse()
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_query() {
        let cli = Cli::try_parse_from([
            "strider", "-v", "query", "book1.csv", "book2.csv", "--frontier", "sorted", "--from",
            "Arya", "--to", "Jon",
        ])
        .unwrap();

        assert!(cli.verbose);
        let Commands::Query(args) = cli.command else {
            panic!("expected the query command");
        };
        assert_eq!(args.input.inputs.len(), 2);
        assert_eq!(args.input.frontier, Some(FrontierKind::Sorted));
        assert_eq!(args.from.as_deref(), Some("Arya"));
    }

    #[test]
    fn unknown_frontier() {
        assert!(Cli::try_parse_from(["strider", "all", "--frontier", "fibonacci"]).is_err());
    }
}
