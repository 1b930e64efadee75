use std::{
    io,
    path::{Path, PathBuf},
};

use strider::{
    algo::AllPairs,
    config::Config,
    core::VertexId,
    error::{Error, Result},
    graph::Graph,
    io::{load_all, report},
    query::Session,
};

use crate::cli::{AllArgs, Cli, Commands, InputArgs, QueryArgs};

pub fn run(cli: &Cli) -> Result<()> {
    let config = Config::discover(cli.config.as_deref())?;

    match &cli.command {
        Commands::All(args) => all(&config, args),
        Commands::Query(args) => query(&config, args),
    }
}

fn load_graph(config: &Config, args: &InputArgs) -> Result<Graph<f64>> {
    let inputs = if args.inputs.is_empty() {
        &config.inputs
    } else {
        &args.inputs
    };

    if inputs.is_empty() {
        return Err(Error::NoInputs);
    }

    let edges = load_all(inputs, &config.load_options()?)?;
    Ok(Graph::from_edges(edges))
}

fn all(config: &Config, args: &AllArgs) -> Result<()> {
    let graph = load_graph(config, &args.input)?;
    let output = output_path(&args.input, &config.output.all_pairs);

    let paths = AllPairs::on(&graph)
        .frontier(args.input.frontier.unwrap_or(config.frontier))
        .parallel(args.parallel || config.parallel)
        .run()?;

    report::write_all_pairs(&output, &graph, &paths)?;

    println!(
        "All shortest paths have been written to '{}'.",
        output.display()
    );

    Ok(())
}

fn query(config: &Config, args: &QueryArgs) -> Result<()> {
    let pair = match (&args.from, &args.to) {
        (Some(from), Some(to)) => Some((from, to)),
        (None, None) => None,
        _ => return Err(Error::IncompletePair),
    };

    let graph = load_graph(config, &args.input)?;

    let mut session = Session::new(&graph, io::stdin().lock(), io::stdout().lock())
        .frontier(args.input.frontier.unwrap_or(config.frontier))
        .save_to(output_path(&args.input, &config.output.single));

    match pair {
        Some((from, to)) => {
            let from = vertex(&graph, from)?;
            let to = vertex(&graph, to)?;
            session.answer(from, to)?;
        }
        None => {
            session.run()?;
        }
    }

    Ok(())
}

fn vertex(graph: &Graph<f64>, label: &str) -> Result<VertexId> {
    graph
        .vertex_id(label)
        .ok_or_else(|| Error::UnknownNode(label.to_string()))
}

fn output_path(args: &InputArgs, configured: &Path) -> PathBuf {
    args.output
        .clone()
        .unwrap_or_else(|| configured.to_path_buf())
}
