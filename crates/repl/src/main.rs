//! Interactive shell to query routes on a flight graph
use std::path::{Path, PathBuf};

use flight_core::{
    graph::Graph,
    report::Planner,
    statistics::{average_out_degree, max_out_degree},
};
use flight_reader::Request;
use reedline_repl_rs::clap::{value_parser, Arg, ArgMatches, Command};
use reedline_repl_rs::{Repl, Result};

fn arg<'a>(args: &'a ArgMatches, name: &str) -> &'a str {
    args.get_one::<String>(name)
        .map(String::as_str)
        .unwrap_or_default()
}

fn graph_info(g: &Graph) -> String {
    format!(
        "Graph has {} cities and {} edges (avg. out degree {:.2}, max {})",
        g.num_nodes(),
        g.num_edges(),
        average_out_degree(g),
        max_out_degree(g)
    )
}

fn list_neighbors(g: &Graph, city: &str) -> String {
    let lines: Vec<String> = g
        .neighbors(city)
        .map(|edge| {
            format!(
                "{} -> {}. Time: {} Cost: {}",
                city,
                g.city_name(edge.target),
                edge.time,
                edge.cost
            )
        })
        .collect();

    if lines.is_empty() {
        format!("No flights from {}", city)
    } else {
        lines.join("\n")
    }
}

fn plan_route(g: &Graph, origin: &str, destination: &str, sort_key: char) -> String {
    let mut planner = Planner::new(g);
    let plan = planner.plan(1, &Request::new(origin, destination, sort_key));
    format!("{}Took: {:?}", plan, planner.stats.duration)
}

/// Print graph info
fn info(_args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    Ok(Some(graph_info(&context.graph)))
}

fn neighbors(args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    Ok(Some(list_neighbors(&context.graph, arg(&args, "city"))))
}

fn route(args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    let sort_key = arg(&args, "key").chars().next().unwrap_or('C');

    Ok(Some(plan_route(
        &context.graph,
        arg(&args, "origin"),
        arg(&args, "destination"),
        sort_key,
    )))
}

#[derive(Default)]
struct Context {
    graph: Graph,
}

impl Context {
    fn new(graph: Graph) -> Self {
        Self { graph }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // Init Graph
    let Some(path_to_data) = std::env::args().nth(1) else {
        anyhow::bail!("No path to flight data file given");
    };
    let graph = Graph::from_flight_data(Path::new(&path_to_data))?;
    let context = Context::new(graph);

    let mut repl = Repl::new(context)
        .with_name("FlightPlanner")
        .with_version("v0.1.0")
        .with_description("Simple REPL to query flight routes")
        .with_banner("Welcome to FlightPlanner")
        .with_history(PathBuf::from("history"), 100)
        .with_command(Command::new("info").about("Print graph info"), info)
        .with_command(
            Command::new("neighbors")
                .arg(
                    Arg::new("city")
                        .value_parser(value_parser!(String))
                        .required(true)
                        .help("Name of the city"),
                )
                .about("List outgoing flights of a city"),
            neighbors,
        )
        .with_command(
            Command::new("route")
                .arg(
                    Arg::new("origin")
                        .value_parser(value_parser!(String))
                        .required(true)
                        .help("Name of the origin city"),
                )
                .arg(
                    Arg::new("destination")
                        .value_parser(value_parser!(String))
                        .required(true)
                        .help("Name of the destination city"),
                )
                .arg(
                    Arg::new("key")
                        .value_parser(value_parser!(String))
                        .required(false)
                        .help("Rank by time (T) or cost (C)"),
                )
                .about("Show the best routes between two cities"),
            route,
        );

    repl.run().map_err(|e| anyhow::anyhow!("{}", e))
}
