//! Route between two nodes of a saved floor snapshot.
//!
//! Usage:
//!   navix-route --nodes floor_1.json --from Entrance --to Library
//!   navix-route --nodes floor_1.json --from node_1 --to node_9 --avoid-stairs
//!   navix-route --nodes floor_1.json --list-destinations
//!
//! Exit codes: 0 route found, 1 bad input, 2 no route.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{error, info, warn};
use thiserror::Error;

use navix_map::io::load_document;
use navix_map::{ConfigLoadError, FloorSnapshot, GraphError, IoError, NavixConfig, RoutePlanner};

/// Plan a route over a floor's node graph
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Node snapshot file (JSON array or floor document)
    #[arg(short, long)]
    nodes: PathBuf,

    /// Start node id or destination name
    #[arg(short, long, required_unless_present = "list_destinations")]
    from: Option<String>,

    /// Target node id or destination name
    #[arg(short, long, required_unless_present = "list_destinations")]
    to: Option<String>,

    /// Exclude stairs from the route
    #[arg(long)]
    avoid_stairs: bool,

    /// Configuration file (defaults to configs/navix.yaml if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print named destinations and exit
    #[arg(long)]
    list_destinations: bool,
}

#[derive(Error, Debug)]
enum CliError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigLoadError),

    #[error("{0}")]
    Io(#[from] IoError),

    #[error("Invalid snapshot: {0}")]
    Graph(#[from] GraphError),
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    match run(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(2),
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

/// Returns Ok(false) when no route exists.
fn run(args: &Args) -> Result<bool, CliError> {
    let config = match &args.config {
        Some(path) => NavixConfig::load(path)?,
        None => NavixConfig::load_default()?,
    };

    let document = load_document(&args.nodes)?;
    let snapshot = document.into_snapshot()?;
    info!("Loaded {} nodes from {:?}", snapshot.len(), args.nodes);

    let dangling = snapshot.dangling_references();
    if !dangling.is_empty() {
        warn!("{} links point at missing nodes", dangling.len());
    }

    if args.list_destinations {
        for node in snapshot.destinations() {
            println!(
                "{}\t{}\t{}",
                node.id,
                node.node_type,
                node.name.as_deref().unwrap_or_default()
            );
        }
        return Ok(true);
    }

    let (Some(from), Some(to)) = (args.from.as_deref(), args.to.as_deref()) else {
        return Ok(false);
    };
    let start = resolve(&snapshot, from);
    let target = resolve(&snapshot, to);

    let mut routing = config.to_routing_config();
    routing.avoid_stairs |= args.avoid_stairs;

    let result = RoutePlanner::new(&snapshot, routing).plan(start, target);
    if let Some(reason) = result.failure_reason {
        println!("no route: {reason}");
        return Ok(false);
    }

    for (i, node) in result.path.iter().enumerate() {
        println!(
            "{:>3}  {}  ({:.2}, {:.2}, {:.2})  {}  {}",
            i,
            node.id,
            node.x,
            node.y,
            node.z,
            node.node_type,
            node.name.as_deref().unwrap_or_default()
        );
    }
    println!("total length: {:.2}", result.cost);
    info!("Expanded {} nodes", result.nodes_expanded);

    Ok(true)
}

/// Accept either a node id or a destination name.
fn resolve<'a>(snapshot: &'a FloorSnapshot, key: &'a str) -> &'a str {
    if snapshot.contains(key) {
        return key;
    }
    snapshot
        .find_by_name(key)
        .map(|n| n.id.as_str())
        .unwrap_or(key)
}
