//! A* routing over a floor's node graph.
//!
//! Implements best-first search with:
//! - Euclidean edge costs and heuristic
//! - Deterministic tie-breaking (earlier frontier push wins)
//! - Optional stairs exclusion for accessible routes

mod planner;
mod types;

pub use planner::RoutePlanner;
pub use types::{RouteFailure, RouteResult, RoutingConfig};

use crate::core::Node;
use crate::error::Result;
use crate::graph::FloorSnapshot;

/// Route between two nodes of a node list.
///
/// Returns the nodes from start to target inclusive, or an empty list if
/// either id is missing or the target is unreachable. Fails only on
/// malformed input (non-finite coordinates, duplicate ids).
///
/// With `avoid_stairs` set, a `STAIRS` start or target yields an empty list.
/// This holds even when start and target are the same node, so the
/// single-node route is only returned for permitted nodes.
pub fn find_path(
    nodes: &[Node],
    start_id: &str,
    target_id: &str,
    avoid_stairs: bool,
) -> Result<Vec<Node>> {
    let snapshot = FloorSnapshot::from_slice(nodes)?;
    let config = RoutingConfig::default().with_avoid_stairs(avoid_stairs);
    Ok(RoutePlanner::new(&snapshot, config)
        .plan(start_id, target_id)
        .into_path())
}

/// Check if a route exists
pub fn route_exists(
    snapshot: &FloorSnapshot,
    start_id: &str,
    target_id: &str,
    avoid_stairs: bool,
) -> bool {
    let config = RoutingConfig::default().with_avoid_stairs(avoid_stairs);
    RoutePlanner::new(snapshot, config)
        .plan(start_id, target_id)
        .is_success()
}
