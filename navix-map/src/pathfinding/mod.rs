//! Route planning over a floor graph.
//!
//! ## A* Routing
//!
//! ```rust
//! use navix_map::core::{Node, Point3D};
//! use navix_map::graph::FloorSnapshot;
//! use navix_map::pathfinding::{RoutePlanner, RoutingConfig};
//!
//! let nodes = vec![
//!     Node::new("lobby", Point3D::new(0.0, 0.0, 0.0)).with_neighbors(["hall"]),
//!     Node::new("hall", Point3D::new(4.0, 0.0, 0.0)).with_neighbors(["lobby"]),
//! ];
//! let snapshot = FloorSnapshot::new(nodes).unwrap();
//! let planner = RoutePlanner::new(&snapshot, RoutingConfig::accessible());
//!
//! let result = planner.plan("lobby", "hall");
//! if result.is_success() {
//!     println!("Route with {} nodes, {:.1} long", result.len(), result.cost);
//! }
//! ```

pub mod astar;

pub use astar::{RouteFailure, RoutePlanner, RouteResult, RoutingConfig, find_path, route_exists};

use crate::core::Node;

/// Summed segment length of a route
pub fn path_length(path: &[Node]) -> f32 {
    if path.len() < 2 {
        return 0.0;
    }

    path.windows(2).map(|w| w[0].distance_to(&w[1])).sum()
}
