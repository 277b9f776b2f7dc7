//! # NaviX-Map: Indoor Wayfinding Graph
//!
//! Graph engine behind indoor AR wayfinding: captured points become nodes
//! on a per-floor graph, and routes between nodes come from an A* search
//! over that graph.
//!
//! ## Quick Start
//!
//! ```rust
//! use navix_map::{GraphStore, NodeType, Point3D, find_path};
//!
//! // Mapping: each captured node is chained to the previous one
//! let mut store = GraphStore::with_defaults();
//! let entrance = store.add_node(Point3D::new(0.0, 0.0, 0.0), Some("Entrance".into()), NodeType::Normal);
//! store.add_node(Point3D::new(1.0, 0.0, 0.0), None, NodeType::Walking);
//! let library = store.add_node(Point3D::new(2.0, 0.0, 0.0), Some("Library".into()), NodeType::Normal);
//!
//! // Navigation: route over the full node list
//! let route = find_path(store.nodes(), &entrance.id, &library.id, false).unwrap();
//! assert_eq!(route.len(), 3);
//! ```
//!
//! ## Coordinate Frame
//!
//! Coordinates are whatever frame the capture session uses (AR anchor poses
//! in practice). Units only need to be consistent within one floor. Edge
//! costs are 3D Euclidean distances.
//!
//! ## Architecture
//!
//! - [`core`]: [`Node`], [`NodeType`], [`Point3D`]
//! - [`graph`]: incremental capture ([`GraphStore`]) and validated snapshots ([`FloorSnapshot`])
//! - [`pathfinding`]: A* routing ([`RoutePlanner`])
//! - [`config`]: YAML configuration
//! - [`io`]: JSON node records
//!
//! Multi-floor routing is left to the caller: find an elevator or stairs
//! node with [`FloorSnapshot::nodes_of_type`], route to it, then switch to
//! the next floor's snapshot.

pub mod config;
pub mod core;
pub mod error;
pub mod graph;
pub mod io;
pub mod pathfinding;

// Re-export main types at crate root
pub use crate::config::{ConfigLoadError, NavixConfig};
pub use crate::core::{Node, NodeType, Point3D};
pub use crate::error::{GraphError, IoError};
pub use crate::graph::{
    FloorSnapshot, GraphStore, GraphStoreConfig, NodeIdGenerator, SharedGraphStore, build_node,
};
pub use crate::pathfinding::{
    RouteFailure, RoutePlanner, RouteResult, RoutingConfig, find_path, path_length, route_exists,
};
