//! A* routing types.

use crate::core::Node;
use std::cmp::Ordering;

/// Frontier entry in the A* search
#[derive(Clone, Debug)]
pub(super) struct AStarNode {
    pub index: usize, // Snapshot index
    pub g_cost: f32,  // Cost from start
    pub f_cost: f32,  // g_cost + heuristic
    pub seq: u64,     // Push order
}

impl Eq for AStarNode {}

impl PartialEq for AStarNode {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Ord for AStarNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap behavior; equal f_cost pops the
        // earlier push first.
        other
            .f_cost
            .total_cmp(&self.f_cost)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for AStarNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Routing configuration
#[derive(Clone, Debug, Default)]
pub struct RoutingConfig {
    /// Never route through `STAIRS` nodes (wheelchair / accessibility mode)
    pub avoid_stairs: bool,
    /// Maximum number of nodes to expand before giving up (0 = unlimited)
    pub max_iterations: usize,
}

impl RoutingConfig {
    /// Accessible routing: stairs excluded
    pub fn accessible() -> Self {
        Self {
            avoid_stairs: true,
            ..Default::default()
        }
    }

    /// Set the stairs filter
    pub fn with_avoid_stairs(mut self, avoid_stairs: bool) -> Self {
        self.avoid_stairs = avoid_stairs;
        self
    }

    /// Set the expansion budget
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }
}

/// Result of a routing query
#[derive(Clone, Debug)]
pub struct RouteResult {
    /// Nodes from start to target inclusive (empty if no route)
    pub path: Vec<Node>,
    /// Summed edge length of the route
    pub cost: f32,
    /// Number of nodes expanded during search
    pub nodes_expanded: usize,
    /// Reason for failure (if any)
    pub failure_reason: Option<RouteFailure>,
}

impl RouteResult {
    /// Create a failed result
    pub(super) fn failed(reason: RouteFailure, nodes_expanded: usize) -> Self {
        Self {
            path: Vec::new(),
            cost: f32::INFINITY,
            nodes_expanded,
            failure_reason: Some(reason),
        }
    }

    /// Whether a route was found
    pub fn is_success(&self) -> bool {
        self.failure_reason.is_none()
    }

    /// Number of nodes on the route
    pub fn len(&self) -> usize {
        self.path.len()
    }

    /// True if no route was found
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// Route length recomputed from node positions
    pub fn length(&self) -> f32 {
        crate::pathfinding::path_length(&self.path)
    }

    /// Ids along the route
    pub fn node_ids(&self) -> Vec<&str> {
        self.path.iter().map(|n| n.id.as_str()).collect()
    }

    /// Take the route nodes
    pub fn into_path(self) -> Vec<Node> {
        self.path
    }
}

/// Reason for routing failure
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteFailure {
    /// Start id is not in the snapshot
    StartNotFound,
    /// Target id is not in the snapshot
    TargetNotFound,
    /// Start node is excluded by the stairs filter
    StartExcluded,
    /// Target node is excluded by the stairs filter
    TargetExcluded,
    /// Target is not reachable from start
    NoPath,
    /// Maximum iterations exceeded
    MaxIterationsExceeded,
}

impl std::fmt::Display for RouteFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let msg = match self {
            RouteFailure::StartNotFound => "start node not found",
            RouteFailure::TargetNotFound => "target node not found",
            RouteFailure::StartExcluded => "start node is on stairs",
            RouteFailure::TargetExcluded => "target node is on stairs",
            RouteFailure::NoPath => "target unreachable",
            RouteFailure::MaxIterationsExceeded => "search budget exhausted",
        };
        f.write_str(msg)
    }
}
